//! Domain models for the GLP-1 visit tracker.

mod assessment;
mod patient;
mod visit;

pub use assessment::*;
pub use patient::*;
pub use visit::*;
