//! The clinical decision engine.
//!
//! Pipeline for one visit: raw observations → GI score + red flags →
//! finished record → titration advice + next injection date.
//!
//! Every function here is pure, synchronous and free of I/O. Wall-clock
//! time is always an explicit parameter, never an ambient read, so the
//! engine stays deterministic under test. Unrecognized inputs (unknown
//! drug, unmatched dose label) are first-class advisory outcomes, not
//! errors.

mod consistency;
mod gi;
mod ladder;
mod red_flags;
mod schedule;
mod titration;

pub use consistency::*;
pub use gi::*;
pub use ladder::*;
pub use red_flags::*;
pub use schedule::*;
pub use titration::*;
