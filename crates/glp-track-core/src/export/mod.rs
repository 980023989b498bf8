//! Export functionality for visit history.

mod csv;

pub use csv::*;

use thiserror::Error;

use crate::db::DbError;

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
