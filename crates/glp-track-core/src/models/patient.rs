//! Patient models.

use serde::{Deserialize, Serialize};

/// A tracked patient.
///
/// Visits are owned by the store and keyed by patient id; the patient
/// record itself carries no visit data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Opaque unique id, generated locally
    pub id: String,
    /// Display name shown on screen and in exports
    pub name: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Patient {
    /// Create a new patient with a fresh id.
    pub fn new(name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
