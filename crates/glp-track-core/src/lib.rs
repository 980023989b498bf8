//! GLP-Track Core Library
//!
//! Bedside tracker for patients on injectable GLP-1 weight-loss
//! medication: weekly visits, red-flag risk assessment and titration
//! advice.
//!
//! # Architecture
//!
//! ```text
//! Form values → VisitInput ──► GI scorer + Red Flag Assessor
//!                                        │
//!                              [Visit record, derived fields]
//!                                        │
//!                     consistency check, then append to store
//!                                        │
//!              ┌─────────────────────────┼─────────────────────────┐
//!              │                         │                         │
//!              ▼                         ▼                         ▼
//!        Titration                 Injection                    CSV
//!         Advisor                  Scheduler                  Export
//! ```
//!
//! # Core Principle
//!
//! **Derived fields never drift.** A visit's GI score and red flags are
//! computed from its raw inputs at construction and nowhere else; the
//! engine itself is pure and takes "today" as an explicit parameter.
//!
//! # Modules
//!
//! - [`db`]: SQLite store for patients and visits
//! - [`models`]: Domain types (Patient, Visit, RedFlags, etc.)
//! - [`engine`]: The clinical decision engine (assessor, advisor, scheduler)
//! - [`export`]: CSV export of visit history

pub mod db;
pub mod engine;
pub mod export;
pub mod models;

// Re-export commonly used types
pub use db::Database;
pub use engine::{
    advise_titration, assess_red_flags, check_visit_proximity, gi_severity_score,
    next_injection_date, DrugKey, RedFlagInput,
};
pub use models::{
    InjectionDone, Patient, ProximityWarning, RedFlags, RiskLevel, TitrationAdvice, Visit,
    VisitInput,
};

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::debug;

// =========================================================================
// Crate Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<std::sync::PoisonError<T>> for CoreError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CoreError::LockPoisoned(e.to_string())
    }
}

// =========================================================================
// Recorded Visit
// =========================================================================

/// Outcome of recording a visit: the finished record plus an optional
/// proximity advisory. The advisory never blocks persistence.
#[derive(Debug, Clone)]
pub struct RecordedVisit {
    pub visit: Visit,
    pub proximity: Option<ProximityWarning>,
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store-plus-engine handle for host applications.
pub struct GlpTrackCore {
    db: Arc<Mutex<Database>>,
}

impl GlpTrackCore {
    /// Open or create a database at the given path.
    pub fn open(path: &str) -> Result<Self, CoreError> {
        let db = Database::open(path)?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Create an in-memory instance (for testing).
    pub fn open_in_memory() -> Result<Self, CoreError> {
        let db = Database::open_in_memory()?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Create a new patient.
    pub fn create_patient(&self, name: String) -> Result<Patient, CoreError> {
        let db = self.db.lock()?;
        let patient = Patient::new(name);
        db.insert_patient(&patient)?;
        Ok(patient)
    }

    /// Get a patient by id.
    pub fn get_patient(&self, patient_id: &str) -> Result<Option<Patient>, CoreError> {
        let db = self.db.lock()?;
        Ok(db.get_patient(patient_id)?)
    }

    /// List all patients.
    pub fn list_patients(&self) -> Result<Vec<Patient>, CoreError> {
        let db = self.db.lock()?;
        Ok(db.list_patients()?)
    }

    /// Delete a patient and all of their visits.
    pub fn delete_patient(&self, patient_id: &str) -> Result<bool, CoreError> {
        let db = self.db.lock()?;
        Ok(db.delete_patient(patient_id)?)
    }

    // =========================================================================
    // Visit Operations
    // =========================================================================

    /// Record a visit: run the consistency check against the existing
    /// history, derive the assessment fields, persist, and hand back the
    /// finished record with any proximity advisory.
    pub fn record_visit(
        &self,
        patient_id: &str,
        input: VisitInput,
    ) -> Result<RecordedVisit, CoreError> {
        let db = self.db.lock()?;
        if db.get_patient(patient_id)?.is_none() {
            return Err(CoreError::NotFound(format!("patient {patient_id}")));
        }

        let existing = db.visits_for_patient(patient_id)?;
        let proximity = check_visit_proximity(&existing, input.date);

        let visit = Visit::from_input(input);
        db.append_visit(patient_id, &visit)?;
        debug!(patient_id = %patient_id, level = visit.red_flags.level.as_str(), "visit recorded");

        Ok(RecordedVisit { visit, proximity })
    }

    /// All visits for a patient, in insertion order.
    pub fn visits(&self, patient_id: &str) -> Result<Vec<Visit>, CoreError> {
        let db = self.db.lock()?;
        Ok(db.visits_for_patient(patient_id)?)
    }

    /// Delete a visit by id.
    pub fn delete_visit(&self, visit_id: &str) -> Result<bool, CoreError> {
        let db = self.db.lock()?;
        Ok(db.delete_visit(visit_id)?)
    }

    // =========================================================================
    // Engine Operations
    // =========================================================================

    /// Titration advice over the patient's most recent visit.
    pub fn titration_advice(&self, patient_id: &str) -> Result<TitrationAdvice, CoreError> {
        let db = self.db.lock()?;
        let last = db.latest_visit(patient_id)?;
        Ok(advise_titration(last.as_ref()))
    }

    /// Next injection date for the patient's most recent target weekday,
    /// strictly after `today`. `None` when there is no visit on file.
    pub fn next_injection(
        &self,
        patient_id: &str,
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, CoreError> {
        let db = self.db.lock()?;
        let last = db.latest_visit(patient_id)?;
        Ok(last.map(|v| next_injection_date(v.inj_day, today)))
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export a patient's visit history as CSV.
    pub fn export_csv(&self, patient_id: &str) -> Result<String, CoreError> {
        let db = self.db.lock()?;
        let exporter = export::CsvExporter::new(&db);
        Ok(exporter.export_patient(patient_id)?)
    }
}
