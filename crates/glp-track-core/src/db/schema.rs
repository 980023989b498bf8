//! SQLite schema definition.

/// Complete database schema for the visit tracker.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);

-- ============================================================================
-- Visits (immutable rows; deletion only, never in-place edits)
-- ============================================================================

CREATE TABLE IF NOT EXISTS visits (
    visit_id TEXT PRIMARY KEY,
    patient_id TEXT NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
    date TEXT NOT NULL,                          -- ISO 8601 calendar date
    drug TEXT NOT NULL,
    dose TEXT NOT NULL,
    inj_day INTEGER NOT NULL,                    -- 0 = Sunday ... 6 = Saturday
    inj_done TEXT NOT NULL CHECK (inj_done IN ('yes', 'no')),
    inj_miss_reason TEXT NOT NULL DEFAULT '',
    weight REAL NOT NULL,
    waist REAL,
    gi TEXT NOT NULL,                            -- JSON GiAssessment
    hydration TEXT NOT NULL,                     -- JSON Hydration
    labs TEXT NOT NULL,                          -- JSON Labs
    compliance TEXT NOT NULL,                    -- JSON Compliance
    goals TEXT NOT NULL,                         -- JSON Goals
    red_flags TEXT NOT NULL,                     -- JSON RedFlags
    notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_visits_patient ON visits(patient_id);
CREATE INDEX IF NOT EXISTS idx_visits_date ON visits(date);
"#;
