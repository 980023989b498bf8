//! Visit repository operations.
//!
//! This is the store surface the engine's callers are handed:
//! `visits_for_patient`, `append_visit`, `delete_visit`, plus
//! `latest_visit` feeding the titration advisor. Rows are immutable;
//! a correction means delete-and-reinsert.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::{Database, DbError, DbResult};
use crate::models::{
    Compliance, GiAssessment, Goals, Hydration, InjectionDone, Labs, RedFlags, Visit,
};

/// Raw row as stored; nested sections still JSON-encoded.
struct VisitRow {
    visit_id: String,
    date: String,
    drug: String,
    dose: String,
    inj_day: u8,
    inj_done: String,
    inj_miss_reason: String,
    weight: f64,
    waist: Option<f64>,
    gi: String,
    hydration: String,
    labs: String,
    compliance: String,
    goals: String,
    red_flags: String,
    notes: String,
}

impl TryFrom<VisitRow> for Visit {
    type Error = DbError;

    fn try_from(row: VisitRow) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")?;
        let inj_done = InjectionDone::from_str(&row.inj_done)
            .ok_or_else(|| DbError::Corrupt(format!("inj_done = {:?}", row.inj_done)))?;

        let gi: GiAssessment = serde_json::from_str(&row.gi)?;
        let hydration: Hydration = serde_json::from_str(&row.hydration)?;
        let labs: Labs = serde_json::from_str(&row.labs)?;
        let compliance: Compliance = serde_json::from_str(&row.compliance)?;
        let goals: Goals = serde_json::from_str(&row.goals)?;
        let red_flags: RedFlags = serde_json::from_str(&row.red_flags)?;

        Ok(Visit {
            visit_id: row.visit_id,
            date,
            drug: row.drug,
            dose: row.dose,
            inj_day: row.inj_day,
            inj_done,
            inj_miss_reason: row.inj_miss_reason,
            weight: row.weight,
            waist: row.waist,
            gi,
            hydration,
            labs,
            compliance,
            goals,
            red_flags,
            notes: row.notes,
        })
    }
}

const VISIT_COLUMNS: &str = r#"
    visit_id, date, drug, dose, inj_day, inj_done, inj_miss_reason,
    weight, waist, gi, hydration, labs, compliance, goals, red_flags, notes
"#;

fn map_visit_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<VisitRow> {
    Ok(VisitRow {
        visit_id: row.get(0)?,
        date: row.get(1)?,
        drug: row.get(2)?,
        dose: row.get(3)?,
        inj_day: row.get(4)?,
        inj_done: row.get(5)?,
        inj_miss_reason: row.get(6)?,
        weight: row.get(7)?,
        waist: row.get(8)?,
        gi: row.get(9)?,
        hydration: row.get(10)?,
        labs: row.get(11)?,
        compliance: row.get(12)?,
        goals: row.get(13)?,
        red_flags: row.get(14)?,
        notes: row.get(15)?,
    })
}

impl Database {
    /// Append a visit to a patient's history.
    pub fn append_visit(&self, patient_id: &str, visit: &Visit) -> DbResult<()> {
        debug!(patient_id = %patient_id, visit_id = %visit.visit_id, "appending visit");
        self.conn.execute(
            r#"
            INSERT INTO visits (
                visit_id, patient_id, date, drug, dose, inj_day, inj_done,
                inj_miss_reason, weight, waist, gi, hydration, labs,
                compliance, goals, red_flags, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
            "#,
            params![
                visit.visit_id,
                patient_id,
                visit.date.to_string(),
                visit.drug,
                visit.dose,
                visit.inj_day,
                visit.inj_done.as_str(),
                visit.inj_miss_reason,
                visit.weight,
                visit.waist,
                serde_json::to_string(&visit.gi)?,
                serde_json::to_string(&visit.hydration)?,
                serde_json::to_string(&visit.labs)?,
                serde_json::to_string(&visit.compliance)?,
                serde_json::to_string(&visit.goals)?,
                serde_json::to_string(&visit.red_flags)?,
                visit.notes,
            ],
        )?;
        Ok(())
    }

    /// All visits for a patient, in insertion order. Consumers sort by
    /// date as needed; no order guarantee is part of the contract.
    pub fn visits_for_patient(&self, patient_id: &str) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {VISIT_COLUMNS} FROM visits WHERE patient_id = ? ORDER BY rowid"
        ))?;

        let rows = stmt.query_map([patient_id], map_visit_row)?;
        let rows = rows.collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(Visit::try_from).collect()
    }

    /// The patient's most recent visit by date (ties broken by latest
    /// insertion). This is the advisor's input.
    pub fn latest_visit(&self, patient_id: &str) -> DbResult<Option<Visit>> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT {VISIT_COLUMNS} FROM visits WHERE patient_id = ? \
                     ORDER BY date DESC, rowid DESC LIMIT 1"
                ),
                [patient_id],
                map_visit_row,
            )
            .optional()?;

        row.map(Visit::try_from).transpose()
    }

    /// Delete a visit by id.
    pub fn delete_visit(&self, visit_id: &str) -> DbResult<bool> {
        debug!(visit_id = %visit_id, "deleting visit");
        let rows_affected = self
            .conn
            .execute("DELETE FROM visits WHERE visit_id = ?", [visit_id])?;
        Ok(rows_affected > 0)
    }
}
