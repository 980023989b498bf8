//! CSV export of a patient's visit history.

use crate::db::Database;
use crate::models::{Patient, Visit};

use super::{ExportError, ExportResult};

/// Column header, matching the original sheet layout consumed downstream.
const HEADER: &str = "patient,date,drug,dose,inj_day,inj_done,inj_miss_reason,\
weight,waist,nausea,vomit_count,diarrhea,constipation,reflux,abdo_pain,gi_score,\
low_fluids,low_urine,dizzy,risk_meds,creat,creat_base,alert_level,alert_flags,\
protein_ok,activity_min,target_weight,goal_text,notes";

/// A patient's visit history prepared for CSV rendering.
#[derive(Debug, Clone)]
pub struct PatientCsvExport {
    pub patient: Patient,
    /// Visits in chronological order
    pub visits: Vec<Visit>,
}

impl PatientCsvExport {
    /// Build an export, sorting the visits chronologically.
    pub fn new(patient: Patient, mut visits: Vec<Visit>) -> Self {
        visits.sort_by_key(|v| v.date);
        Self { patient, visits }
    }

    /// Render the export, one row per visit.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str(HEADER);
        csv.push('\n');

        for visit in &self.visits {
            csv.push_str(&self.visit_row(visit));
            csv.push('\n');
        }

        csv
    }

    fn visit_row(&self, v: &Visit) -> String {
        let fields = [
            escape_csv(&self.patient.name),
            v.date.to_string(),
            escape_csv(&v.drug),
            escape_csv(&v.dose),
            v.inj_day.to_string(),
            v.inj_done.as_str().to_string(),
            escape_csv(&v.inj_miss_reason),
            v.weight.to_string(),
            opt_number(v.waist),
            v.gi.nausea.to_string(),
            v.gi.vomit_count.to_string(),
            v.gi.diarrhea.to_string(),
            v.gi.constipation.to_string(),
            v.gi.reflux.to_string(),
            v.gi.abdo_pain.to_string(),
            v.gi.gi_score.to_string(),
            yes_no(v.hydration.low_fluids).to_string(),
            yes_no(v.hydration.low_urine).to_string(),
            yes_no(v.hydration.dizzy).to_string(),
            yes_no(v.hydration.risk_meds).to_string(),
            opt_number(v.labs.creat),
            opt_number(v.labs.creat_base),
            v.red_flags.level.as_str().to_string(),
            escape_csv(&v.red_flags.flags.join(" | ")),
            escape_csv(&v.compliance.protein_ok),
            v.compliance.activity_min.to_string(),
            opt_number(v.goals.target_weight),
            escape_csv(&v.goals.goal_text),
            escape_csv(&v.notes),
        ];
        fields.join(",")
    }
}

/// CSV exporter reading from the store.
pub struct CsvExporter<'a> {
    db: &'a Database,
}

impl<'a> CsvExporter<'a> {
    /// Create a new CSV exporter.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Export a patient's full history.
    pub fn export_patient(&self, patient_id: &str) -> ExportResult<String> {
        let patient = self
            .db
            .get_patient(patient_id)?
            .ok_or_else(|| ExportError::PatientNotFound(patient_id.to_string()))?;
        let visits = self.db.visits_for_patient(patient_id)?;

        Ok(PatientCsvExport::new(patient, visits).to_csv())
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

fn opt_number(n: Option<f64>) -> String {
    n.map(|x| x.to_string()).unwrap_or_default()
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
