//! Visit models: raw observations and the finished weekly record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RedFlags;
use crate::engine::{assess_red_flags, gi_severity_score, RedFlagInput};

/// Whether the scheduled injection happened this period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionDone {
    Yes,
    No,
}

impl InjectionDone {
    pub fn as_str(self) -> &'static str {
        match self {
            InjectionDone::Yes => "yes",
            InjectionDone::No => "no",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "yes" => Some(InjectionDone::Yes),
            "no" => Some(InjectionDone::No),
            _ => None,
        }
    }

    pub fn is_missed(self) -> bool {
        self == InjectionDone::No
    }
}

impl Default for InjectionDone {
    fn default() -> Self {
        InjectionDone::Yes
    }
}

/// Gastrointestinal assessment: five 0-10 intensity scales plus the
/// vomit count over the 7-day period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GiAssessment {
    pub nausea: u8,
    pub vomit_count: u32,
    pub diarrhea: u8,
    pub constipation: u8,
    pub reflux: u8,
    pub abdo_pain: u8,
    /// Derived severity score; always recomputed from the fields above
    pub gi_score: u32,
}

/// Hydration and risk-context observations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hydration {
    pub low_fluids: bool,
    pub low_urine: bool,
    pub dizzy: bool,
    /// NSAIDs, diuretics or other renally risky co-medication
    pub risk_meds: bool,
}

/// Optional creatinine labs. The ratio rule is inactive unless both
/// values are present.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Labs {
    pub creat: Option<f64>,
    pub creat_base: Option<f64>,
}

/// Compliance pass-through data; not consulted by any decision rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Compliance {
    pub protein_ok: String,
    pub activity_min: u32,
}

/// Goal pass-through data; not consulted by any decision rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goals {
    pub target_weight: Option<f64>,
    pub goal_text: String,
}

/// Raw form values for one visit, before derivation.
///
/// The host application coerces form text to numbers before building
/// this; the engine does no input validation of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitInput {
    pub date: NaiveDate,
    pub drug: String,
    pub dose: String,
    /// Target injection weekday, 0 = Sunday ... 6 = Saturday
    pub inj_day: u8,
    pub inj_done: InjectionDone,
    pub inj_miss_reason: String,
    pub weight: f64,
    pub waist: Option<f64>,
    pub nausea: u8,
    pub vomit_count: u32,
    pub diarrhea: u8,
    pub constipation: u8,
    pub reflux: u8,
    pub abdo_pain: u8,
    pub low_fluids: bool,
    pub low_urine: bool,
    pub dizzy: bool,
    pub risk_meds: bool,
    pub creat: Option<f64>,
    pub creat_base: Option<f64>,
    pub protein_ok: String,
    pub activity_min: u32,
    pub target_weight: Option<f64>,
    pub goal_text: String,
    pub notes: String,
}

/// One weekly clinical observation record.
///
/// Immutable once constructed. `gi.gi_score` and `red_flags` are derived
/// by [`Visit::from_input`] and are never set independently, so the
/// displayed risk cannot drift from the raw inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Unique visit id
    pub visit_id: String,
    /// Calendar date of the visit (no time component)
    pub date: NaiveDate,
    /// Free-text drug name; must resolve against the dose ladder to take
    /// part in titration
    pub drug: String,
    /// Free-text dose label; matched against ladder rungs after
    /// normalization
    pub dose: String,
    /// Target injection weekday, 0 = Sunday ... 6 = Saturday
    pub inj_day: u8,
    pub inj_done: InjectionDone,
    /// Relevant only when the injection was missed
    pub inj_miss_reason: String,
    /// Weight in kg
    pub weight: f64,
    /// Waist circumference in cm
    pub waist: Option<f64>,
    pub gi: GiAssessment,
    pub hydration: Hydration,
    pub labs: Labs,
    pub compliance: Compliance,
    pub goals: Goals,
    pub red_flags: RedFlags,
    pub notes: String,
}

impl Visit {
    /// Build the finished record from raw form values.
    ///
    /// Runs the GI scorer and the red-flag assessor; this is the only
    /// construction path, so the derived fields always agree with the
    /// raw observations.
    pub fn from_input(input: VisitInput) -> Self {
        let gi_score = gi_severity_score(
            input.nausea,
            input.diarrhea,
            input.constipation,
            input.reflux,
            input.abdo_pain,
            input.vomit_count,
        );

        let red_flags = assess_red_flags(&RedFlagInput {
            vomit_count: input.vomit_count,
            low_fluids: input.low_fluids,
            low_urine: input.low_urine,
            dizzy: input.dizzy,
            risk_meds: input.risk_meds,
            creat: input.creat,
            creat_base: input.creat_base,
            abdo_pain: input.abdo_pain,
        });

        Self {
            visit_id: uuid::Uuid::new_v4().to_string(),
            date: input.date,
            drug: input.drug,
            dose: input.dose,
            inj_day: input.inj_day,
            inj_done: input.inj_done,
            inj_miss_reason: input.inj_miss_reason,
            weight: input.weight,
            waist: input.waist,
            gi: GiAssessment {
                nausea: input.nausea,
                vomit_count: input.vomit_count,
                diarrhea: input.diarrhea,
                constipation: input.constipation,
                reflux: input.reflux,
                abdo_pain: input.abdo_pain,
                gi_score,
            },
            hydration: Hydration {
                low_fluids: input.low_fluids,
                low_urine: input.low_urine,
                dizzy: input.dizzy,
                risk_meds: input.risk_meds,
            },
            labs: Labs {
                creat: input.creat,
                creat_base: input.creat_base,
            },
            compliance: Compliance {
                protein_ok: input.protein_ok,
                activity_min: input.activity_min,
            },
            goals: Goals {
                target_weight: input.target_weight,
                goal_text: input.goal_text,
            },
            red_flags,
            notes: input.notes,
        }
    }
}
