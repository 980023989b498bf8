//! Red-flag assessment of a single visit's risk inputs.

use crate::models::{RedFlags, RiskLevel};

/// Flag texts, in rule order.
const FLAG_VOMITING: &str = "repeated vomiting (>=3/7d)";
const FLAG_DEHYDRATION: &str = "dehydration signs (low intake + urine output/dizziness)";
const FLAG_RISK_MEDS: &str = "at-risk medication context (NSAIDs/diuretics + GI side effects)";
const FLAG_CREATININE: &str = "creatinine rise >=30% vs baseline";
const FLAG_ABDO_PAIN: &str = "significant abdominal pain (>=7/10)";

/// Raw inputs to the assessor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RedFlagInput {
    /// Vomiting episodes over the 7-day period
    pub vomit_count: u32,
    pub low_fluids: bool,
    pub low_urine: bool,
    pub dizzy: bool,
    /// NSAIDs, diuretics or other renally risky co-medication
    pub risk_meds: bool,
    pub creat: Option<f64>,
    pub creat_base: Option<f64>,
    /// Abdominal pain intensity, 0-10
    pub abdo_pain: u8,
}

/// Evaluate the five red-flag rules and derive the risk level.
///
/// All rules are evaluated independently; every matching rule
/// contributes its flag, in rule order. The level starts at `Ok`,
/// escalates to `Warn` if any flag fired, and to `Danger` if the
/// creatinine, dehydration or abdominal-pain rule fired or the vomit
/// count reaches 5 (checked on the count itself, not on flag presence).
pub fn assess_red_flags(input: &RedFlagInput) -> RedFlags {
    let mut flags = Vec::new();

    if input.vomit_count >= 3 {
        flags.push(FLAG_VOMITING.to_string());
    }

    // Any two of the three hydration signals count as dehydration.
    let signals = [input.low_fluids, input.low_urine, input.dizzy];
    let dehydration = signals.iter().filter(|&&s| s).count() >= 2;
    if dehydration {
        flags.push(FLAG_DEHYDRATION.to_string());
    }

    if input.risk_meds && (input.vomit_count >= 1 || dehydration) {
        flags.push(FLAG_RISK_MEDS.to_string());
    }

    let creat_rise = match (input.creat, input.creat_base) {
        (Some(creat), Some(base)) => creat / base.max(1.0) >= 1.3,
        _ => false,
    };
    if creat_rise {
        flags.push(FLAG_CREATININE.to_string());
    }

    let severe_pain = input.abdo_pain >= 7;
    if severe_pain {
        flags.push(FLAG_ABDO_PAIN.to_string());
    }

    let mut level = RiskLevel::Ok;
    if !flags.is_empty() {
        level = RiskLevel::Warn;
    }
    if creat_rise || dehydration || severe_pain || input.vomit_count >= 5 {
        level = RiskLevel::Danger;
    }

    RedFlags { level, flags }
}
