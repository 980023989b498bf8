//! Gastrointestinal severity scoring.

/// Aggregate GI severity for one visit: the five 0-10 intensity scales
/// summed, plus the weekly vomit count capped at 10. Nominal range 0-60.
///
/// Inputs are expected pre-validated; out-of-range scale values are not
/// rejected and simply propagate into the sum. Only the vomit
/// contribution is clamped.
pub fn gi_severity_score(
    nausea: u8,
    diarrhea: u8,
    constipation: u8,
    reflux: u8,
    abdo_pain: u8,
    vomit_count: u32,
) -> u32 {
    u32::from(nausea)
        + u32::from(diarrhea)
        + u32::from(constipation)
        + u32::from(reflux)
        + u32::from(abdo_pain)
        + vomit_count.min(10)
}
