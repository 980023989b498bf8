//! Dose ladder registry for the two tracked GLP-1 drugs.

/// Ladder rungs, lowest to highest. The labels are printed to clinicians
/// verbatim (decimal commas included) and must not be reformatted.
const SEMAGLUTIDE_LADDER: &[&str] = &["0,25 mg", "0,5 mg", "1 mg", "1,7 mg", "2,4 mg"];
const TIRZEPATIDE_LADDER: &[&str] = &["2,5 mg", "5 mg", "7,5 mg", "10 mg", "12,5 mg", "15 mg"];

/// A drug with a known titration ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrugKey {
    Semaglutide,
    Tirzepatide,
}

impl DrugKey {
    /// Resolve a free-text drug name to a ladder key.
    ///
    /// Case-insensitive substring test against the two recognized
    /// fragments, "tir" before "sema"; anything else is unrecognized.
    pub fn resolve(drug: &str) -> Option<Self> {
        let d = drug.to_lowercase();
        if d.contains("tir") {
            Some(DrugKey::Tirzepatide)
        } else if d.contains("sema") {
            Some(DrugKey::Semaglutide)
        } else {
            None
        }
    }

    /// Display name used in messages and exports.
    pub fn name(self) -> &'static str {
        match self {
            DrugKey::Semaglutide => "Semaglutide",
            DrugKey::Tirzepatide => "Tirzepatide",
        }
    }

    /// Ordered dose labels, lowest to highest.
    pub fn ladder(self) -> &'static [&'static str] {
        match self {
            DrugKey::Semaglutide => SEMAGLUTIDE_LADDER,
            DrugKey::Tirzepatide => TIRZEPATIDE_LADDER,
        }
    }

    /// Position of a free-text dose label on the ladder, if it matches a
    /// rung after normalization.
    pub fn dose_index(self, dose: &str) -> Option<usize> {
        let norm = normalize_dose(dose);
        self.ladder().iter().position(|d| normalize_dose(d) == norm)
    }
}

/// Lower-case a dose label and strip all whitespace before comparison.
pub fn normalize_dose(dose: &str) -> String {
    dose.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
