//! Titration advice over a patient's most recent visit.

use crate::models::{TitrationAdvice, Visit};

use super::DrugKey;

/// Decide whether the dose may be escalated, and to what.
///
/// Blocking rules apply in fixed priority order: danger-level red flags,
/// then significant GI side effects, then a missed injection. Only when
/// none apply is the current dose resolved against the ladder and the
/// next rung proposed.
pub fn advise_titration(last_visit: Option<&Visit>) -> TitrationAdvice {
    let Some(visit) = last_visit else {
        return TitrationAdvice::blocked("No visit available: cannot propose a titration.");
    };

    let Some(drug) = DrugKey::resolve(&visit.drug) else {
        return TitrationAdvice::blocked(
            "Drug not recognized (choose Semaglutide or Tirzepatide).",
        );
    };

    if visit.red_flags.is_danger() {
        return TitrationAdvice::blocked(
            "ALERT: titration not advised (danger level). Prioritize side-effect management, \
             hydration and lab work-up as needed.",
        );
    }

    let vomit = visit.gi.vomit_count;
    let gi_score = visit.gi.gi_score;
    if vomit >= 3 || gi_score >= 18 {
        return TitrationAdvice::blocked(format!(
            "Significant GI side effects (vomiting {vomit}/7d, GI score {gi_score}). \
             Recommendation: hold or reduce the current dose, no increase."
        ));
    }

    if visit.inj_done.is_missed() {
        return TitrationAdvice::blocked(
            "Injection not done this week: stabilize adherence before considering an increase.",
        );
    }

    let ladder = drug.ladder();
    let Some(idx) = drug.dose_index(&visit.dose) else {
        return TitrationAdvice::blocked(format!(
            "Current dose not recognized (\"{}\"). Expected {} doses: {}",
            visit.dose,
            drug.name(),
            ladder.join(" → ")
        ));
    };

    if idx == ladder.len() - 1 {
        return TitrationAdvice::proceed(format!(
            "{}: dose already at the maximal rung ({}).",
            drug.name(),
            ladder[idx]
        ));
    }

    TitrationAdvice::proceed(format!(
        "Titration proposal ({}): {} → {} (if tolerance holds and no alert).",
        drug.name(),
        ladder[idx],
        ladder[idx + 1]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InjectionDone, VisitInput};
    use chrono::NaiveDate;

    fn visit(drug: &str, dose: &str) -> Visit {
        Visit::from_input(VisitInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            drug: drug.into(),
            dose: dose.into(),
            weight: 98.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_no_visit() {
        let advice = advise_titration(None);
        assert!(!advice.ok);
        assert!(advice.message.contains("No visit available"));
    }

    #[test]
    fn test_unknown_drug() {
        let v = visit("Liraglutide", "1 mg");
        let advice = advise_titration(Some(&v));
        assert!(!advice.ok);
        assert!(advice.message.contains("not recognized"));
    }

    #[test]
    fn test_danger_blocks_regardless_of_dose() {
        let v = Visit::from_input(VisitInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            drug: "Tirzepatide".into(),
            dose: "15 mg".into(),
            weight: 98.0,
            low_fluids: true,
            dizzy: true,
            ..Default::default()
        });
        assert!(v.red_flags.is_danger());

        let advice = advise_titration(Some(&v));
        assert!(!advice.ok);
        assert!(advice.message.contains("ALERT"));
    }

    #[test]
    fn test_gi_block_carries_both_numbers() {
        let v = Visit::from_input(VisitInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            drug: "Semaglutide".into(),
            dose: "1 mg".into(),
            weight: 98.0,
            nausea: 8,
            diarrhea: 6,
            reflux: 4,
            ..Default::default()
        });
        assert_eq!(v.gi.gi_score, 18);

        let advice = advise_titration(Some(&v));
        assert!(!advice.ok);
        assert!(advice.message.contains("vomiting 0/7d"));
        assert!(advice.message.contains("GI score 18"));
    }

    #[test]
    fn test_three_vomits_block_even_with_low_score() {
        let v = Visit::from_input(VisitInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            drug: "Semaglutide".into(),
            dose: "1 mg".into(),
            weight: 98.0,
            vomit_count: 3,
            ..Default::default()
        });
        let advice = advise_titration(Some(&v));
        assert!(!advice.ok);
        assert!(advice.message.contains("vomiting 3/7d"));
    }

    #[test]
    fn test_missed_injection_blocks() {
        let v = Visit::from_input(VisitInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            drug: "Semaglutide".into(),
            dose: "1 mg".into(),
            weight: 98.0,
            inj_done: InjectionDone::No,
            inj_miss_reason: "travel".into(),
            ..Default::default()
        });
        let advice = advise_titration(Some(&v));
        assert!(!advice.ok);
        assert!(advice.message.contains("adherence"));
    }

    #[test]
    fn test_unmatched_dose_lists_ladder() {
        let v = visit("Semaglutide", "3 mg");
        let advice = advise_titration(Some(&v));
        assert!(!advice.ok);
        assert!(advice.message.contains("\"3 mg\""));
        assert!(advice
            .message
            .contains("0,25 mg → 0,5 mg → 1 mg → 1,7 mg → 2,4 mg"));
    }

    #[test]
    fn test_proposes_next_rung() {
        let v = visit("Semaglutide", "1 mg");
        let advice = advise_titration(Some(&v));
        assert!(advice.ok);
        assert!(advice.message.contains("1 mg → 1,7 mg"));
    }

    #[test]
    fn test_dose_match_ignores_spacing_and_case() {
        let v = visit("Semaglutide", " 1MG ");
        let advice = advise_titration(Some(&v));
        assert!(advice.ok);
        assert!(advice.message.contains("1,7 mg"));
    }

    #[test]
    fn test_already_at_maximal_dose() {
        let v = visit("Tirzepatide", "15 mg");
        let advice = advise_titration(Some(&v));
        assert!(advice.ok);
        assert!(advice.message.contains("maximal"));
        assert!(advice.message.contains("15 mg"));
    }
}
