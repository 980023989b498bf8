//! Golden tests for the clinical decision engine.
//!
//! These tests verify the red-flag rules and the titration state machine
//! against known cases.

use chrono::NaiveDate;
use glp_track_core::engine::{advise_titration, assess_red_flags, RedFlagInput};
use glp_track_core::models::{RiskLevel, Visit, VisitInput};

/// Red-flag test case.
struct FlagCase {
    id: &'static str,
    input: RedFlagInput,
    expected_level: RiskLevel,
    expected_flags: &'static [&'static str],
}

fn get_flag_cases() -> Vec<FlagCase> {
    vec![
        FlagCase {
            id: "quiet-visit",
            input: RedFlagInput::default(),
            expected_level: RiskLevel::Ok,
            expected_flags: &[],
        },
        FlagCase {
            id: "vomiting-threshold",
            input: RedFlagInput {
                vomit_count: 3,
                ..Default::default()
            },
            expected_level: RiskLevel::Warn,
            expected_flags: &["repeated vomiting"],
        },
        FlagCase {
            id: "vomiting-forces-danger-at-five",
            input: RedFlagInput {
                vomit_count: 5,
                ..Default::default()
            },
            expected_level: RiskLevel::Danger,
            expected_flags: &["repeated vomiting"],
        },
        FlagCase {
            id: "dehydration-fluids-urine",
            input: RedFlagInput {
                low_fluids: true,
                low_urine: true,
                ..Default::default()
            },
            expected_level: RiskLevel::Danger,
            expected_flags: &["dehydration signs"],
        },
        FlagCase {
            id: "dehydration-urine-dizzy",
            input: RedFlagInput {
                low_urine: true,
                dizzy: true,
                ..Default::default()
            },
            expected_level: RiskLevel::Danger,
            expected_flags: &["dehydration signs"],
        },
        FlagCase {
            id: "risk-meds-need-a-trigger",
            input: RedFlagInput {
                risk_meds: true,
                ..Default::default()
            },
            expected_level: RiskLevel::Ok,
            expected_flags: &[],
        },
        FlagCase {
            id: "risk-meds-with-vomiting",
            input: RedFlagInput {
                risk_meds: true,
                vomit_count: 1,
                ..Default::default()
            },
            expected_level: RiskLevel::Warn,
            expected_flags: &["at-risk medication context"],
        },
        FlagCase {
            id: "creatinine-rise",
            input: RedFlagInput {
                creat: Some(1.4),
                creat_base: Some(1.0),
                ..Default::default()
            },
            expected_level: RiskLevel::Danger,
            expected_flags: &["creatinine rise"],
        },
        FlagCase {
            id: "creatinine-needs-both-values",
            input: RedFlagInput {
                creat: Some(4.0),
                ..Default::default()
            },
            expected_level: RiskLevel::Ok,
            expected_flags: &[],
        },
        FlagCase {
            id: "abdominal-pain",
            input: RedFlagInput {
                abdo_pain: 8,
                ..Default::default()
            },
            expected_level: RiskLevel::Danger,
            expected_flags: &["significant abdominal pain"],
        },
        FlagCase {
            id: "everything-at-once",
            input: RedFlagInput {
                vomit_count: 4,
                low_fluids: true,
                low_urine: false,
                dizzy: true,
                risk_meds: true,
                creat: Some(2.0),
                creat_base: Some(1.2),
                abdo_pain: 9,
            },
            expected_level: RiskLevel::Danger,
            expected_flags: &[
                "repeated vomiting",
                "dehydration signs",
                "at-risk medication context",
                "creatinine rise",
                "significant abdominal pain",
            ],
        },
    ]
}

#[test]
fn test_red_flag_golden_cases() {
    for case in get_flag_cases() {
        let rf = assess_red_flags(&case.input);

        assert_eq!(rf.level, case.expected_level, "level mismatch for {}", case.id);
        assert_eq!(
            rf.flags.len(),
            case.expected_flags.len(),
            "flag count mismatch for {}: {:?}",
            case.id,
            rf.flags
        );
        for (flag, expected) in rf.flags.iter().zip(case.expected_flags) {
            assert!(
                flag.contains(expected),
                "flag {:?} does not match {:?} for {}",
                flag,
                expected,
                case.id
            );
        }
    }
}

/// Titration test case over a single last visit.
struct TitrationCase {
    id: &'static str,
    drug: &'static str,
    dose: &'static str,
    vomit_count: u32,
    missed_injection: bool,
    dizzy_and_low_fluids: bool,
    expected_ok: bool,
    expected_fragment: &'static str,
}

fn get_titration_cases() -> Vec<TitrationCase> {
    vec![
        TitrationCase {
            id: "semaglutide-mid-ladder",
            drug: "Semaglutide",
            dose: "1 mg",
            vomit_count: 0,
            missed_injection: false,
            dizzy_and_low_fluids: false,
            expected_ok: true,
            expected_fragment: "1 mg → 1,7 mg",
        },
        TitrationCase {
            id: "semaglutide-first-rung",
            drug: "Semaglutide",
            dose: "0,25 mg",
            vomit_count: 0,
            missed_injection: false,
            dizzy_and_low_fluids: false,
            expected_ok: true,
            expected_fragment: "0,25 mg → 0,5 mg",
        },
        TitrationCase {
            id: "tirzepatide-max-rung",
            drug: "Tirzepatide",
            dose: "15 mg",
            vomit_count: 0,
            missed_injection: false,
            dizzy_and_low_fluids: false,
            expected_ok: true,
            expected_fragment: "maximal",
        },
        TitrationCase {
            id: "unknown-drug",
            drug: "Liraglutide",
            dose: "1 mg",
            vomit_count: 0,
            missed_injection: false,
            dizzy_and_low_fluids: false,
            expected_ok: false,
            expected_fragment: "not recognized",
        },
        TitrationCase {
            id: "danger-outranks-dose-logic",
            drug: "Tirzepatide",
            dose: "15 mg",
            vomit_count: 0,
            missed_injection: false,
            dizzy_and_low_fluids: true,
            expected_ok: false,
            expected_fragment: "ALERT",
        },
        TitrationCase {
            id: "gi-block-outranks-adherence",
            drug: "Semaglutide",
            dose: "1 mg",
            vomit_count: 3,
            missed_injection: true,
            dizzy_and_low_fluids: false,
            expected_ok: false,
            expected_fragment: "vomiting 3/7d",
        },
        TitrationCase {
            id: "missed-injection",
            drug: "Semaglutide",
            dose: "1 mg",
            vomit_count: 0,
            missed_injection: true,
            dizzy_and_low_fluids: false,
            expected_ok: false,
            expected_fragment: "adherence",
        },
        TitrationCase {
            id: "unmatched-dose-lists-ladder",
            drug: "Tirzepatide",
            dose: "4 mg",
            vomit_count: 0,
            missed_injection: false,
            dizzy_and_low_fluids: false,
            expected_ok: false,
            expected_fragment: "2,5 mg → 5 mg → 7,5 mg → 10 mg → 12,5 mg → 15 mg",
        },
    ]
}

fn build_visit(case: &TitrationCase) -> Visit {
    Visit::from_input(VisitInput {
        date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        drug: case.drug.into(),
        dose: case.dose.into(),
        weight: 98.0,
        vomit_count: case.vomit_count,
        inj_done: if case.missed_injection {
            glp_track_core::models::InjectionDone::No
        } else {
            glp_track_core::models::InjectionDone::Yes
        },
        dizzy: case.dizzy_and_low_fluids,
        low_fluids: case.dizzy_and_low_fluids,
        ..Default::default()
    })
}

#[test]
fn test_titration_golden_cases() {
    for case in get_titration_cases() {
        let visit = build_visit(&case);
        let advice = advise_titration(Some(&visit));

        assert_eq!(advice.ok, case.expected_ok, "ok mismatch for {}", case.id);
        assert!(
            advice.message.contains(case.expected_fragment),
            "message {:?} missing {:?} for {}",
            advice.message,
            case.expected_fragment,
            case.id
        );
    }
}

#[test]
fn test_titration_without_any_visit() {
    let advice = advise_titration(None);
    assert!(!advice.ok);
    assert!(advice.message.contains("No visit available"));
}
