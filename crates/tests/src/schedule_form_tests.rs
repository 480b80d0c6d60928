//! Inspection scheduling form against the reference lists it selects from.

use pretty_assertions::assert_eq;
use shared_types::{
    active_inspections, completed_inspections, is_inspection_form, sample_inspections,
    InspectionType, Priority, ScheduleInspectionRequest, FACILITIES, INSPECTION_FORMS,
    INSPECTORS, INSPECTION_TYPES, PRIORITIES,
};

fn schedule() -> ScheduleInspectionRequest {
    ScheduleInspectionRequest {
        facility: FACILITIES[1].0.to_string(),
        inspector: INSPECTORS[2].0.to_string(),
        form: INSPECTION_FORMS[4].to_string(),
        priority: Priority::parse("urgent"),
        date: "2024-03-05".into(),
        inspection_type: InspectionType::parse("followup"),
    }
}

#[test]
fn every_listed_option_is_schedulable() {
    for (facility, _) in FACILITIES {
        for form in INSPECTION_FORMS {
            let req = ScheduleInspectionRequest {
                facility: facility.to_string(),
                form: form.to_string(),
                ..schedule()
            };
            assert!(req.check().is_ok(), "{facility} / {form}");
        }
    }
}

#[test]
fn select_values_parse_back() {
    for p in PRIORITIES {
        assert_eq!(Priority::parse(p.as_str()), Some(*p));
    }
    for t in INSPECTION_TYPES {
        assert_eq!(InspectionType::parse(t.as_str()), Some(*t));
    }
}

#[test]
fn display_label_is_not_a_facility_value() {
    let req = ScheduleInspectionRequest {
        facility: FACILITIES[0].1.to_string(),
        ..schedule()
    };
    assert_eq!(
        req.check().unwrap_err().field_error("facility"),
        Some("Select a company or facility")
    );
}

#[test]
fn impossible_calendar_date_is_rejected() {
    let req = ScheduleInspectionRequest {
        date: "2024-02-30".into(),
        ..schedule()
    };
    assert_eq!(
        req.check().unwrap_err().field_error("date"),
        Some("Pick an inspection date")
    );
}

#[test]
fn sample_inspections_use_standard_forms() {
    for inspection in sample_inspections() {
        assert!(is_inspection_form(&inspection.form), "{}", inspection.id);
    }
}

#[test]
fn active_and_completed_partition_the_samples() {
    let all = sample_inspections();
    let active: Vec<&str> = active_inspections(&all).iter().map(|i| i.id.as_str()).collect();
    let done: Vec<&str> = completed_inspections(&all).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(active, vec!["INS-001", "INS-002"]);
    assert_eq!(done, vec!["INS-003"]);
}
