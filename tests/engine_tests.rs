//! Tests for the Form Engine
//!
//! These tests verify:
//! - The documented end-to-end scenarios (reject, accept, edit, delete, progress)
//! - Edit/submit round trips and reset idempotence
//! - Both settings of the reset and delete editing-index policies

use feedback_form::validation::{
    AGE_GROUP_REQUIRED, CONTACT_PERMISSION_REQUIRED, EMAIL_INVALID, FEEDBACK_REQUIRED,
};
use feedback_form::{
    AgeGroup, ContactPermission, Draft, EngineOptions, Field, FormEngine, FormError, Mode, Record,
    SubmitOutcome,
};

fn fill_amy(engine: &mut FormEngine) {
    engine.set_field("name", "Amy").expect("name");
    engine.set_field("email", "a@b.com").expect("email");
    engine.set_field("ageGroup", "18-24").expect("ageGroup");
    engine.set_field("feedback", "Great").expect("feedback");
    engine.set_field("contactPermission", "YES").expect("contactPermission");
}

fn amy_record() -> Record {
    Record {
        name: "Amy".to_string(),
        email: "a@b.com".to_string(),
        age_group: AgeGroup::From18To24,
        feedback: "Great".to_string(),
        contact_permission: ContactPermission::Yes,
    }
}

/// Engine after Scenario B: one stored record, empty draft
fn scenario_b_engine(options: EngineOptions) -> FormEngine {
    let mut engine = FormEngine::with_options(options);
    fill_amy(&mut engine);
    assert!(engine.submit().is_accepted());
    engine
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_a_partial_draft_is_rejected() {
    let mut engine = FormEngine::new();
    engine.set_field("name", "Amy").expect("name");
    engine.set_field("email", "bad").expect("email");

    let outcome = engine.submit();
    let SubmitOutcome::Rejected { errors } = outcome else {
        panic!("expected rejection, got {:?}", outcome);
    };

    assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(errors.get(Field::AgeGroup), Some(AGE_GROUP_REQUIRED));
    assert_eq!(errors.get(Field::Feedback), Some(FEEDBACK_REQUIRED));
    assert_eq!(
        errors.get(Field::ContactPermission),
        Some(CONTACT_PERMISSION_REQUIRED)
    );
    assert!(!errors.contains(Field::Name));
    assert_eq!(errors.len(), 4);

    // Stored errors match, nothing else moved
    assert_eq!(engine.errors(), &errors);
    assert!(engine.records().is_empty());
    assert_eq!(engine.draft().name, "Amy");
    assert_eq!(engine.mode(), Mode::Creating);
}

#[test]
fn test_scenario_b_valid_draft_is_appended() {
    let mut engine = FormEngine::new();
    fill_amy(&mut engine);

    assert_eq!(
        engine.submit(),
        SubmitOutcome::Accepted {
            index: 0,
            updated: false
        }
    );
    assert_eq!(engine.records(), &[amy_record()]);
    assert_eq!(engine.draft(), &Draft::default());
    assert!(engine.errors().is_empty());
    assert_eq!(engine.mode(), Mode::Creating);
}

#[test]
fn test_scenario_c_edit_in_place() {
    let mut engine = scenario_b_engine(EngineOptions::default());

    engine.edit(0).expect("edit");
    assert_eq!(engine.draft(), &Draft::from(&amy_record()));
    assert_eq!(engine.mode(), Mode::Editing(0));

    engine.set_field("feedback", "Even better").expect("feedback");
    assert!(engine.submit().is_accepted());

    assert_eq!(engine.records().len(), 1);
    let expected = Record {
        feedback: "Even better".to_string(),
        ..amy_record()
    };
    assert_eq!(engine.records()[0], expected);
    assert_eq!(engine.mode(), Mode::Creating);
}

#[test]
fn test_scenario_d_delete_only_record() {
    let mut engine = scenario_b_engine(EngineOptions::default());
    let removed = engine.delete(0).expect("delete");
    assert_eq!(removed, amy_record());
    assert!(engine.records().is_empty());
}

#[test]
fn test_scenario_e_progress() {
    let mut engine = FormEngine::new();
    assert_eq!(engine.compute_progress(), 0);

    engine.set_field("name", "Amy").expect("name");
    engine.set_field("email", "a@b.com").expect("email");
    assert_eq!(engine.compute_progress(), 40);
}

// =============================================================================
// Round trips and idempotence
// =============================================================================

#[test]
fn test_edit_then_submit_without_changes_is_identity() {
    let mut engine = FormEngine::new();
    for name in ["Amy", "Bob", "Cal"] {
        fill_amy(&mut engine);
        engine.set(Field::Name, name);
        engine.submit();
    }
    let before = engine.records().to_vec();

    engine.edit(1).expect("edit");
    assert_eq!(
        engine.submit(),
        SubmitOutcome::Accepted {
            index: 1,
            updated: true
        }
    );

    assert_eq!(engine.records(), before.as_slice());
    assert_eq!(engine.mode(), Mode::Creating);
}

#[test]
fn test_reset_twice_equals_reset_once() {
    let mut engine = FormEngine::new();
    engine.set_field("name", "Amy").expect("name");
    engine.submit();

    engine.reset();
    let once = engine.snapshot();
    engine.reset();
    assert_eq!(engine.snapshot(), once);
    assert!(once.draft.is_empty());
    assert!(once.errors.is_empty());
}

#[test]
fn test_editing_another_entry_switches_target() {
    let mut engine = scenario_b_engine(EngineOptions::default());
    fill_amy(&mut engine);
    engine.set(Field::Name, "Bob");
    engine.submit();

    engine.edit(0).expect("edit 0");
    engine.edit(1).expect("edit 1");
    assert_eq!(engine.mode(), Mode::Editing(1));
    assert_eq!(engine.draft().name, "Bob");
}

// =============================================================================
// Contract violations
// =============================================================================

#[test]
fn test_unknown_field_name_fails() {
    let mut engine = FormEngine::new();
    let err = engine.set_field("age_group", "18-24").expect_err("snake case is not a field");
    assert!(matches!(err, FormError::InvalidField(_)));
}

#[test]
fn test_out_of_range_edit_and_delete_fail() {
    let mut engine = scenario_b_engine(EngineOptions::default());
    assert!(matches!(
        engine.edit(1),
        Err(FormError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert!(matches!(
        engine.delete(7),
        Err(FormError::IndexOutOfRange { index: 7, len: 1 })
    ));
    assert_eq!(engine.records().len(), 1);
}

// =============================================================================
// Reset policy
// =============================================================================

#[test]
fn test_reset_keeps_editing_index_by_default() {
    let mut engine = scenario_b_engine(EngineOptions::default());
    engine.edit(0).expect("edit");
    engine.reset();
    assert_eq!(engine.mode(), Mode::Editing(0));

    // A freshly typed draft overwrites the entry that was being edited
    fill_amy(&mut engine);
    engine.set(Field::Name, "Zoe");
    assert_eq!(
        engine.submit(),
        SubmitOutcome::Accepted {
            index: 0,
            updated: true
        }
    );
    assert_eq!(engine.records().len(), 1);
    assert_eq!(engine.records()[0].name, "Zoe");
}

#[test]
fn test_reset_can_clear_editing_index() {
    let options = EngineOptions {
        reset_clears_editing_index: true,
        ..EngineOptions::default()
    };
    let mut engine = scenario_b_engine(options);
    engine.edit(0).expect("edit");
    engine.reset();
    assert_eq!(engine.mode(), Mode::Creating);

    fill_amy(&mut engine);
    engine.set(Field::Name, "Zoe");
    engine.submit();
    assert_eq!(engine.records().len(), 2);
    assert_eq!(engine.records()[0].name, "Amy");
    assert_eq!(engine.records()[1].name, "Zoe");
}

// =============================================================================
// Delete policy
// =============================================================================

#[test]
fn test_deleting_edited_entry_returns_to_creating() {
    let mut engine = scenario_b_engine(EngineOptions::default());
    engine.edit(0).expect("edit");
    engine.delete(0).expect("delete");

    assert_eq!(engine.mode(), Mode::Creating);
    assert!(engine.draft().is_empty());

    fill_amy(&mut engine);
    assert_eq!(
        engine.submit(),
        SubmitOutcome::Accepted {
            index: 0,
            updated: false
        }
    );
}

#[test]
fn test_deleting_edited_entry_without_rebase_keeps_draft() {
    let options = EngineOptions {
        rebase_editing_on_delete: false,
        ..EngineOptions::default()
    };
    let mut engine = scenario_b_engine(options);
    engine.edit(0).expect("edit");
    engine.delete(0).expect("delete");

    assert_eq!(engine.mode(), Mode::Editing(0));
    assert_eq!(engine.draft().name, "Amy");

    // The stale index no longer points anywhere, so the record comes back
    assert_eq!(
        engine.submit(),
        SubmitOutcome::Accepted {
            index: 0,
            updated: false
        }
    );
    assert_eq!(engine.records(), &[amy_record()]);
}

#[test]
fn test_snapshot_reflects_engine() {
    let mut engine = scenario_b_engine(EngineOptions::default());
    engine.edit(0).expect("edit");
    engine.set(Field::Email, "");

    let snapshot = engine.snapshot();
    assert!(snapshot.is_editing);
    assert_eq!(snapshot.editing_index, Some(0));
    assert_eq!(snapshot.mode(), Mode::Editing(0));
    assert_eq!(snapshot.progress, 80);
    assert_eq!(snapshot.records.len(), 1);
    assert!(snapshot.errors.is_empty());
}
