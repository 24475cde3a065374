use chrono::NaiveDate;
use therapynote_core::{NoteDraft, NoteValidationError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 20).unwrap()
}

fn valid_draft() -> NoteDraft {
    NoteDraft {
        client_name: "Jane Doe".to_string(),
        session_date: "2026-08-20".to_string(),
        quick_notes: "Discussed coping strategies.".to_string(),
        duration_minutes: Some(50),
    }
}

#[test]
fn valid_draft_passes_with_identical_values() {
    let normalized = valid_draft().validate(today()).unwrap();

    assert_eq!(normalized.client_name, "Jane Doe");
    assert_eq!(normalized.session_date, today());
    assert_eq!(normalized.quick_notes, "Discussed coping strategies.");
    assert_eq!(normalized.duration_minutes, 50);
}

#[test]
fn text_fields_are_trimmed_on_success() {
    let draft = NoteDraft {
        client_name: "  Jane Doe  ".to_string(),
        quick_notes: "\tDiscussed coping strategies.\n".to_string(),
        ..valid_draft()
    };

    let normalized = draft.validate(today()).unwrap();
    assert_eq!(normalized.client_name, "Jane Doe");
    assert_eq!(normalized.quick_notes, "Discussed coping strategies.");
}

#[test]
fn validate_does_not_mutate_the_draft() {
    let draft = NoteDraft {
        client_name: "  Jane Doe  ".to_string(),
        ..valid_draft()
    };
    let before = draft.clone();

    let _ = draft.validate(today());
    assert_eq!(draft, before);
}

#[test]
fn blank_client_name_is_rejected() {
    let draft = NoteDraft {
        client_name: "   ".to_string(),
        ..valid_draft()
    };
    assert_eq!(
        draft.validate(today()).unwrap_err(),
        NoteValidationError::ClientNameRequired
    );
}

#[test]
fn empty_client_name_scenario() {
    let draft = NoteDraft {
        client_name: String::new(),
        quick_notes: "x".to_string(),
        ..valid_draft()
    };
    assert_eq!(
        draft.validate(today()).unwrap_err().to_string(),
        "Client name is required"
    );
}

#[test]
fn missing_session_date_is_rejected() {
    let draft = NoteDraft {
        session_date: String::new(),
        ..valid_draft()
    };
    assert_eq!(
        draft.validate(today()).unwrap_err(),
        NoteValidationError::SessionDateRequired
    );
}

#[test]
fn unparseable_session_date_is_treated_as_missing() {
    let draft = NoteDraft {
        session_date: "20/08/2026".to_string(),
        ..valid_draft()
    };
    assert_eq!(
        draft.validate(today()).unwrap_err(),
        NoteValidationError::SessionDateRequired
    );
}

#[test]
fn todays_date_is_accepted() {
    let draft = NoteDraft {
        session_date: "2026-08-20".to_string(),
        ..valid_draft()
    };
    assert!(draft.validate(today()).is_ok());
}

#[test]
fn tomorrows_date_is_rejected() {
    let draft = NoteDraft {
        client_name: "A".to_string(),
        session_date: "2026-08-21".to_string(),
        quick_notes: "x".to_string(),
        duration_minutes: Some(50),
    };
    assert_eq!(
        draft.validate(today()).unwrap_err().to_string(),
        "Session date cannot be in the future"
    );
}

#[test]
fn blank_quick_notes_are_rejected() {
    let draft = NoteDraft {
        quick_notes: " \n ".to_string(),
        ..valid_draft()
    };
    assert_eq!(
        draft.validate(today()).unwrap_err(),
        NoteValidationError::QuickNotesRequired
    );
}

#[test]
fn quick_notes_at_limit_are_accepted_and_over_limit_rejected() {
    let at_limit = NoteDraft {
        quick_notes: "x".repeat(500),
        ..valid_draft()
    };
    assert!(at_limit.validate(today()).is_ok());

    let over_limit = NoteDraft {
        quick_notes: "x".repeat(501),
        ..valid_draft()
    };
    assert_eq!(
        over_limit.validate(today()).unwrap_err(),
        NoteValidationError::QuickNotesTooLong
    );
}

#[test]
fn quick_notes_length_is_measured_after_trimming() {
    let draft = NoteDraft {
        quick_notes: format!("   {}   ", "x".repeat(500)),
        ..valid_draft()
    };

    let normalized = draft.validate(today()).unwrap();
    assert_eq!(normalized.quick_notes.chars().count(), 500);
}

#[test]
fn duration_bounds_are_inclusive() {
    for minutes in [15, 120] {
        let draft = NoteDraft {
            duration_minutes: Some(minutes),
            ..valid_draft()
        };
        assert!(draft.validate(today()).is_ok(), "{minutes} should pass");
    }

    for minutes in [14, 121] {
        let draft = NoteDraft {
            duration_minutes: Some(minutes),
            ..valid_draft()
        };
        assert_eq!(
            draft.validate(today()).unwrap_err(),
            NoteValidationError::DurationOutOfRange,
            "{minutes} should fail"
        );
    }
}

#[test]
fn absent_duration_is_rejected() {
    let draft = NoteDraft {
        duration_minutes: None,
        ..valid_draft()
    };
    assert_eq!(
        draft.validate(today()).unwrap_err().to_string(),
        "Duration must be between 15 and 120 minutes"
    );
}

#[test]
fn first_violated_rule_wins() {
    // Every field invalid: the client-name rule fires first.
    let all_bad = NoteDraft {
        client_name: "  ".to_string(),
        session_date: "2099-01-01".to_string(),
        quick_notes: String::new(),
        duration_minutes: Some(0),
    };
    assert_eq!(
        all_bad.validate(today()).unwrap_err(),
        NoteValidationError::ClientNameRequired
    );

    // Fix the name: the date rule fires next.
    let date_bad = NoteDraft {
        client_name: "Jane".to_string(),
        ..all_bad.clone()
    };
    assert_eq!(
        date_bad.validate(today()).unwrap_err(),
        NoteValidationError::SessionDateInFuture
    );

    // Fix the date: the quick-notes rule fires next.
    let notes_bad = NoteDraft {
        session_date: "2026-08-19".to_string(),
        ..date_bad.clone()
    };
    assert_eq!(
        notes_bad.validate(today()).unwrap_err(),
        NoteValidationError::QuickNotesRequired
    );

    // Fix the notes: the duration rule fires last.
    let duration_bad = NoteDraft {
        quick_notes: "x".to_string(),
        ..notes_bad
    };
    assert_eq!(
        duration_bad.validate(today()).unwrap_err(),
        NoteValidationError::DurationOutOfRange
    );
}

#[test]
fn rejection_messages_are_stable() {
    let cases = [
        (NoteValidationError::ClientNameRequired, "Client name is required"),
        (NoteValidationError::SessionDateRequired, "Session date is required"),
        (
            NoteValidationError::SessionDateInFuture,
            "Session date cannot be in the future",
        ),
        (NoteValidationError::QuickNotesRequired, "Quick notes are required"),
        (
            NoteValidationError::QuickNotesTooLong,
            "Quick notes must be 500 characters or less",
        ),
        (
            NoteValidationError::DurationOutOfRange,
            "Duration must be between 15 and 120 minutes",
        ),
    ];

    for (error, message) in cases {
        assert_eq!(error.to_string(), message);
    }
}
