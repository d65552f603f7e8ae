use super::*;

#[test]
fn payload_collects_flat_fields() {
    let payload: ContactPayload = [("name", "Ana"), ("email", "a@x.com")].into_iter().collect();
    assert_eq!(payload.len(), 2);
    assert_eq!(payload.get("name"), Some("Ana"));
    assert_eq!(payload.get("email"), Some("a@x.com"));
    assert_eq!(payload.get("phone"), None);
}

#[test]
fn repeated_field_keeps_last_value() {
    let payload: ContactPayload = [("topic", "a"), ("topic", "b")].into_iter().collect();
    assert_eq!(payload.len(), 1);
    assert_eq!(payload.get("topic"), Some("b"));
}

#[test]
fn payload_serializes_as_plain_object() {
    let payload: ContactPayload = [("name", "Ana"), ("email", "a@x.com")].into_iter().collect();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Ana", "email": "a@x.com" }));
}

#[test]
fn success_shows_done_and_clears() {
    assert_eq!(ContactStatus::Pending.message(), PENDING_MESSAGE);
    let status = ContactStatus::settle(Ok(()));
    assert_eq!(status, ContactStatus::Sent);
    assert_eq!(status.message(), SENT_MESSAGE);
    assert!(status.clears_form());
}

#[test]
fn failure_keeps_fields() {
    let status = ContactStatus::settle(Err(SubmitError::Rejected { status: 502 }));
    assert_eq!(status.message(), FAILED_MESSAGE);
    assert!(!status.clears_form());
    assert!(!status.is_pending());
    assert!(!ContactStatus::Pending.clears_form());
    assert_eq!(ContactStatus::Idle.message(), "");
}

#[test]
fn errors_describe_themselves() {
    assert_eq!(
        SubmitError::Rejected { status: 404 }.to_string(),
        "endpoint rejected the message with status 404"
    );
    assert_eq!(
        SubmitError::Network("offline".into()).to_string(),
        "network error: offline"
    );
}

mod submission {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    fn run(result: Result<(), SubmitError>) -> (ContactStatus, Vec<String>) {
        let steps = RefCell::new(Vec::new());
        let send = async {
            steps.borrow_mut().push("send".to_string());
            result
        };
        let outcome = block_on(run_submission(
            |shown| steps.borrow_mut().push(format!("show {}", shown.message())),
            send,
            || steps.borrow_mut().push("reset".to_string()),
        ));
        (outcome, steps.into_inner())
    }

    #[test]
    fn pending_then_sent_then_cleared() {
        let (outcome, steps) = run(Ok(()));
        assert_eq!(outcome, ContactStatus::Sent);
        assert_eq!(
            steps,
            vec![
                format!("show {PENDING_MESSAGE}"),
                "send".to_string(),
                format!("show {SENT_MESSAGE}"),
                "reset".to_string(),
            ]
        );
    }

    #[test]
    fn failure_shows_message_and_keeps_fields() {
        let (outcome, steps) = run(Err(SubmitError::Network("offline".into())));
        assert_eq!(outcome, ContactStatus::Failed(SubmitError::Network("offline".into())));
        assert_eq!(
            steps,
            vec![
                format!("show {PENDING_MESSAGE}"),
                "send".to_string(),
                format!("show {FAILED_MESSAGE}"),
            ]
        );
    }
}
