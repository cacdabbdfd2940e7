use super::*;

fn todo_json() -> serde_json::Value {
    serde_json::json!({
        "id": "t-1",
        "item": "Buy milk",
        "userId": "u-1",
        "isDone": false,
        "createdAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-02T00:00:00.000Z"
    })
}

// =============================================================
// Todo / TodoPage
// =============================================================

#[test]
fn todo_reads_camel_case_fields() {
    let todo: Todo = serde_json::from_value(todo_json()).unwrap();
    assert_eq!(todo.user_id, "u-1");
    assert!(!todo.is_done);
    assert_eq!(todo.created_at, "2025-01-01T00:00:00.000Z");
}

#[test]
fn todo_page_envelope_parses() {
    let raw = serde_json::json!({
        "content": { "entries": [todo_json()], "totalData": 11, "totalPage": 2 },
        "message": "OK",
        "errors": []
    });
    let env: ApiEnvelope<TodoPage> = serde_json::from_value(raw).unwrap();
    assert_eq!(env.content.entries.len(), 1);
    assert_eq!(env.content.total_data, 11);
    assert_eq!(env.content.total_page, 2);
    assert_eq!(env.message, "OK");
}

#[test]
fn todo_page_accepts_integral_floats() {
    let raw = serde_json::json!({ "entries": [], "totalData": 3.0, "totalPage": 1.0 });
    let page: TodoPage = serde_json::from_value(raw).unwrap();
    assert_eq!(page.total_data, 3);
    assert_eq!(page.total_page, 1);
}

#[test]
fn todo_page_rejects_fractional_and_negative_counts() {
    let fractional = serde_json::json!({ "entries": [], "totalData": 1.5, "totalPage": 1 });
    assert!(serde_json::from_value::<TodoPage>(fractional).is_err());
    let negative = serde_json::json!({ "entries": [], "totalData": -1, "totalPage": 1 });
    assert!(serde_json::from_value::<TodoPage>(negative).is_err());
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_tolerates_missing_message_and_errors() {
    let raw = serde_json::json!({ "content": { "entries": [], "totalData": 0, "totalPage": 0 } });
    let env: ApiEnvelope<TodoPage> = serde_json::from_value(raw).unwrap();
    assert_eq!(env.message_or("fallback"), "fallback");
    assert!(env.errors.is_empty());
}

#[test]
fn auth_envelope_parses_user_and_token() {
    let raw = serde_json::json!({
        "content": {
            "token": "abc",
            "user": { "id": "u-1", "fullName": "Alan Turing", "email": "alan@example.com", "role": "USER" }
        },
        "message": "Login successful",
        "errors": []
    });
    let env: ApiEnvelope<AuthPayload> = serde_json::from_value(raw).unwrap();
    assert_eq!(env.content.token, "abc");
    assert_eq!(env.content.user.role, Role::User);
    assert_eq!(env.message_or("x"), "Login successful");
}

#[test]
fn auth_envelope_rejects_unknown_role() {
    let raw = serde_json::json!({
        "content": {
            "token": "abc",
            "user": { "id": "u-1", "fullName": "A", "email": "a@b.c", "role": "OWNER" }
        },
        "message": "",
        "errors": []
    });
    assert!(serde_json::from_value::<ApiEnvelope<AuthPayload>>(raw).is_err());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn register_request_sends_only_account_fields() {
    let req = RegisterRequest {
        full_name: "Alan Turing".to_owned(),
        email: "alan@example.com".to_owned(),
        password: "secret1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(req).unwrap(),
        serde_json::json!({ "fullName": "Alan Turing", "email": "alan@example.com", "password": "secret1" })
    );
}

#[test]
fn mark_request_uses_uppercase_action() {
    let done = MarkRequest { action: MarkAction::from_done(true) };
    let undone = MarkRequest { action: MarkAction::from_done(false) };
    assert_eq!(serde_json::to_value(done).unwrap(), serde_json::json!({ "action": "DONE" }));
    assert_eq!(serde_json::to_value(undone).unwrap(), serde_json::json!({ "action": "UNDONE" }));
}
