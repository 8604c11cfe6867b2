use super::*;

const GREETING: &str = "Hi! Ask me anything.";

fn seeded() -> ChatState {
    ChatState::new(GREETING)
}

fn submit(state: &mut ChatState, text: &str) -> Option<AskRequest> {
    state.set_input(text);
    state.begin_submit()
}

// =============================================================
// ChatState::new
// =============================================================

#[test]
fn new_state_has_single_greeting() {
    let state = seeded();
    assert_eq!(state.messages(), &[Message::assistant(GREETING)]);
    assert!(state.input.is_empty());
    assert!(!state.loading);
    assert!(!state.open);
}

// =============================================================
// toggle / close / set_input
// =============================================================

#[test]
fn toggle_flips_open_only() {
    let mut state = seeded();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
    assert_eq!(state.messages().len(), 1);
}

#[test]
fn close_is_idempotent() {
    let mut state = seeded();
    state.close();
    assert!(!state.open);
    state.toggle();
    state.close();
    assert!(!state.open);
}

#[test]
fn set_input_does_not_touch_log() {
    let mut state = seeded();
    state.set_input("hello");
    assert_eq!(state.input, "hello");
    assert_eq!(state.messages().len(), 1);
}

// =============================================================
// begin_submit guards
// =============================================================

#[test]
fn whitespace_input_is_noop() {
    let mut state = seeded();
    assert!(submit(&mut state, "   ").is_none());
    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.input, "   ");
    assert!(!state.loading);
}

#[test]
fn empty_input_is_noop() {
    let mut state = seeded();
    assert!(submit(&mut state, "").is_none());
    assert_eq!(state.messages().len(), 1);
}

#[test]
fn submit_while_loading_is_noop() {
    let mut state = seeded();
    assert!(submit(&mut state, "first").is_some());

    assert!(submit(&mut state, "second").is_none());
    assert_eq!(state.messages().len(), 2);
    assert_eq!(state.input, "second");
    assert!(state.loading);
}

#[test]
fn can_send_tracks_input_and_loading() {
    let mut state = seeded();
    assert!(!state.can_send());
    state.set_input("hi");
    assert!(state.can_send());
    state.loading = true;
    assert!(!state.can_send());
}

// =============================================================
// begin_submit effects
// =============================================================

#[test]
fn begin_submit_appends_trimmed_user_message_and_clears_input() {
    let mut state = seeded();
    let request = submit(&mut state, "  What are your skills?  ").unwrap();

    assert_eq!(request.message, "What are your skills?");
    assert_eq!(state.messages().last(), Some(&Message::user("What are your skills?")));
    assert!(state.input.is_empty());
    assert!(state.loading);
}

#[test]
fn history_ends_with_submitted_message() {
    let mut state = seeded();
    let request = submit(&mut state, "hello").unwrap();
    assert_eq!(request.history, vec![Message::assistant(GREETING), Message::user("hello")]);
}

#[test]
fn history_is_capped_to_window_preserving_order() {
    let mut state = seeded();
    for i in 0..8 {
        submit(&mut state, &format!("q{i}")).unwrap();
        state.finish_submit(Ok(format!("a{i}")));
    }
    assert_eq!(state.messages().len(), 17);

    let request = submit(&mut state, "last").unwrap();
    assert_eq!(request.history.len(), HISTORY_WINDOW);
    assert_eq!(request.history.last(), Some(&Message::user("last")));
    assert_eq!(request.history[0], Message::assistant("a3"));
    assert_eq!(request.history.as_slice(), &state.messages()[state.messages().len() - HISTORY_WINDOW..]);
}

#[test]
fn short_log_history_is_whole_log() {
    let state = seeded();
    assert_eq!(state.history(), state.messages());
}

// =============================================================
// finish_submit
// =============================================================

#[test]
fn success_appends_reply_and_goes_idle() {
    let mut state = seeded();
    submit(&mut state, "What are your skills?").unwrap();
    state.finish_submit(Ok("Python, Go, ...".to_owned()));

    assert_eq!(state.messages().len(), 3);
    assert_eq!(state.messages()[2], Message::assistant("Python, Go, ..."));
    assert!(!state.loading);
}

#[test]
fn status_failure_appends_fallback() {
    let mut state = seeded();
    submit(&mut state, "What are your skills?").unwrap();
    state.finish_submit(Err(AskError::Status { status: 500, message: None }));

    assert_eq!(state.messages().len(), 3);
    assert_eq!(state.messages()[2], Message::assistant(FALLBACK_MESSAGE));
    assert!(!state.loading);
}

#[test]
fn every_failure_kind_yields_same_fallback() {
    let errors = [
        AskError::Transport("offline".into()),
        AskError::Status { status: 429, message: Some("slow down".into()) },
        AskError::Malformed("missing text".into()),
    ];
    for err in errors {
        let mut state = seeded();
        submit(&mut state, "hi").unwrap();
        state.finish_submit(Err(err));
        assert_eq!(state.messages().last().map(|m| m.content.as_str()), Some(FALLBACK_MESSAGE));
        assert!(!state.loading);
    }
}

#[test]
fn each_completed_submit_adds_exactly_two_messages() {
    let mut state = seeded();
    for i in 0..5 {
        let before = state.messages().len();
        submit(&mut state, &format!("question {i}")).unwrap();
        let result = if i % 2 == 0 { Ok("ok".to_owned()) } else { Err(AskError::Transport("down".into())) };
        state.finish_submit(result);
        assert_eq!(state.messages().len(), before + 2);
    }
}

#[test]
fn input_typed_while_loading_survives_reply() {
    let mut state = seeded();
    submit(&mut state, "first").unwrap();
    state.set_input("draft");
    state.finish_submit(Ok("reply".to_owned()));
    assert_eq!(state.input, "draft");
    assert!(state.can_send());
}

// =============================================================
// Message serialization
// =============================================================

#[test]
fn message_serializes_lowercase_role() {
    let json = serde_json::to_value(Message::user("hi")).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hi" }));
}
