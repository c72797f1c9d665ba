use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use studychat_api::{CompletionClient, CompletionError};
use studychat_models::{Content, Role, Turn};

use crate::conversation::{derive_context, Conversation, CONTEXT_WINDOW_TURNS};
use crate::session::{ChatSession, SubmitOutcome, CONNECTION_ERROR_MESSAGE};

/// Mock completion client driven by a script of canned outcomes, recording
/// the history handed to each call.
struct MockClient {
    script: Mutex<VecDeque<Result<String, ()>>>,
    seen_history: Mutex<Vec<Vec<Content>>>,
}

impl MockClient {
    fn with_script(script: Vec<Result<String, ()>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            seen_history: Mutex::new(Vec::new()),
        }
    }

    fn replying(text: &str) -> Self {
        Self::with_script(vec![Ok(text.to_string()); 16])
    }

    fn failing() -> Self {
        Self::with_script(vec![Err(()); 16])
    }

    fn last_history(&self) -> Vec<Content> {
        self.seen_history
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    fn call_count(&self) -> usize {
        self.seen_history.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for &MockClient {
    async fn complete(
        &self,
        _user_text: &str,
        history: &[Content],
    ) -> Result<String, CompletionError> {
        self.seen_history.lock().unwrap().push(history.to_vec());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(()));
        next.map_err(|()| CompletionError("connection refused".to_string()))
    }
}

#[test]
fn derive_context_excludes_error_turns() {
    let turns = vec![
        Turn::user("A"),
        Turn::model("B"),
        Turn::error("C"),
        Turn::user("D"),
    ];

    let context = derive_context(&turns);

    assert_eq!(context.len(), 3);
    assert!(context.iter().all(|c| c.text() != "C"));
}

#[test]
fn derive_context_keeps_short_conversations_whole_and_ordered() {
    let turns = vec![Turn::user("A"), Turn::model("B"), Turn::user("C")];

    let context = derive_context(&turns);

    assert_eq!(context.len(), 3);
    assert_eq!(context[0].text(), "A");
    assert_eq!(context[1].text(), "B");
    assert_eq!(context[2].text(), "C");
}

#[test]
fn derive_context_caps_at_window_size() {
    let turns: Vec<Turn> = (0..25)
        .map(|i| {
            if i % 2 == 0 {
                Turn::user(format!("question {}", i))
            } else {
                Turn::model(format!("answer {}", i))
            }
        })
        .collect();

    let context = derive_context(&turns);

    assert_eq!(context.len(), CONTEXT_WINDOW_TURNS);
    // Window covers the most recent turns, oldest first
    assert_eq!(context[0].text(), "answer 15");
    assert_eq!(context[9].text(), "question 24");
}

#[test]
fn derive_context_filters_errors_after_windowing() {
    // Error turns inside the window are dropped, not back-filled from older
    // turns; the window may come back smaller than 10.
    let mut turns: Vec<Turn> = (0..10).map(|i| Turn::user(format!("old {}", i))).collect();
    turns.extend((0..10).map(|i| Turn::error(format!("err {}", i))));

    let context = derive_context(&turns);

    assert!(context.is_empty());
}

#[test]
fn derive_context_example_scenario() {
    let turns = vec![Turn::user("A"), Turn::model("B"), Turn::error("C")];

    let context = derive_context(&turns);

    assert_eq!(context.len(), 2);
    assert_eq!(context[0].role, Role::User);
    assert_eq!(context[0].text(), "A");
    assert_eq!(context[1].role, Role::Model);
    assert_eq!(context[1].text(), "B");
}

#[test]
fn derive_context_is_idempotent() {
    let turns = vec![
        Turn::user("A"),
        Turn::error("oops"),
        Turn::model("B"),
        Turn::user("C"),
    ];

    assert_eq!(derive_context(&turns), derive_context(&turns));
}

#[test]
fn conversation_is_append_only() {
    let mut conversation = Conversation::new();
    assert!(conversation.is_empty());

    conversation.push_user("hello");
    conversation.push_model("hi");
    conversation.push_error("boom");

    assert_eq!(conversation.len(), 3);
    assert_eq!(conversation.turns()[0].role, Role::User);
    assert_eq!(conversation.turns()[1].role, Role::Model);
    assert!(conversation.turns()[2].is_error);
}

#[tokio::test]
async fn submit_success_appends_user_and_model_turns() {
    let client = MockClient::replying("Velocity is displacement over time.");
    let mut session = ChatSession::new(&client);

    let outcome = session.submit("What is velocity?").await;

    assert_eq!(
        outcome,
        SubmitOutcome::Reply("Velocity is displacement over time.".to_string())
    );
    assert!(!session.is_pending());

    let turns = session.conversation().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0], Turn::user("What is velocity?"));
    assert_eq!(turns[1], Turn::model("Velocity is displacement over time."));
}

#[tokio::test]
async fn submit_failure_appends_fixed_error_turn() {
    let client = MockClient::failing();
    let mut session = ChatSession::new(&client);

    let outcome = session.submit("X").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!session.is_pending());

    let turns = session.conversation().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0], Turn::user("X"));
    assert_eq!(turns[1], Turn::error(CONNECTION_ERROR_MESSAGE));

    // The synthesized error turn never re-enters the context window
    let context = session.conversation().derive_context();
    assert_eq!(context.len(), 1);
    assert_eq!(context[0].text(), "X");
}

#[tokio::test]
async fn submit_blank_text_is_dropped() {
    let client = MockClient::replying("unused");
    let mut session = ChatSession::new(&client);

    assert_eq!(session.submit("").await, SubmitOutcome::Dropped);
    assert_eq!(session.submit("   \t ").await, SubmitOutcome::Dropped);

    assert!(session.conversation().is_empty());
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn submit_while_pending_is_dropped_not_queued() {
    let client = MockClient::replying("unused");
    let mut session = ChatSession::new(&client);
    session.force_pending(true);

    assert_eq!(session.submit("hello?").await, SubmitOutcome::Dropped);

    assert!(session.conversation().is_empty());
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn submit_trims_whitespace_before_appending() {
    let client = MockClient::replying("hi");
    let mut session = ChatSession::new(&client);

    session.submit("  hello  ").await;

    assert_eq!(session.conversation().turns()[0].text, "hello");
}

#[tokio::test]
async fn context_snapshot_excludes_the_pending_question() {
    let client = MockClient::replying("B");
    let mut session = ChatSession::new(&client);

    session.submit("A").await;
    session.submit("C").await;

    // The second call sees [A, B], never its own unanswered "C"
    let history = client.last_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].text(), "A");
    assert_eq!(history[1].text(), "B");
}

#[tokio::test]
async fn session_recovers_after_a_failed_call() {
    let client = MockClient::with_script(vec![Err(()), Ok("All good now.".to_string())]);
    let mut session = ChatSession::new(&client);

    assert_eq!(session.submit("X").await, SubmitOutcome::Failed);
    assert!(!session.is_pending());

    // Busy flag cleared by the failure path, so the next submission runs
    let outcome = session.submit("Y").await;
    assert_eq!(outcome, SubmitOutcome::Reply("All good now.".to_string()));

    // The retry's history contains the failed question but not the error turn
    let history = client.last_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].text(), "X");

    let turns = session.conversation().turns();
    assert_eq!(turns.len(), 4);
    assert!(turns[1].is_error);
    assert_eq!(turns[3], Turn::model("All good now."));
}
