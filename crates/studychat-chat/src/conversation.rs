use studychat_models::{Content, Turn};

/// Maximum number of recent turns sent to the model as conversational memory.
pub const CONTEXT_WINDOW_TURNS: usize = 10;

/// Derive the context window from a conversation snapshot: the last
/// [`CONTEXT_WINDOW_TURNS`] turns in original order, with synthesized error
/// turns dropped, mapped to the wire shape.
///
/// Pure function of its input; same snapshot in, same window out.
pub fn derive_context(turns: &[Turn]) -> Vec<Content> {
    let start = turns.len().saturating_sub(CONTEXT_WINDOW_TURNS);
    turns[start..]
        .iter()
        .filter(|turn| !turn.is_error)
        .map(Content::from)
        .collect()
}

/// The ordered list of turns exchanged this session. Append-only: turns are
/// never edited or removed once inserted, and the whole thing is discarded
/// when the session ends.
#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::model(text));
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.turns.push(Turn::error(message));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Context window for the current state of the conversation.
    pub fn derive_context(&self) -> Vec<Content> {
        derive_context(&self.turns)
    }
}
