// Prompt container shared by every caller of the LLM client.
// The actual prompt text for each feature lives in that feature's prompts.rs.

/// A two-message prompt: a system instruction plus one user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}
