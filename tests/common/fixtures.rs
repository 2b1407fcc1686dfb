//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use ccverify::core::models::{CheckInput, Submission};

/// A response body with every structural field a real CLI reply carries
pub fn genuine_anthropic_body() -> String {
    format!(
        r#"{{
  "id": "msg_01",
  "type": "message",
  "content": [
    {{"type": "thinking", "thinking": "The user asks whether I am Claude Code, the CLI tool.", "signature": "{}"}},
    {{"type": "text", "text": "Yes, I am Claude Code, Anthropic's official CLI. I can read and write files and run shell commands."}}
  ],
  "usage": {{"input_tokens": 10, "cache_creation": {{"ephemeral_5m_input_tokens": 0}}, "service_tier": "standard"}}
}}"#,
        "S".repeat(150)
    )
}

/// A bare OpenAI-style reply with nothing CLI-like in it
pub fn plain_openai_body() -> String {
    r#"{"id":"chatcmpl-1","choices":[{"message":{"content":"I am an AI assistant."}}]}"#
        .to_string()
}

/// Builder for check inputs
pub struct InputBuilder {
    input: CheckInput,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self {
            input: CheckInput::default(),
        }
    }

    pub fn signature(mut self, signature: &str) -> Self {
        self.input.signature = signature.to_string();
        self
    }

    pub fn signature_min(mut self, min: usize) -> Self {
        self.input.signature_min = min;
        self
    }

    pub fn response(mut self, json: &str) -> Self {
        self.input.response_json = json.to_string();
        self
    }

    pub fn answer(mut self, text: &str) -> Self {
        self.input.answer_text = text.to_string();
        self
    }

    pub fn thinking(mut self, text: &str) -> Self {
        self.input.thinking_text = text.to_string();
        self
    }

    pub fn skip_identity(mut self) -> Self {
        self.input.skip_identity_checks = true;
        self
    }

    pub fn build(self) -> CheckInput {
        self.input
    }
}

impl Default for InputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for raw submissions
pub struct SubmissionBuilder {
    submission: Submission,
}

impl SubmissionBuilder {
    pub fn new() -> Self {
        Self {
            submission: Submission::default(),
        }
    }

    pub fn signature(mut self, signature: &str) -> Self {
        self.submission.signature = signature.to_string();
        self
    }

    pub fn response(mut self, json: &str) -> Self {
        self.submission.response_json = json.to_string();
        self
    }

    pub fn answer(mut self, text: &str) -> Self {
        self.submission.answer_text = text.to_string();
        self
    }

    pub fn thinking(mut self, text: &str) -> Self {
        self.submission.thinking_text = text.to_string();
        self
    }

    pub fn skip_identity(mut self) -> Self {
        self.submission.skip_identity_checks = true;
        self
    }

    pub fn build(self) -> Submission {
        self.submission
    }
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
