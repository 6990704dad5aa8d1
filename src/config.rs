use crate::lexer::{DEFAULT_DELIMITERS, STRICT_DELIMITERS, TOKEN_BUFFER_SIZE};
use crate::reader::LINE_BUFFER_SIZE;

/// Prompt written before every read.
pub const DEFAULT_PROMPT: &str = "> ";

/// Knobs of a shell session.
///
/// There are no configuration files; embedders build a `Config` in code and
/// the `standards` binary always uses [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub delimiters: Vec<char>,
    /// Initial capacity of the line buffer, also its growth step.
    pub line_buffer_size: usize,
    /// Initial capacity of the token array, also its growth step.
    pub token_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            line_buffer_size: LINE_BUFFER_SIZE,
            token_buffer_size: TOKEN_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Default configuration, but tokens are split only on tab, carriage
    /// return, newline and bell. Spaces stay inside tokens.
    pub fn strict() -> Self {
        Self::default().with_delimiters(STRICT_DELIMITERS)
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_delimiters(mut self, delimiters: &[char]) -> Self {
        self.delimiters = delimiters.to_vec();
        self
    }

    pub fn with_buffer_sizes(mut self, line: usize, tokens: usize) -> Self {
        self.line_buffer_size = line.max(1);
        self.token_buffer_size = tokens.max(1);
        self
    }
}
