//! Splitting an input line into command arguments.
//!
//! There is no quoting, escaping or substitution: a line is a run of tokens
//! separated by any number of delimiter characters.

use crate::command::ArgVector;
use crate::error::ShellError;

/// Tab, carriage return, newline and bell.
pub const STRICT_DELIMITERS: &[char] = &['\t', '\r', '\n', '\x07'];

/// [`STRICT_DELIMITERS`] plus the ordinary space.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Initial capacity of the token array and the step it grows by.
pub const TOKEN_BUFFER_SIZE: usize = 64;

#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: Vec<char>,
    growth_step: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITERS)
    }
}

impl Tokenizer {
    pub fn new(delimiters: &[char]) -> Self {
        Self::with_capacity(delimiters, TOKEN_BUFFER_SIZE)
    }

    pub fn with_capacity(delimiters: &[char], growth_step: usize) -> Self {
        Self {
            delimiters: delimiters.to_vec(),
            growth_step: growth_step.max(1),
        }
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }

    /// Split `line` into owned, non-empty tokens.
    ///
    /// Runs of delimiters collapse, and leading or trailing delimiters produce
    /// nothing.
    pub fn split(&self, line: &str) -> Result<ArgVector, ShellError> {
        let mut tokens: Vec<String> = Vec::new();
        tokens.try_reserve_exact(self.growth_step)?;

        for token in line
            .split(|ch: char| self.is_delimiter(ch))
            .filter(|token| !token.is_empty())
        {
            if tokens.len() == tokens.capacity() {
                tokens.try_reserve_exact(self.growth_step)?;
                tracing::trace!(capacity = tokens.capacity(), "grew token array");
            }
            tokens.push(token.to_owned());
        }

        Ok(ArgVector::from_tokens(tokens))
    }
}

/// Tokenize with the default delimiter set.
pub fn split_into_tokens(line: &str) -> Result<ArgVector, ShellError> {
    Tokenizer::default().split(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(args: &ArgVector) -> Vec<&str> {
        args.iter().collect()
    }

    #[test]
    fn empty_and_blank_lines() {
        assert!(split_into_tokens("").unwrap().is_empty());
        assert!(split_into_tokens(" \t\r\n\x07 ").unwrap().is_empty());
    }

    #[test]
    fn tabs_and_spaces_separate() {
        let args = split_into_tokens("/bin/echo  hello\t\tworld").unwrap();
        assert_eq!(tokens(&args), ["/bin/echo", "hello", "world"]);
        assert_eq!(args.get(3), None);
    }

    #[test]
    fn any_delimiter_run_with_padding() {
        let words = ["cd", "/tmp", "extra"];
        let separators = ["\t", "\r", "\x07", " ", "\t\r\x07 ", "  \t"];
        for sep in separators {
            for pad in ["", "\t", " \r", "\x07\x07"] {
                let line = format!("{pad}{}{pad}", words.join(sep));
                let args = split_into_tokens(&line).unwrap();
                assert_eq!(tokens(&args), words, "line {line:?}");
            }
        }
    }

    #[test]
    fn trailing_carriage_return_is_dropped() {
        let args = split_into_tokens("exit\r").unwrap();
        assert_eq!(tokens(&args), ["exit"]);
    }

    #[test]
    fn strict_set_keeps_spaces() {
        let tokenizer = Tokenizer::new(STRICT_DELIMITERS);
        let args = tokenizer.split("ls -l\t/tmp").unwrap();
        assert_eq!(tokens(&args), ["ls -l", "/tmp"]);
    }

    #[test]
    fn no_quoting_or_escaping() {
        let args = split_into_tokens("echo \"a b\" \\c $HOME").unwrap();
        assert_eq!(tokens(&args), ["echo", "\"a", "b\"", "\\c", "$HOME"]);
    }

    #[test]
    fn more_tokens_than_initial_capacity() {
        let words: Vec<String> = (0..TOKEN_BUFFER_SIZE * 2 + 5)
            .map(|i| format!("arg{i}"))
            .collect();
        let args = split_into_tokens(&words.join("\t")).unwrap();
        assert_eq!(args.len(), words.len());
        assert_eq!(args.as_slice(), words.as_slice());
    }

    #[test]
    fn oversized_token_array_is_an_allocation_error() {
        let tokenizer = Tokenizer::with_capacity(DEFAULT_DELIMITERS, usize::MAX);
        let err = tokenizer.split("a").unwrap_err();
        assert!(matches!(err, ShellError::Allocation(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn tiny_growth_step() {
        let tokenizer = Tokenizer::with_capacity(DEFAULT_DELIMITERS, 1);
        let args = tokenizer.split("a b c d e").unwrap();
        assert_eq!(tokens(&args), ["a", "b", "c", "d", "e"]);
    }
}
