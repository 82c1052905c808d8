//! # Text Steps
//!
//! Normalisers and a regex tokenizer over `String` leaves.

use regex::Regex;

use crate::{
    errors::{KResult, KotobaError},
    nested::{Container, Nested, expand_elements, map_elements},
    preprocess::Preprocessor,
};

/// Lowercase every leaf.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LowerCase;

impl Preprocessor<String> for LowerCase {
    fn transform<'a>(
        &'a self,
        data: Container<'a, String>,
        lazy: bool,
    ) -> Container<'a, String>
    where
        String: 'a,
    {
        map_elements(data, |text: String| text.to_lowercase(), lazy)
    }
}

/// Trim leading and trailing whitespace from every leaf.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Strip;

impl Preprocessor<String> for Strip {
    fn transform<'a>(
        &'a self,
        data: Container<'a, String>,
        lazy: bool,
    ) -> Container<'a, String>
    where
        String: 'a,
    {
        map_elements(
            data,
            |text: String| {
                let trimmed = text.trim();
                if trimmed.len() == text.len() {
                    text
                } else {
                    trimmed.to_string()
                }
            },
            lazy,
        )
    }
}

/// Words, or runs of punctuation.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\w+|[^\w\s]+";

/// Split every text leaf into a node of its regex matches.
///
/// Each text leaf becomes a sequence of tokens, one level deeper.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    regex: Regex,
}

impl RegexTokenizer {
    /// Build a tokenizer from a pattern.
    ///
    /// ## Errors
    /// [`KotobaError::Parse`] when the pattern does not compile.
    pub fn new(pattern: &str) -> KResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| KotobaError::Parse(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Build a tokenizer over [`DEFAULT_TOKEN_PATTERN`].
    pub fn word_punct() -> KResult<Self> {
        Self::new(DEFAULT_TOKEN_PATTERN)
    }

    /// Get the pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Tokenize a single text.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Preprocessor<String> for RegexTokenizer {
    fn transform<'a>(
        &'a self,
        data: Container<'a, String>,
        lazy: bool,
    ) -> Container<'a, String>
    where
        String: 'a,
    {
        let tokenizer = self;
        expand_elements(
            data,
            move |text: String| Nested::from_leaves(tokenizer.tokenize(&text)),
            lazy,
        )
    }
}
