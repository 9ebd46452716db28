//! Placeholder substitution into command templates.
//!
//! Tokens are `$ARGUMENTS` and positional `$<digits>` (`$1`, `$2`, ...).
//! Substitution is a single left-to-right pass over the template: inserted
//! values are never scanned again, so a plan that itself mentions `$1` is
//! embedded verbatim. Every token the template uses must be supplied.

use crate::error::{AdwError, Result};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(?:ARGUMENTS|[0-9]+)").expect("Invalid token regex"));

/// Explicit mapping from placeholder token to replacement text.
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    values: BTreeMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the value for a token such as `$1` or `$ARGUMENTS`.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(token.into(), value.into());
        self
    }

    /// Supply the value for the positional token `$<index>`.
    pub fn with_positional(self, index: usize, value: impl Into<String>) -> Self {
        self.with(format!("${}", index), value)
    }

    /// Supply the value for `$ARGUMENTS`.
    pub fn with_arguments(self, value: impl Into<String>) -> Self {
        self.with("$ARGUMENTS", value)
    }

    /// Distinct tokens appearing in `template`, in first-seen order.
    pub fn tokens_in(template: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for m in TOKEN_REGEX.find_iter(template) {
            let token = m.as_str().to_string();
            if !seen.contains(&token) {
                seen.push(token);
            }
        }
        seen
    }

    /// Substitute every token in `template`.
    ///
    /// `name` identifies the template in error messages.
    pub fn render(&self, name: &str, template: &str) -> Result<String> {
        let missing: Vec<String> = Self::tokens_in(template)
            .into_iter()
            .filter(|token| !self.values.contains_key(token))
            .collect();

        if !missing.is_empty() {
            return Err(AdwError::UnresolvedPlaceholder {
                template: name.to_string(),
                tokens: missing,
            });
        }

        let rendered = TOKEN_REGEX.replace_all(template, |caps: &Captures| {
            self.values
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        });

        Ok(rendered.into_owned())
    }
}
