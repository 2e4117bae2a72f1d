//! Sensitive data pattern table
//!
//! Rules are tried in table order against every line. A line can produce one
//! span per rule.

use hush_core::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Default minimum length of the "Possible secret" rule
pub const POSSIBLE_SECRET_MIN_LEN: usize = 32;

pub const POSSIBLE_SECRET_LABEL: &str = "Possible secret";

/// Key-based and prefix-based rules, in precedence order
const BUILTIN_RULES: &[(&str, &str)] = &[
    (r#"(?i)"(password|passwd|pwd)"\s*:\s*"([^"]+)""#, "Password"),
    (r#"(?i)"(api[_-]?key|apikey)"\s*:\s*"([^"]+)""#, "API key"),
    (r#"(?i)"(secret[_-]?key|secret)"\s*:\s*"([^"]+)""#, "Secret"),
    (
        r#"(?i)"(jwt[_-]?token|token|accesstoken)"\s*:\s*"([^"]+)""#,
        "Token",
    ),
    (r#""sk-[a-zA-Z0-9]{20,}""#, "Provider API key"),
];

lazy_static! {
    static ref BUILTIN_TABLE: PatternTable = PatternTable::builder()
        .build()
        .expect("built-in patterns must compile");
}

/// One detection rule: a pattern and the label shown on its spans
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    label: String,
}

impl PatternRule {
    pub fn new(pattern: &str, label: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern,
            label: label.into(),
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered, immutable list of rules
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<PatternRule>,
}

impl PatternTable {
    /// Shared default table, compiled on first use
    pub fn builtin() -> &'static PatternTable {
        &BUILTIN_TABLE
    }

    pub fn builder() -> PatternTableBuilder {
        PatternTableBuilder::default()
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Builds a table from the built-in rules plus configured extras
#[derive(Debug, Clone)]
pub struct PatternTableBuilder {
    possible_secret_min_len: Option<usize>,
    custom_rules: Vec<(String, String)>,
}

impl Default for PatternTableBuilder {
    fn default() -> Self {
        Self {
            possible_secret_min_len: Some(POSSIBLE_SECRET_MIN_LEN),
            custom_rules: Vec::new(),
        }
    }
}

impl PatternTableBuilder {
    /// Minimum length of an opaque quoted value flagged as a possible secret
    pub fn possible_secret_min_len(mut self, min_len: usize) -> Self {
        self.possible_secret_min_len = Some(min_len.max(1));
        self
    }

    /// Drop the broad "Possible secret" rule
    pub fn without_possible_secret(mut self) -> Self {
        self.possible_secret_min_len = None;
        self
    }

    /// Append a rule after the built-in ones
    pub fn custom_rule(mut self, pattern: impl Into<String>, label: impl Into<String>) -> Self {
        self.custom_rules.push((pattern.into(), label.into()));
        self
    }

    pub fn build(self) -> Result<PatternTable> {
        let mut rules = Vec::with_capacity(BUILTIN_RULES.len() + 1 + self.custom_rules.len());

        for (pattern, label) in BUILTIN_RULES {
            rules.push(PatternRule::new(pattern, *label)?);
        }

        if let Some(min_len) = self.possible_secret_min_len {
            let pattern = format!(r#""[a-zA-Z0-9]{{{},}}""#, min_len);
            rules.push(PatternRule::new(&pattern, POSSIBLE_SECRET_LABEL)?);
        }

        for (pattern, label) in &self.custom_rules {
            rules.push(PatternRule::new(pattern, label.as_str())?);
        }

        Ok(PatternTable { rules })
    }
}
