//! License expressions as opaque values.
//!
//! Curations only ever compare license expressions and combine them with a
//! logical AND, so [`SpdxExpression`] keeps the normalized text and nothing
//! else. Parsing an expression into a syntax tree is left to the consumers
//! of a merged curation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CuratorError, Result};

/// Logical conjunction of two claims.
pub trait Conjunction {
    /// Combine both values so that both claims hold.
    fn and(&self, other: &Self) -> Self;
}

/// An SPDX license expression, e.g. `MIT OR Apache-2.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpdxExpression(String);

impl SpdxExpression {
    /// Create an expression from its textual form.
    ///
    /// Surrounding whitespace is trimmed. Empty text and unbalanced
    /// parentheses are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(invalid(text, "expression is empty"));
        }

        let mut depth = 0usize;
        for c in trimmed.chars() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| invalid(text, "unexpected ')'"))?;
                }
                _ => {}
            }
        }
        if depth != 0 {
            return Err(invalid(text, "unclosed '('"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The normalized expression text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether an `OR` operator appears outside of any parentheses.
    fn has_top_level_or(&self) -> bool {
        let mut depth = 0usize;
        let mut word = String::new();

        for c in self.0.chars() {
            if c == '(' || c == ')' || c.is_whitespace() {
                if depth == 0 && word.eq_ignore_ascii_case("OR") {
                    return true;
                }
                word.clear();

                match c {
                    '(' => depth += 1,
                    ')' => depth = depth.saturating_sub(1),
                    _ => {}
                }
            } else {
                word.push(c);
            }
        }

        false
    }

    /// Text to use as an operand of `AND`.
    fn operand(&self) -> String {
        if self.has_top_level_or() {
            format!("({})", self.0)
        } else {
            self.0.clone()
        }
    }
}

impl Conjunction for SpdxExpression {
    fn and(&self, other: &Self) -> Self {
        if self == other {
            return self.clone();
        }

        Self(format!("{} AND {}", self.operand(), other.operand()))
    }
}

impl fmt::Display for SpdxExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SpdxExpression {
    type Err = CuratorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SpdxExpression {
    type Error = CuratorError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SpdxExpression> for String {
    fn from(expression: SpdxExpression) -> Self {
        expression.0
    }
}

fn invalid(expression: &str, reason: &str) -> CuratorError {
    CuratorError::InvalidLicenseExpression {
        expression: expression.to_string(),
        reason: reason.to_string(),
    }
}
