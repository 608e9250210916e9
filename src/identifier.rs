//! Identifier normalization
//!
//! Turns human-readable device, firmware and version names into identifiers
//! that are safe as a path segment and as a JSON object key.

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Normalize a human-readable name into an identifier.
///
/// Lowercases, maps whitespace runs to `_`, drops everything that is not
/// alphanumeric, `_` or `-`, collapses `_` runs and trims `_` from both ends.
/// Alphanumeric is Unicode-aware, so `默认固件` is kept as is.
pub fn normalize(text: &str) -> String {
    // Dropping a character can bring two composable characters together, so
    // a single pass is not always a fixed point under NFC.
    let mut current = normalize_pass(text);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_underscore = false;

    for ch in text.nfc().flat_map(char::to_lowercase) {
        let mapped = if ch.is_whitespace() {
            '_'
        } else if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            ch
        } else {
            continue;
        };

        if mapped == '_' {
            pending_underscore = true;
            continue;
        }
        if pending_underscore && !out.is_empty() {
            out.push('_');
        }
        pending_underscore = false;
        out.push(mapped);
    }

    out
}

/// A non-empty, normalized identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Normalize `name`, rejecting names that normalize to nothing.
    ///
    /// `field` names the input in the error ("device", "firmware", "version").
    pub fn from_name(field: &'static str, name: &str) -> Result<Self, ScaffoldError> {
        let id = normalize(name);
        if id.is_empty() {
            return Err(ScaffoldError::InvalidIdentifier {
                field,
                input: name.to_string(),
            });
        }
        Ok(Identifier(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
