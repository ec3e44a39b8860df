//! A single registry entry and the validate-and-normalize operation.

use regex::Regex;
use tracing::debug;

use crate::FieldKind;

/// Whitespace stripped before matching: Unicode `White_Space` minus NEL,
/// plus the byte order mark, as browsers trim form input.
fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Canonicalizes a value that passed its pattern.
pub type Normalizer = fn(&str) -> String;

/// Matching rule and canonicalization rule for one field kind.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    kind: FieldKind,
    pattern: Option<Regex>,
    normalize: Option<Normalizer>,
}

impl FieldValidator {
    #[must_use]
    pub const fn new(kind: FieldKind, pattern: Option<Regex>, normalize: Option<Normalizer>) -> Self {
        Self {
            kind,
            pattern,
            normalize,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub const fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    #[must_use]
    pub const fn has_normalizer(&self) -> bool {
        self.normalize.is_some()
    }

    /// Check the input, stripped of surrounding blanks, against the pattern.
    ///
    /// An entry without a pattern accepts everything.
    #[must_use]
    pub fn test(&self, raw: &str) -> bool {
        self.pattern
            .as_ref()
            .is_none_or(|re| re.is_match(raw.trim_matches(is_blank)))
    }

    /// Apply the normalizer, or return the input unchanged when there is none.
    ///
    /// Does not check the pattern; see [`validate_and_normalize`].
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        self.normalize
            .map_or_else(|| raw.to_string(), |normalize| normalize(raw))
    }
}

/// Validate `raw` against `entry` and return its canonical form.
///
/// The pattern is tested on the trimmed input but the normalizer receives the
/// original string, so surrounding whitespace survives normalization. Returns
/// `None` when the value does not match.
#[must_use]
pub fn validate_and_normalize(entry: &FieldValidator, raw: &str) -> Option<String> {
    if !entry.test(raw) {
        debug!(kind = %entry.kind, "Value rejected by field pattern");
        return None;
    }
    Some(entry.normalize(raw))
}
