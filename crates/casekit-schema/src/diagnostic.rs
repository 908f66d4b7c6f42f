use casekit_core::hash::fnv1a_bytes;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Severity
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Severity {
    Error,
    Info,
    Warning,
}

///
/// SourceLocation
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[display("{path}:{line}:{column}")]
pub struct SourceLocation {
    pub path: String,
    pub line: u32,
    pub column: u32,
}

///
/// Diagnostic
///
/// One entry on the ordered diagnostic stream. The code is a pure function
/// of the message text, so identical failures carry identical codes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: Severity,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        let message = message.into();

        Self {
            code: derive_code(&message),
            message,
            severity,
            location,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self::new(Severity::Error, message, location)
    }
}

/// Derive the stable diagnostic code for a message.
#[must_use]
pub fn derive_code(message: &str) -> String {
    format!("CK-{:08X}", fnv1a_bytes(message.as_bytes()))
}

///
/// Diagnostics
///
/// Ordered accumulator. Validation collects every failure before a stage
/// aborts; `check` turns a non-empty accumulation into the error side.
///

#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>, location: Option<SourceLocation>) {
        self.push(Diagnostic::error(message, location));
    }

    pub fn merge(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }

    /// Ok when nothing was collected, otherwise the full ordered list.
    pub fn check(self) -> Result<(), Vec<Diagnostic>> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into_vec())
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_messages_share_a_code() {
        let a = Diagnostic::error("member 'Type' collides with reserved word 'type'", None);
        let b = Diagnostic::error("member 'Type' collides with reserved word 'type'", None);
        assert_eq!(a.code, b.code);
    }

    #[test]
    fn different_messages_get_different_codes() {
        assert_ne!(derive_code("duplicate member name 'A'"), derive_code("duplicate member name 'B'"));
    }

    #[test]
    fn codes_are_stable_across_runs() {
        // pinned so a code change shows up in review
        assert_eq!(derive_code(""), "CK-811C9DC5");
    }

    #[test]
    fn check_preserves_collection_order() {
        let mut diags = Diagnostics::new();
        diags.error("first", None);
        diags.error("second", None);

        let errs = diags.check().unwrap_err();
        assert_eq!(errs[0].message, "first");
        assert_eq!(errs[1].message, "second");
    }

    #[test]
    fn diagnostics_serialize() {
        let diag = Diagnostic::error(
            "boom",
            Some(SourceLocation {
                path: "lib.cs".into(),
                line: 3,
                column: 7,
            }),
        );

        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("\"severity\":\"Error\""));
        assert!(json.contains("lib.cs"));
    }
}
