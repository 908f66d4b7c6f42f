use std::{collections::HashSet, sync::LazyLock};

///
/// RESERVED_WORDS
/// keywords of the generated surface; a member whose de-camel-cased name
/// lands on one of these cannot become a field identifier
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    // rust
    // https://doc.rust-lang.org/reference/keywords.html
    [
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
        "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]
    .into_iter()
    .collect()
});

/// Check if an identifier is a reserved word.
#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_reserved() {
        for word in ["type", "match", "self", "async"] {
            assert!(is_reserved_word(word), "{word} should be reserved");
        }
    }

    #[test]
    fn ordinary_identifiers_are_not() {
        for word in ["name", "age", "radius"] {
            assert!(!is_reserved_word(word));
        }
    }
}
