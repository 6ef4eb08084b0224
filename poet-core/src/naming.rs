//! Identifier cleaning for generated declarations.
//!
//! Raw names coming from schemas (`billing_address[street_line1]`,
//! `test many spaces`, `test.periods.in.name`) are split on whitespace and
//! punctuation and re-joined in the case the declaration role requires.

/// Target case for a cleaned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    /// Type-level declarations: `test_test` -> `TestTest`.
    Type,
    /// Fields, methods and parameters: `test_test` -> `testTest`.
    Param,
}

/// Swift keywords that must be wrapped in backticks when used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "associatedtype", "as", "break", "case", "catch", "class", "continue", "default", "defer",
    "deinit", "do", "else", "enum", "extension", "fallthrough", "false", "fileprivate", "for",
    "func", "guard", "if", "import", "in", "init", "inout", "internal", "is", "let", "nil",
    "operator", "private", "protocol", "public", "repeat", "rethrows", "return", "self", "Self",
    "static", "struct", "subscript", "super", "switch", "throw", "throws", "true", "try",
    "typealias", "var", "where", "while",
];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '_' | '.' | '-' | '[' | ']')
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Clean a raw name into an identifier of the given case.
///
/// Existing camel humps inside a part are preserved, so `testName` becomes
/// `TestName` rather than `Testname`.
pub fn cleaned(name: &str, case: NameCase) -> String {
    let joined: String = name.split(is_separator).map(capitalize_first).collect();
    match case {
        NameCase::Type => joined,
        NameCase::Param => lowercase_first(&joined),
    }
}

/// Check if a name is a reserved word.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Wrap a reserved word in backticks so it can be used as an identifier.
pub fn escape_reserved(name: &str) -> String {
    if is_reserved(name) {
        format!("`{}`", name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_case_underscore() {
        assert_eq!(cleaned("test_underscore", NameCase::Type), "TestUnderscore");
        assert_eq!(cleaned("test_test", NameCase::Type), "TestTest");
    }

    #[test]
    fn test_type_case_keeps_humps() {
        assert_eq!(cleaned("testName", NameCase::Type), "TestName");
    }

    #[test]
    fn test_brackets() {
        let name = "billing_address[street_line1]";
        assert_eq!(cleaned(name, NameCase::Type), "BillingAddressStreetLine1");
        assert_eq!(cleaned(name, NameCase::Param), "billingAddressStreetLine1");
    }

    #[test]
    fn test_spaces() {
        assert_eq!(cleaned("test many spaces", NameCase::Type), "TestManySpaces");
        assert_eq!(cleaned("test test test", NameCase::Param), "testTestTest");
    }

    #[test]
    fn test_param_case() {
        assert_eq!(cleaned("test", NameCase::Param), "test");
        assert_eq!(cleaned("test_test_test", NameCase::Param), "testTestTest");
        assert_eq!(cleaned("test.periods.in.name", NameCase::Param), "testPeriodsInName");
        assert_eq!(cleaned("HashValue", NameCase::Param), "hashValue");
    }

    #[test]
    fn test_empty() {
        assert_eq!(cleaned("", NameCase::Type), "");
        assert_eq!(cleaned("_", NameCase::Param), "");
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(escape_reserved("default"), "`default`");
        assert_eq!(escape_reserved("value"), "value");
    }
}
