//! Indentation configuration for generated code.

use serde::{Deserialize, Serialize};

const SPACES: &str = "        ";

/// Indentation style for generated code.
///
/// In configuration files this is written as a width (`indent = 2`) or as
/// `indent = "tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IndentRepr", into = "IndentRepr")]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Swift default).
    pub const SWIFT: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n @ 1..=8) => &SPACES[..*n as usize],
            // Fallback to 4 whitespaces
            Self::Spaces(_) => &SPACES[..4],
            Self::Tab => "\t",
        }
    }

    /// The indentation string for `level` nested levels.
    pub fn repeat(&self, level: usize) -> String {
        self.as_str().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Width(u8),
    Named(String),
}

impl TryFrom<IndentRepr> for Indent {
    type Error = String;

    fn try_from(repr: IndentRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentRepr::Width(n @ 1..=8) => Ok(Self::Spaces(n)),
            IndentRepr::Width(n) => Err(format!("indent width must be between 1 and 8, got {n}")),
            IndentRepr::Named(name) if name == "tab" => Ok(Self::Tab),
            IndentRepr::Named(name) => Err(format!("unknown indent style '{name}'")),
        }
    }
}

impl From<Indent> for IndentRepr {
    fn from(indent: Indent) -> Self {
        match indent {
            Indent::Spaces(n) => Self::Width(n),
            Indent::Tab => Self::Named("tab".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(0).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Indent::SWIFT.repeat(0), "");
        assert_eq!(Indent::SWIFT.repeat(2), "        ");
        assert_eq!(Indent::Tab.repeat(3), "\t\t\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::SWIFT);
    }
}
