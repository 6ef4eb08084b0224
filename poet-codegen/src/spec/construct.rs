//! Declaration kinds.

use std::fmt;

use super::Modifier;
use crate::builder::Literal;

/// The kind of declaration a spec describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Class,
    Struct,
    Enum,
    Protocol,
    Extension,
    /// Immutable stored property (`let`).
    Field,
    /// Mutable property or parameter (`var`).
    MutableParam,
    Method,
    Param,
}

impl Construct {
    /// Keyword emitted in declarations. Parameters have none.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Extension => "extension",
            Self::Field => "let",
            Self::MutableParam => "var",
            Self::Method => "func",
            Self::Param => "",
        }
    }

    /// Human-readable kind used in file header manifests.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Extension => "extension",
            Self::Field => "field",
            Self::MutableParam => "variable",
            Self::Method => "method",
            Self::Param => "parameter",
        }
    }

    /// Legality table for modifiers on the declaration itself.
    ///
    /// Type declarations only take an access level (classes may also be
    /// `final`); members take anything.
    pub fn accepts_modifier(&self, modifier: Modifier) -> bool {
        match self {
            Self::Class => modifier.is_access_level() || modifier == Modifier::Final,
            Self::Struct | Self::Enum | Self::Protocol | Self::Extension => {
                modifier.is_access_level() && modifier != Modifier::Open
            }
            Self::Field | Self::MutableParam | Self::Method | Self::Param => true,
        }
    }
}

impl Literal for Construct {
    fn literal_value(&self) -> String {
        self.keyword().to_string()
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
