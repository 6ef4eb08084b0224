//! Declaration modifiers and their canonical ordering.

use std::{collections::BTreeSet, fmt};

use crate::builder::Literal;

/// A declaration modifier keyword.
///
/// Variants are declared in guideline order, which is also the default
/// rendering order (see [`Modifier::GUIDELINE_ORDER`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Open,
    Public,
    Internal,
    Fileprivate,
    Private,
    Override,
    Required,
    Convenience,
    /// `class` as a member modifier (overridable type member).
    Class,
    Static,
    Final,
    Lazy,
    Optional,
    Dynamic,
    Weak,
    Unowned,
    Indirect,
    Mutating,
    Nonmutating,
    Throws,
    Rethrows,
}

/// An unordered set of modifiers. Rendering order comes from the writer.
pub type ModifierSet = BTreeSet<Modifier>;

impl Modifier {
    /// Canonical rendering order: access level first, then declaration
    /// attributes, then effects.
    pub const GUIDELINE_ORDER: &'static [Modifier] = &[
        Self::Open,
        Self::Public,
        Self::Internal,
        Self::Fileprivate,
        Self::Private,
        Self::Override,
        Self::Required,
        Self::Convenience,
        Self::Class,
        Self::Static,
        Self::Final,
        Self::Lazy,
        Self::Optional,
        Self::Dynamic,
        Self::Weak,
        Self::Unowned,
        Self::Indirect,
        Self::Mutating,
        Self::Nonmutating,
        Self::Throws,
        Self::Rethrows,
    ];

    /// Access-level modifiers, most to least visible.
    pub const ACCESS_LEVELS: &'static [Modifier] = &[
        Self::Open,
        Self::Public,
        Self::Internal,
        Self::Fileprivate,
        Self::Private,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Fileprivate => "fileprivate",
            Self::Private => "private",
            Self::Override => "override",
            Self::Required => "required",
            Self::Convenience => "convenience",
            Self::Class => "class",
            Self::Static => "static",
            Self::Final => "final",
            Self::Lazy => "lazy",
            Self::Optional => "optional",
            Self::Dynamic => "dynamic",
            Self::Weak => "weak",
            Self::Unowned => "unowned",
            Self::Indirect => "indirect",
            Self::Mutating => "mutating",
            Self::Nonmutating => "nonmutating",
            Self::Throws => "throws",
            Self::Rethrows => "rethrows",
        }
    }

    pub fn is_access_level(&self) -> bool {
        Self::ACCESS_LEVELS.contains(self)
    }

    /// Effects render after a method's parameter list, not before `func`.
    pub fn is_effect(&self) -> bool {
        matches!(self, Self::Throws | Self::Rethrows)
    }

    /// The explicit access level in `modifiers`, if any.
    pub fn access_level(modifiers: &ModifierSet) -> Option<Modifier> {
        Self::ACCESS_LEVELS
            .iter()
            .copied()
            .find(|m| modifiers.contains(m))
    }

    /// The access level in effect, where no explicit modifier means `internal`.
    pub fn effective_access_level(modifiers: &ModifierSet) -> Modifier {
        Self::access_level(modifiers).unwrap_or(Self::Internal)
    }

    /// Whether a member is exactly as visible as its containing type.
    pub fn equivalent_access_level(parent: &ModifierSet, child: &ModifierSet) -> bool {
        Self::effective_access_level(parent) == Self::effective_access_level(child)
    }
}

impl Literal for Modifier {
    fn literal_value(&self) -> String {
        self.as_str().to_string()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(modifiers: &[Modifier]) -> ModifierSet {
        modifiers.iter().copied().collect()
    }

    #[test]
    fn test_guideline_order_covers_every_modifier() {
        assert_eq!(Modifier::GUIDELINE_ORDER.len(), 21);
        assert!(
            Modifier::GUIDELINE_ORDER
                .windows(2)
                .all(|pair| pair[0] < pair[1])
        );
    }

    #[test]
    fn test_access_level() {
        assert_eq!(
            Modifier::access_level(&set(&[Modifier::Static, Modifier::Private])),
            Some(Modifier::Private)
        );
        assert_eq!(Modifier::access_level(&set(&[Modifier::Static])), None);
        assert_eq!(
            Modifier::effective_access_level(&ModifierSet::new()),
            Modifier::Internal
        );
    }

    #[test]
    fn test_equivalent_access_level() {
        let public = set(&[Modifier::Public]);
        let public_static = set(&[Modifier::Public, Modifier::Static]);
        let internal = set(&[Modifier::Internal]);
        let none = ModifierSet::new();

        assert!(Modifier::equivalent_access_level(&public, &public_static));
        assert!(Modifier::equivalent_access_level(&internal, &none));
        assert!(!Modifier::equivalent_access_level(&public, &none));
    }

    #[test]
    fn test_effects() {
        assert!(Modifier::Throws.is_effect());
        assert!(!Modifier::Static.is_effect());
        assert_eq!(Modifier::Fileprivate.to_string(), "fileprivate");
    }
}
