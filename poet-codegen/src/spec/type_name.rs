//! References to types in the generated language.

use std::{collections::BTreeSet, fmt};

use crate::builder::Literal;

/// A type reference such as `String`, `[Int]` or `Date?`.
///
/// Carries the modules that must be imported for the type to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    keyword: String,
    optional: bool,
    imports: BTreeSet<String>,
}

impl TypeName {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            optional: false,
            imports: BTreeSet::new(),
        }
    }

    fn foundation(keyword: &str) -> Self {
        Self::new(keyword).with_import("Foundation")
    }

    pub fn string() -> Self {
        Self::new("String")
    }

    pub fn integer() -> Self {
        Self::new("Int")
    }

    pub fn long() -> Self {
        Self::new("Int64")
    }

    pub fn boolean() -> Self {
        Self::new("Bool")
    }

    pub fn double() -> Self {
        Self::new("Double")
    }

    pub fn float() -> Self {
        Self::new("Float")
    }

    pub fn void() -> Self {
        Self::new("Void")
    }

    pub fn any() -> Self {
        Self::new("Any")
    }

    pub fn date() -> Self {
        Self::foundation("Date")
    }

    pub fn url() -> Self {
        Self::foundation("URL")
    }

    pub fn data() -> Self {
        Self::foundation("Data")
    }

    /// `[Element]`, importing whatever the element needs.
    pub fn array(element: &TypeName) -> Self {
        Self {
            keyword: format!("[{}]", element),
            optional: false,
            imports: element.imports.clone(),
        }
    }

    /// `[Key: Value]`, importing whatever either side needs.
    pub fn dictionary(key: &TypeName, value: &TypeName) -> Self {
        Self {
            keyword: format!("[{}: {}]", key, value),
            optional: false,
            imports: key.imports.union(&value.imports).cloned().collect(),
        }
    }

    /// Mark the type optional (`?` suffix).
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.insert(import.into());
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn collect_imports(&self) -> BTreeSet<String> {
        self.imports.clone()
    }
}

impl Literal for TypeName {
    fn literal_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword)?;
        if self.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(TypeName::string().to_string(), "String");
        assert_eq!(TypeName::long().to_string(), "Int64");
        assert!(TypeName::integer().collect_imports().is_empty());
    }

    #[test]
    fn test_optional() {
        let name = TypeName::string().optional();
        assert!(name.is_optional());
        assert_eq!(name.literal_value(), "String?");
    }

    #[test]
    fn test_foundation_types_import_foundation() {
        for name in [TypeName::date(), TypeName::url(), TypeName::data()] {
            assert!(name.collect_imports().contains("Foundation"));
        }
    }

    #[test]
    fn test_collections_carry_imports() {
        let array = TypeName::array(&TypeName::date().optional());
        assert_eq!(array.to_string(), "[Date?]");
        assert!(array.collect_imports().contains("Foundation"));

        let dict = TypeName::dictionary(&TypeName::string(), &TypeName::new("Avatar").with_import("UIKit"));
        assert_eq!(dict.to_string(), "[String: Avatar]");
        assert_eq!(
            dict.collect_imports().into_iter().collect::<Vec<_>>(),
            vec!["UIKit".to_string()]
        );
    }
}
