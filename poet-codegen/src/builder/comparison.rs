//! Boolean condition expressions for control-flow headers.
//!
//! A [`ComparisonList`] is what sits between `if` and `{`. Lists can nest,
//! which renders as a parenthesized group:
//!
//! ```
//! use poet_codegen::builder::{
//!     Comparator, ComparisonElement, ComparisonList, Emitter, Requirement,
//! };
//!
//! let inner = ComparisonList::new("b", Comparator::LessThan, "c").requirement(Requirement::And);
//! let list = ComparisonList::from_elements([
//!     ComparisonElement::from(ComparisonList::new("a", Comparator::Equals, "1")),
//!     ComparisonElement::Group(inner),
//! ]);
//!
//! assert_eq!(list.render(), "(a == 1) && (b < c)");
//! ```

use std::fmt;

use super::{CodeBlock, CodeWriter, Emitter, Literal};

/// Infix operator of a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    /// Optional binding, as in `if let value = optional`.
    OptionalCheck,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqualTo => "<=",
            Self::GreaterThanOrEqualTo => ">=",
            Self::OptionalCheck => "=",
        }
    }
}

impl Literal for Comparator {
    fn literal_value(&self) -> String {
        self.as_str().to_string()
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a comparison is chained onto what precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    And,
    Or,
    /// Comma-separated optional bindings: `if let a = x, let b = y`.
    OptionalList,
}

impl Requirement {
    /// The bare token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::OptionalList => ",",
        }
    }

    /// The token with the spacing it takes between two operands.
    pub fn joiner(&self) -> &'static str {
        match self {
            Self::And => " && ",
            Self::Or => " || ",
            Self::OptionalList => ", ",
        }
    }
}

impl Literal for Requirement {
    fn literal_value(&self) -> String {
        self.as_str().to_string()
    }
}

/// `lhs <comparator> rhs`.
#[derive(Debug, Clone)]
pub struct Comparison {
    lhs: CodeBlock,
    comparator: Comparator,
    rhs: CodeBlock,
}

impl Comparison {
    pub fn new(lhs: impl Into<CodeBlock>, comparator: Comparator, rhs: impl Into<CodeBlock>) -> Self {
        Self {
            lhs: lhs.into(),
            comparator,
            rhs: rhs.into(),
        }
    }

    /// Both sides' instructions spliced around the comparator, so nested
    /// fragments on either side keep their own formatting.
    pub fn to_code_block(&self) -> CodeBlock {
        CodeBlock::builder()
            .add_objects(self.lhs.instructions())
            .add_literal(self.comparator)
            .add_objects(self.rhs.instructions())
            .build()
    }
}

impl Emitter for Comparison {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        writer.emit_block(&self.to_code_block(), false)
    }
}

/// A comparison with an optional leading requirement.
#[derive(Debug, Clone)]
pub struct ComparisonListItem {
    comparison: Comparison,
    requirement: Option<Requirement>,
}

impl ComparisonListItem {
    pub fn new(comparison: Comparison) -> Self {
        Self {
            comparison,
            requirement: None,
        }
    }

    pub fn with_requirement(comparison: Comparison, requirement: Requirement) -> Self {
        Self {
            comparison,
            requirement: Some(requirement),
        }
    }
}

impl From<Comparison> for ComparisonListItem {
    fn from(comparison: Comparison) -> Self {
        Self::new(comparison)
    }
}

impl Emitter for ComparisonListItem {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        if let Some(requirement) = self.requirement {
            writer.emit_literal(requirement.joiner(), false);
        }
        self.comparison.emit(writer)
    }
}

/// One entry of a [`ComparisonList`].
#[derive(Debug, Clone)]
pub enum ComparisonElement {
    Item(ComparisonListItem),
    /// A nested list, rendered in parentheses.
    Group(ComparisonList),
}

impl From<ComparisonListItem> for ComparisonElement {
    fn from(item: ComparisonListItem) -> Self {
        Self::Item(item)
    }
}

impl From<Comparison> for ComparisonElement {
    fn from(comparison: Comparison) -> Self {
        Self::Item(comparison.into())
    }
}

impl From<ComparisonList> for ComparisonElement {
    fn from(list: ComparisonList) -> Self {
        Self::Group(list)
    }
}

/// An ordered boolean expression of comparisons and nested groups.
#[derive(Debug, Clone)]
pub struct ComparisonList {
    elements: Vec<ComparisonElement>,
    requirement: Option<Requirement>,
}

impl ComparisonList {
    /// A list holding the single comparison `lhs <comparator> rhs`.
    pub fn new(lhs: impl Into<CodeBlock>, comparator: Comparator, rhs: impl Into<CodeBlock>) -> Self {
        Self::from_items([Comparison::new(lhs, comparator, rhs).into()])
    }

    pub fn from_items(items: impl IntoIterator<Item = ComparisonListItem>) -> Self {
        Self::from_elements(items.into_iter().map(ComparisonElement::Item))
    }

    pub fn from_elements(elements: impl IntoIterator<Item = ComparisonElement>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            requirement: None,
        }
    }

    /// Set the requirement that chains this list onto what precedes it.
    ///
    /// Inside a group the requirement joins the parenthesized list to the
    /// previous element. At the top level it is a leading token.
    pub fn requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    fn emit_elements(&self, writer: &mut CodeWriter) {
        for element in &self.elements {
            match element {
                ComparisonElement::Item(item) => {
                    item.emit(writer);
                }
                ComparisonElement::Group(group) => {
                    if let Some(requirement) = group.requirement {
                        writer.emit_literal(requirement.joiner(), false);
                    }
                    writer.emit_literal("(", false);
                    group.emit_elements(writer);
                    writer.emit_literal(")", false);
                }
            }
        }
    }
}

impl Emitter for ComparisonList {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        if let Some(requirement) = self.requirement {
            writer.emit_literal(requirement.as_str(), false);
            writer.emit_literal(" ", false);
        }
        self.emit_elements(writer);
        writer
    }
}
