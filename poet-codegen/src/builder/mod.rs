//! Code fragments and the writer that renders them.

mod comparison;
pub mod control_flow;
mod fragment;
mod literal;
mod writer;

pub use comparison::{
    Comparator, Comparison, ComparisonElement, ComparisonList, ComparisonListItem, Requirement,
};
pub use control_flow::ControlFlow;
pub use fragment::{CodeBlock, CodeBlockBuilder, Instruction};
pub use literal::{Emitter, Literal};
pub use writer::CodeWriter;
