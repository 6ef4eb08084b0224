//! Fragment constructors for conditionals, loops, switches and closures.
//!
//! Every constructor returns one composed [`CodeBlock`]. Bodies are passed as
//! thunks and invoked once, at construction. Fragments chain by splicing:
//!
//! ```
//! use poet_codegen::builder::{CodeBlock, Comparator, ComparisonList, Emitter, control_flow};
//!
//! let check = control_flow::if_block(
//!     Some(ComparisonList::new("count", Comparator::Equals, "0")),
//!     || CodeBlock::of("return nil"),
//! );
//! let fallback = control_flow::else_block(|| CodeBlock::of("return items"));
//!
//! let block = CodeBlock::builder()
//!     .add_objects(check.instructions())
//!     .add_objects(fallback.instructions())
//!     .build();
//!
//! assert_eq!(
//!     block.render(),
//!     "if count == 0 {\n    return nil\n} else {\n    return items\n}"
//! );
//! ```

use super::{CodeBlock, ComparisonList, Instruction, Literal};

/// Control-flow keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlFlow {
    Guard,
    If,
    ElseIf,
    Else,
    While,
    RepeatWhile,
    ForIn,
    For,
    Switch,
}

impl ControlFlow {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Guard => "guard",
            Self::If => "if",
            Self::ElseIf => "else if",
            Self::Else => "else",
            Self::While => "while",
            Self::RepeatWhile => "repeat",
            Self::ForIn => "in",
            Self::For => "for",
            Self::Switch => "switch",
        }
    }
}

impl Literal for ControlFlow {
    fn literal_value(&self) -> String {
        self.keyword().to_string()
    }
}

/// `keyword [condition] [else] { body }`
fn conditional(
    flow: ControlFlow,
    condition: Option<ComparisonList>,
    body: impl FnOnce() -> CodeBlock,
) -> CodeBlock {
    CodeBlock::builder()
        .add_literal(flow)
        .when(flow != ControlFlow::Else, |b| match condition {
            Some(list) => b.add_emitter(list),
            None => b,
        })
        .when(flow == ControlFlow::Guard, |b| b.add_literal(ControlFlow::Else))
        .add(Instruction::BeginStatement)
        .add_block(body())
        .add(Instruction::EndStatement)
        .build()
}

/// `guard condition else { body }`
pub fn guard_block(
    condition: Option<ComparisonList>,
    body: impl FnOnce() -> CodeBlock,
) -> CodeBlock {
    conditional(ControlFlow::Guard, condition, body)
}

/// `if condition { body }`
pub fn if_block(condition: Option<ComparisonList>, body: impl FnOnce() -> CodeBlock) -> CodeBlock {
    conditional(ControlFlow::If, condition, body)
}

/// `else if condition { body }`
pub fn else_if_block(
    condition: Option<ComparisonList>,
    body: impl FnOnce() -> CodeBlock,
) -> CodeBlock {
    conditional(ControlFlow::ElseIf, condition, body)
}

/// `else { body }`
pub fn else_block(body: impl FnOnce() -> CodeBlock) -> CodeBlock {
    conditional(ControlFlow::Else, None, body)
}

/// `while condition { body }`
pub fn while_block(
    condition: Option<ComparisonList>,
    body: impl FnOnce() -> CodeBlock,
) -> CodeBlock {
    conditional(ControlFlow::While, condition, body)
}

/// `repeat { body } while condition`
pub fn repeat_while(condition: ComparisonList, body: impl FnOnce() -> CodeBlock) -> CodeBlock {
    CodeBlock::builder()
        .add_literal(ControlFlow::RepeatWhile)
        .add(Instruction::BeginStatement)
        .add_block(body())
        .add(Instruction::EndStatement)
        .add_literal(ControlFlow::While)
        .add_emitter(condition)
        .build()
}

/// `for iterator in iterable { body }`
pub fn for_in(
    iterator: impl Literal,
    iterable: impl Literal,
    body: impl FnOnce() -> CodeBlock,
) -> CodeBlock {
    CodeBlock::builder()
        .add_literal(ControlFlow::For)
        .add_literal(iterator)
        .add_literal(ControlFlow::ForIn)
        .add_literal(iterable)
        .add(Instruction::BeginStatement)
        .add_block(body())
        .add(Instruction::EndStatement)
        .build()
}

/// C-style `for` loop. Not supported; use [`for_in`].
///
/// # Panics
///
/// Always.
pub fn for_loop(_iterator: CodeBlock, _iterable: CodeBlock, _execution: CodeBlock) -> CodeBlock {
    unimplemented!("generic for loops are not supported, use for_in")
}

/// `switch value { case label: body ... default: body }`
///
/// Case labels sit at the depth of the `switch` line; bodies one deeper.
pub fn switch_block<L: Literal>(
    value: impl Literal,
    cases: impl IntoIterator<Item = (L, CodeBlock)>,
    default: Option<CodeBlock>,
) -> CodeBlock {
    CodeBlock::builder()
        .add_literal(ControlFlow::Switch)
        .add_literal(value)
        .add(Instruction::BeginStatement)
        .add(Instruction::DecreaseIndent)
        .each(cases, |b, (label, body)| {
            b.add_block(switch_case(Some(&label.literal_value()), body))
        })
        .when(default.is_some(), |b| match default {
            Some(body) => b.add_block(switch_case(None, body)),
            None => b,
        })
        .add(Instruction::IncreaseIndent)
        .add(Instruction::EndStatement)
        .build()
}

fn switch_case(label: Option<&str>, body: CodeBlock) -> CodeBlock {
    let builder = match label {
        Some(label) => CodeBlock::builder().add_literal("case").add_literal(label),
        None => CodeBlock::builder().add_literal("default"),
    };
    builder
        .add_literal_trimmed(":")
        .add(Instruction::IncreaseIndent)
        .add_block(body)
        .add(Instruction::DecreaseIndent)
        .build()
}

/// `{ (params) [throws] -> Return in body }`, returning `Void` when no
/// return type is given.
pub fn closure(
    parameters: impl Literal,
    can_throw: bool,
    return_type: Option<&dyn Literal>,
    body: impl FnOnce() -> CodeBlock,
) -> CodeBlock {
    let return_type = return_type
        .map(|t| t.literal_value())
        .unwrap_or_else(|| "Void".to_string());

    CodeBlock::builder()
        .add_literal("{")
        .add_literal(format!("({})", parameters.literal_value()))
        .when(can_throw, |b| b.add_literal("throws"))
        .add_literal("->")
        .add_literal(return_type)
        .add_literal(ControlFlow::ForIn)
        .add(Instruction::IncreaseIndent)
        .add_block(body())
        .add(Instruction::EndStatement)
        .build()
}

/// `do { body } catch { handler }`
pub fn do_catch(
    body: impl FnOnce() -> CodeBlock,
    handler: impl FnOnce() -> CodeBlock,
) -> CodeBlock {
    CodeBlock::builder()
        .add_literal("do")
        .add(Instruction::BeginStatement)
        .add_block(body())
        .add(Instruction::EndStatement)
        .add_literal("catch")
        .add(Instruction::BeginStatement)
        .add_block(handler())
        .add(Instruction::EndStatement)
        .build()
}
