//! Code fragments: ordered sequences of emission instructions.
//!
//! A [`CodeBlock`] is the unit every spec and control-flow construct is
//! assembled from. It is built once through a [`CodeBlockBuilder`] and is
//! immutable afterwards; the [`CodeWriter`] interprets its instructions in
//! order.

use std::{fmt, sync::Arc};

use super::{CodeWriter, Emitter, Literal};

/// A single emission instruction.
#[derive(Debug, Clone)]
pub enum Instruction {
    /// Literal text. Unless `trim` is set (or it is the first token of its
    /// fragment), a single space separates it from the preceding token.
    Literal { text: String, trim: bool },
    /// Append ` {` and indent one level.
    BeginStatement,
    /// Unindent one level, then break the line and close the brace.
    EndStatement,
    /// Line break.
    NewLine,
    /// Line break followed by the current indentation.
    NextLine,
    /// Indent one level.
    IncreaseIndent,
    /// Unindent one level.
    DecreaseIndent,
    /// Line break, then the text at the current indentation.
    CodeLine(String),
    /// An inline renderer, e.g. a comparison list.
    Emitter(Arc<dyn Emitter>),
    /// A nested fragment, started on its own indented line.
    Block(CodeBlock),
}

/// An immutable, ordered sequence of [`Instruction`]s.
#[derive(Debug, Clone, Default)]
pub struct CodeBlock {
    instructions: Vec<Instruction>,
}

impl CodeBlock {
    /// Start building a fragment.
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// A fragment holding one literal.
    pub fn of(literal: impl Literal) -> Self {
        Self::builder().add_literal(literal).build()
    }

    /// The instruction sequence, in emission order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl Emitter for CodeBlock {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        writer.emit_block(self, false)
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for CodeBlock {
    fn from(text: &str) -> Self {
        Self::of(text)
    }
}

impl From<String> for CodeBlock {
    fn from(text: String) -> Self {
        Self::of(text)
    }
}

/// Append-only accumulator for a [`CodeBlock`].
///
/// No validation happens here: an unmatched `EndStatement` is accepted and
/// only shows up as misformatted output.
///
/// # Example
///
/// ```
/// use poet_codegen::builder::{CodeBlock, Emitter};
///
/// let block = CodeBlock::builder()
///     .add_literal("return")
///     .add_literal("value")
///     .build();
///
/// assert_eq!(block.render(), "return value");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBlockBuilder {
    instructions: Vec<Instruction>,
}

impl CodeBlockBuilder {
    /// Append a raw instruction.
    pub fn add(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    /// Append a literal separated from the previous token by a space.
    pub fn add_literal(self, literal: impl Literal) -> Self {
        self.add(Instruction::Literal {
            text: literal.literal_value(),
            trim: false,
        })
    }

    /// Append a literal glued to the previous token.
    pub fn add_literal_trimmed(self, literal: impl Literal) -> Self {
        self.add(Instruction::Literal {
            text: literal.literal_value(),
            trim: true,
        })
    }

    /// Append a statement on its own line.
    pub fn add_code_line(self, literal: impl Literal) -> Self {
        self.add(Instruction::CodeLine(literal.literal_value()))
    }

    /// Append an inline renderer.
    pub fn add_emitter(self, emitter: impl Emitter + 'static) -> Self {
        self.add(Instruction::Emitter(Arc::new(emitter)))
    }

    /// Append a nested fragment.
    pub fn add_block(self, block: CodeBlock) -> Self {
        self.add(Instruction::Block(block))
    }

    /// Splice the instructions of another fragment inline, without nesting.
    pub fn add_objects(mut self, objects: &[Instruction]) -> Self {
        self.instructions.extend_from_slice(objects);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Snapshot the accumulated instructions.
    pub fn build(&self) -> CodeBlock {
        CodeBlock {
            instructions: self.instructions.clone(),
        }
    }
}
