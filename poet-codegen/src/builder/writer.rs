//! The stateful, indentation-aware text sink every node renders into.

use std::{borrow::Cow, collections::BTreeSet, sync::Arc};

use poet_core::{Clock, FormatConfig, NameCase, SystemClock, cleaned};

use super::{CodeBlock, Emitter, Instruction};
use crate::{
    file::FileHeader,
    spec::{FieldSpec, MethodSpec, Modifier, ModifierSet, PoetSpec, TypeName, TypeSpec},
};

/// Accumulates rendered text and tracks the current indentation depth.
///
/// The writer never validates what it is asked to emit. Unbalanced
/// begin/end statements or unindenting past the root only produce oddly
/// formatted text; the depth floors at zero.
///
/// # Example
///
/// ```
/// use poet_codegen::builder::{CodeBlock, CodeWriter};
///
/// let mut writer = CodeWriter::new();
/// writer.emit_literal("func main()", false);
/// writer.emit_begin_statement();
/// writer.emit_block(&CodeBlock::builder().add_code_line("run()").build(), false);
/// writer.emit_end_statement();
///
/// assert_eq!(writer.out(), "func main() {\n    run()\n}");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    out: String,
    indent_level: usize,
    config: FormatConfig,
    clock: Arc<dyn Clock>,
    modifier_order: Cow<'static, [Modifier]>,
}

impl CodeWriter {
    /// Create a writer with the default conventions.
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    /// Create a writer with the given conventions.
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            out: String::new(),
            indent_level: 0,
            config,
            clock: Arc::new(SystemClock),
            modifier_order: Cow::Borrowed(Modifier::GUIDELINE_ORDER),
        }
    }

    /// Replace the date source used for generation stamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the canonical modifier ordering.
    ///
    /// Modifiers missing from `order` sort after the listed ones.
    pub fn with_modifier_order(mut self, order: impl Into<Cow<'static, [Modifier]>>) -> Self {
        self.modifier_order = order.into();
        self
    }

    /// An empty writer sharing this writer's conventions.
    pub fn fresh(&self) -> Self {
        Self {
            out: String::new(),
            indent_level: 0,
            config: self.config.clone(),
            clock: Arc::clone(&self.clock),
            modifier_order: self.modifier_order.clone(),
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Get the current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the text emitted so far.
    pub fn out(&self) -> &str {
        &self.out
    }

    /// Consume the writer and return the emitted text.
    pub fn into_string(self) -> String {
        self.out
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    pub fn indent(&mut self) -> &mut Self {
        self.indent_by(1)
    }

    pub fn indent_by(&mut self, levels: usize) -> &mut Self {
        self.indent_level = self.indent_level.saturating_add(levels);
        self
    }

    pub fn unindent(&mut self) -> &mut Self {
        self.unindent_by(1)
    }

    /// Decrease indentation, flooring at zero.
    pub fn unindent_by(&mut self, levels: usize) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(levels);
        self
    }

    fn indentation(&self, level: usize) -> String {
        self.config.indent.repeat(level)
    }

    fn emit_indentation(&mut self) {
        let indentation = self.indentation(self.indent_level);
        self.out.push_str(&indentation);
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Interpret a fragment's instructions in order.
    ///
    /// The first literal of the fragment is never preceded by a space. Nested
    /// fragments start on a fresh line at the current indentation and do not
    /// count as the first token.
    pub fn emit_block(&mut self, block: &CodeBlock, with_indentation: bool) -> &mut Self {
        if with_indentation {
            self.emit_indentation();
        }

        let mut first = true;
        for instruction in block.instructions() {
            match instruction {
                Instruction::Block(nested) => {
                    self.emit_new_line(false);
                    self.emit_block(nested, true);
                    continue;
                }
                Instruction::Literal { text, trim } => self.push_literal(text, first || *trim),
                Instruction::BeginStatement => self.emit_begin_statement(),
                Instruction::EndStatement => self.emit_end_statement(),
                Instruction::NewLine => self.emit_new_line(false),
                Instruction::NextLine => self.emit_new_line(true),
                Instruction::IncreaseIndent => self.indent(),
                Instruction::DecreaseIndent => self.unindent(),
                Instruction::CodeLine(text) => {
                    self.emit_new_line(false);
                    self.emit_literal(text, true)
                }
                Instruction::Emitter(emitter) => {
                    if !first {
                        self.out.push(' ');
                    }
                    emitter.emit(self)
                }
            };
            first = false;
        }
        self
    }

    /// Emit a single instruction as its own one-element fragment.
    pub fn emit_instruction(&mut self, instruction: Instruction) -> &mut Self {
        let block = CodeBlock::builder().add(instruction).build();
        self.emit_block(&block, false)
    }

    /// Append text verbatim, optionally preceded by the current indentation.
    pub fn emit_literal(&mut self, text: &str, with_indentation: bool) -> &mut Self {
        if with_indentation {
            self.emit_indentation();
        }
        self.out.push_str(text);
        self
    }

    fn push_literal(&mut self, text: &str, trim: bool) -> &mut Self {
        if !trim {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self
    }

    /// Append ` {` and indent.
    pub fn emit_begin_statement(&mut self) -> &mut Self {
        self.out.push_str(" {");
        self.indent()
    }

    /// Unindent, then close the brace on its own line.
    pub fn emit_end_statement(&mut self) -> &mut Self {
        self.unindent();
        let indentation = self.indentation(self.indent_level);
        self.out.push('\n');
        self.out.push_str(&indentation);
        self.out.push('}');
        self
    }

    pub fn emit_new_line(&mut self, preserving_indentation: bool) -> &mut Self {
        self.out.push('\n');
        if preserving_indentation {
            self.emit_indentation();
        }
        self
    }

    // =========================================================================
    // Documentation
    // =========================================================================

    fn push_doc_body(&mut self, docs: &str, level: usize) {
        let indentation = self.indentation(level);
        for line in docs.lines() {
            self.out.push_str(&indentation);
            self.out.push_str(line);
            self.out.push('\n');
        }
    }

    /// `/** ... */` block for a type, if it has a description.
    pub fn emit_type_documentation(&mut self, spec: &TypeSpec) -> &mut Self {
        if let Some(docs) = spec.description() {
            let outer = self.indentation(self.indent_level);
            self.out.push_str(&outer);
            self.out.push_str("/**\n");
            self.push_doc_body(docs, self.indent_level + 1);
            self.out.push_str(&outer);
            self.out.push_str("*/\n");
        }
        self
    }

    /// `// ...` line for a field, if it has a description.
    pub fn emit_field_documentation(&mut self, spec: &FieldSpec) -> &mut Self {
        if let Some(docs) = spec.description() {
            let indentation = self.indentation(self.indent_level);
            self.out.push_str(&indentation);
            self.out.push_str("// ");
            self.out.push_str(docs);
            self.out.push('\n');
        }
        self
    }

    /// `/** ... */` block for a method with a `- Parameters:` section.
    ///
    /// Emits nothing when the method has neither a description nor
    /// parameters.
    pub fn emit_method_documentation(&mut self, spec: &MethodSpec) -> &mut Self {
        let params = spec.parameters();
        if spec.description().is_none() && params.is_empty() {
            return self;
        }

        let outer = self.indentation(self.indent_level);
        let inner = self.indentation(self.indent_level + 1);

        self.out.push_str(&outer);
        self.out.push_str("/**\n");
        if let Some(docs) = spec.description() {
            self.push_doc_body(docs, self.indent_level + 1);
        }

        if !params.is_empty() {
            if spec.description().is_some() {
                self.out.push('\n');
            }
            self.out.push_str(&inner);
            self.out.push_str("- Parameters:");
            for param in params {
                self.out.push_str("\n\n");
                self.out.push_str(&inner);
                self.out.push_str("  - ");
                self.out.push_str(param.name());
                if let Some(desc) = param.description() {
                    self.out.push_str(": ");
                    self.out.push_str(desc);
                }
            }
            self.out.push('\n');
        }

        self.out.push_str(&outer);
        self.out.push_str("*/\n");
        self
    }

    // =========================================================================
    // Declaration pieces
    // =========================================================================

    fn modifier_rank(&self, modifier: Modifier) -> usize {
        self.modifier_order
            .iter()
            .position(|m| *m == modifier)
            .unwrap_or(self.modifier_order.len() + modifier as usize)
    }

    /// Current indentation, then the modifiers in canonical order with a
    /// trailing space.
    pub fn emit_modifiers(&mut self, modifiers: &ModifierSet) -> &mut Self {
        self.emit_indentation();
        if modifiers.is_empty() {
            return self;
        }

        let mut sorted: Vec<Modifier> = modifiers.iter().copied().collect();
        sorted.sort_by_key(|m| self.modifier_rank(*m));
        for modifier in sorted {
            self.out.push_str(modifier.as_str());
            self.out.push(' ');
        }
        self
    }

    /// `: SuperType, ProtocolA, ProtocolB`, or nothing when both are absent.
    pub fn emit_inheritance(
        &mut self,
        super_type: Option<&TypeName>,
        protocols: &[TypeName],
    ) -> &mut Self {
        let values: Vec<String> = super_type
            .into_iter()
            .chain(protocols)
            .map(|t| t.to_string())
            .collect();

        if !values.is_empty() {
            self.out.push_str(": ");
            self.out.push_str(&values.join(", "));
        }
        self
    }

    /// One sorted `import X` line per identifier, then a blank line.
    pub fn emit_imports(&mut self, imports: &BTreeSet<String>) -> &mut Self {
        if imports.is_empty() {
            return self;
        }
        for import in imports {
            self.out.push_str("import ");
            self.out.push_str(import);
            self.out.push('\n');
        }
        self.out.push('\n');
        self
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// Banner comment naming the file, its framework and its contents.
    ///
    /// ```text
    /// //
    /// //  Model.swift
    /// //  Framework
    /// //
    /// //  Contains:
    /// //  struct Model
    /// //
    /// //  Generated by Poet on 11/10/15
    /// //
    /// ```
    pub fn emit_file_header<'a, S>(
        &mut self,
        header: &FileHeader,
        specs: impl IntoIterator<Item = &'a S>,
    ) -> &mut Self
    where
        S: PoetSpec + ?Sized + 'a,
    {
        let contents: Vec<String> = specs
            .into_iter()
            .map(|spec| header_line(&format!("{} {}", spec.construct().name(), spec.name())))
            .collect();

        let mut lines = vec![header_line("")];
        if let Some(file_name) = &header.file_name {
            lines.push(header_line(&self.config.file_name(file_name)));
        }
        if let Some(framework) = &header.framework {
            lines.push(header_line(&cleaned(framework, NameCase::Type)));
        }
        lines.push(header_line(""));

        if let Some(info) = &header.generator_info {
            lines.push(header_line(info));
            lines.push(header_line(""));
        }

        if !contents.is_empty() {
            lines.push(header_line("Contains:"));
            lines.extend(contents);
            lines.push(header_line(""));
        }

        let mut generated = format!("Generated by {}", self.config.generator_name);
        if header
            .add_generation_date
            .unwrap_or(self.config.add_generation_date)
        {
            generated.push_str(" on ");
            generated.push_str(&self.config.format_date(self.clock.today()));
        }
        lines.push(header_line(&generated));
        lines.push(header_line(""));

        self.out.push_str(&lines.join("\n"));
        self.emit_new_line(false);
        self.emit_new_line(false)
    }

    /// Render each spec into a fresh writer and join them with blank lines.
    pub fn emit_specs<'a, E>(&mut self, specs: impl IntoIterator<Item = &'a E>) -> &mut Self
    where
        E: Emitter + ?Sized + 'a,
    {
        let rendered: Vec<String> = specs
            .into_iter()
            .map(|spec| {
                let mut writer = self.fresh();
                spec.emit(&mut writer);
                writer.into_string()
            })
            .collect();
        self.out.push_str(&rendered.join("\n\n"));
        self.emit_new_line(false)
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn header_line(text: &str) -> String {
    if text.is_empty() {
        "//".to_string()
    } else {
        format!("//  {}", text)
    }
}
