use std::collections::BTreeSet;

use poet_core::{NameCase, cleaned, escape_reserved};

use super::{Construct, Declaration, PoetSpec, SpecBuilder, TypeName};
use crate::builder::{CodeBlock, CodeBlockBuilder, CodeWriter, Emitter, Instruction};

/// A stored or computed property, or an enum case.
///
/// How a field renders depends on the construct that owns it:
///
/// | parent     | output |
/// |------------|--------|
/// | `enum`     | `case name = initializer` |
/// | `protocol` | `var name: Type { get }` |
/// | otherwise  | `let name: Type = initializer` |
#[derive(Debug, Clone)]
pub struct FieldSpec {
    declaration: Declaration,
    type_name: Option<TypeName>,
    initializer: Option<CodeBlock>,
    computed: bool,
    parent_type: Option<Construct>,
}

impl FieldSpec {
    /// Start an immutable (`let`) field.
    pub fn builder(name: impl AsRef<str>) -> FieldSpecBuilder {
        let name = escape_reserved(&cleaned(name.as_ref(), NameCase::Param));
        FieldSpecBuilder {
            declaration: Declaration::new(name, Construct::Field),
            type_name: None,
            initializer: None,
            computed: false,
            parent_type: None,
        }
    }

    pub fn type_name(&self) -> Option<&TypeName> {
        self.type_name.as_ref()
    }

    pub fn initializer(&self) -> Option<&CodeBlock> {
        self.initializer.as_ref()
    }

    pub fn is_mutable(&self) -> bool {
        self.declaration.construct == Construct::MutableParam
    }

    /// Parent hint used when the field is rendered on its own.
    pub fn parent_type(&self) -> Option<Construct> {
        self.parent_type
    }

    /// Whether the initializer renders as a getter body rather than
    /// `= value`. A mutable field with an initializer inside an enum can
    /// only be computed.
    pub fn is_computed_in(&self, parent: Option<Construct>) -> bool {
        self.computed
            || (self.is_mutable()
                && self.initializer.is_some()
                && parent == Some(Construct::Enum))
    }

    /// Render as a member of `parent`.
    pub fn emit_in<'w>(
        &self,
        writer: &'w mut CodeWriter,
        parent: Option<Construct>,
    ) -> &'w mut CodeWriter {
        writer.emit_field_documentation(self);

        match parent {
            Some(Construct::Enum) if !self.is_mutable() => {
                let block = CodeBlock::builder()
                    .add_literal("case")
                    .add_literal(&self.declaration.name)
                    .when(self.initializer.is_some(), |b| self.add_assignment(b))
                    .build();
                writer.emit_block(&block, true)
            }
            Some(Construct::Protocol) => {
                writer.emit_modifiers(&self.declaration.modifiers);
                let accessors = if self.is_mutable() {
                    "{ get set }"
                } else {
                    "{ get }"
                };
                let block = self
                    .signature(Construct::MutableParam)
                    .add_literal(accessors)
                    .build();
                writer.emit_block(&block, false)
            }
            _ => {
                writer.emit_modifiers(&self.declaration.modifiers);
                let signature = self.signature(self.declaration.construct);
                let block = match &self.initializer {
                    Some(initializer) if self.is_computed_in(parent) => signature
                        .add(Instruction::BeginStatement)
                        .add_block(initializer.clone())
                        .add(Instruction::EndStatement)
                        .build(),
                    Some(_) => self.add_assignment(signature).build(),
                    None => signature.build(),
                };
                writer.emit_block(&block, false)
            }
        }
    }

    /// `keyword name: Type`
    fn signature(&self, keyword: Construct) -> CodeBlockBuilder {
        let builder = CodeBlock::builder()
            .add_literal(keyword)
            .add_literal(&self.declaration.name);
        match &self.type_name {
            Some(type_name) => builder.add_literal_trimmed(":").add_literal(type_name),
            None => builder,
        }
    }

    /// `= initializer`, with the initializer's instructions spliced in.
    fn add_assignment(&self, builder: CodeBlockBuilder) -> CodeBlockBuilder {
        match &self.initializer {
            Some(initializer) => builder
                .add_literal("=")
                .add_objects(initializer.instructions()),
            None => builder,
        }
    }
}

impl PoetSpec for FieldSpec {
    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.declaration.imports.clone();
        if let Some(type_name) = &self.type_name {
            imports.extend(type_name.collect_imports());
        }
        imports
    }
}

impl Emitter for FieldSpec {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        self.emit_in(writer, self.parent_type)
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpecBuilder {
    declaration: Declaration,
    type_name: Option<TypeName>,
    initializer: Option<CodeBlock>,
    computed: bool,
    parent_type: Option<Construct>,
}

impl FieldSpecBuilder {
    pub fn type_name(mut self, type_name: TypeName) -> Self {
        self.type_name = Some(type_name);
        self
    }

    /// Declare the field `var`.
    pub fn mutable(mut self) -> Self {
        self.declaration.construct = Construct::MutableParam;
        self
    }

    /// Value for a stored field, raw value for an enum case, or getter body
    /// for a computed field.
    pub fn initializer(mut self, initializer: impl Into<CodeBlock>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    /// Render the initializer as a getter body.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Parent hint for standalone rendering. A type that owns the field
    /// passes its own construct instead.
    pub fn parent_type(mut self, parent: Construct) -> Self {
        self.parent_type = Some(parent);
        self
    }

    pub fn build(&self) -> FieldSpec {
        FieldSpec {
            declaration: self.declaration.clone(),
            type_name: self.type_name.clone(),
            initializer: self.initializer.clone(),
            computed: self.computed,
            parent_type: self.parent_type,
        }
    }
}

impl SpecBuilder for FieldSpecBuilder {
    fn declaration_mut(&mut self) -> &mut Declaration {
        &mut self.declaration
    }
}
