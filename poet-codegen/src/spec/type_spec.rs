use std::collections::BTreeSet;

use indexmap::IndexMap;
use poet_core::{NameCase, cleaned};
use tracing::trace;

use super::{
    Construct, Declaration, FieldSpec, MethodSpec, Modifier, ParameterSpec, PoetSpec, SpecBuilder,
    TypeName,
};
use crate::builder::{CodeBlock, CodeWriter, Emitter};

/// A class, struct, enum, protocol or extension declaration.
///
/// # Example
///
/// ```
/// use poet_codegen::builder::Emitter;
/// use poet_codegen::spec::{Modifier, SpecBuilder, TypeSpec};
///
/// let spec = TypeSpec::enum_builder("test")
///     .description("This is a test enum")
///     .modifier(Modifier::Private)
///     .build();
///
/// assert_eq!(
///     spec.render(),
///     "/**\n    This is a test enum\n*/\nprivate enum Test {\n\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TypeSpec {
    declaration: Declaration,
    methods: Vec<MethodSpec>,
    fields: Vec<FieldSpec>,
    super_type: Option<TypeName>,
    protocols: Vec<TypeName>,
}

impl TypeSpec {
    pub fn builder(name: impl AsRef<str>, construct: Construct) -> TypeSpecBuilder {
        TypeSpecBuilder {
            declaration: Declaration::new(cleaned(name.as_ref(), NameCase::Type), construct),
            methods: IndexMap::new(),
            fields: IndexMap::new(),
            super_type: None,
            protocols: Vec::new(),
            default_init: construct == Construct::Struct,
        }
    }

    pub fn class_builder(name: impl AsRef<str>) -> TypeSpecBuilder {
        Self::builder(name, Construct::Class)
    }

    /// Structs get a memberwise `init` unless one is added explicitly or
    /// the builder opts out.
    pub fn struct_builder(name: impl AsRef<str>) -> TypeSpecBuilder {
        Self::builder(name, Construct::Struct)
    }

    pub fn enum_builder(name: impl AsRef<str>) -> TypeSpecBuilder {
        Self::builder(name, Construct::Enum)
    }

    pub fn protocol_builder(name: impl AsRef<str>) -> TypeSpecBuilder {
        Self::builder(name, Construct::Protocol)
    }

    pub fn extension_builder(name: impl AsRef<str>) -> TypeSpecBuilder {
        Self::builder(name, Construct::Extension)
    }

    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn super_type(&self) -> Option<&TypeName> {
        self.super_type.as_ref()
    }

    pub fn protocols(&self) -> &[TypeName] {
        &self.protocols
    }

    /// Look up a method by its normalized name.
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// Look up a field by its normalized name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

impl PoetSpec for TypeSpec {
    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.declaration.imports.clone();
        imports.extend(self.methods.iter().flat_map(|m| m.collect_imports()));
        imports.extend(self.fields.iter().flat_map(|f| f.collect_imports()));
        imports.extend(self.protocols.iter().flat_map(|p| p.collect_imports()));
        if let Some(super_type) = &self.super_type {
            imports.extend(super_type.collect_imports());
        }
        imports
    }
}

impl Emitter for TypeSpec {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        let construct = self.declaration.construct;

        writer.emit_type_documentation(self);
        writer.emit_modifiers(&self.declaration.modifiers);

        let head = CodeBlock::builder()
            .add_literal(construct)
            .add_literal(&self.declaration.name)
            .build();
        writer.emit_block(&head, false);
        writer.emit_inheritance(self.super_type.as_ref(), &self.protocols);
        writer.emit_begin_statement();
        writer.emit_new_line(false);

        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                writer.emit_new_line(false);
            }
            field.emit_in(writer, Some(construct));
        }

        if !self.methods.is_empty() {
            writer.emit_new_line(false);
        }
        for method in &self.methods {
            writer.emit_new_line(false);
            method.emit_in(writer, Some(construct));
            writer.emit_new_line(false);
        }

        writer.emit_end_statement()
    }
}

/// Accumulates members for a [`TypeSpec`].
///
/// Fields and methods are keyed by name: adding a second member with the
/// same name is ignored.
#[derive(Debug, Clone)]
pub struct TypeSpecBuilder {
    declaration: Declaration,
    methods: IndexMap<String, MethodSpec>,
    fields: IndexMap<String, FieldSpec>,
    super_type: Option<TypeName>,
    protocols: Vec<TypeName>,
    default_init: bool,
}

impl TypeSpecBuilder {
    pub fn super_type(mut self, super_type: TypeName) -> Self {
        self.super_type = Some(super_type);
        self
    }

    pub fn protocol(mut self, protocol: TypeName) -> Self {
        if self.protocols.contains(&protocol) {
            trace!(%protocol, "protocol already adopted");
        } else {
            self.protocols.push(protocol);
        }
        self
    }

    pub fn protocols(self, protocols: impl IntoIterator<Item = TypeName>) -> Self {
        protocols.into_iter().fold(self, Self::protocol)
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        let name = field.name().to_string();
        if self.fields.contains_key(&name) {
            trace!(field = %name, ty = %self.declaration.name, "duplicate field ignored");
        } else {
            self.fields.insert(name, field);
        }
        self
    }

    pub fn fields(self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        fields.into_iter().fold(self, Self::field)
    }

    pub fn method(mut self, method: MethodSpec) -> Self {
        let name = method.name().to_string();
        if self.methods.contains_key(&name) {
            trace!(method = %name, ty = %self.declaration.name, "duplicate method ignored");
        } else {
            self.methods.insert(name, method);
        }
        self
    }

    pub fn methods(self, methods: impl IntoIterator<Item = MethodSpec>) -> Self {
        methods.into_iter().fold(self, Self::method)
    }

    /// Do not synthesize a memberwise `init`.
    pub fn without_default_init(mut self) -> Self {
        self.default_init = false;
        self
    }

    pub fn build(&self) -> TypeSpec {
        let mut methods: Vec<MethodSpec> = self.methods.values().cloned().collect();
        if self.default_init && !self.methods.contains_key("init") {
            methods.push(self.default_init_method());
        }

        TypeSpec {
            declaration: self.declaration.clone(),
            methods,
            fields: self.fields.values().cloned().collect(),
            super_type: self.super_type.clone(),
            protocols: self.protocols.clone(),
        }
    }

    /// Memberwise initializer over every typed, non-static field that is
    /// exactly as visible as the type.
    fn default_init_method(&self) -> MethodSpec {
        let type_modifiers = &self.declaration.modifiers;
        let mut init = MethodSpec::builder("init");
        if let Some(access) = Modifier::access_level(type_modifiers) {
            init = init.modifier(access);
        }

        for field in self.fields.values() {
            let eligible = Modifier::equivalent_access_level(type_modifiers, field.modifiers())
                && !field.modifiers().contains(&Modifier::Static);
            let type_name = match field.type_name() {
                Some(type_name) if eligible => type_name,
                _ => {
                    trace!(field = %field.name(), "field left out of default init");
                    continue;
                }
            };

            let mut param = ParameterSpec::builder(field.name(), type_name.clone());
            if let Some(description) = field.description() {
                param = param.description(description);
            }
            init = init
                .parameter(param.build())
                .statement(format!("self.{0} = {0}", field.name()));
        }

        trace!(ty = %self.declaration.name, "synthesized default init");
        init.build()
    }
}

impl SpecBuilder for TypeSpecBuilder {
    fn declaration_mut(&mut self) -> &mut Declaration {
        &mut self.declaration
    }

    fn accepts_modifier(&self, modifier: Modifier) -> bool {
        self.declaration.construct.accepts_modifier(modifier)
    }
}
