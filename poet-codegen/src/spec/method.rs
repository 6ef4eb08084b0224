use std::collections::BTreeSet;

use poet_core::{NameCase, cleaned};

use super::{Construct, Declaration, Modifier, ModifierSet, ParameterSpec, PoetSpec, SpecBuilder, TypeName};
use crate::builder::{CodeBlock, CodeBlockBuilder, CodeWriter, Emitter, Literal};

/// A function or initializer.
///
/// The body is a statement list: each statement is either a nested block or
/// a code line, so every statement starts on its own line.
#[derive(Debug, Clone)]
pub struct MethodSpec {
    declaration: Declaration,
    parameters: Vec<ParameterSpec>,
    return_type: Option<TypeName>,
    body: CodeBlock,
    parent_type: Option<Construct>,
}

impl MethodSpec {
    pub fn builder(name: impl AsRef<str>) -> MethodSpecBuilder {
        MethodSpecBuilder {
            declaration: Declaration::new(cleaned(name.as_ref(), NameCase::Param), Construct::Method),
            parameters: Vec::new(),
            return_type: None,
            body: CodeBlock::builder(),
            parent_type: None,
        }
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_type.as_ref()
    }

    pub fn body(&self) -> &CodeBlock {
        &self.body
    }

    pub fn parent_type(&self) -> Option<Construct> {
        self.parent_type
    }

    /// Initializers are declared without `func`.
    pub fn is_init(&self) -> bool {
        self.declaration.name == "init"
    }

    /// Render as a member of `parent`. Protocol requirements stop after the
    /// signature.
    pub fn emit_in<'w>(
        &self,
        writer: &'w mut CodeWriter,
        parent: Option<Construct>,
    ) -> &'w mut CodeWriter {
        writer.emit_method_documentation(self);

        let prefix: ModifierSet = self
            .declaration
            .modifiers
            .iter()
            .copied()
            .filter(|m| !m.is_effect())
            .collect();
        writer.emit_modifiers(&prefix);

        let parameters = self
            .parameters
            .iter()
            .map(|param| {
                let mut inner = writer.fresh();
                param.emit(&mut inner);
                inner.into_string()
            })
            .collect::<Vec<_>>()
            .join(", ");

        let effects = self
            .declaration
            .modifiers
            .iter()
            .copied()
            .filter(Modifier::is_effect);

        let signature = CodeBlock::builder()
            .when(!self.is_init(), |b| b.add_literal(Construct::Method))
            .add_literal(&self.declaration.name)
            .add_literal_trimmed(format!("({})", parameters))
            .each(effects, |b, effect| b.add_literal(effect))
            .when(self.return_type.is_some(), |b| match &self.return_type {
                Some(return_type) => b.add_literal("->").add_literal(return_type.literal_value()),
                None => b,
            })
            .build();
        writer.emit_block(&signature, false);

        if parent == Some(Construct::Protocol) {
            return writer;
        }

        writer.emit_begin_statement();
        writer.emit_block(&self.body, false);
        writer.emit_end_statement()
    }
}

impl PoetSpec for MethodSpec {
    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.declaration.imports.clone();
        for param in &self.parameters {
            imports.extend(param.collect_imports());
        }
        if let Some(return_type) = &self.return_type {
            imports.extend(return_type.collect_imports());
        }
        imports
    }
}

impl Emitter for MethodSpec {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        self.emit_in(writer, self.parent_type)
    }
}

#[derive(Debug, Clone)]
pub struct MethodSpecBuilder {
    declaration: Declaration,
    parameters: Vec<ParameterSpec>,
    return_type: Option<TypeName>,
    body: CodeBlockBuilder,
    parent_type: Option<Construct>,
}

impl MethodSpecBuilder {
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = ParameterSpec>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn return_type(mut self, return_type: TypeName) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Append a statement. It renders on its own line, one level deeper
    /// than the signature.
    pub fn statement(mut self, statement: impl Into<CodeBlock>) -> Self {
        self.body = self.body.add_block(statement.into());
        self
    }

    /// Append a single-line statement.
    pub fn code_line(mut self, line: impl Literal) -> Self {
        self.body = self.body.add_code_line(line);
        self
    }

    /// Splice raw instructions into the body.
    pub fn code(mut self, block: &CodeBlock) -> Self {
        self.body = self.body.add_objects(block.instructions());
        self
    }

    pub fn parent_type(mut self, parent: Construct) -> Self {
        self.parent_type = Some(parent);
        self
    }

    pub fn build(&self) -> MethodSpec {
        MethodSpec {
            declaration: self.declaration.clone(),
            parameters: self.parameters.clone(),
            return_type: self.return_type.clone(),
            body: self.body.build(),
            parent_type: self.parent_type,
        }
    }
}

impl SpecBuilder for MethodSpecBuilder {
    fn declaration_mut(&mut self) -> &mut Declaration {
        &mut self.declaration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Comparator, ComparisonList, control_flow};

    #[test]
    fn test_public_static_method_modifiers() {
        let method = MethodSpec::builder("test")
            .modifier(Modifier::Static)
            .return_type(TypeName::string())
            .modifier(Modifier::Public)
            .build();
        assert_eq!(method.render(), "public static func test() -> String {\n}");
    }

    #[test]
    fn test_override_method_modifiers() {
        let method = MethodSpec::builder("test")
            .modifier(Modifier::Static)
            .modifier(Modifier::Public)
            .return_type(TypeName::string())
            .modifier(Modifier::Override)
            .build();
        assert_eq!(
            method.render(),
            "public override static func test() -> String {\n}"
        );
    }

    #[test]
    fn test_init_method_modifiers() {
        let method = MethodSpec::builder("init")
            .modifier(Modifier::Required)
            .modifier(Modifier::Public)
            .modifier(Modifier::Convenience)
            .build();
        assert_eq!(method.render(), "public required convenience init() {\n}");
    }

    #[test]
    fn test_throws_after_parameters() {
        let method = MethodSpec::builder("load")
            .modifier(Modifier::Throws)
            .modifier(Modifier::Public)
            .code_line("try read()")
            .build();
        assert_eq!(
            method.render(),
            "public func load() throws {\n    try read()\n}"
        );
    }

    #[test]
    fn test_statements_and_parameters() {
        let check = control_flow::guard_block(
            Some(ComparisonList::new("value", Comparator::GreaterThan, "0")),
            || CodeBlock::of("return nil"),
        );
        let method = MethodSpec::builder("scaled")
            .parameter(ParameterSpec::builder("value", TypeName::double()).build())
            .return_type(TypeName::double().optional())
            .statement(check)
            .statement("return value * 2")
            .build();

        let mut writer = CodeWriter::new();
        method.emit_in(&mut writer, None);
        assert_eq!(
            writer.out(),
            "/**\n\
             \x20   - Parameters:\n\
             \n\
             \x20     - value\n\
             */\n\
             func scaled(value: Double) -> Double? {\n\
             \x20   guard value > 0 else {\n\
             \x20       return nil\n\
             \x20   }\n\
             \x20   return value * 2\n\
             }"
        );
    }

    #[test]
    fn test_protocol_requirement_has_no_body() {
        let method = MethodSpec::builder("refresh")
            .return_type(TypeName::boolean())
            .parent_type(Construct::Protocol)
            .build();
        assert_eq!(method.render(), "func refresh() -> Bool");
    }

    #[test]
    fn test_collect_imports() {
        let method = MethodSpec::builder("at")
            .parameter(ParameterSpec::builder("url", TypeName::url()).build())
            .return_type(TypeName::new("Image").with_import("UIKit"))
            .build();
        let imports: Vec<_> = method.collect_imports().into_iter().collect();
        assert_eq!(imports, vec!["Foundation", "UIKit"]);
    }
}
