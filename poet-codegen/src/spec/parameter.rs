use std::collections::BTreeSet;

use poet_core::{NameCase, cleaned, escape_reserved};

use super::{Construct, Declaration, PoetSpec, SpecBuilder, TypeName};
use crate::builder::{CodeBlock, CodeWriter, Emitter};

/// A method or initializer parameter: `name: Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    declaration: Declaration,
    type_name: TypeName,
}

impl ParameterSpec {
    pub fn builder(name: impl AsRef<str>, type_name: TypeName) -> ParameterSpecBuilder {
        let name = escape_reserved(&cleaned(name.as_ref(), NameCase::Param));
        ParameterSpecBuilder {
            declaration: Declaration::new(name, Construct::Param),
            type_name,
        }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn is_mutable(&self) -> bool {
        self.declaration.construct == Construct::MutableParam
    }
}

impl PoetSpec for ParameterSpec {
    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn collect_imports(&self) -> BTreeSet<String> {
        self.declaration
            .imports
            .union(&self.type_name.collect_imports())
            .cloned()
            .collect()
    }
}

impl Emitter for ParameterSpec {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        let block = CodeBlock::builder()
            .when(self.is_mutable(), |b| b.add_literal(Construct::MutableParam))
            .add_literal(&self.declaration.name)
            .add_literal_trimmed(":")
            .add_literal(&self.type_name)
            .build();
        writer.emit_block(&block, false)
    }
}

#[derive(Debug, Clone)]
pub struct ParameterSpecBuilder {
    declaration: Declaration,
    type_name: TypeName,
}

impl ParameterSpecBuilder {
    /// Declare the parameter `var`.
    pub fn mutable(mut self) -> Self {
        self.declaration.construct = Construct::MutableParam;
        self
    }

    pub fn build(&self) -> ParameterSpec {
        ParameterSpec {
            declaration: self.declaration.clone(),
            type_name: self.type_name.clone(),
        }
    }
}

impl SpecBuilder for ParameterSpecBuilder {
    fn declaration_mut(&mut self) -> &mut Declaration {
        &mut self.declaration
    }
}
