//! Immutable declaration specs and their builders.
//!
//! Every spec is produced by a builder and is frozen once built. Types own
//! their fields and methods; members only learn their parent's
//! [`Construct`] at render time, through `emit_in`.

mod construct;
mod field;
mod method;
mod modifier;
mod parameter;
mod type_name;
mod type_spec;

use std::collections::BTreeSet;

use poet_core::{NameCase, cleaned};
use tracing::trace;

pub use construct::Construct;
pub use field::{FieldSpec, FieldSpecBuilder};
pub use method::{MethodSpec, MethodSpecBuilder};
pub use modifier::{Modifier, ModifierSet};
pub use parameter::{ParameterSpec, ParameterSpecBuilder};
pub use type_name::TypeName;
pub use type_spec::{TypeSpec, TypeSpecBuilder};

use crate::builder::Emitter;

/// Data shared by every declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Case-normalized name.
    pub name: String,
    pub construct: Construct,
    pub modifiers: ModifierSet,
    pub description: Option<String>,
    /// Owning framework, type-case normalized.
    pub framework: Option<String>,
    pub imports: BTreeSet<String>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, construct: Construct) -> Self {
        Self {
            name: name.into(),
            construct,
            modifiers: ModifierSet::new(),
            description: None,
            framework: None,
            imports: BTreeSet::new(),
        }
    }
}

/// A built declaration.
pub trait PoetSpec: Emitter {
    fn declaration(&self) -> &Declaration;

    /// Union of this spec's imports and those of everything it references.
    fn collect_imports(&self) -> BTreeSet<String>;

    fn name(&self) -> &str {
        &self.declaration().name
    }

    fn construct(&self) -> Construct {
        self.declaration().construct
    }

    fn modifiers(&self) -> &ModifierSet {
        &self.declaration().modifiers
    }

    fn description(&self) -> Option<&str> {
        self.declaration().description.as_deref()
    }

    fn framework(&self) -> Option<&str> {
        self.declaration().framework.as_deref()
    }

    fn imports(&self) -> &BTreeSet<String> {
        &self.declaration().imports
    }
}

/// Chainable setters common to every spec builder.
pub trait SpecBuilder: Sized {
    fn declaration_mut(&mut self) -> &mut Declaration;

    /// Whether `modifier` may be placed on this declaration. Rejected
    /// modifiers are dropped.
    fn accepts_modifier(&self, _modifier: Modifier) -> bool {
        true
    }

    fn modifier(mut self, modifier: Modifier) -> Self {
        if self.accepts_modifier(modifier) {
            self.declaration_mut().modifiers.insert(modifier);
        } else {
            trace!(%modifier, name = %self.declaration_mut().name, "dropping modifier");
        }
        self
    }

    fn modifiers(self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        modifiers.into_iter().fold(self, Self::modifier)
    }

    fn description(mut self, description: impl Into<String>) -> Self {
        self.declaration_mut().description = Some(description.into());
        self
    }

    fn framework(mut self, framework: impl AsRef<str>) -> Self {
        self.declaration_mut().framework = Some(cleaned(framework.as_ref(), NameCase::Type));
        self
    }

    fn import(mut self, import: impl Into<String>) -> Self {
        let import = import.into();
        if !self.declaration_mut().imports.insert(import.clone()) {
            trace!(%import, "import already present");
        }
        self
    }

    fn imports<I>(self, imports: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<String>,
    {
        imports.into_iter().fold(self, |builder, import| builder.import(import))
    }
}
