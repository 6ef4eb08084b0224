//! Packaging top-level specs into a source file.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use poet_core::{FileRules, GeneratedFile};

use crate::{builder::CodeWriter, spec::PoetSpec};

/// Options for the banner comment at the top of a generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHeader {
    /// File stem; the configured extension is appended.
    pub file_name: Option<String>,
    /// Framework name, type-case normalized when rendered.
    pub framework: Option<String>,
    /// Free-text line, e.g. the schema a file was generated from.
    pub generator_info: Option<String>,
    /// Overrides the writer's `add_generation_date` default.
    pub add_generation_date: Option<bool>,
}

impl FileHeader {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            ..Self::default()
        }
    }

    pub fn framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    pub fn generator_info(mut self, info: impl Into<String>) -> Self {
        self.generator_info = Some(info.into());
        self
    }

    pub fn with_generation_date(mut self) -> Self {
        self.add_generation_date = Some(true);
        self
    }

    pub fn without_generation_date(mut self) -> Self {
        self.add_generation_date = Some(false);
        self
    }
}

/// A header, the union of the specs' imports, then the specs themselves.
///
/// # Example
///
/// ```
/// use poet_codegen::{
///     file::{FileHeader, SourceFile},
///     spec::{TypeName, TypeSpec},
/// };
/// use poet_core::GeneratedFile;
///
/// let file = SourceFile::new(FileHeader::new("Marker").without_generation_date())
///     .spec(TypeSpec::protocol_builder("marker").protocol(TypeName::new("Sendable")).build());
///
/// assert!(file.render().ends_with("protocol Marker: Sendable {\n\n}\n"));
/// ```
#[derive(Debug)]
pub struct SourceFile {
    header: FileHeader,
    specs: Vec<Box<dyn PoetSpec>>,
    writer: CodeWriter,
    rules: FileRules,
}

impl SourceFile {
    pub fn new(header: FileHeader) -> Self {
        Self {
            header,
            specs: Vec::new(),
            writer: CodeWriter::new(),
            rules: FileRules::default(),
        }
    }

    pub fn spec(mut self, spec: impl PoetSpec + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    /// Writer whose conventions (config, clock, modifier order) are used
    /// for rendering. Its contents are ignored.
    pub fn writer(mut self, writer: CodeWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn specs(&self) -> impl Iterator<Item = &dyn PoetSpec> {
        self.specs.iter().map(|spec| spec.as_ref())
    }

    /// Union of every spec's transitive imports.
    pub fn collect_imports(&self) -> BTreeSet<String> {
        self.specs().flat_map(|spec| spec.collect_imports()).collect()
    }

    /// File stem on disk: the header's file name, else the first spec's name.
    pub fn stem(&self) -> &str {
        self.header
            .file_name
            .as_deref()
            .or_else(|| self.specs.first().map(|spec| spec.name()))
            .unwrap_or("Generated")
    }

    /// Framework line of the header: the header's own, else the first spec's.
    pub fn framework(&self) -> Option<&str> {
        self.header
            .framework
            .as_deref()
            .or_else(|| self.specs.first().and_then(|spec| spec.framework()))
    }
}

impl GeneratedFile for SourceFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.writer.config().file_name(self.stem()))
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        let header = FileHeader {
            framework: self.framework().map(str::to_string),
            ..self.header.clone()
        };
        let mut writer = self.writer.fresh();
        writer
            .emit_file_header(&header, self.specs())
            .emit_imports(&self.collect_imports())
            .emit_specs(self.specs.iter());
        writer.into_string()
    }
}
