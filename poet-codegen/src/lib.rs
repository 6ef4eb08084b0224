//! Declaration specs, code fragments and the writer that renders them.
//!
//! Build an immutable spec tree with builders, then render it with
//! [`Emitter::render`](builder::Emitter::render) or into a configured
//! [`CodeWriter`](builder::CodeWriter).
//!
//! # Module Organization
//!
//! - [`builder`] - Fragments, control flow, comparisons and the writer (CodeBlock, CodeWriter, etc.)
//! - [`spec`] - Declarations (TypeSpec, FieldSpec, MethodSpec, ParameterSpec, etc.)
//! - [`file`] - File headers and packaging specs into a source file (FileHeader, SourceFile)

pub mod builder;
pub mod file;
pub mod spec;
