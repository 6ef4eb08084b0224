//! The two capabilities a value needs to be placed into output.

use std::fmt::Debug;

use super::CodeWriter;

/// A value with an exact textual form.
pub trait Literal {
    fn literal_value(&self) -> String;
}

impl Literal for str {
    fn literal_value(&self) -> String {
        self.to_string()
    }
}

impl Literal for String {
    fn literal_value(&self) -> String {
        self.clone()
    }
}

impl<T: Literal + ?Sized> Literal for &T {
    fn literal_value(&self) -> String {
        (*self).literal_value()
    }
}

/// A node that streams itself into a [`CodeWriter`].
///
/// Emitters are immutable once built and may be shared across threads, each
/// thread rendering into its own writer.
pub trait Emitter: Debug + Send + Sync {
    /// Render into `writer`, returning it for chaining.
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter;

    /// Render into a fresh default writer and return the text.
    fn render(&self) -> String {
        let mut writer = CodeWriter::new();
        self.emit(&mut writer);
        writer.into_string()
    }
}

impl<T: Emitter + ?Sized> Emitter for Box<T> {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        self.as_ref().emit(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literals() {
        assert_eq!("self".literal_value(), "self");
        assert_eq!(String::from("x").literal_value(), "x");
        assert_eq!((&"y").literal_value(), "y");
    }
}
