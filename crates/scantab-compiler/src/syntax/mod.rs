//! Target-language syntax.
//!
//! Emission never writes a keyword itself. It asks a `TargetSyntax` for
//! declarations, switches and literals, passing only semantic parameters
//! (visibility, mutability, element type, literal values), so one pipeline
//! drives every output language.

mod java;
mod scala;


pub use java::Java;
pub use scala::Scala;

use crate::{Error, Result};

/// Semantic element type of a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Int,
    Char,
    Boolean,
    String,
    Array(Box<Type>),
}

impl Type {
    pub fn array_of(element: Type) -> Self {
        Type::Array(Box::new(element))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

/// Renders generated-source fragments for one output language.
pub trait TargetSyntax {
    /// Short language name, as accepted by [`by_name`].
    fn name(&self) -> &'static str;

    /// File extension of generated sources.
    fn extension(&self) -> &'static str;

    fn type_name(&self, ty: &Type) -> String;

    /// Class-level constant or variable declaration, without terminator.
    fn field(
        &self,
        visibility: Visibility,
        is_static: bool,
        mutable: bool,
        ty: &Type,
        name: &str,
        initial: &str,
    ) -> String;

    /// Method parameter.
    fn formal(&self, ty: &Type, name: &str) -> String;

    /// Local variable declaration, without terminator.
    fn local(&self, mutable: bool, ty: &Type, name: &str, initial: &str) -> String;

    /// Header of a static helper method, up to (not including) the body brace.
    fn method_header(
        &self,
        visibility: Visibility,
        ret: &Type,
        name: &str,
        params: &[String],
    ) -> String;

    /// Terminate a statement that stands on its own line.
    fn statement(&self, stmt: &str) -> String;

    fn conditional(&self, cond: &str, if_true: &str, if_false: &str) -> String;

    fn new_array(&self, element: &Type, size: &str) -> String;

    fn array_index(&self, array: &str, index: &str) -> String;

    fn array_literal_start(&self, element: &Type) -> String;

    fn array_literal_stop(&self) -> String;

    fn switch_header(&self, expr: &str) -> String;

    /// First label of a case group.
    fn start_case(&self, value: &str) -> String;

    /// Every further label of the same case group.
    fn add_case(&self, value: &str) -> String;

    /// Label value covering `lo..=hi` at once, for languages with range labels.
    fn case_range(&self, lo: u32, hi: u32) -> Option<String> {
        let _ = (lo, hi);
        None
    }

    fn gen_default(&self) -> String;

    fn start_case_body(&self) -> String;

    /// Closes a case body whose last statement is always a jump.
    fn end_case_body(&self) -> String;

    fn start_label_block(&self, name: &str) -> String;

    fn break_block(&self, name: &str) -> String;

    fn end_label_block(&self, name: &str) -> String;

    /// One packed 16-bit unit inside a string literal.
    ///
    /// Defaults to `\uXXXX` above 255 and an unpadded octal escape otherwise.
    fn unit_literal(&self, unit: u16) -> String {
        if unit > 255 {
            format!("\\u{unit:04x}")
        } else {
            format!("\\{unit:o}")
        }
    }
}

static JAVA: Java = Java;
static SCALA: Scala = Scala;

/// Every built-in syntax, in lookup order.
pub fn all() -> [&'static dyn TargetSyntax; 2] {
    [&JAVA, &SCALA]
}

/// Look up a built-in syntax by language name or file extension.
pub fn by_name(name: &str) -> Result<&'static dyn TargetSyntax> {
    all()
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(name) || s.extension() == name)
        .ok_or_else(|| Error::UnknownSyntax(name.to_string()))
}
