use crate::syntax::{TargetSyntax, Type, Visibility};

use super::PackConfig;

/// Room kept free in a chunk for one more two-unit record.
const RECORD_SLACK: usize = 6;

/// Modified-UTF-8 size of one unit in a class-file constant; `0` takes two bytes.
pub fn encoded_size(unit: u16) -> usize {
    match unit {
        0x0001..=0x007F => 1,
        0 | 0x0080..=0x07FF => 2,
        _ => 3,
    }
}

/// Name of the materialized array constant: `ZZ_` plus the upper-cased name.
pub fn const_name(name: &str) -> String {
    format!("ZZ_{}", name.to_uppercase())
}

/// Writes the chunked literal declarations of one named array.
pub struct ChunkWriter<'s> {
    name: String,
    syntax: &'s dyn TargetSyntax,
    config: PackConfig,
    out: String,
    /// Raw units of every opened chunk.
    chunks: Vec<Vec<u16>>,
    line_pos: usize,
    chunk_size: usize,
}

impl<'s> ChunkWriter<'s> {
    pub fn new(name: impl Into<String>, syntax: &'s dyn TargetSyntax, config: PackConfig) -> Self {
        Self {
            name: name.into(),
            syntax,
            config,
            out: String::new(),
            chunks: Vec::new(),
            line_pos: 0,
            chunk_size: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn syntax(&self) -> &'s dyn TargetSyntax {
        self.syntax
    }

    pub fn const_name(&self) -> String {
        const_name(&self.name)
    }

    /// Open chunk 0: its declaration and an empty literal.
    pub fn emit_init(&mut self) {
        self.open_chunk();
    }

    fn open_chunk(&mut self) {
        let decl = self.syntax.field(
            Visibility::Private,
            true,
            false,
            &Type::String,
            &format!("{}_PACKED_{}", self.const_name(), self.chunks.len()),
            "",
        );
        self.out.push('\n');
        self.out.push_str("  ");
        self.out.push_str(&decl);
        self.out.push('\n');
        self.out.push_str("    \"");
        self.chunks.push(Vec::new());
        self.line_pos = 0;
        self.chunk_size = 0;
    }

    /// Must precede every record: starts a new chunk when the current one is
    /// full, otherwise wraps the line once it holds `units_per_line` units.
    pub fn breaks(&mut self) {
        if self.chunk_size > 0 && self.chunk_size + RECORD_SLACK > self.config.max_chunk_size {
            log::debug!(
                "{}: chunk {} full at {} bytes",
                self.const_name(),
                self.chunks.len() - 1,
                self.chunk_size
            );
            self.out.push_str("\";\n");
            self.open_chunk();
        } else if self.line_pos >= self.config.units_per_line {
            self.out.push_str("\"+\n    \"");
            self.line_pos = 0;
        }
    }

    /// Escape one unit into the current literal.
    pub fn emit_unit(&mut self, unit: u16) {
        self.out.push_str(&self.syntax.unit_literal(unit));
        self.line_pos += 1;
        self.chunk_size += encoded_size(unit);
        match self.chunks.last_mut() {
            Some(chunk) => chunk.push(unit),
            None => self.chunks.push(vec![unit]),
        }
    }

    /// Declaration of the array constant, initialized by the array-level unpack routine.
    pub fn emit_unpack_call(&mut self, visibility: Visibility) {
        let decl = self.syntax.field(
            visibility,
            true,
            false,
            &Type::array_of(Type::Int),
            &self.const_name(),
            &format!("zzUnpack{}()", self.name),
        );
        self.out.push_str("  ");
        self.out.push_str(&self.syntax.statement(&decl));
        self.out.push('\n');
    }

    /// Close the last chunk's literal.
    pub fn close(&mut self) {
        self.out.push_str("\";\n");
    }

    /// Append already rendered lines (unpack routines) to the output.
    pub fn push_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn text(&self) -> &str {
        &self.out
    }

    pub fn into_parts(self) -> (String, Vec<Vec<u16>>) {
        (self.out, self.chunks)
    }
}
