use crate::syntax::{TargetSyntax, Type, Visibility};

use super::{ChunkWriter, Codec, PackConfig, PackError, Record, const_name};

/// Packed array under construction.
pub struct PackedArray<'s, C: Codec> {
    codec: C,
    writer: ChunkWriter<'s>,
    visibility: Visibility,
    num_entries: usize,
    scratch: Vec<Record>,
}

impl<'s, C: Codec> PackedArray<'s, C> {
    /// Start a packed array; chunk 0 is opened immediately.
    pub fn new(
        name: impl Into<String>,
        codec: C,
        syntax: &'s dyn TargetSyntax,
        config: PackConfig,
    ) -> Self {
        let mut writer = ChunkWriter::new(name, syntax, config);
        writer.emit_init();
        Self {
            codec,
            writer,
            visibility: Visibility::Private,
            num_entries: 0,
            scratch: Vec::new(),
        }
    }

    /// Visibility of the materialized array constant.
    pub fn visibility(mut self, value: Visibility) -> Self {
        self.visibility = value;
        self
    }

    pub fn num_entries(&self) -> usize {
        self.num_entries
    }

    pub fn push(&mut self, item: C::Item) -> Result<(), PackError> {
        self.scratch.clear();
        self.num_entries += self.codec.encode(item, &mut self.scratch)?;
        for record in &self.scratch {
            log::trace!("{}: record {:?}", self.writer.name(), record);
            self.writer.breaks();
            for &unit in record {
                self.writer.emit_unit(unit);
            }
        }
        Ok(())
    }

    /// Close the last chunk and append the unpack routines and the
    /// materialized constant.
    pub fn finish(mut self) -> Packed {
        self.writer.close();
        let routines = self.unpack_routines();
        self.writer.push_str(&routines);
        self.writer.emit_unpack_call(self.visibility);

        let name = self.writer.name().to_string();
        let (text, chunks) = self.writer.into_parts();
        log::debug!(
            "{name}: {} entries in {} chunk(s)",
            self.num_entries,
            chunks.len()
        );
        Packed {
            name,
            text,
            chunks,
            num_entries: self.num_entries,
        }
    }

    fn unpack_routines(&self) -> String {
        let s = self.writer.syntax();
        let name = self.writer.name();
        let const_name = self.writer.const_name();
        let int = Type::Int;
        let int_array = Type::array_of(Type::Int);
        let method = format!("zzUnpack{name}");

        let mut out = String::from("\n");
        let mut line = |indent: usize, text: &str| {
            out.push_str(&" ".repeat(indent));
            out.push_str(text);
            out.push('\n');
        };

        line(
            2,
            &format!(
                "{} {{",
                s.method_header(Visibility::Private, &int_array, &method, &[])
            ),
        );
        line(
            4,
            &s.statement(&s.local(
                false,
                &int_array,
                "result",
                &s.new_array(&int, &self.num_entries.to_string()),
            )),
        );
        line(4, &s.statement(&s.local(true, &int, "offset", "0")));
        for i in 0..self.writer.chunk_count() {
            line(
                4,
                &s.statement(&format!(
                    "offset = {method}({const_name}_PACKED_{i}, offset, result)"
                )),
            );
        }
        line(4, &s.statement("return result"));
        line(2, "}");
        line(0, "");

        let params = [
            s.formal(&Type::String, "packed"),
            s.formal(&int, "offset"),
            s.formal(&int_array, "result"),
        ];
        line(
            2,
            &format!("{} {{", s.method_header(Visibility::Private, &int, &method, &params)),
        );
        line(4, &s.statement(&s.local(true, &int, "i", "0")));
        line(4, &s.statement(&s.local(true, &int, "j", "offset")));
        line(4, &s.statement(&s.local(false, &int, "l", "packed.length()")));
        line(4, "while (i < l) {");
        for stmt in self.codec.unpack_loop(s) {
            line(6, &stmt);
        }
        line(4, "}");
        line(4, &s.statement("return j"));
        line(2, "}");
        line(0, "");
        out
    }
}

/// Finished packed array: generated text plus the raw units of every chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packed {
    pub name: String,
    pub text: String,
    pub chunks: Vec<Vec<u16>>,
    pub num_entries: usize,
}

impl Packed {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn const_name(&self) -> String {
        const_name(&self.name)
    }

    /// Rebuild the array the generated routine would produce.
    pub fn unpack<C: Codec>(&self, codec: &C) -> Vec<C::Value> {
        unpack(codec, &self.chunks, self.num_entries)
    }
}

/// Array-level decode: chunks in order, threading the running offset.
pub fn unpack<C: Codec>(codec: &C, chunks: &[Vec<u16>], num_entries: usize) -> Vec<C::Value> {
    let mut result = vec![C::Value::default(); num_entries];
    let mut offset = 0;
    for chunk in chunks {
        offset = codec.decode_chunk(chunk, offset, &mut result);
    }
    debug_assert_eq!(offset, num_entries, "decoded length differs from packed entries");
    result
}
