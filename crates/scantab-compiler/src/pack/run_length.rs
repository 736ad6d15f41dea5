use crate::syntax::{TargetSyntax, Type};

use super::{Codec, PackError, Record};

const MAX_COUNT: usize = 0xFFFF;

/// `(count, value)` pairs: `value` repeated `count` times.
///
/// Values are shifted by `translate` before packing so that small negative
/// values (`NO_TARGET`) land in the unit range; the generated routine shifts
/// them back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunLengthCodec {
    translate: i32,
}

impl RunLengthCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec packing `value + translate`. `1` admits values in `-1..=0xFFFE`.
    pub fn with_translation(translate: i32) -> Self {
        Self { translate }
    }

    pub fn translate(&self) -> i32 {
        self.translate
    }
}

impl Codec for RunLengthCodec {
    type Item = (usize, i32);
    type Value = i32;

    fn encode(
        &self,
        (count, value): (usize, i32),
        records: &mut Vec<Record>,
    ) -> Result<usize, PackError> {
        let shifted = i64::from(value) + i64::from(self.translate);
        let unit = u16::try_from(shifted).map_err(|_| PackError::ValueOutOfRange {
            value: i64::from(value),
            translate: self.translate,
        })?;

        let mut rest = count;
        while rest > MAX_COUNT {
            records.push([u16::MAX, unit]);
            rest -= MAX_COUNT;
        }
        if rest > 0 {
            records.push([rest as u16, unit]);
        }
        Ok(count)
    }

    fn decode_chunk(&self, units: &[u16], offset: usize, result: &mut [i32]) -> usize {
        let mut j = offset;
        for record in units.chunks_exact(2) {
            let count = usize::from(record[0]);
            let value = i32::from(record[1]) - self.translate;
            result[j..j + count].fill(value);
            j += count;
        }
        j
    }

    fn unpack_loop(&self, syntax: &dyn TargetSyntax) -> Vec<String> {
        let int = Type::Int;
        let mut lines = vec![
            syntax.statement(&syntax.local(true, &int, "count", "packed.charAt(i)")),
            syntax.statement("i += 1"),
            syntax.statement(&syntax.local(true, &int, "value", "packed.charAt(i)")),
            syntax.statement("i += 1"),
        ];
        match self.translate {
            0 => {}
            t if t > 0 => lines.push(syntax.statement(&format!("value -= {t}"))),
            t => lines.push(syntax.statement(&format!("value += {}", -i64::from(t)))),
        }
        lines.push(syntax.statement(&format!(
            "do {{ {} = value; j += 1; count -= 1; }} while (count > 0)",
            syntax.array_index("result", "j")
        )));
        lines
    }
}
