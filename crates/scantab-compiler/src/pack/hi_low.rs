use crate::syntax::{TargetSyntax, Type};

use super::{Codec, PackError, Record};

/// Full 32-bit values as a high unit followed by a low unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HiLowCodec;

impl Codec for HiLowCodec {
    type Item = u32;
    type Value = u32;

    fn encode(&self, value: u32, records: &mut Vec<Record>) -> Result<usize, PackError> {
        records.push([(value >> 16) as u16, (value & 0xFFFF) as u16]);
        Ok(1)
    }

    fn decode_chunk(&self, units: &[u16], offset: usize, result: &mut [u32]) -> usize {
        let mut j = offset;
        for record in units.chunks_exact(2) {
            result[j] = (u32::from(record[0]) << 16) | u32::from(record[1]);
            j += 1;
        }
        j
    }

    fn unpack_loop(&self, syntax: &dyn TargetSyntax) -> Vec<String> {
        vec![
            syntax.statement(&syntax.local(
                false,
                &Type::Int,
                "high",
                "packed.charAt(i) << 16",
            )),
            syntax.statement("i += 1"),
            syntax.statement(&format!(
                "{} = high | packed.charAt(i)",
                syntax.array_index("result", "j")
            )),
            syntax.statement("i += 1"),
            syntax.statement("j += 1"),
        ]
    }
}
