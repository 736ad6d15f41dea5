use crate::syntax::TargetSyntax;

use super::PackError;

/// Two packed units written as one unit of layout: lines and chunks never
/// split a record.
pub type Record = [u16; 2];

/// Encoding strategy of a packed array.
pub trait Codec {
    /// What callers push.
    type Item;

    /// Element type of the unpacked array.
    type Value: Copy + Default;

    /// Append the records for `item` and return how many array entries they
    /// expand to.
    fn encode(&self, item: Self::Item, records: &mut Vec<Record>) -> Result<usize, PackError>;

    /// Decode one chunk into `result` starting at `offset`; returns the offset
    /// after the last written entry.
    fn decode_chunk(&self, units: &[u16], offset: usize, result: &mut [Self::Value]) -> usize;

    /// Statements of the generated `while (i < l)` loop that decodes one record
    /// from `packed` into `result`, advancing `i` and `j`.
    fn unpack_loop(&self, syntax: &dyn TargetSyntax) -> Vec<String>;
}
