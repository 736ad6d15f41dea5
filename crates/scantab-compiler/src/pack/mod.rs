//! Packed string-literal arrays.
//!
//! Integer arrays are serialized as 16-bit units inside string literals and
//! rebuilt by generated unpack routines at class-load time. The literal is
//! split into numbered chunks so no single constant exceeds the host
//! constant-pool limit; chunks decode in order, each continuing at the offset
//! where the previous one stopped.
//!
//! `ChunkWriter` owns layout (escaping, line wrapping, chunking). A `Codec`
//! decides how items become two-unit records and how the generated routine
//! reads them back.

mod codec;
mod config;
mod hi_low;
mod packed;
mod run_length;
mod writer;

#[cfg(test)]
mod hi_low_tests;

pub use codec::{Codec, Record};
pub use config::{DEFAULT_MAX_CHUNK_SIZE, DEFAULT_UNITS_PER_LINE, PackConfig};
pub use hi_low::HiLowCodec;
pub use packed::{Packed, PackedArray, unpack};
pub use run_length::RunLengthCodec;
pub use writer::{ChunkWriter, const_name, encoded_size};

/// Errors raised while packing values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    /// The translated value does not fit in one 16-bit unit.
    #[error("value {value} (translated by {translate}) does not fit in a packed unit")]
    ValueOutOfRange { value: i64, translate: i32 },
}
