//! Packing limits.

/// Units written on one source line before the literal is continued.
pub const DEFAULT_UNITS_PER_LINE: usize = 16;

/// Constant-pool limit on the modified-UTF-8 size of one string constant.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 0xFFFF;

/// Per-array packing configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackConfig {
    pub(crate) units_per_line: usize,
    pub(crate) max_chunk_size: usize,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            units_per_line: DEFAULT_UNITS_PER_LINE,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

impl PackConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many units go on one line before wrapping.
    pub fn units_per_line(mut self, value: usize) -> Self {
        self.units_per_line = value.max(1);
        self
    }

    /// Set the size limit of one chunk, in modified-UTF-8 bytes.
    pub fn max_chunk_size(mut self, value: usize) -> Self {
        self.max_chunk_size = value;
        self
    }
}
