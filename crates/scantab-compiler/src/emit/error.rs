use crate::pack::PackError;

/// Errors that abort emission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// The partition has more classes than the matrix has columns.
    #[error("character class {class} has no column in a matrix of {num_classes} classes")]
    ClassOutOfRange { class: u32, num_classes: usize },

    #[error("row offset {offset} of state {state} does not fit in 32 bits")]
    RowOffsetOverflow { state: usize, offset: usize },

    #[error("cannot pack {array}: {source}")]
    Pack {
        array: String,
        #[source]
        source: PackError,
    },
}
