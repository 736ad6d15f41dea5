//! Duplicate row and column elimination.
//!
//! Columns are reduced first. Row comparison then only looks at surviving
//! columns, and everything downstream reads cells through both maps.

mod reducer;


pub use reducer::{Reduction, compact, reduce_columns, reduce_rows};
