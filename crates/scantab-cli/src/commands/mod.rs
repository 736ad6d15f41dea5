pub mod emit;
pub mod error;
pub mod input;
pub mod stats;

#[cfg(test)]
mod emit_tests;
#[cfg(test)]
mod input_tests;
