/// Shared configuration for the multitool crates
pub mod cli;
pub mod matrix;
pub mod ply;

pub use cli::{EXCLUDED_ENTRIES, OPTION_CHAR};
pub use matrix::{MATRIX_EXTENSION, MATRIX_STRIDE, OUTPUT_DIR};
pub use ply::{PLY_END_ATTRIBUTE, PLY_END_HEADER};
