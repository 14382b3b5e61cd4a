//! Small console multitool: manual option parsing plus ASCII PLY to
//! matrix file conversion over a whole source folder.

pub mod converter;
pub mod error;
pub mod folder;
pub mod options;

pub use error::{Error, Result};
