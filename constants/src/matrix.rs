/// Samples per output row when re-bucketing a flat point list into a grid
pub const MATRIX_STRIDE: u32 = 104;

/// Relative directory all matrix dumps are written under
pub const OUTPUT_DIR: &str = "output";

/// Extension given to converted matrix files
pub const MATRIX_EXTENSION: &str = "dat";
