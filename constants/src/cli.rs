/// Prefix character marking an option-like token
pub const OPTION_CHAR: char = '-';

/// Directory entry names the folder pass never converts
pub const EXCLUDED_ENTRIES: &[&str] = &[".", "..", "hclassic"];
