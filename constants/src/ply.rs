/// Marker substring ending the ASCII PLY-like header section.
/// Matched by containment, not equality, so padded header lines still count.
pub const PLY_END_HEADER: &str = "end_header";

/// Marker line ending the attribute (data) section.
/// Matched by exact equality against the whole line.
pub const PLY_END_ATTRIBUTE: &str = "end_attribute";
