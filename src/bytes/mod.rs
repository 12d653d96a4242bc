pub mod format;

const B: &str = "B";
const KB: &str = "KB";
const MB: &str = "MB";
const GB: &str = "GB";
const TB: &str = "TB";
const PB: &str = "PB";

/// Bytes in one megabyte, as used by the size threshold.
pub const BYTES_PER_MB: u64 = 1024 * 1024;
