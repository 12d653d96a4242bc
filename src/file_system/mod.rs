pub mod entry;
pub mod scan;
