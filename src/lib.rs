pub mod dump;
pub mod format;

pub use dump::{DumpError, DumpOptions, dump, dump_file};
pub use format::{dump_slice, format_line};
