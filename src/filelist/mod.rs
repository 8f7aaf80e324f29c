//! Reading the list of candidate filenames to classify.

pub mod parse;

pub use parse::parse_file_list;
