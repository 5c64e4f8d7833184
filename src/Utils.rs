/// reading raw backend responses from text or JSON files
pub mod load_from_file;
/// terminal tables for parsed possibilities
pub mod pretty_print;
