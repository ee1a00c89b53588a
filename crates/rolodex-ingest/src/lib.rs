pub mod error;
pub mod reader;
pub mod report;

pub use error::{IngestError, Result};
pub use reader::{parse_bytes, parse_lines, read_file, read_lines, RawLine};
pub use report::{normalize_file, normalize_lines, to_json_string, write_json, NormalizeReport};
