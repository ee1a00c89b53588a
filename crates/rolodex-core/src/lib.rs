pub mod catalog;
pub mod classify;
pub mod error;
pub mod field;
pub mod format;
pub mod record;

pub use catalog::FormatCatalog;
pub use classify::{Classification, LineClassifier};
pub use error::CoreError;
pub use field::{FieldType, SEPARATOR, SEPARATOR_GRAMMAR};
pub use format::FormatDescriptor;
pub use record::{NormalizedRecord, RecordKey};
