use crate::catalog::FormatCatalog;
use crate::error::CoreError;
use crate::record::NormalizedRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// `format` is the catalog index of the layout that matched.
    Matched {
        format: usize,
        record: NormalizedRecord,
    },
    Unmatched {
        position: usize,
    },
}

impl Classification {
    pub fn is_matched(&self) -> bool {
        matches!(self, Classification::Matched { .. })
    }

    pub fn into_record(self) -> Option<NormalizedRecord> {
        match self {
            Classification::Matched { record, .. } => Some(record),
            Classification::Unmatched { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LineClassifier {
    catalog: FormatCatalog,
}

impl LineClassifier {
    pub fn new(catalog: FormatCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Result<Self, CoreError> {
        Ok(Self::new(FormatCatalog::standard()?))
    }

    pub fn catalog(&self) -> &FormatCatalog {
        &self.catalog
    }

    /// Classifies one non-blank raw line. `position` is echoed back when no
    /// format matches.
    pub fn classify(&self, line: &str, position: usize) -> Classification {
        match self.catalog.first_match(line) {
            Some((format, descriptor)) => Classification::Matched {
                format,
                record: descriptor.extract(line),
            },
            None => Classification::Unmatched { position },
        }
    }
}
