use crate::error::CoreError;
use crate::field::{FieldType, SEPARATOR, SEPARATOR_GRAMMAR};
use crate::record::NormalizedRecord;
use regex::Regex;
use std::fmt;

/// One accepted line layout: an ordered list of field types and the
/// whole-line matcher compiled from their grammars.
#[derive(Debug, Clone)]
pub struct FormatDescriptor {
    fields: Vec<FieldType>,
    regex: Regex,
}

impl FormatDescriptor {
    pub fn new(fields: Vec<FieldType>) -> Result<Self, CoreError> {
        if fields.is_empty() {
            return Err(CoreError::EmptyFormat);
        }

        let pattern = compile_pattern(&fields);
        let regex = Regex::new(&pattern).map_err(|err| CoreError::InvalidPattern {
            pattern: pattern.clone(),
            message: err.to_string(),
        })?;

        Ok(Self { fields, regex })
    }

    /// Builds a descriptor from textual field-type names such as `"zip-code"`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, CoreError> {
        let fields = names
            .iter()
            .map(|name| name.as_ref().parse::<FieldType>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(fields)
    }

    pub fn fields(&self) -> &[FieldType] {
        &self.fields
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Placeholder form of the layout, e.g. `{first-name}{separator}{zip-code}`.
    pub fn template(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("{{{field}}}"))
            .collect::<Vec<_>>()
            .join("{separator}")
    }

    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Splits `line` on the separator and normalizes each field positionally.
    /// Callers must check [`FormatDescriptor::matches`] first; a later field
    /// overwrites keys emitted by an earlier one.
    pub fn extract(&self, line: &str) -> NormalizedRecord {
        let mut record = NormalizedRecord::new();
        for (field, raw) in self.fields.iter().zip(line.split(SEPARATOR)) {
            record.merge(field.extract(raw.trim()));
        }
        record
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|field| field.name()).collect();
        f.write_str(&names.join(", "))
    }
}

fn compile_pattern(fields: &[FieldType]) -> String {
    let body = fields
        .iter()
        .map(|field| field.grammar())
        .collect::<Vec<_>>()
        .join(SEPARATOR_GRAMMAR);
    format!(r"^\s*{body}\s*$")
}
