mod extract;
mod grammar;

use crate::error::CoreError;
use crate::record::NormalizedRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use extract::{extract_full_name, extract_phone_dash, extract_phone_space};
pub use grammar::{grammar_for, SEPARATOR, SEPARATOR_GRAMMAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    FullName,
    FirstName,
    LastName,
    ZipCode,
    Color,
    PhoneDashStyle,
    PhoneSpaceStyle,
}

impl FieldType {
    pub const ALL: [FieldType; 7] = [
        FieldType::FullName,
        FieldType::FirstName,
        FieldType::LastName,
        FieldType::ZipCode,
        FieldType::Color,
        FieldType::PhoneDashStyle,
        FieldType::PhoneSpaceStyle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldType::FullName => "full-name",
            FieldType::FirstName => "first-name",
            FieldType::LastName => "last-name",
            FieldType::ZipCode => "zip-code",
            FieldType::Color => "color",
            FieldType::PhoneDashStyle => "phone-dash-style",
            FieldType::PhoneSpaceStyle => "phone-space-style",
        }
    }

    /// Regex fragment for this field's raw text. Never anchored, never capturing.
    pub fn grammar(self) -> &'static str {
        grammar::grammar(self)
    }

    /// Normalizes a trimmed value that already satisfies [`FieldType::grammar`].
    pub fn extract(self, value: &str) -> NormalizedRecord {
        extract::extract(self, value)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FieldType::ALL
            .into_iter()
            .find(|field| field.name() == trimmed)
            .ok_or_else(|| CoreError::UnknownFieldType(trimmed.to_string()))
    }
}
