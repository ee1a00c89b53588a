use super::FieldType;
use crate::record::{NormalizedRecord, RecordKey};

pub(super) fn extract(field: FieldType, value: &str) -> NormalizedRecord {
    match field {
        FieldType::FullName => extract_full_name(value),
        FieldType::FirstName => single(RecordKey::Firstname, value),
        FieldType::LastName => single(RecordKey::Lastname, value),
        FieldType::ZipCode => single(RecordKey::Zipcode, value),
        FieldType::Color => single(RecordKey::Color, value),
        FieldType::PhoneDashStyle => extract_phone_dash(value),
        FieldType::PhoneSpaceStyle => extract_phone_space(value),
    }
}

/// Splits on whitespace runs: the last token is the last name, the rest
/// (single-space joined) the first name.
pub fn extract_full_name(value: &str) -> NormalizedRecord {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    let lastname = tokens.pop().unwrap_or_default();
    [
        (RecordKey::Firstname, tokens.join(" ")),
        (RecordKey::Lastname, lastname.to_string()),
    ]
    .into_iter()
    .collect()
}

pub fn extract_phone_dash(value: &str) -> NormalizedRecord {
    let digits: String = value
        .chars()
        .filter(|ch| !matches!(ch, '(' | ')' | '-'))
        .collect();
    single(RecordKey::Phonenumber, dashed(&digits))
}

pub fn extract_phone_space(value: &str) -> NormalizedRecord {
    let digits: String = value.split_whitespace().collect();
    single(RecordKey::Phonenumber, dashed(&digits))
}

fn single(key: RecordKey, value: impl Into<String>) -> NormalizedRecord {
    let mut record = NormalizedRecord::new();
    record.insert(key, value);
    record
}

// NNNNNNNNNN -> NNN-NNN-NNNN
fn dashed(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + 2);
    for (index, ch) in digits.chars().enumerate() {
        if index == 3 || index == 6 {
            out.push('-');
        }
        out.push(ch);
    }
    out
}
