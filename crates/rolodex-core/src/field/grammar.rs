use super::FieldType;

/// Literal character that delimits fields on a line.
pub const SEPARATOR: char = ',';

/// Grammar placed between consecutive fields; tolerates whitespace around the comma.
pub const SEPARATOR_GRAMMAR: &str = r"\s*,\s*";

const ZIP_CODE: &str = r"\d{5}";
const FIRST_NAME: &str = r"[\w \.\-]+";
const LAST_NAME: &str = r"[\w\-]+";
const FULL_NAME: &str = r"[\w \.\-]+ [\w\-]+";
const PHONE_DASH_STYLE: &str = r"\(\d{3}\)-\d{3}-\d{4}";
const PHONE_SPACE_STYLE: &str = r"\d{3}\s*\d{3}\s*\d{4}";
const COLOR: &str = r"[\w ]+";

pub(super) fn grammar(field: FieldType) -> &'static str {
    match field {
        FieldType::FullName => FULL_NAME,
        FieldType::FirstName => FIRST_NAME,
        FieldType::LastName => LAST_NAME,
        FieldType::ZipCode => ZIP_CODE,
        FieldType::Color => COLOR,
        FieldType::PhoneDashStyle => PHONE_DASH_STYLE,
        FieldType::PhoneSpaceStyle => PHONE_SPACE_STYLE,
    }
}

pub fn grammar_for(name: &str) -> Option<&'static str> {
    name.parse::<FieldType>().ok().map(FieldType::grammar)
}
