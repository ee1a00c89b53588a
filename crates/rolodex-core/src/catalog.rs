use crate::error::CoreError;
use crate::field::FieldType;
use crate::format::FormatDescriptor;

/// Layouts accepted out of the box, highest priority first.
pub const STANDARD_FORMATS: [&[FieldType]; 3] = [
    &[
        FieldType::LastName,
        FieldType::FirstName,
        FieldType::PhoneDashStyle,
        FieldType::Color,
        FieldType::ZipCode,
    ],
    &[
        FieldType::FullName,
        FieldType::Color,
        FieldType::ZipCode,
        FieldType::PhoneSpaceStyle,
    ],
    &[
        FieldType::FirstName,
        FieldType::LastName,
        FieldType::ZipCode,
        FieldType::PhoneSpaceStyle,
        FieldType::Color,
    ],
];

/// Priority-ordered list of formats. The first format that matches a line wins.
#[derive(Debug, Clone)]
pub struct FormatCatalog {
    formats: Vec<FormatDescriptor>,
}

impl FormatCatalog {
    pub fn new(formats: Vec<FormatDescriptor>) -> Result<Self, CoreError> {
        if formats.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        Ok(Self { formats })
    }

    pub fn standard() -> Result<Self, CoreError> {
        let formats = STANDARD_FORMATS
            .iter()
            .map(|fields| FormatDescriptor::new(fields.to_vec()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(formats)
    }

    pub fn from_names<S: AsRef<str>>(formats: &[Vec<S>]) -> Result<Self, CoreError> {
        let formats = formats
            .iter()
            .map(|names| FormatDescriptor::from_names(names.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(formats)
    }

    /// Index and descriptor of the highest-priority format matching `line`.
    pub fn first_match(&self, line: &str) -> Option<(usize, &FormatDescriptor)> {
        self.formats
            .iter()
            .enumerate()
            .find(|(_, format)| format.matches(line))
    }

    pub fn get(&self, index: usize) -> Option<&FormatDescriptor> {
        self.formats.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormatDescriptor> {
        self.formats.iter()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl<'a> IntoIterator for &'a FormatCatalog {
    type Item = &'a FormatDescriptor;
    type IntoIter = std::slice::Iter<'a, FormatDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.iter()
    }
}
