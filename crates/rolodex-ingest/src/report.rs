use crate::error::Result;
use crate::reader::{read_file, RawLine};
use rolodex_core::{Classification, LineClassifier, NormalizedRecord};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    /// Sorted by last name, then first name.
    pub entries: Vec<NormalizedRecord>,
    /// Positions of non-blank lines that matched no format, ascending.
    pub errors: Vec<usize>,
}

pub fn normalize_lines(classifier: &LineClassifier, lines: &[RawLine]) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for line in lines {
        if line.is_blank() {
            continue;
        }

        match classifier.classify(&line.text, line.position) {
            Classification::Matched { format, record } => {
                debug!(position = line.position, format, "line matched");
                report.entries.push(record);
            }
            Classification::Unmatched { position } => {
                debug!(position, "line matched no known format");
                report.errors.push(position);
            }
        }
    }

    report.entries.sort_by(|a, b| {
        a.lastname()
            .cmp(b.lastname())
            .then_with(|| a.firstname().cmp(b.firstname()))
    });

    info!(
        entries = report.entries.len(),
        errors = report.errors.len(),
        "normalized contact lines"
    );
    report
}

pub fn normalize_file(classifier: &LineClassifier, path: &Path) -> Result<NormalizeReport> {
    let lines = read_file(path)?;
    debug!(path = %path.display(), lines = lines.len(), "input read");
    Ok(normalize_lines(classifier, &lines))
}

/// Two-space indented JSON with a trailing newline.
pub fn write_json<W: Write>(mut writer: W, report: &NormalizeReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

pub fn to_json_string(report: &NormalizeReport) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(&mut buffer, report)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
