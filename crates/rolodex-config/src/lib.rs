use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rolodex_core::{CoreError, FormatCatalog, FormatDescriptor};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_INPUT: &str = "data.in";
pub const DEFAULT_OUTPUT: &str = "result.out";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub catalog: CatalogSource,
}

#[derive(Debug, Clone)]
pub enum CatalogSource {
    Standard,
    /// Replaces the standard catalog; already validated.
    Custom(FormatCatalog),
}

impl AppConfig {
    pub fn catalog(&self) -> std::result::Result<FormatCatalog, CoreError> {
        match &self.catalog {
            CatalogSource::Standard => FormatCatalog::standard(),
            CatalogSource::Custom(catalog) => Ok(catalog.clone()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            catalog: CatalogSource::Standard,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid {0} path: value is empty")]
    EmptyPath(&'static str),
    #[error("catalog.formats must list at least one format")]
    EmptyCatalog,
    #[error("invalid catalog format #{index}: {source}")]
    InvalidFormat {
        index: usize,
        #[source]
        source: CoreError,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    catalog: Option<CatalogFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    formats: Option<Vec<Vec<String>>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(input) = parsed.input {
        if input.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("input"));
        }
        config.input = input;
    }

    if let Some(output) = parsed.output {
        if output.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("output"));
        }
        config.output = output;
    }

    if let Some(formats) = parsed.catalog.and_then(|catalog| catalog.formats) {
        config.catalog = CatalogSource::Custom(build_catalog(&formats)?);
    }

    Ok(config)
}

fn build_catalog(formats: &[Vec<String>]) -> Result<FormatCatalog> {
    if formats.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }

    let mut descriptors = Vec::with_capacity(formats.len());
    for (index, names) in formats.iter().enumerate() {
        let descriptor = FormatDescriptor::from_names(names.as_slice())
            .map_err(|source| ConfigError::InvalidFormat { index, source })?;
        descriptors.push(descriptor);
    }

    FormatCatalog::new(descriptors).map_err(|_| ConfigError::EmptyCatalog)
}

#[cfg(test)]
mod tests {
    use super::{
        load, load_at_path, merge_config, CatalogFile, CatalogSource, ConfigError, ConfigFile,
    };
    use rolodex_core::{CoreError, FieldType};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn formats(lists: Vec<Vec<&str>>) -> Option<CatalogFile> {
        Some(CatalogFile {
            formats: Some(
                lists
                    .into_iter()
                    .map(|names| names.into_iter().map(str::to_string).collect())
                    .collect(),
            ),
        })
    }

    #[test]
    fn defaults_use_standard_catalog() {
        let parsed = ConfigFile {
            input: None,
            output: None,
            catalog: None,
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.input, PathBuf::from("data.in"));
        assert_eq!(merged.output, PathBuf::from("result.out"));
        assert!(matches!(merged.catalog, CatalogSource::Standard));
        assert_eq!(merged.catalog().expect("catalog").len(), 3);
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            input: Some(PathBuf::from("contacts.txt")),
            output: Some(PathBuf::from("contacts.json")),
            catalog: formats(vec![vec!["full-name", "zip-code"]]),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.input, PathBuf::from("contacts.txt"));
        assert_eq!(merged.output, PathBuf::from("contacts.json"));
        let catalog = merged.catalog().expect("catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(0).expect("format").fields(),
            &[FieldType::FullName, FieldType::ZipCode]
        );
    }

    #[test]
    fn unknown_field_type_is_reported_with_index() {
        let parsed = ConfigFile {
            input: None,
            output: None,
            catalog: formats(vec![vec!["full-name"], vec!["full-name", "zip"]]),
        };
        let err = merge_config(parsed).unwrap_err();
        match err {
            ConfigError::InvalidFormat { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, CoreError::UnknownFieldType("zip".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_format_and_catalog_are_rejected() {
        let parsed = ConfigFile {
            input: None,
            output: None,
            catalog: formats(vec![vec![]]),
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidFormat {
                index: 0,
                source: CoreError::EmptyFormat
            })
        ));

        let parsed = ConfigFile {
            input: None,
            output: None,
            catalog: formats(vec![]),
        };
        assert!(matches!(merge_config(parsed), Err(ConfigError::EmptyCatalog)));
    }

    #[test]
    fn empty_paths_are_rejected() {
        let parsed = ConfigFile {
            input: Some(PathBuf::new()),
            output: None,
            catalog: None,
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::EmptyPath("input"))
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "input = \"in.txt\"\n[catalog]\nformats = [\n  [\"last-name\", \"first-name\", \"phone-dash-style\", \"color\", \"zip-code\"],\n  [\"full-name\", \"color\", \"zip-code\", \"phone-space-style\"],\n]\n",
        )
        .expect("write config");

        let config = load(Some(path)).expect("load");
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(config.output, PathBuf::from("result.out"));
        let catalog = config.catalog().expect("catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(1).expect("format").to_string(),
            "full-name, color, zip-code, phone-space-style"
        );
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "inptu = \"in.txt\"\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
