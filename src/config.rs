use ini::{Ini, Properties};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.ini";

pub const S3_SECTION: &str = "S3Info";
pub const LOCAL_SECTION: &str = "LocalInfo";

const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config File: {0} not found")]
    NotFound(PathBuf),

    #[error("IO error reading config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("INI parsing error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("No [{0}] section found in config file")]
    MissingSection(&'static str),

    #[error("Missing key '{key}' in [{section}]")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },

    #[error("Key '{key}' in [{section}] is empty")]
    EmptyValue {
        section: &'static str,
        key: &'static str,
    },
}

/// Settings loaded once at startup and passed explicitly to the uploader and batch driver.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub access_key: String,
    pub secret_key: String,
    pub bucket_name: String,
    pub base_path: PathBuf,
    pub region: String,
    pub endpoint_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &redact(&self.access_key))
            .field("secret_key", &"****")
            .field("bucket_name", &self.bucket_name)
            .field("base_path", &self.base_path)
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

/// Keep the first four characters of a key id so it can still be recognised in logs.
pub fn redact(key: &str) -> String {
    let shown: String = key.chars().take(4).collect();
    format!("{shown}****")
}

/// Parse the configuration file at `file_path`
///
/// # Arguments
///
/// * `file_path` - Path to the INI file, usually [`DEFAULT_CONFIG_PATH`]
///
/// # Returns
///
/// * `Result<Config, ConfigError>` - All required values, or the first problem found
pub fn load_config<P: AsRef<Path>>(file_path: P) -> Result<Config, ConfigError> {
    let path = file_path.as_ref();

    let conf = Ini::load_from_file_noescape(path).map_err(|e| match e {
        ini::Error::Io(source) if source.kind() == std::io::ErrorKind::NotFound => {
            ConfigError::NotFound(path.to_path_buf())
        }
        ini::Error::Io(source) => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
        ini::Error::Parse(parse) => ConfigError::Parse {
            path: path.to_path_buf(),
            message: parse.to_string(),
        },
    })?;

    config_from_ini(&conf)
}

/// Build a [`Config`] from an already parsed INI document.
pub fn config_from_ini(conf: &Ini) -> Result<Config, ConfigError> {
    let s3 = conf
        .section(Some(S3_SECTION))
        .ok_or(ConfigError::MissingSection(S3_SECTION))?;
    let local = conf
        .section(Some(LOCAL_SECTION))
        .ok_or(ConfigError::MissingSection(LOCAL_SECTION))?;

    let region = optional_value(s3, "region").unwrap_or_else(|| DEFAULT_REGION.to_string());

    Ok(Config {
        access_key: required_value(s3, S3_SECTION, "accesskey")?,
        secret_key: required_value(s3, S3_SECTION, "secretkey")?,
        bucket_name: required_value(s3, S3_SECTION, "bucket_name")?,
        base_path: PathBuf::from(required_value(local, LOCAL_SECTION, "base_path")?),
        region,
        endpoint_url: optional_value(s3, "endpoint_url"),
    })
}

fn required_value(
    props: &Properties,
    section: &'static str,
    key: &'static str,
) -> Result<String, ConfigError> {
    let value = props
        .get(key)
        .ok_or(ConfigError::MissingKey { section, key })?
        .trim();

    if value.is_empty() {
        return Err(ConfigError::EmptyValue { section, key });
    }
    Ok(value.to_string())
}

fn optional_value(props: &Properties, key: &str) -> Option<String> {
    props
        .get(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
