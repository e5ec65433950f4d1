//! Codec settings (`mqxliff.toml`)
//!
//! ```toml
//! [encoder]
//! reopen_policy = "guarded"
//!
//! [decoder]
//! strict = true
//!
//! [output]
//! pretty_json = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rich::{EncodeOptions, ReopenPolicy};

/// Default config file name looked up next to the working directory.
pub const CONFIG_FILE_NAME: &str = "mqxliff.toml";

fn default_true() -> bool {
    true
}

/// Full configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub encoder: EncoderSettings,
    #[serde(default)]
    pub decoder: DecoderSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// How rich text is written back into segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderSettings {
    #[serde(default)]
    pub reopen_policy: ReopenPolicy,
}

/// How segments are read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderSettings {
    /// Treat decoder warnings (unknown `ctype`, unmatched end marker) as failures.
    #[serde(default)]
    pub strict: bool,
}

/// Output formatting for JSON dumps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CodecConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or has wrongly typed values.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Encoder options derived from the `[encoder]` table.
    #[must_use]
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            reopen_policy: self.encoder.reopen_policy,
        }
    }

    /// Serialize a value as JSON according to `[output]`
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.output.pretty_json {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

/// Load a configuration file
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CodecConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let config = CodecConfig::from_toml(&fs::read_to_string(path)?)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load `path` if given, else `mqxliff.toml` in the current directory if present,
/// else defaults
///
/// # Errors
/// Returns an error if an existing config file cannot be read or parsed.
pub fn load_config_or_default(path: Option<&Path>) -> Result<CodecConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(CONFIG_FILE_NAME).is_file() => load_config(CONFIG_FILE_NAME),
        None => Ok(CodecConfig::default()),
    }
}
