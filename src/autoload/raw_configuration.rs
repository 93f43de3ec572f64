use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::autoload::configuration::{
    Configuration, DEFAULT_FILE_EXTENSION,
};

pub const CONFIGURATION_FILE_NAME: &str = ".autoload.yml";

/// The on-disk form of a configuration, read from `.autoload.yml` at the
/// root directory by the CLI. Every field is optional; the library itself
/// never reads this file.
#[derive(Debug, Deserialize, Serialize)]
pub struct RawConfiguration {
    // File extension, including the leading dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    // Filename prefixes to try, in search order
    #[serde(default)]
    pub file_prefixes: Vec<String>,

    // Convert camelCase/PascalCase symbol names to snake_case
    #[serde(default)]
    pub snake_case: bool,

    // Replace underscores with dashes in symbol names
    #[serde(default)]
    pub underscore_to_dash: bool,

    // Require namespaced symbols, mirrored in the directory structure
    #[serde(default)]
    pub namespaces: bool,

    // Drop the topmost namespace segment when building paths
    #[serde(default)]
    pub strip_root_namespace: bool,
}

fn default_file_extension() -> String {
    String::from(DEFAULT_FILE_EXTENSION)
}

impl Default for RawConfiguration {
    fn default() -> Self {
        Self {
            file_extension: default_file_extension(),
            file_prefixes: vec![],
            snake_case: false,
            underscore_to_dash: false,
            namespaces: false,
            strip_root_namespace: false,
        }
    }
}

impl RawConfiguration {
    pub fn into_configuration(self, root: &Path) -> Configuration {
        let mut builder = Configuration::builder()
            .root_directory(root)
            .file_extension(self.file_extension)
            .file_prefixes(self.file_prefixes);
        if self.snake_case {
            builder = builder.snake_case(false);
        }
        if self.underscore_to_dash {
            builder = builder.dash_for_underscore();
        }
        if self.namespaces {
            builder = builder.namespaces(self.strip_root_namespace);
        }
        builder.build()
    }
}

/// Reads `.autoload.yml` from the root directory, falling back to defaults
/// when the file does not exist. A file that exists but cannot be parsed is
/// an error: unlike resolution itself, the CLI should not silently run with
/// half a configuration.
pub fn get(root: &Path) -> anyhow::Result<RawConfiguration> {
    let configuration_path = root.join(CONFIGURATION_FILE_NAME);
    if !configuration_path.exists() {
        return Ok(RawConfiguration::default());
    }

    let file = File::open(&configuration_path).with_context(|| {
        format!("Failed to open {}", configuration_path.display())
    })?;
    serde_yaml::from_reader(file).with_context(|| {
        format!("Failed to parse {}", configuration_path.display())
    })
}
