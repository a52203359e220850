//! Injector configuration, loadable from YAML.

use crate::class_name::ClassName;
use crate::error::{InjectorError, Result};
use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_BASE_NAME: &str = "fibre_injector";
const DEFAULT_CONFIG_EXTENSION: &str = "yaml";

/// The class name the injector registers itself under unless configured otherwise.
pub const DEFAULT_RESOLVER_CLASS: &str = "Fibre.Injector";

/// What to do when a registration collides with an existing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
  /// Fail with `DuplicateRegistration`.
  #[default]
  Reject,
  /// Keep the existing entry and carry on.
  Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InjectorConfig {
  /// The name that resolves to the injector itself.
  #[serde(default = "default_resolver_class")]
  pub resolver_class: ClassName,
  #[serde(default)]
  pub interface_duplicates: DuplicatePolicy,
  #[serde(default)]
  pub singleton_duplicates: DuplicatePolicy,
  /// Require interface implementations to declare the interface they are bound to.
  #[serde(default = "default_verify_implementations")]
  pub verify_implementations: bool,
}

fn default_resolver_class() -> ClassName {
  ClassName::from(DEFAULT_RESOLVER_CLASS)
}

fn default_verify_implementations() -> bool {
  true
}

impl Default for InjectorConfig {
  fn default() -> Self {
    Self {
      resolver_class: default_resolver_class(),
      interface_duplicates: DuplicatePolicy::default(),
      singleton_duplicates: DuplicatePolicy::default(),
      verify_implementations: default_verify_implementations(),
    }
  }
}

impl InjectorConfig {
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    serde_yaml::from_str(yaml).map_err(|e| InjectorError::ConfigParse(e.to_string()))
  }

  pub fn from_path(path: &Path) -> Result<Self> {
    let reader = io::BufReader::new(File::open(path)?);
    serde_yaml::from_reader(reader).map_err(|e| {
      InjectorError::ConfigParse(format!("{}: {}", path.display(), e))
    })
  }

  /// Finds the configuration file based on common patterns and an optional environment suffix.
  ///
  /// Looks for `fibre_injector.<env>.yaml`, then `fibre_injector.yaml`, in `dir`.
  /// The environment falls back to `FIBRE_ENV`, then `APP_ENV`.
  pub fn find_config_file(dir: &Path, environment_suffix: Option<&str>) -> Result<PathBuf> {
    let env_from_var = environment_suffix
      .map(|s| s.to_string())
      .or_else(|| env::var("FIBRE_ENV").ok())
      .or_else(|| env::var("APP_ENV").ok());

    let mut files_to_check: Vec<String> = Vec::new();
    if let Some(env_str) = &env_from_var {
      if !env_str.is_empty() {
        files_to_check.push(format!(
          "{}.{}.{}",
          DEFAULT_CONFIG_BASE_NAME, env_str, DEFAULT_CONFIG_EXTENSION
        ));
      }
    }
    files_to_check.push(format!("{}.{}", DEFAULT_CONFIG_BASE_NAME, DEFAULT_CONFIG_EXTENSION));

    for file_name in &files_to_check {
      let path = dir.join(file_name);
      if path.is_file() {
        return Ok(path);
      }
    }

    Err(InjectorError::ConfigNotFound(format!(
      "Searched for: {:?} in {:?}. Provide a config file or check FIBRE_ENV/APP_ENV.",
      files_to_check, dir
    )))
  }
}
