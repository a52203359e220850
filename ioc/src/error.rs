use thiserror::Error;

use crate::class_name::ClassName;

/// The kind of registry a duplicate registration was rejected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
  Class,
  Interface,
  Singleton,
}

impl std::fmt::Display for RegistryKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RegistryKind::Class => write!(f, "class"),
      RegistryKind::Interface => write!(f, "interface"),
      RegistryKind::Singleton => write!(f, "singleton"),
    }
  }
}

/// The main error type for the `fibre_injector` library.
#[derive(Debug, Error)]
pub enum InjectorError {
  #[error("Unable to resolve a constructible class for '{0}'")]
  UnresolvableClass(ClassName),

  #[error("A {kind} is already registered for '{name}'")]
  DuplicateRegistration { kind: RegistryKind, name: ClassName },

  #[error("Class '{class}' has no method named '{method}'")]
  MissingMethod { class: ClassName, method: String },

  #[error("Class '{class}' declares '{method}' but it cannot be used to construct instances")]
  NotConstructible { class: ClassName, method: String },

  #[error("The runtime type of the given object is not a registered class")]
  UnknownType,

  #[error("Class '{class}' does not implement interface '{interface}'")]
  NotAnImplementation { interface: ClassName, class: ClassName },

  #[error("Resolved '{class}' is not of the requested type {expected}")]
  TypeMismatch {
    class: ClassName,
    expected: &'static str,
  },

  #[error("Missing argument at position {index} (only {len} supplied)")]
  ArgumentMissing { index: usize, len: usize },

  #[error("Argument at position {index} is not of type {expected}")]
  ArgumentType { index: usize, expected: &'static str },

  #[error("Invalid class name: '{0}'")]
  InvalidClassName(String),

  #[error("Configuration file not found: {0}")]
  ConfigNotFound(String),

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),
}

/// A specialized `Result` type for `fibre_injector` operations.
pub type Result<T, E = InjectorError> = std::result::Result<T, E>;
