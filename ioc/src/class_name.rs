//! Dotted, namespaced class identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A dotted, namespaced identifier such as `"Pkg.Sub.Name"`.
///
/// `ClassName` is the key of every registry in the injector. Building one never
/// fails: a malformed name is simply a name nothing will ever be registered
/// under. Use [`ClassName::is_well_formed`] where the shape must be enforced.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Iterates over the dot-separated parts of the name.
  pub fn segments(&self) -> impl Iterator<Item = &str> {
    self.0.split('.')
  }

  /// Everything before the last dot, or `None` for a top-level name.
  pub fn namespace(&self) -> Option<&str> {
    self.0.rsplit_once('.').map(|(ns, _)| ns)
  }

  /// The final segment of the name.
  pub fn short_name(&self) -> &str {
    match self.0.rsplit_once('.') {
      Some((_, name)) => name,
      None => &self.0,
    }
  }

  /// Whether the name consists of non-empty `[A-Za-z0-9_]` segments joined by
  /// single dots.
  pub fn is_well_formed(&self) -> bool {
    !self.0.is_empty()
      && self.segments().all(|segment| {
        !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
      })
  }

  /// Whether this name lives directly or transitively inside `namespace`.
  pub fn is_in(&self, namespace: &str) -> bool {
    self
      .0
      .strip_prefix(namespace)
      .map_or(false, |rest| rest.starts_with('.'))
  }
}

impl fmt::Display for ClassName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl fmt::Debug for ClassName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ClassName({})", self.0)
  }
}

impl From<&str> for ClassName {
  fn from(name: &str) -> Self {
    Self(name.to_owned())
  }
}

impl From<String> for ClassName {
  fn from(name: String) -> Self {
    Self(name)
  }
}

impl From<&ClassName> for ClassName {
  fn from(name: &ClassName) -> Self {
    name.clone()
  }
}

impl AsRef<str> for ClassName {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Borrow<str> for ClassName {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl PartialEq<str> for ClassName {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for ClassName {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}
