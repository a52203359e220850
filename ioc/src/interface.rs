//! Interface names bound to the class that implements them.

use crate::class_name::ClassName;
use crate::config::DuplicatePolicy;
use crate::error::{InjectorError, RegistryKind, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Bindings are never replaced once made. Resolving an interface always goes
/// through its implementation class, so each resolution is a new instance
/// unless that class is itself a singleton.
#[derive(Debug, Default)]
pub struct InterfaceRegistry {
  bindings: HashMap<ClassName, ClassName>,
}

impl InterfaceRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register(
    &mut self,
    interface: ClassName,
    implementation: ClassName,
    policy: DuplicatePolicy,
  ) -> Result<()> {
    if let Some(existing) = self.bindings.get(&interface) {
      return match policy {
        DuplicatePolicy::Reject => Err(InjectorError::DuplicateRegistration {
          kind: RegistryKind::Interface,
          name: interface,
        }),
        DuplicatePolicy::Ignore => {
          warn!(
            interface = %interface,
            existing = %existing,
            ignored = %implementation,
            "interface already bound, keeping existing implementation"
          );
          Ok(())
        }
      };
    }
    debug!(interface = %interface, implementation = %implementation, "interface bound");
    self.bindings.insert(interface, implementation);
    Ok(())
  }

  pub fn lookup(&self, interface: &ClassName) -> Option<&ClassName> {
    self.bindings.get(interface)
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&ClassName, &ClassName)> {
    self.bindings.iter()
  }
}
