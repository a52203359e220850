//! Class names bound to at most one instance.

use crate::class_name::ClassName;
use crate::config::DuplicatePolicy;
use crate::error::{InjectorError, RegistryKind, Result};
use crate::object::{Object, WeakObject};
use std::collections::HashMap;
use tracing::{debug, warn};

/// The state of a class name in the [`SingletonRegistry`]. A name that was
/// never registered has no slot at all.
#[derive(Clone)]
pub enum SingletonSlot {
  /// Registered as singleton-eligible; the next construction of the class is kept.
  Pending,
  Instance(Object),
  /// An instance the registry must not keep alive. Once it is dropped the slot
  /// behaves as if it were absent.
  Weak(WeakObject),
}

impl SingletonSlot {
  fn live(&self) -> Option<Object> {
    match self {
      SingletonSlot::Pending => None,
      SingletonSlot::Instance(object) => Some(object.clone()),
      SingletonSlot::Weak(weak) => weak.upgrade(),
    }
  }
}

impl std::fmt::Debug for SingletonSlot {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SingletonSlot::Pending => write!(f, "Pending"),
      SingletonSlot::Instance(_) => write!(f, "Instance"),
      SingletonSlot::Weak(weak) => write!(f, "Weak(alive: {})", weak.strong_count() > 0),
    }
  }
}

#[derive(Debug, Default)]
pub struct SingletonRegistry {
  slots: HashMap<ClassName, SingletonSlot>,
}

impl SingletonRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pins `object` as the instance for `class`, replacing a `Pending` placeholder.
  ///
  /// A live instance is never replaced: under [`DuplicatePolicy::Reject`] this
  /// fails with `DuplicateRegistration`, under [`DuplicatePolicy::Ignore`] the
  /// existing instance is kept.
  pub fn register_instance(
    &mut self,
    class: ClassName,
    object: Object,
    policy: DuplicatePolicy,
  ) -> Result<()> {
    if !self.is_vacant(&class, policy)? {
      return Ok(());
    }
    debug!(class = %class, "singleton instance registered");
    self.slots.insert(class, SingletonSlot::Instance(object));
    Ok(())
  }

  /// Binds `class` to `object` without keeping it alive, replacing whatever the
  /// slot held.
  pub fn register_weak(&mut self, class: ClassName, object: WeakObject) {
    debug!(class = %class, "weak singleton registered");
    self.slots.insert(class, SingletonSlot::Weak(object));
  }

  fn is_vacant(&self, class: &ClassName, policy: DuplicatePolicy) -> Result<bool> {
    if !self.has(class) {
      return Ok(true);
    }
    match policy {
      DuplicatePolicy::Reject => Err(InjectorError::DuplicateRegistration {
        kind: RegistryKind::Singleton,
        name: class.clone(),
      }),
      DuplicatePolicy::Ignore => {
        warn!(class = %class, "singleton already holds an instance, keeping it");
        Ok(false)
      }
    }
  }

  /// Marks `class` as singleton-eligible. Does nothing if the class already
  /// has a slot. Returns whether a placeholder was added.
  pub fn register_class(&mut self, class: ClassName) -> bool {
    match self.slots.get(&class) {
      Some(slot) if !matches!(slot, SingletonSlot::Weak(weak) if weak.strong_count() == 0) => {
        debug!(class = %class, slot = ?slot, "singleton class already registered");
        false
      }
      _ => {
        debug!(class = %class, "singleton class registered");
        self.slots.insert(class, SingletonSlot::Pending);
        true
      }
    }
  }

  /// True only when a live instance is held for `class`.
  pub fn has(&self, class: &ClassName) -> bool {
    self.get(class).is_some()
  }

  pub fn get(&self, class: &ClassName) -> Option<Object> {
    self.slots.get(class).and_then(SingletonSlot::live)
  }

  pub fn is_pending(&self, class: &ClassName) -> bool {
    matches!(self.slots.get(class), Some(SingletonSlot::Pending))
  }

  /// Stores a freshly constructed `object` if `class` is `Pending`. Returns
  /// the instance callers must use from now on: `object` itself, or the
  /// instance that already occupies the slot.
  pub fn promote(&mut self, class: &ClassName, object: Object) -> Object {
    match self.slots.get_mut(class) {
      Some(slot @ SingletonSlot::Pending) => {
        debug!(class = %class, "singleton promoted");
        *slot = SingletonSlot::Instance(object.clone());
        object
      }
      Some(slot) => slot.live().unwrap_or(object),
      None => object,
    }
  }

  pub fn slot(&self, class: &ClassName) -> Option<&SingletonSlot> {
    self.slots.get(class)
  }

  pub fn len(&self) -> usize {
    self.slots.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::object::{object, same_object};
  use std::sync::Arc;

  fn name(s: &str) -> ClassName {
    ClassName::from(s)
  }

  #[test]
  fn pending_is_not_an_instance() {
    let mut registry = SingletonRegistry::new();
    assert!(registry.register_class(name("A")));
    assert!(registry.is_pending(&name("A")));
    assert!(!registry.has(&name("A")));
    assert!(registry.get(&name("A")).is_none());
  }

  #[test]
  fn promotion_happens_once() {
    let mut registry = SingletonRegistry::new();
    registry.register_class(name("A"));

    let first = object(1_u32);
    let kept = registry.promote(&name("A"), first.clone());
    assert!(same_object(&kept, &first));

    let second = object(2_u32);
    let kept = registry.promote(&name("A"), second);
    assert!(same_object(&kept, &first));
    assert!(same_object(&registry.get(&name("A")).unwrap(), &first));
  }

  #[test]
  fn promote_without_slot_is_transient() {
    let mut registry = SingletonRegistry::new();
    let value = object(1_u32);
    let kept = registry.promote(&name("A"), value.clone());
    assert!(same_object(&kept, &value));
    assert!(registry.is_empty());
  }

  #[test]
  fn instance_replaces_pending_but_not_instance() {
    let mut registry = SingletonRegistry::new();
    registry.register_class(name("A"));

    let first = object(1_u32);
    registry
      .register_instance(name("A"), first.clone(), DuplicatePolicy::Reject)
      .unwrap();
    assert!(same_object(&registry.get(&name("A")).unwrap(), &first));

    let err = registry
      .register_instance(name("A"), object(2_u32), DuplicatePolicy::Reject)
      .unwrap_err();
    assert!(matches!(
      err,
      InjectorError::DuplicateRegistration { kind: RegistryKind::Singleton, .. }
    ));

    registry
      .register_instance(name("A"), object(3_u32), DuplicatePolicy::Ignore)
      .unwrap();
    assert!(same_object(&registry.get(&name("A")).unwrap(), &first));

    // Registering the class again never downgrades an instance.
    assert!(!registry.register_class(name("A")));
    assert!(registry.has(&name("A")));
  }

  #[test]
  fn weak_slots_expire() {
    let mut registry = SingletonRegistry::new();
    let strong: Object = Arc::new(5_u64);
    registry.register_weak(name("W"), Arc::downgrade(&strong));
    assert!(registry.has(&name("W")));

    drop(strong);
    assert!(!registry.has(&name("W")));
    assert!(matches!(registry.slot(&name("W")), Some(SingletonSlot::Weak(_))));
    assert!(registry.slot(&name("X")).is_none());
    assert!(registry.register_class(name("W")));
    assert!(registry.is_pending(&name("W")));
  }
}
