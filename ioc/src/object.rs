//! Dynamically typed instances and the positional argument lists handed to
//! constructors and methods.

use crate::error::{InjectorError, Result};
use std::any::Any;
use std::sync::{Arc, Weak};

/// A resolved instance. Two resolutions produced the same instance when
/// `Arc::ptr_eq` holds.
pub type Object = Arc<dyn Any + Send + Sync>;

/// A non-owning handle to an [`Object`].
pub type WeakObject = Weak<dyn Any + Send + Sync>;

/// Wraps a value as an [`Object`].
pub fn object<T: Any + Send + Sync>(value: T) -> Object {
  Arc::new(value)
}

/// Compares two objects by identity.
pub fn same_object(a: &Object, b: &Object) -> bool {
  // Data pointers only.
  std::ptr::eq(
    Arc::as_ptr(a) as *const (),
    Arc::as_ptr(b) as *const (),
  )
}

/// The resolved dependencies of a constructor or method call, in declared
/// parameter order.
#[derive(Clone, Default)]
pub struct Arguments {
  values: Vec<Object>,
}

impl Arguments {
  pub fn new(values: Vec<Object>) -> Self {
    Self { values }
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// The untyped argument at `index`.
  pub fn object(&self, index: usize) -> Result<Object> {
    self
      .values
      .get(index)
      .cloned()
      .ok_or(InjectorError::ArgumentMissing {
        index,
        len: self.values.len(),
      })
  }

  /// The argument at `index`, downcast to `T`.
  pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
    self
      .object(index)?
      .downcast::<T>()
      .map_err(|_| InjectorError::ArgumentType {
        index,
        expected: std::any::type_name::<T>(),
      })
  }

  pub fn iter(&self) -> impl Iterator<Item = &Object> {
    self.values.iter()
  }

  pub fn into_vec(self) -> Vec<Object> {
    self.values
  }
}

impl std::fmt::Debug for Arguments {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Arguments")
      .field("len", &self.values.len())
      .finish()
  }
}

/// Conversion of a method's return value into what
/// [`Injector::resolve_method`](crate::Injector::resolve_method) hands back.
pub trait IntoReturn {
  fn into_return(self) -> Option<Object>;
}

impl IntoReturn for () {
  fn into_return(self) -> Option<Object> {
    None
  }
}

impl IntoReturn for Object {
  fn into_return(self) -> Option<Object> {
    Some(self)
  }
}

impl IntoReturn for Option<Object> {
  fn into_return(self) -> Option<Object> {
    self
  }
}
