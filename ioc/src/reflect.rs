//! The reflection contracts the injector consumes.
//!
//! The injector never inspects types itself. It asks a [`ClassSource`] which
//! methods a class declares, how to build a class that declares no
//! constructor, and which class a live object belongs to.
//! [`ClassCatalog`](crate::ClassCatalog) is the stock implementation.

use crate::class_name::ClassName;
use crate::error::Result;
use crate::object::{Arguments, Object};
use std::fmt;
use std::sync::Arc;

/// Name of the designated constructor method.
pub const CONSTRUCT: &str = "construct";

/// Builds a new instance from positional arguments.
pub type Constructor = Arc<dyn Fn(Arguments) -> Result<Object> + Send + Sync>;

/// Calls a method on an existing instance with positional arguments.
pub type Invoker = Arc<dyn Fn(&Object, Arguments) -> Result<Option<Object>> + Send + Sync>;

/// A declared parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
  pub identifier: ClassName,
}

impl Parameter {
  pub fn new(identifier: impl Into<ClassName>) -> Self {
    Self {
      identifier: identifier.into(),
    }
  }
}

#[derive(Clone)]
pub enum MethodBody {
  Construct(Constructor),
  Invoke(Invoker),
}

/// One declared overload of a method.
#[derive(Clone)]
pub struct Method {
  pub name: String,
  pub parameters: Vec<Parameter>,
  pub body: MethodBody,
}

impl Method {
  pub fn arity(&self) -> usize {
    self.parameters.len()
  }

  /// The parameter types in declared order.
  pub fn parameter_types(&self) -> Vec<ClassName> {
    self
      .parameters
      .iter()
      .map(|parameter| parameter.identifier.clone())
      .collect()
  }
}

impl fmt::Debug for Method {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let kind = match self.body {
      MethodBody::Construct(_) => "construct",
      MethodBody::Invoke(_) => "invoke",
    };
    f.debug_struct("Method")
      .field("name", &self.name)
      .field("parameters", &self.parameters)
      .field("kind", &kind)
      .finish()
  }
}

/// Lists the declared methods of a class.
pub trait Reflection: Send + Sync {
  /// Every declared method of `class`, overloads included.
  ///
  /// Fails with `UnresolvableClass` when `class` is unknown.
  fn methods(&self, class: &ClassName) -> Result<Vec<Method>>;
}

/// Maps class names to constructible types.
pub trait ClassRegistry: Send + Sync {
  fn contains(&self, class: &ClassName) -> bool;

  /// The constructor used when `class` declares no `construct` overload.
  fn default_constructor(&self, class: &ClassName) -> Result<Constructor>;

  /// Whether `class` declares that it implements `interface`.
  fn implements(&self, class: &ClassName, interface: &ClassName) -> bool;
}

/// Runtime type identification for live objects.
pub trait TypeIdentity: Send + Sync {
  fn type_name_of(&self, object: &Object) -> Option<ClassName>;
}

/// Everything the injector needs from the class system.
pub trait ClassSource: Reflection + ClassRegistry + TypeIdentity {}

impl<T: Reflection + ClassRegistry + TypeIdentity> ClassSource for T {}
