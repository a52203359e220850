//! The explicit class registry backing the injector.
//!
//! Classes are declared at startup, each with its name, the Rust type that
//! backs it, its constructor overloads, its methods and the interfaces it
//! implements. The catalog then answers the reflection queries of
//! [`ClassSource`](crate::reflect::ClassSource).

use crate::class_name::ClassName;
use crate::error::{InjectorError, RegistryKind, Result};
use crate::object::{Arguments, IntoReturn, Object};
use crate::reflect::{
  ClassRegistry, Constructor, Invoker, Method, MethodBody, Parameter, Reflection, TypeIdentity, CONSTRUCT,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassKind {
  Class,
  Interface,
}

struct ClassDefinition {
  kind: ClassKind,
  type_id: Option<TypeId>,
  interfaces: Vec<ClassName>,
  methods: Vec<Method>,
  default_constructor: Option<Constructor>,
}

/// A thread-safe registry of classes and interfaces, keyed by [`ClassName`].
///
/// Definitions may be added at any time and from any thread, but a name, like
/// a Rust type, can only be defined once.
#[derive(Default)]
pub struct ClassCatalog {
  classes: DashMap<ClassName, ClassDefinition>,
  type_names: DashMap<TypeId, ClassName>,
}

impl ClassCatalog {
  /// Creates a new, empty `ClassCatalog`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts the definition of a class backed by the Rust type `T`.
  ///
  /// Nothing is stored until [`ClassBuilder::register`] is called.
  pub fn define<T: Any + Send + Sync>(&self, name: impl Into<ClassName>) -> ClassBuilder<'_, T> {
    ClassBuilder {
      catalog: self,
      name: name.into(),
      interfaces: Vec::new(),
      methods: Vec::new(),
      default_constructor: None,
      _type: PhantomData,
    }
  }

  /// Declares an interface name. Interfaces can be bound to implementations
  /// but are never constructed themselves.
  pub fn declare_interface(&self, name: impl Into<ClassName>) -> Result<()> {
    let name = name.into();
    let definition = ClassDefinition {
      kind: ClassKind::Interface,
      type_id: None,
      interfaces: Vec::new(),
      methods: Vec::new(),
      default_constructor: None,
    };
    self.insert(name, definition)
  }

  pub fn is_defined(&self, name: &str) -> bool {
    self.classes.contains_key(name)
  }

  pub fn is_interface(&self, name: &str) -> bool {
    self
      .classes
      .get(name)
      .map_or(false, |definition| definition.kind == ClassKind::Interface)
  }

  pub fn len(&self) -> usize {
    self.classes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty()
  }

  /// All defined names, sorted.
  pub fn class_names(&self) -> Vec<ClassName> {
    let mut names: Vec<ClassName> = self.classes.iter().map(|entry| entry.key().clone()).collect();
    names.sort();
    names
  }

  /// All defined names inside `namespace`, nested namespaces included, sorted.
  pub fn classes_in(&self, namespace: &str) -> Vec<ClassName> {
    let mut names: Vec<ClassName> = self
      .classes
      .iter()
      .filter(|entry| entry.key().is_in(namespace))
      .map(|entry| entry.key().clone())
      .collect();
    names.sort();
    names
  }

  fn insert(&self, name: ClassName, definition: ClassDefinition) -> Result<()> {
    if !name.is_well_formed() {
      return Err(InjectorError::InvalidClassName(name.to_string()));
    }

    let type_id = definition.type_id;
    if let Some(type_id) = type_id {
      match self.type_names.entry(type_id) {
        Entry::Occupied(existing) => {
          return Err(InjectorError::DuplicateRegistration {
            kind: RegistryKind::Class,
            name: existing.get().clone(),
          });
        }
        Entry::Vacant(slot) => {
          slot.insert(name.clone());
        }
      }
    }

    match self.classes.entry(name.clone()) {
      Entry::Occupied(_) => {
        if let Some(type_id) = type_id {
          self.type_names.remove(&type_id);
        }
        Err(InjectorError::DuplicateRegistration {
          kind: RegistryKind::Class,
          name,
        })
      }
      Entry::Vacant(slot) => {
        debug!(
          class = %name,
          kind = ?definition.kind,
          methods = definition.methods.len(),
          "class defined"
        );
        slot.insert(definition);
        Ok(())
      }
    }
  }
}

impl Reflection for ClassCatalog {
  fn methods(&self, class: &ClassName) -> Result<Vec<Method>> {
    self
      .classes
      .get(class)
      .map(|definition| definition.methods.clone())
      .ok_or_else(|| InjectorError::UnresolvableClass(class.clone()))
  }
}

impl ClassRegistry for ClassCatalog {
  fn contains(&self, class: &ClassName) -> bool {
    self.classes.contains_key(class)
  }

  fn default_constructor(&self, class: &ClassName) -> Result<Constructor> {
    self
      .classes
      .get(class)
      .and_then(|definition| definition.default_constructor.clone())
      .ok_or_else(|| InjectorError::UnresolvableClass(class.clone()))
  }

  fn implements(&self, class: &ClassName, interface: &ClassName) -> bool {
    self
      .classes
      .get(class)
      .map_or(false, |definition| definition.interfaces.contains(interface))
  }
}

impl TypeIdentity for ClassCatalog {
  fn type_name_of(&self, object: &Object) -> Option<ClassName> {
    let type_id = Any::type_id(&**object);
    self.type_names.get(&type_id).map(|name| name.value().clone())
  }
}

/// Collects the definition of one class. Created by [`ClassCatalog::define`].
#[must_use = "a class definition is only stored once `register` is called"]
pub struct ClassBuilder<'a, T> {
  catalog: &'a ClassCatalog,
  name: ClassName,
  interfaces: Vec<ClassName>,
  methods: Vec<Method>,
  default_constructor: Option<Constructor>,
  _type: PhantomData<fn() -> T>,
}

impl<'a, T: Any + Send + Sync> ClassBuilder<'a, T> {
  /// Adds an overload of the `construct` method.
  pub fn constructor<F>(mut self, parameters: &[&str], factory: F) -> Self
  where
    F: Fn(Arguments) -> Result<T> + Send + Sync + 'static,
  {
    let body: Constructor =
      Arc::new(move |args: Arguments| factory(args).map(|value| Arc::new(value) as Object));
    self.methods.push(Method {
      name: CONSTRUCT.to_owned(),
      parameters: to_parameters(parameters),
      body: MethodBody::Construct(body),
    });
    self
  }

  /// Adds an overload of the method `name`.
  pub fn method<F, R>(mut self, name: &str, parameters: &[&str], method: F) -> Self
  where
    F: Fn(&T, Arguments) -> Result<R> + Send + Sync + 'static,
    R: IntoReturn,
  {
    let class = self.name.clone();
    let body: Invoker = Arc::new(
      move |target: &Object, args: Arguments| -> Result<Option<Object>> {
        let this = target
          .downcast_ref::<T>()
          .ok_or_else(|| InjectorError::TypeMismatch {
            class: class.clone(),
            expected: std::any::type_name::<T>(),
          })?;
        method(this, args).map(IntoReturn::into_return)
      },
    );
    self.methods.push(Method {
      name: name.to_owned(),
      parameters: to_parameters(parameters),
      body: MethodBody::Invoke(body),
    });
    self
  }

  /// Declares that this class implements `interface`.
  pub fn implements(mut self, interface: impl Into<ClassName>) -> Self {
    self.interfaces.push(interface.into());
    self
  }

  /// Sets how to build the class when it declares no `construct` overload.
  pub fn default_constructor<F>(mut self, factory: F) -> Self
  where
    F: Fn() -> T + Send + Sync + 'static,
  {
    let body: Constructor =
      Arc::new(move |_: Arguments| -> Result<Object> { Ok(Arc::new(factory())) });
    self.default_constructor = Some(body);
    self
  }

  pub fn register(self) -> Result<()> {
    let definition = ClassDefinition {
      kind: ClassKind::Class,
      type_id: Some(TypeId::of::<T>()),
      interfaces: self.interfaces,
      methods: self.methods,
      default_constructor: self.default_constructor,
    };
    self.catalog.insert(self.name, definition)
  }
}

impl<'a, T: Any + Send + Sync + Default> ClassBuilder<'a, T> {
  /// Uses `T::default()` as the default constructor.
  pub fn with_default(self) -> Self {
    self.default_constructor(T::default)
  }
}

fn to_parameters(identifiers: &[&str]) -> Vec<Parameter> {
  identifiers.iter().map(|identifier| Parameter::new(*identifier)).collect()
}
