//! The resolver: turns class names into object graphs.

use crate::class_name::ClassName;
use crate::config::InjectorConfig;
use crate::discovery::{discover_parameter_types, select_overload};
use crate::error::{InjectorError, Result};
use crate::interface::InterfaceRegistry;
use crate::object::{Arguments, Object, WeakObject};
use crate::reflect::{ClassSource, MethodBody, CONSTRUCT};
use crate::singleton::SingletonRegistry;
use parking_lot::ReentrantMutex;
use std::any::Any;
use std::cell::RefCell;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

#[derive(Default)]
struct Registries {
  singletons: SingletonRegistry,
  interfaces: InterfaceRegistry,
}

enum Shortcut {
  Singleton(Object),
  Interface(ClassName),
}

/// A dependency injection resolver.
///
/// Given a class name, the injector looks up the narrowest `construct`
/// overload the class declares, resolves each parameter type the same way,
/// and builds the class from the results. Singletons and interface bindings
/// registered on the injector short-circuit that process.
///
/// The injector is always registered as a singleton of itself under
/// [`InjectorConfig::resolver_class`], so classes may declare it as a
/// dependency.
///
/// All operations are serialized by a single re-entrant lock held for the
/// duration of each top-level call. Constructors and methods run under that
/// lock and may call back into the injector from the same thread.
pub struct Injector {
  config: InjectorConfig,
  source: Arc<dyn ClassSource>,
  state: ReentrantMutex<RefCell<Registries>>,
  this: Weak<Injector>,
}

impl Injector {
  /// Creates an injector with the default configuration.
  pub fn new(source: Arc<dyn ClassSource>) -> Arc<Self> {
    Self::with_config(source, InjectorConfig::default())
  }

  pub fn with_config(source: Arc<dyn ClassSource>, config: InjectorConfig) -> Arc<Self> {
    Arc::new_cyclic(|this: &Weak<Injector>| {
      let mut registries = Registries::default();
      let weak: WeakObject = this.clone();
      registries
        .singletons
        .register_weak(config.resolver_class.clone(), weak);
      debug!(resolver_class = %config.resolver_class, "injector created");
      Self {
        config,
        source,
        state: ReentrantMutex::new(RefCell::new(registries)),
        this: this.clone(),
      }
    })
  }

  pub fn config(&self) -> &InjectorConfig {
    &self.config
  }

  pub fn source(&self) -> &Arc<dyn ClassSource> {
    &self.source
  }

  /// A strong handle to this injector.
  pub fn handle(&self) -> Option<Arc<Injector>> {
    self.this.upgrade()
  }

  // --- Registration ---

  /// Pins `object` as the instance returned for its class from now on,
  /// including when the class is resolved as a dependency.
  pub fn register_singleton(&self, object: Object) -> Result<&Self> {
    let class = self.type_name_of(&object).ok_or(InjectorError::UnknownType)?;
    let state = self.state.lock();
    state
      .borrow_mut()
      .singletons
      .register_instance(class, object, self.config.singleton_duplicates)?;
    Ok(self)
  }

  /// Marks `class` as a singleton: the first instance built for it is kept
  /// and returned by every later resolution.
  ///
  /// Unlike the registry itself, which accepts any name, this fails with
  /// `UnresolvableClass` when `class` is not known to the class source.
  pub fn register_singleton_class(&self, class: impl Into<ClassName>) -> Result<&Self> {
    let class = class.into();
    if !self.source.contains(&class) && class != self.config.resolver_class {
      return Err(InjectorError::UnresolvableClass(class));
    }
    let state = self.state.lock();
    state.borrow_mut().singletons.register_class(class);
    Ok(self)
  }

  /// Binds `interface` to the class that is built whenever it is resolved.
  pub fn register_interface(
    &self,
    interface: impl Into<ClassName>,
    implementation: impl Into<ClassName>,
  ) -> Result<&Self> {
    let interface = interface.into();
    let implementation = implementation.into();
    if self.config.verify_implementations {
      if !self.source.contains(&implementation) {
        return Err(InjectorError::UnresolvableClass(implementation));
      }
      if !self.source.implements(&implementation, &interface) {
        return Err(InjectorError::NotAnImplementation {
          interface,
          class: implementation,
        });
      }
    }
    let state = self.state.lock();
    state.borrow_mut().interfaces.register(
      interface,
      implementation,
      self.config.interface_duplicates,
    )?;
    Ok(self)
  }

  // --- Resolution ---

  /// Builds, or reuses, an instance of `class`.
  ///
  /// Dependency cycles are not detected: a class graph that refers back to
  /// itself recurses until the stack is exhausted.
  pub fn resolve(&self, class: impl Into<ClassName>) -> Result<Object> {
    let class = class.into();
    let state = self.state.lock();
    self.resolve_class(&state, &class)
  }

  /// Like [`resolve`](Self::resolve), downcasting the result to `T`.
  pub fn resolve_as<T: Any + Send + Sync>(&self, class: impl Into<ClassName>) -> Result<Arc<T>> {
    let class = class.into();
    self
      .resolve(class.clone())?
      .downcast::<T>()
      .map_err(|_| InjectorError::TypeMismatch {
        class,
        expected: std::any::type_name::<T>(),
      })
  }

  /// Calls `method` on `object` with its dependencies resolved, returning
  /// whatever the method returns.
  pub fn resolve_method(&self, object: &Object, method: &str) -> Result<Option<Object>> {
    let class = self.type_name_of(object).ok_or(InjectorError::UnknownType)?;
    let state = self.state.lock();

    let missing = || InjectorError::MissingMethod {
      class: class.clone(),
      method: method.to_owned(),
    };
    let overload = select_overload(self.source.methods(&class)?, method).ok_or_else(missing)?;
    let dependencies = overload.parameter_types();
    let invoker = match overload.body {
      MethodBody::Invoke(invoker) => invoker,
      MethodBody::Construct(_) => return Err(missing()),
    };

    let args = self.resolve_all(&state, &dependencies)?;
    trace!(class = %class, method, args = args.len(), "invoking method");
    invoker(object, args)
  }

  // --- Introspection ---

  /// True when a live instance is pinned for `class`.
  pub fn has_singleton(&self, class: &ClassName) -> bool {
    self.state.lock().borrow().singletons.has(class)
  }

  pub fn implementation_of(&self, interface: &ClassName) -> Option<ClassName> {
    self.state.lock().borrow().interfaces.lookup(interface).cloned()
  }

  /// The parameter types that resolving `method` on `class` would inject.
  pub fn dependencies_of(&self, class: &ClassName, method: &str) -> Result<Vec<ClassName>> {
    discover_parameter_types(&*self.source, class, method)
  }

  /// The class `object` is an instance of.
  pub fn type_name_of(&self, object: &Object) -> Option<ClassName> {
    if object.is::<Injector>() {
      return Some(self.config.resolver_class.clone());
    }
    self.source.type_name_of(object)
  }

  // --- Graph building ---

  fn shortcut(&self, state: &RefCell<Registries>, class: &ClassName) -> Option<Shortcut> {
    let registries = state.borrow();
    if let Some(instance) = registries.singletons.get(class) {
      return Some(Shortcut::Singleton(instance));
    }
    registries
      .interfaces
      .lookup(class)
      .cloned()
      .map(Shortcut::Interface)
  }

  fn resolve_class(&self, state: &RefCell<Registries>, class: &ClassName) -> Result<Object> {
    match self.shortcut(state, class) {
      Some(Shortcut::Singleton(instance)) => {
        trace!(class = %class, "resolved singleton");
        return Ok(instance);
      }
      Some(Shortcut::Interface(implementation)) => {
        trace!(interface = %class, implementation = %implementation, "resolving implementation");
        return self.resolve_class(state, &implementation);
      }
      None => {}
    }

    let (constructor, dependencies) =
      match select_overload(self.source.methods(class)?, CONSTRUCT) {
        Some(overload) => {
          let dependencies = overload.parameter_types();
          match overload.body {
            MethodBody::Construct(constructor) => (constructor, dependencies),
            MethodBody::Invoke(_) => {
              return Err(InjectorError::NotConstructible {
                class: class.clone(),
                method: CONSTRUCT.to_owned(),
              })
            }
          }
        }
        None => (self.source.default_constructor(class)?, Vec::new()),
      };

    let args = self.resolve_all(state, &dependencies)?;
    let instance = constructor(args)?;
    trace!(class = %class, dependencies = dependencies.len(), "constructed");

    Ok(state.borrow_mut().singletons.promote(class, instance))
  }

  fn resolve_all(&self, state: &RefCell<Registries>, classes: &[ClassName]) -> Result<Arguments> {
    classes
      .iter()
      .map(|class| self.resolve_class(state, class))
      .collect::<Result<Vec<_>>>()
      .map(Arguments::new)
  }
}

impl std::fmt::Debug for Injector {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Injector")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}
