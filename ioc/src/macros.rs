//! Public macros for ergonomic resolution.

/// Resolves from the global injector, panicking if resolution fails.
///
/// # Forms
///
/// - `resolve!("Pkg.Name")` yields an `Object`.
/// - `resolve!("Pkg.Name" as Type)` yields an `Arc<Type>`.
/// - `resolve!(object => "method")` calls `method` on `object` and yields its
///   `Option<Object>` return value.
///
/// # Panics
///
/// Panics with the resolution error. For a non-panicking version, use
/// [`maybe_resolve!`] or the [`Injector`](crate::Injector) methods directly.
///
/// # Examples
///
/// ```
/// use fibre_injector::{global_catalog, resolve};
///
/// #[derive(Default)]
/// struct Greeting;
///
/// global_catalog()
///   .define::<Greeting>("Doc.Macro.Greeting")
///   .with_default()
///   .register()
///   .unwrap();
///
/// let greeting = resolve!("Doc.Macro.Greeting" as Greeting);
/// ```
#[macro_export]
macro_rules! resolve {
  ($object:expr => $method:expr) => {
    $crate::resolve_from!($crate::global(), $object => $method)
  };
  ($class:literal as $type:ty) => {
    $crate::resolve_from!($crate::global(), $class as $type)
  };
  ($class:expr) => {
    $crate::resolve_from!($crate::global(), $class)
  };
}

/// Resolves from the given injector, panicking if resolution fails.
///
/// Takes the same forms as [`resolve!`], prefixed by the injector.
#[macro_export]
macro_rules! resolve_from {
  ($injector:expr, $object:expr => $method:expr) => {
    $injector
      .resolve_method(&$object, $method)
      .unwrap_or_else(|e| panic!("Failed to resolve method '{}': {}", $method, e))
  };
  ($injector:expr, $class:literal as $type:ty) => {
    $injector
      .resolve_as::<$type>($class)
      .unwrap_or_else(|e| panic!("Failed to resolve required class '{}': {}", $class, e))
  };
  ($injector:expr, $class:expr) => {
    $injector
      .resolve($class)
      .unwrap_or_else(|e| panic!("Failed to resolve required class: {}", e))
  };
}

/// Resolves from the global injector, returning `None` on failure.
#[macro_export]
macro_rules! maybe_resolve {
  ($object:expr => $method:expr) => {
    $crate::maybe_resolve_from!($crate::global(), $object => $method)
  };
  ($class:literal as $type:ty) => {
    $crate::maybe_resolve_from!($crate::global(), $class as $type)
  };
  ($class:expr) => {
    $crate::maybe_resolve_from!($crate::global(), $class)
  };
}

/// Resolves from the given injector, returning `None` on failure.
#[macro_export]
macro_rules! maybe_resolve_from {
  ($injector:expr, $object:expr => $method:expr) => {
    $injector.resolve_method(&$object, $method).ok()
  };
  ($injector:expr, $class:literal as $type:ty) => {
    $injector.resolve_as::<$type>($class).ok()
  };
  ($injector:expr, $class:expr) => {
    $injector.resolve($class).ok()
  };
}
