//! The global catalog and injector instances and access functions.

use crate::catalog::ClassCatalog;
use crate::injector::Injector;
use once_cell::sync::Lazy;
use std::sync::Arc;

// Created on first access in a thread-safe manner.
static GLOBAL_CATALOG: Lazy<Arc<ClassCatalog>> = Lazy::new(|| Arc::new(ClassCatalog::new()));

static GLOBAL_INJECTOR: Lazy<Arc<Injector>> = Lazy::new(|| Injector::new(global_catalog().clone()));

/// Provides a reference to the global class catalog.
///
/// Classes defined here are visible to the [`global`] injector.
///
/// # Examples
///
/// ```
/// use fibre_injector::global_catalog;
///
/// #[derive(Default)]
/// struct Clock;
///
/// global_catalog()
///   .define::<Clock>("Doc.Global.Clock")
///   .with_default()
///   .register()
///   .unwrap();
/// ```
pub fn global_catalog() -> &'static Arc<ClassCatalog> {
  &GLOBAL_CATALOG
}

/// Provides a reference to the global injector, built over [`global_catalog`]
/// with the default configuration.
pub fn global() -> &'static Arc<Injector> {
  &GLOBAL_INJECTOR
}
