//! # Fibre Injector
//!
//! A reflective dependency injection resolver for Rust.
//!
//! Classes are described once, by name, in a [`ClassCatalog`]: the Rust type
//! backing them, the parameter types of their `construct` overloads and
//! methods, and the interfaces they implement. An [`Injector`] then builds
//! whole object graphs from a class name alone, resolving every declared
//! parameter type recursively.
//!
//! ## Core Concepts
//!
//! - **Catalog**: the explicit class registry the injector reflects on.
//! - **Resolution**: `resolve` builds a class, `resolve_method` calls a method on
//!   an existing object; both inject the declared parameters in order.
//! - **Overloads**: when several overloads share a name, the one with the
//!   fewest parameters is used.
//! - **Singletons**: an instance, or a class whose first instance is kept,
//!   returned by every later resolution. The injector is a singleton of itself.
//! - **Interfaces**: a name bound to the class built in its place. Each
//!   resolution is a fresh instance unless that class is a singleton.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_injector::{ClassCatalog, Injector};
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Config;
//!
//! struct Database {
//!   config: Arc<Config>,
//! }
//!
//! let catalog = Arc::new(ClassCatalog::new());
//! catalog.define::<Config>("App.Config").with_default().register().unwrap();
//! catalog
//!   .define::<Database>("App.Database")
//!   .constructor(&["App.Config"], |args| Ok(Database { config: args.get(0)? }))
//!   .register()
//!   .unwrap();
//!
//! let injector = Injector::new(catalog);
//! injector.register_singleton_class("App.Config").unwrap();
//!
//! let db = injector.resolve_as::<Database>("App.Database").unwrap();
//! let config = injector.resolve_as::<Config>("App.Config").unwrap();
//! assert!(Arc::ptr_eq(&db.config, &config));
//! ```

mod catalog;
mod class_name;
mod config;
mod discovery;
mod error;
mod global;
mod injector;
mod interface;
mod macros;
mod object;
pub mod reflect;
mod singleton;

pub use catalog::{ClassBuilder, ClassCatalog};
pub use class_name::ClassName;
pub use config::{DuplicatePolicy, InjectorConfig, DEFAULT_RESOLVER_CLASS};
pub use discovery::{discover_parameter_types, select_overload};
pub use error::{InjectorError, RegistryKind, Result};
pub use global::{global, global_catalog};
pub use injector::Injector;
pub use interface::InterfaceRegistry;
pub use object::{object, same_object, Arguments, IntoReturn, Object, WeakObject};
pub use singleton::{SingletonRegistry, SingletonSlot};
