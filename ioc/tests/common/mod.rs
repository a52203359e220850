// ioc/tests/common/mod.rs

//! Shared test fixtures: a small class hierarchy registered in a fresh catalog.

#![allow(dead_code)]

use fibre_injector::{object, ClassCatalog, Injector, Object};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const SIMPLE: &str = "ToolsTest.SimpleClass";
pub const SINGLE: &str = "ToolsTest.SingleDependency";
pub const MULTIPLE: &str = "ToolsTest.MultipleDependencies";
pub const NESTED: &str = "ToolsTest.NestedDependencies";
pub const METHOD: &str = "ToolsTest.MethodDependency";
pub const NESTED_METHOD: &str = "ToolsTest.NestedMethodDependency";
pub const INTERFACE: &str = "ToolsTest.IMyInterface";
pub const IMPLEMENTATION: &str = "ToolsTest.InterfaceImplementation";
pub const OTHER_IMPLEMENTATION: &str = "ToolsTest.OtherImplementation";
pub const OVERLOADED: &str = "ToolsTest.Overloaded";
pub const COUNTER: &str = "ToolsTest.Counter";
pub const CONSUMER: &str = "ToolsTest.InterfaceConsumer";
pub const NEEDS_INJECTOR: &str = "ToolsTest.NeedsInjector";
pub const NO_CONSTRUCTOR: &str = "ToolsTest.NoConstructor";

#[derive(Debug, Default)]
pub struct SimpleClass;

pub struct SingleDependency {
  pub simple_object: Arc<SimpleClass>,
}

pub struct MultipleDependencies {
  pub arguments: Vec<Object>,
}

pub struct NestedDependencies {
  pub object: Arc<MultipleDependencies>,
}

#[derive(Default)]
pub struct MethodDependency {
  pub simple_object: OnceCell<Arc<SimpleClass>>,
}

#[derive(Default)]
pub struct NestedMethodDependency {
  pub object: OnceCell<Arc<MultipleDependencies>>,
}

#[derive(Default)]
pub struct InterfaceImplementation;

#[derive(Default)]
pub struct OtherImplementation;

/// Two `construct` overloads; records which one was used.
pub struct Overloaded {
  pub arity: usize,
}

/// Counts calls to `increment` and hands back the argument it was given.
#[derive(Default)]
pub struct Counter {
  pub calls: AtomicUsize,
  pub last_argument: OnceCell<Arc<SimpleClass>>,
}

impl Counter {
  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

pub struct InterfaceConsumer {
  pub dependency: Object,
}

pub struct NeedsInjector {
  pub injector: Arc<Injector>,
}

/// Declares no constructor and has no default; it cannot be built.
pub struct NoConstructor;

pub fn catalog() -> Arc<ClassCatalog> {
  let catalog = Arc::new(ClassCatalog::new());

  catalog.define::<SimpleClass>(SIMPLE).with_default().register().unwrap();

  catalog
    .define::<SingleDependency>(SINGLE)
    .constructor(&[SIMPLE], |args| {
      Ok(SingleDependency {
        simple_object: args.get(0)?,
      })
    })
    .register()
    .unwrap();

  catalog
    .define::<MultipleDependencies>(MULTIPLE)
    .constructor(&[SIMPLE, SIMPLE], |args| {
      Ok(MultipleDependencies {
        arguments: args.into_vec(),
      })
    })
    .register()
    .unwrap();

  catalog
    .define::<NestedDependencies>(NESTED)
    .constructor(&[MULTIPLE], |args| {
      Ok(NestedDependencies { object: args.get(0)? })
    })
    .register()
    .unwrap();

  catalog
    .define::<MethodDependency>(METHOD)
    .with_default()
    .method("myMethod", &[SIMPLE], |this: &MethodDependency, args| {
      let _ = this.simple_object.set(args.get(0)?);
      Ok(())
    })
    .register()
    .unwrap();

  catalog
    .define::<NestedMethodDependency>(NESTED_METHOD)
    .with_default()
    .method("myMethod", &[MULTIPLE], |this: &NestedMethodDependency, args| {
      let _ = this.object.set(args.get(0)?);
      Ok(())
    })
    .register()
    .unwrap();

  catalog.declare_interface(INTERFACE).unwrap();
  catalog
    .define::<InterfaceImplementation>(IMPLEMENTATION)
    .with_default()
    .implements(INTERFACE)
    .register()
    .unwrap();
  catalog
    .define::<OtherImplementation>(OTHER_IMPLEMENTATION)
    .with_default()
    .register()
    .unwrap();

  catalog
    .define::<Overloaded>(OVERLOADED)
    .constructor(&[SIMPLE, SIMPLE], |_| Ok(Overloaded { arity: 2 }))
    .constructor(&[SIMPLE], |_| Ok(Overloaded { arity: 1 }))
    .register()
    .unwrap();

  catalog
    .define::<Counter>(COUNTER)
    .with_default()
    .method("increment", &[SIMPLE], |this: &Counter, args| {
      this.calls.fetch_add(1, Ordering::SeqCst);
      let argument = args.get::<SimpleClass>(0)?;
      let _ = this.last_argument.set(argument.clone());
      Ok(argument as Object)
    })
    .method(
      "increment",
      &[SIMPLE, SIMPLE],
      |_: &Counter, _| -> fibre_injector::Result<()> {
        unreachable!("the wider overload must never be chosen")
      },
    )
    .method("reset", &[], |this: &Counter, _| {
      this.calls.store(0, Ordering::SeqCst);
      Ok(())
    })
    .method("count", &[], |this: &Counter, _| Ok(object(this.calls())))
    .register()
    .unwrap();

  catalog
    .define::<InterfaceConsumer>(CONSUMER)
    .constructor(&[INTERFACE], |args| {
      Ok(InterfaceConsumer {
        dependency: args.object(0)?,
      })
    })
    .register()
    .unwrap();

  catalog
    .define::<NeedsInjector>(NEEDS_INJECTOR)
    .constructor(&[fibre_injector::DEFAULT_RESOLVER_CLASS], |args| {
      Ok(NeedsInjector {
        injector: args.get(0)?,
      })
    })
    .register()
    .unwrap();

  catalog.define::<NoConstructor>(NO_CONSTRUCTOR).register().unwrap();

  catalog
}

pub fn injector() -> Arc<Injector> {
  Injector::new(catalog())
}
