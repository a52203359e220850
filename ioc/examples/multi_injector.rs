use fibre_injector::{
  global, global_catalog, resolve, resolve_from, ClassCatalog, DuplicatePolicy, Injector,
  InjectorConfig,
};
use std::sync::Arc;

#[derive(Debug)]
struct DatabaseConfig {
  url: String,
}

fn main() {
  // --- Global Injector ---
  // Configured for the main application environment.
  global_catalog()
    .define::<DatabaseConfig>("App.DatabaseConfig")
    .default_constructor(|| DatabaseConfig {
      url: "postgres://prod_user@prod_host/prod_db".to_string(),
    })
    .register()
    .unwrap();
  global().register_singleton_class("App.DatabaseConfig").unwrap();

  // --- Local Injector ---
  // Its own catalog, its own registries and its own name for itself.
  let test_catalog = Arc::new(ClassCatalog::new());
  test_catalog
    .define::<DatabaseConfig>("App.DatabaseConfig")
    .default_constructor(|| DatabaseConfig {
      url: "sqlite::memory:".to_string(),
    })
    .register()
    .unwrap();
  let config = InjectorConfig {
    resolver_class: "Test.Injector".into(),
    singleton_duplicates: DuplicatePolicy::Ignore,
    ..InjectorConfig::default()
  };
  let test_injector = Injector::with_config(test_catalog, config);

  println!("--- Resolving from Global Injector ---");
  let prod_config = resolve!("App.DatabaseConfig" as DatabaseConfig);
  println!("Prod DB URL: {}", prod_config.url);
  assert_eq!(prod_config.url, "postgres://prod_user@prod_host/prod_db");

  println!("\n--- Resolving from Local Injector ---");
  let test_config = resolve_from!(test_injector, "App.DatabaseConfig" as DatabaseConfig);
  println!("Test DB URL: {}", test_config.url);
  assert_eq!(test_config.url, "sqlite::memory:");

  let itself = resolve_from!(test_injector, "Test.Injector" as Injector);
  assert!(Arc::ptr_eq(&itself, &test_injector));
  println!("\nThe local injector resolves itself as 'Test.Injector'.");
}
