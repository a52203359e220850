use fibre_injector::{global, global_catalog, resolve, Object};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define two concrete implementations
#[derive(Default)]
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

#[derive(Default)]
struct QuietLogger;
impl Logger for QuietLogger {
  fn log(&self, _message: &str) {}
}

// Objects are untyped at the injector boundary; recover the trait here.
fn as_logger(object: Object) -> Option<Arc<dyn Logger>> {
  if let Ok(logger) = object.clone().downcast::<ConsoleLogger>() {
    return Some(logger as Arc<dyn Logger>);
  }
  object.downcast::<QuietLogger>().ok().map(|l| l as Arc<dyn Logger>)
}

// 3. Define a service that depends on the interface name
struct ReportService {
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Generating report...");
    self.logger.log("Report finished.");
  }
}

fn main() {
  let catalog = global_catalog();
  catalog.declare_interface("Demo.Logger").unwrap();
  catalog
    .define::<ConsoleLogger>("Demo.ConsoleLogger")
    .with_default()
    .implements("Demo.Logger")
    .register()
    .unwrap();
  catalog
    .define::<QuietLogger>("Demo.QuietLogger")
    .with_default()
    .implements("Demo.Logger")
    .register()
    .unwrap();
  catalog
    .define::<ReportService>("Demo.ReportService")
    .constructor(&["Demo.Logger"], |args| {
      let logger = as_logger(args.object(0)?).ok_or(fibre_injector::InjectorError::ArgumentType {
        index: 0,
        expected: "dyn Logger",
      })?;
      Ok(ReportService { logger })
    })
    .register()
    .unwrap();

  // 4. Bind the interface to an implementation
  global()
    .register_interface("Demo.Logger", "Demo.ConsoleLogger")
    .unwrap();

  // 5. Resolve the service; the interface is built as the bound class
  let service = resolve!("Demo.ReportService" as ReportService);
  service.generate_report();

  println!(
    "Demo.Logger is implemented by {:?}",
    global().implementation_of(&"Demo.Logger".into())
  );
}
