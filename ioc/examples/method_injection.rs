use fibre_injector::{object, ClassCatalog, Injector};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Clock;

impl Clock {
  fn now(&self) -> &'static str {
    "12:00"
  }
}

#[derive(Default)]
struct Greeter {
  greetings: Mutex<Vec<String>>,
}

fn main() {
  let catalog = Arc::new(ClassCatalog::new());
  catalog.define::<Clock>("Demo.Clock").with_default().register().unwrap();
  catalog
    .define::<Greeter>("Demo.Greeter")
    .with_default()
    // Two overloads share a name; the one with fewer parameters is injected.
    .method("greet", &["Demo.Clock"], |this: &Greeter, args| {
      let clock = args.get::<Clock>(0)?;
      let line = format!("Hello at {}", clock.now());
      this.greetings.lock().unwrap().push(line.clone());
      Ok(object(line))
    })
    .method("greet", &["Demo.Clock", "Demo.Clock"], |_: &Greeter, _| {
      Ok(object(String::from("never called")))
    })
    .register()
    .unwrap();

  let injector = Injector::new(catalog);
  println!(
    "greet needs: {:?}",
    injector.dependencies_of(&"Demo.Greeter".into(), "greet").unwrap()
  );

  // The method is invoked on an object the injector did not build.
  let greeter = object(Greeter::default());
  let returned = injector.resolve_method(&greeter, "greet").unwrap();
  let line = returned.unwrap().downcast::<String>().unwrap();
  println!("greet returned: {}", line);

  let greeter = greeter.downcast::<Greeter>().unwrap();
  assert_eq!(greeter.greetings.lock().unwrap().len(), 1);
}
