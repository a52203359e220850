use fibre_injector::{global, global_catalog, resolve};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn new_tracker() -> RequestTracker {
  println!("Creating RequestTracker...");
  RequestTracker {
    id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
  }
}

struct Handler {
  tracker: Arc<RequestTracker>,
}

fn main() {
  global_catalog()
    .define::<RequestTracker>("Demo.RequestTracker")
    .default_constructor(new_tracker)
    .register()
    .unwrap();
  global_catalog()
    .define::<Handler>("Demo.Handler")
    .constructor(&["Demo.RequestTracker"], |args| {
      Ok(Handler {
        tracker: args.get(0)?,
      })
    })
    .register()
    .unwrap();

  println!("--- Transient Resolution ---");
  let t1 = resolve!("Demo.RequestTracker" as RequestTracker);
  let t2 = resolve!("Demo.RequestTracker" as RequestTracker);
  println!("Transient 1 ID: {}, Transient 2 ID: {}", t1.id, t2.id);
  assert!(!Arc::ptr_eq(&t1, &t2), "Transient instances should be different");

  println!("\n--- Singleton Class ---");
  // The next instance built is kept and shared from then on.
  global().register_singleton_class("Demo.RequestTracker").unwrap();

  let h1 = resolve!("Demo.Handler" as Handler);
  let h2 = resolve!("Demo.Handler" as Handler);
  let s = resolve!("Demo.RequestTracker" as RequestTracker);
  println!(
    "Handler 1 tracker: {}, Handler 2 tracker: {}, direct: {}",
    h1.tracker.id, h2.tracker.id, s.id
  );
  assert!(Arc::ptr_eq(&h1.tracker, &h2.tracker));
  assert!(Arc::ptr_eq(&h1.tracker, &s));
  println!("Every handler shares the same tracker, as expected.");
}
