use fibre_injector::{global, maybe_resolve};

struct UnregisteredService;

fn main() {
  println!("Attempting to resolve a class that was never defined...");

  // `maybe_resolve!` returns None instead of panicking.
  let service = maybe_resolve!("Demo.UnregisteredService" as UnregisteredService);
  assert!(service.is_none());
  println!("maybe_resolve! returned None, as expected.");

  // The injector methods report why.
  match global().resolve("Demo.UnregisteredService") {
    Ok(_) => unreachable!(),
    Err(e) => println!("Error: {}", e),
  }

  println!("\nNow using resolve!, which will panic...");
  // This will panic with a message like:
  // "Failed to resolve required class 'Demo.UnregisteredService': Unable to resolve a constructible class for 'Demo.UnregisteredService'"
  let _service = fibre_injector::resolve!("Demo.UnregisteredService" as UnregisteredService);
}
