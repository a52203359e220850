//! Picks the overload of a method to inject and reports its parameter types.

use crate::class_name::ClassName;
use crate::error::Result;
use crate::reflect::{Method, Reflection};

/// Selects the overload of `name` with the fewest parameters. Among overloads
/// of equal arity the first declared wins.
pub fn select_overload(methods: Vec<Method>, name: &str) -> Option<Method> {
  methods
    .into_iter()
    .filter(|method| method.name == name)
    .min_by_key(Method::arity)
}

/// The parameter types of the narrowest overload of `method` on `class`, in
/// declared order. Empty when `class` declares no such method.
pub fn discover_parameter_types<R: Reflection + ?Sized>(
  reflection: &R,
  class: &ClassName,
  method: &str,
) -> Result<Vec<ClassName>> {
  let methods = reflection.methods(class)?;
  Ok(
    select_overload(methods, method)
      .map(|overload| overload.parameter_types())
      .unwrap_or_default(),
  )
}
