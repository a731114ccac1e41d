use std::collections::HashMap;

use dashu::integer::IBig;

/// The variable bindings of a session.
///
/// Maps each assigned identifier to its value. Entries only appear through
/// [`Bindings::set`] and are never removed; a later assignment replaces the
/// earlier value.
///
/// ## Usage
///
/// A `Bindings` is created once per session and passed explicitly to the
/// assignment path (mutably) and to the evaluator (read-only).
///
/// ```
/// use bigcalc::interpreter::bindings::Bindings;
/// use dashu::integer::IBig;
///
/// let mut bindings = Bindings::new();
/// assert!(bindings.is_empty());
/// assert!(bindings.get("x").is_none());
///
/// bindings.set("x", IBig::from(5));
/// bindings.set("x", IBig::from(7));
/// assert_eq!(bindings.get("x"), Some(&IBig::from(7)));
/// assert_eq!(bindings.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    variables: HashMap<String, IBig>,
}

impl Bindings {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IBig> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: IBig) {
        self.variables.insert(name.into(), value);
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
