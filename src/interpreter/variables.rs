use std::collections::HashMap;

/// Stores the values assigned to variables during a session.
///
/// The store is created once, owned by the caller and passed by `&mut` to
/// the parser. Assignment parsing is the only writer and variable
/// references are the only readers. Names are never removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableStore {
    values: HashMap<String, i64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the last value assigned to `name`.
    ///
    /// ## Example
    /// ```
    /// use algebra::interpreter::variables::VariableStore;
    ///
    /// let mut variables = VariableStore::new();
    /// assert_eq!(variables.get("x"), None);
    ///
    /// variables.assign("x", 7);
    /// variables.assign("x", 9);
    /// assert_eq!(variables.get("x"), Some(9));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn assign(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(name.into(), value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
