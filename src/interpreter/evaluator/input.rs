use std::collections::{HashMap, VecDeque};

use log::debug;
use serde::Deserialize;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult, Flow},
    util::num::parse_integer_input,
};

/// Values the host has supplied for input statements, keyed by variable name.
///
/// Every value is consumed at most once: an input statement that uses a value
/// removes it. A name can hold several values, which are handed out in the
/// order they were supplied. That lets a loop reading the same variable on
/// every iteration replay each iteration with its own value.
///
/// Values are kept as raw text and only parsed when an input statement
/// consumes them.
///
/// # Example
/// ```
/// use alpha::SuppliedInputs;
///
/// let mut inputs: SuppliedInputs = [("n", "1"), ("n", "2"), ("m", "3")].into_iter().collect();
/// assert_eq!(inputs.len(), 3);
/// assert_eq!(inputs.take("n").as_deref(), Some("1"));
/// assert_eq!(inputs.take("n").as_deref(), Some("2"));
/// assert_eq!(inputs.take("n"), None);
/// assert!(inputs.contains("m"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawInputs")]
pub struct SuppliedInputs {
    queues: HashMap<String, VecDeque<String>>,
}

impl SuppliedInputs {
    /// Creates an empty set of inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a value for `name` behind any values already queued for it.
    pub fn supply(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.queues
            .entry(name.into())
            .or_default()
            .push_back(value.into());
    }

    /// Removes and returns the oldest value queued for `name`.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let queue = self.queues.get_mut(name)?;
        let value = queue.pop_front();
        if queue.is_empty() {
            self.queues.remove(name);
        }
        value
    }

    /// Returns `true` if at least one value is queued for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.queues.contains_key(name)
    }

    /// Total number of values not consumed yet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Returns `true` if every value has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for SuppliedInputs {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.supply(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SuppliedInputs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut inputs = Self::new();
        inputs.extend(iter);
        inputs
    }
}

impl From<HashMap<String, String>> for SuppliedInputs {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// A supplied value as it may appear in a request body.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Integer(i64),
}

impl From<RawValue> for String {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Text(text) => text,
            RawValue::Integer(number) => number.to_string(),
        }
    }
}

/// Accepted request shapes: `{"n": "7"}` or `[["n", "7"], ["n", 8]]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInputs {
    Map(HashMap<String, RawValue>),
    Pairs(Vec<(String, RawValue)>),
}

impl From<RawInputs> for SuppliedInputs {
    fn from(raw: RawInputs) -> Self {
        match raw {
            RawInputs::Map(map) => map.into_iter().collect(),
            RawInputs::Pairs(pairs) => pairs.into_iter().collect(),
        }
    }
}

impl Context<'_> {
    /// Evaluates an input statement.
    ///
    /// If a value is queued for `name` it is removed, parsed as an integer and
    /// bound. Otherwise the statement pauses the program: the host is expected
    /// to supply the value and run the program again from the top.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidInput`] if the consumed value is not an integer.
    pub fn eval_input(&mut self, name: &str, line: usize) -> EvalResult<Flow> {
        let Some(raw) = self.inputs.take(name) else {
            debug!("line {line}: no value supplied for '{name}'");
            return Ok(Flow::Pause(name.to_string()));
        };

        let value = parse_integer_input(&raw).ok_or_else(|| {
                                                  RuntimeError::InvalidInput { name: name.to_string(),
                                                                               value: raw.clone(),
                                                                               line }
                                              })?;

        debug!("line {line}: consumed {value} for '{name}'");
        self.variables.insert(name.to_string(), value);
        Ok(Flow::Continue)
    }
}
