use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    execute,
    interpreter::{
        evaluator::{input::SuppliedInputs, watchdog::Watchdog},
        outcome::Outcome,
    },
};

/// Host-side state of one interactive run: the source and every value
/// supplied so far.
///
/// A session never holds a live evaluation. Each [`Session::resume`] replays
/// the program from the top with a fresh copy of the journal, so the journal
/// is all that has to survive between requests. It serializes with serde for
/// hosts that persist it outside the process.
///
/// Values are replayed in the order they were provided, which is also the
/// order the program asked for them.
///
/// # Example
/// ```
/// use alpha::{Outcome, Session, Watchdog};
///
/// let mut session = Session::new("> a\n> b\n< a + b");
/// let mut watchdog = Watchdog::unbounded();
///
/// assert_eq!(session.resume(&mut watchdog).needed_input(), Some("a"));
/// session.provide("a", "2");
/// assert_eq!(session.resume(&mut watchdog).needed_input(), Some("b"));
/// session.provide("b", "40");
///
/// assert_eq!(session.resume(&mut watchdog),
///            Outcome::Completed { output: vec!["42".to_string()] });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    source:  String,
    journal: Vec<(String, String)>,
}

impl Session {
    /// Starts a session for `source` with nothing supplied yet.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self { source:  source.into(),
               journal: Vec::new(), }
    }

    /// The program text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Every `(name, value)` pair provided so far, oldest first.
    #[must_use]
    pub fn journal(&self) -> &[(String, String)] {
        &self.journal
    }

    /// Records the value for the input the program is waiting for.
    pub fn provide(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.journal.push((name.into(), value.into()));
    }

    /// Runs the program again from the top with every recorded value.
    pub fn resume(&self, watchdog: &mut Watchdog) -> Outcome {
        let mut inputs: SuppliedInputs = self.journal.iter().cloned().collect();
        let outcome = execute(&self.source, &mut inputs, watchdog);

        if outcome.is_done() && !inputs.is_empty() {
            debug!("run finished with {} supplied values left unused", inputs.len());
        }
        outcome
    }
}
