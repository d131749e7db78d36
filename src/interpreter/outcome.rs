use serde::{Serialize, Serializer};

use crate::error::Error;

/// The result of one call to [`crate::execute`].
///
/// Every variant carries the complete output log of the call. Because each
/// call replays the program from the top, the log is the full output so far,
/// never a delta to append to an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The program ran to its end.
    Completed {
        /// Every printed value, in order.
        output: Vec<String>,
    },
    /// An input statement found no value for its variable.
    Paused {
        /// The variable the host has to supply before calling again.
        needed: String,
        /// Output printed before the input statement.
        output: Vec<String>,
    },
    /// Lexing, parsing or evaluation failed.
    Failed {
        /// What went wrong.
        error:  Error,
        /// Output printed before the failure.
        output: Vec<String>,
    },
}

impl Outcome {
    /// The output log, whatever the variant.
    #[must_use]
    pub fn output(&self) -> &[String] {
        match self {
            Self::Completed { output } | Self::Paused { output, .. } | Self::Failed { output, .. } => {
                output
            },
        }
    }

    /// Consumes the outcome and returns its output log.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        match self {
            Self::Completed { output } | Self::Paused { output, .. } | Self::Failed { output, .. } => {
                output
            },
        }
    }

    /// Returns `true` unless the program is waiting for input.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        !matches!(self, Self::Paused { .. })
    }

    /// The variable a paused program is waiting for.
    #[must_use]
    pub fn needed_input(&self) -> Option<&str> {
        match self {
            Self::Paused { needed, .. } => Some(needed.as_str()),
            _ => None,
        }
    }

    /// The error of a failed call.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Renders the outcome as the JSON response body a host sends back.
    ///
    /// # Errors
    /// Propagates serializer failures, which do not occur for this type in
    /// practice.
    ///
    /// # Example
    /// ```
    /// use alpha::{SuppliedInputs, run};
    ///
    /// let paused = run("< 1\n> n", &mut SuppliedInputs::new());
    /// assert_eq!(paused.to_json().unwrap(), r#"{"need_input":"n","output":["1"]}"#);
    ///
    /// let done = run("< 2", &mut SuppliedInputs::new());
    /// assert_eq!(done.to_json().unwrap(), r#"{"done":true,"output":["2"]}"#);
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The three response shapes understood by hosts:
/// `{done, output}`, `{done, output, error}` and `{need_input, output}`.
#[derive(Serialize)]
struct Response<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    done:       Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    need_input: Option<&'a str>,
    output:     &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    error:      Option<String>,
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let response = Response { done:       self.is_done().then_some(true),
                                  need_input: self.needed_input(),
                                  output:     self.output(),
                                  error:      self.error().map(ToString::to_string), };
        response.serialize(serializer)
    }
}
