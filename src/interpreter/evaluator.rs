/// Core evaluation logic for expressions and statements.
///
/// Contains the evaluation context, the result types and the dispatch over
/// every statement and expression kind.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic, floor division and the equality
/// comparisons used by loop conditions.
pub mod binary;

/// Input statement evaluation.
///
/// Holds the host-supplied values and consumes them, or pauses the program
/// when the value it needs has not been supplied yet.
pub mod input;

/// `while` loop evaluation.
pub mod while_loop;

/// Cooperative limits on a single evaluation.
///
/// The watchdog is checked before every statement and loop iteration so a host
/// can bound runaway programs without killing a thread.
pub mod watchdog;
