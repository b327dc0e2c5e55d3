//! Quiz mode: random, non-repeating question selection.

pub mod selector;
pub mod service;

pub use selector::{QuizPick, QuizSelector};
pub use service::{QuizCategory, QuizQuestion, QuizRequest, QuizService};
