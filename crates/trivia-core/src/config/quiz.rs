//! Quiz configuration.

use serde::{Deserialize, Serialize};

/// Quiz selection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Fixed RNG seed. When absent, picks use the thread-local generator.
    #[serde(default)]
    pub seed: Option<u64>,
}
