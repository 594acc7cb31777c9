use super::pair::RequiredConnection;
use serde::{Deserialize, Serialize};

/// One ordered step of a guided training sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStep {
    pub step_number: u32,
    pub required_connections: Vec<RequiredConnection>,
    pub instructions: String,
}

impl TrainingStep {
    pub fn new(
        step_number: u32,
        required_connections: Vec<RequiredConnection>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            step_number,
            required_connections,
            instructions: instructions.into(),
        }
    }
}
