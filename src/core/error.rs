//! Errors raised by the lead-capture flows.
//!
//! None of these are fatal: the drawers catch them at the component boundary,
//! log them and show a generic notice while keeping whatever the visitor typed.

/// Flow error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("cannot {action} while the flow is {stage}")]
    WrongStage { action: &'static str, stage: String },

    #[error("competitor slot {index} does not exist ({len} slots)")]
    CompetitorOutOfRange { index: usize, len: usize },

    #[error("unknown distribution channel: {0}")]
    UnknownChannel(String),

    #[error("unknown {field} option: {value}")]
    UnknownOption { field: &'static str, value: String },

    #[error("navigation failed: {0}")]
    Navigation(String),
}

impl FlowError {
    pub(crate) fn wrong_stage(action: &'static str, stage: impl ToString) -> Self {
        FlowError::WrongStage {
            action,
            stage: stage.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_stage_display() {
        let err = FlowError::wrong_stage("confirm", "collecting");
        assert_eq!(err.to_string(), "cannot confirm while the flow is collecting");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = FlowError::CompetitorOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "competitor slot 7 does not exist (5 slots)");
    }
}
