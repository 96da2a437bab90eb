//! Outcomes shared by the drawer flows

/// Side effect the host must carry out after a timer fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEffect {
    /// Full-page navigation to the given URL
    Redirect(String),
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are available on the flow
    Rejected,
    /// Validation passed and the next timer is running
    Accepted,
}

impl SubmitOutcome {
    pub fn is_accepted(self) -> bool {
        self == SubmitOutcome::Accepted
    }
}
