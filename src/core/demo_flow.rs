//! Book-a-demo request
//!
//! editing --submit--> submitting --submission timer--> submitted

use derive_more::Display;

use super::error::FlowError;
use super::flow::SubmitOutcome;
use super::forms::DemoRequest;
use super::scheduler::{Scheduler, TimerPurpose, TimerSlot, TimerToken};
use super::settings::FlowSettings;
use super::validation::{DemoField, ValidationResult, validate_demo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DemoStage {
    #[display("editing")]
    Editing,
    #[display("submitting")]
    Submitting,
    #[display("submitted")]
    Submitted,
}

pub struct DemoRequestFlow<S: Scheduler> {
    settings: FlowSettings,
    stage: DemoStage,
    request: DemoRequest,
    errors: ValidationResult<DemoField>,
    timer: TimerSlot<S>,
}

impl<S: Scheduler> DemoRequestFlow<S> {
    pub fn new(settings: FlowSettings) -> Self {
        Self {
            settings,
            stage: DemoStage::Editing,
            request: DemoRequest::default(),
            errors: ValidationResult::new(),
            timer: TimerSlot::new(),
        }
    }

    pub fn stage(&self) -> DemoStage {
        self.stage
    }

    pub fn request(&self) -> &DemoRequest {
        &self.request
    }

    pub fn errors(&self) -> &ValidationResult<DemoField> {
        &self.errors
    }

    /// First name for the thank-you note, once the request went through
    pub fn thank_you_name(&self) -> Option<&str> {
        (self.stage == DemoStage::Submitted).then(|| self.request.first_name())
    }

    pub fn edit(&mut self, field: DemoField, value: &str) -> Result<(), FlowError> {
        if self.stage != DemoStage::Editing {
            return Err(FlowError::wrong_stage("edit the request", self.stage));
        }

        let slot = match field {
            DemoField::FullName => &mut self.request.full_name,
            DemoField::Company => &mut self.request.company,
            DemoField::Email => &mut self.request.email,
            DemoField::Phone => &mut self.request.phone,
            DemoField::Notes => &mut self.request.notes,
        };
        *slot = value.to_string();
        self.errors.clear_field(field);
        Ok(())
    }

    pub fn submit(&mut self, scheduler: &S) -> Result<SubmitOutcome, FlowError> {
        if self.stage != DemoStage::Editing {
            return Err(FlowError::wrong_stage("submit", self.stage));
        }

        self.errors = validate_demo(&self.request);
        if !self.errors.is_valid() {
            return Ok(SubmitOutcome::Rejected);
        }

        self.stage = DemoStage::Submitting;
        self.timer.arm(
            scheduler,
            self.settings.demo_submission_delay,
            TimerPurpose::DemoSubmission,
        );
        Ok(SubmitOutcome::Accepted)
    }

    /// Deliver a fired timer. Returns whether the flow moved on.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.timer.accept(token) || self.stage != DemoStage::Submitting {
            return false;
        }

        match serde_json::to_string(&self.request) {
            Ok(json) => leptos::logging::log!("Demo requested: {}", json),
            Err(e) => leptos::logging::warn!("Failed to serialize demo request: {}", e),
        }
        self.stage = DemoStage::Submitted;
        true
    }

    /// Start over with an empty request
    pub fn reopen(&mut self, scheduler: &S) {
        self.timer.disarm(scheduler);
        self.stage = DemoStage::Editing;
        self.request = DemoRequest::default();
        self.errors = ValidationResult::new();
    }

    pub fn close(&mut self, scheduler: &S) {
        self.reopen(scheduler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::ManualScheduler;
    use crate::core::validation::FieldError;
    use std::time::Duration;

    fn filled() -> DemoRequestFlow<ManualScheduler> {
        let mut flow = DemoRequestFlow::new(FlowSettings::default());
        flow.edit(DemoField::FullName, " Maria  Lopez").unwrap();
        flow.edit(DemoField::Company, "Hotel Arts").unwrap();
        flow.edit(DemoField::Email, "maria@arts.es").unwrap();
        flow
    }

    #[test]
    fn test_short_phone_is_rejected() {
        let clock = ManualScheduler::new();
        let mut flow = filled();
        flow.edit(DemoField::Phone, "12-34").unwrap();

        assert_eq!(flow.submit(&clock).unwrap(), SubmitOutcome::Rejected);
        assert_eq!(flow.errors().get(DemoField::Phone), Some(FieldError::InvalidFormat));
        assert_eq!(flow.stage(), DemoStage::Editing);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_submitted_exposes_first_name() {
        let clock = ManualScheduler::new();
        let mut flow = filled();
        flow.edit(DemoField::Phone, "+34 600 123 456").unwrap();

        assert!(flow.submit(&clock).unwrap().is_accepted());
        assert_eq!(flow.thank_you_name(), None);

        let fired = clock.advance(Duration::from_millis(1200));
        assert!(flow.on_timer(fired[0]));
        assert_eq!(flow.stage(), DemoStage::Submitted);
        assert_eq!(flow.thank_you_name(), Some("Maria"));
    }

    #[test]
    fn test_reopen_discards_request_and_timer() {
        let clock = ManualScheduler::new();
        let mut flow = filled();
        flow.submit(&clock).unwrap();

        flow.reopen(&clock);

        assert_eq!(clock.pending(), 0);
        assert_eq!(flow.stage(), DemoStage::Editing);
        assert_eq!(flow.request(), &DemoRequest::default());
        assert!(!flow.on_timer(TimerToken::new(0, TimerPurpose::DemoSubmission)));
    }

    #[test]
    fn test_edit_while_submitting_is_an_error() {
        let clock = ManualScheduler::new();
        let mut flow = filled();
        flow.submit(&clock).unwrap();

        assert!(matches!(
            flow.edit(DemoField::Notes, "hi"),
            Err(FlowError::WrongStage { .. })
        ));
    }
}
