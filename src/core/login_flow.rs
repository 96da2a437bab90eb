//! Sign-in drawer
//!
//! There is no account check here: any non-empty credentials pass, and after
//! a short delay the visitor is sent to the application, which does the real
//! sign-in.

use derive_more::Display;

use super::error::FlowError;
use super::flow::{FlowEffect, SubmitOutcome};
use super::forms::LoginForm;
use super::scheduler::{Scheduler, TimerPurpose, TimerSlot, TimerToken};
use super::settings::FlowSettings;
use super::validation::{LoginField, ValidationResult, validate_login};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LoginStage {
    #[display("editing")]
    Editing,
    #[display("signing in")]
    SigningIn,
}

pub struct LoginFlow<S: Scheduler> {
    settings: FlowSettings,
    stage: LoginStage,
    form: LoginForm,
    errors: ValidationResult<LoginField>,
    timer: TimerSlot<S>,
}

impl<S: Scheduler> LoginFlow<S> {
    pub fn new(settings: FlowSettings) -> Self {
        Self {
            settings,
            stage: LoginStage::Editing,
            form: LoginForm::default(),
            errors: ValidationResult::new(),
            timer: TimerSlot::new(),
        }
    }

    pub fn stage(&self) -> LoginStage {
        self.stage
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationResult<LoginField> {
        &self.errors
    }

    pub fn edit(&mut self, field: LoginField, value: &str) -> Result<(), FlowError> {
        if self.stage != LoginStage::Editing {
            return Err(FlowError::wrong_stage("edit credentials", self.stage));
        }

        match field {
            LoginField::Email => self.form.email = value.to_string(),
            LoginField::Password => self.form.password = value.to_string(),
        }
        self.errors.clear_field(field);
        Ok(())
    }

    pub fn submit(&mut self, scheduler: &S) -> Result<SubmitOutcome, FlowError> {
        if self.stage != LoginStage::Editing {
            return Err(FlowError::wrong_stage("sign in", self.stage));
        }

        self.errors = validate_login(&self.form);
        if !self.errors.is_valid() {
            return Ok(SubmitOutcome::Rejected);
        }

        leptos::logging::log!("Signing in {}", self.form.email.trim());
        self.stage = LoginStage::SigningIn;
        self.timer
            .arm(scheduler, self.settings.login_delay, TimerPurpose::Login);
        Ok(SubmitOutcome::Accepted)
    }

    pub fn on_timer(&mut self, token: TimerToken) -> Option<FlowEffect> {
        if !self.timer.accept(token) || self.stage != LoginStage::SigningIn {
            return None;
        }
        Some(FlowEffect::Redirect(self.settings.app_url.clone()))
    }

    pub fn reopen(&mut self, scheduler: &S) {
        self.timer.disarm(scheduler);
        self.stage = LoginStage::Editing;
        self.form = LoginForm::default();
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
    use std::time::Duration;

    #[test]
    fn test_empty_credentials_rejected() {
        let clock = ManualScheduler::new();
        let mut flow: LoginFlow<ManualScheduler> = LoginFlow::new(FlowSettings::default());
        flow.edit(LoginField::Email, "gm@hotel.com").unwrap();

        assert_eq!(flow.submit(&clock).unwrap(), SubmitOutcome::Rejected);
        assert!(flow.errors().contains(LoginField::Password));
        assert!(!flow.errors().contains(LoginField::Email));
    }

    #[test]
    fn test_redirect_after_delay() {
        let clock = ManualScheduler::new();
        let mut flow: LoginFlow<ManualScheduler> = LoginFlow::new(FlowSettings::default());
        flow.edit(LoginField::Email, "gm@hotel.com").unwrap();
        flow.edit(LoginField::Password, "x").unwrap();
        flow.submit(&clock).unwrap();

        assert!(clock.advance(Duration::from_millis(1100)).is_empty());
        let fired = clock.advance(Duration::from_millis(100));
        assert_eq!(
            flow.on_timer(fired[0]),
            Some(FlowEffect::Redirect("/app".to_string()))
        );
    }

    #[test]
    fn test_close_cancels_sign_in() {
        let clock = ManualScheduler::new();
        let mut flow: LoginFlow<ManualScheduler> = LoginFlow::new(FlowSettings::default());
        flow.edit(LoginField::Email, "gm@hotel.com").unwrap();
        flow.edit(LoginField::Password, "x").unwrap();
        flow.submit(&clock).unwrap();

        flow.close(&clock);

        assert_eq!(clock.pending(), 0);
        assert_eq!(flow.stage(), LoginStage::Editing);
        assert!(flow.form().password.is_empty());
        assert_eq!(flow.on_timer(TimerToken::new(0, TimerPurpose::Login)), None);
    }
}
