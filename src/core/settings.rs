//! Client-side flow settings
//!
//! These are compile-time defaults shared by the server render and the
//! hydrated page, so both sides agree on every value.

use std::time::Duration;

use super::validation::PhonePolicy;

/// Where every "finished" flow sends the visitor. The server answers this path
/// with a redirect to the configured application URL.
pub const APP_PATH: &str = "/app";

pub const ANALYSIS_DELAY: Duration = Duration::from_millis(1800);
pub const HANDOFF_DELAY: Duration = Duration::from_millis(1500);
pub const DEMO_SUBMISSION_DELAY: Duration = Duration::from_millis(1200);
pub const LOGIN_DELAY: Duration = Duration::from_millis(1200);

/// What a directory hit does to category and region the visitor already chose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutofillPolicy {
    /// Overwrite both, even if they were picked by hand
    #[default]
    AlwaysOverwrite,
    /// Leave both alone if either was picked by hand
    PreserveManualEdits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    pub app_url: String,
    pub analysis_delay: Duration,
    pub handoff_delay: Duration,
    pub demo_submission_delay: Duration,
    pub login_delay: Duration,
    pub phone_policy: PhonePolicy,
    pub autofill_policy: AutofillPolicy,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            app_url: APP_PATH.to_string(),
            analysis_delay: ANALYSIS_DELAY,
            handoff_delay: HANDOFF_DELAY,
            demo_submission_delay: DEMO_SUBMISSION_DELAY,
            login_delay: LOGIN_DELAY,
            phone_policy: PhonePolicy::Required,
            autofill_policy: AutofillPolicy::AlwaysOverwrite,
        }
    }
}

impl FlowSettings {
    pub fn with_autofill_policy(mut self, policy: AutofillPolicy) -> Self {
        self.autofill_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FlowSettings::default();
        assert_eq!(settings.app_url, "/app");
        assert_eq!(settings.analysis_delay, Duration::from_millis(1800));
        assert_eq!(settings.handoff_delay, Duration::from_millis(1500));
        assert_eq!(settings.phone_policy, PhonePolicy::Required);
        assert_eq!(settings.autofill_policy, AutofillPolicy::AlwaysOverwrite);
    }

    #[test]
    fn test_builders() {
        let settings =
            FlowSettings::default().with_autofill_policy(AutofillPolicy::PreserveManualEdits);
        assert_eq!(settings.app_url, APP_PATH);
        assert_eq!(settings.autofill_policy, AutofillPolicy::PreserveManualEdits);
    }
}
