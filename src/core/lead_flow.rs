//! Free-trial lead capture
//!
//! ```text
//! collecting --submit--> computing --analysis timer--> reviewing
//!     ^                                                    |
//!     |                                                 confirm
//!  reopen/close                                            v
//!     +------------------------------------------------ finishing --hand-off timer--> redirect
//! ```
//!
//! Reopening or closing from any stage cancels the pending timer and starts a
//! fresh session with an empty form.

use derive_more::Display;
use serde::Serialize;

use super::error::FlowError;
use super::flow::{FlowEffect, SubmitOutcome};
use super::forms::LeadForm;
use super::hotel_directory::{self, HotelCategory, Region};
use super::recommendations::{ChannelToggle, RecommendationSet, default_competitors, recommend};
use super::scheduler::{Scheduler, TimerPurpose, TimerSlot, TimerToken};
use super::settings::{AutofillPolicy, FlowSettings};
use super::validation::{LeadField, ValidationResult, validate_lead};

/// Stage of the lead-capture flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FlowStage {
    #[display("collecting")]
    Collecting,
    #[display("computing")]
    Computing,
    #[display("reviewing")]
    Reviewing,
    #[display("finishing")]
    Finishing,
}

/// Where the current category/region value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldOrigin {
    #[default]
    Unset,
    Directory,
    Manual,
}

/// Everything the visitor confirmed, logged at hand-off
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSummary {
    pub name: String,
    pub hotel_brand: String,
    pub category: String,
    pub region: String,
    pub email: String,
    pub phone: String,
    pub competitors: Vec<String>,
    pub channels: Vec<String>,
}

pub struct LeadCaptureFlow<S: Scheduler> {
    settings: FlowSettings,
    stage: FlowStage,
    form: LeadForm,
    errors: ValidationResult<LeadField>,
    recommendations: Option<RecommendationSet>,
    category_origin: FieldOrigin,
    region_origin: FieldOrigin,
    timer: TimerSlot<S>,
}

impl<S: Scheduler> LeadCaptureFlow<S> {
    pub fn new(settings: FlowSettings) -> Self {
        Self {
            settings,
            stage: FlowStage::Collecting,
            form: LeadForm::default(),
            errors: ValidationResult::new(),
            recommendations: None,
            category_origin: FieldOrigin::Unset,
            region_origin: FieldOrigin::Unset,
            timer: TimerSlot::new(),
        }
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationResult<LeadField> {
        &self.errors
    }

    /// Present only while reviewing or finishing
    pub fn recommendations(&self) -> Option<&RecommendationSet> {
        self.recommendations.as_ref()
    }

    pub fn category_origin(&self) -> FieldOrigin {
        self.category_origin
    }

    pub fn region_origin(&self) -> FieldOrigin {
        self.region_origin
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_armed()
    }

    /// Apply an input change.
    ///
    /// Clears that field's error. Category and region take a display label;
    /// an empty value unsets them. Picking a brand the directory knows fills
    /// category and region according to the autofill policy.
    pub fn edit(&mut self, field: LeadField, value: &str) -> Result<(), FlowError> {
        self.expect_stage(FlowStage::Collecting, "edit the form")?;

        match field {
            LeadField::Name => self.form.name = value.to_string(),
            LeadField::Email => self.form.email = value.to_string(),
            LeadField::Phone => self.form.phone = value.to_string(),
            LeadField::HotelBrand => {
                self.form.hotel_brand = value.to_string();
                self.autofill_from_directory();
            }
            LeadField::Category => {
                self.form.category = parse_option(value, "category", HotelCategory::from_label)?;
                self.category_origin = origin_for(self.form.category.is_some());
            }
            LeadField::Region => {
                self.form.region = parse_option(value, "region", Region::from_label)?;
                self.region_origin = origin_for(self.form.region.is_some());
            }
        }

        self.errors.clear_field(field);
        Ok(())
    }

    fn autofill_from_directory(&mut self) {
        let Some(placement) = hotel_directory::lookup(&self.form.hotel_brand) else {
            return;
        };

        let manual = self.category_origin == FieldOrigin::Manual
            || self.region_origin == FieldOrigin::Manual;
        if manual && self.settings.autofill_policy == AutofillPolicy::PreserveManualEdits {
            leptos::logging::log!(
                "Keeping hand-picked category/region for {}",
                self.form.hotel_brand
            );
            return;
        }

        self.form.category = Some(placement.category);
        self.form.region = Some(placement.region);
        self.category_origin = FieldOrigin::Directory;
        self.region_origin = FieldOrigin::Directory;
        self.errors.clear_field(LeadField::Category);
        self.errors.clear_field(LeadField::Region);
    }

    /// Validate and, if the form is complete, start the analysis delay
    pub fn submit(&mut self, scheduler: &S) -> Result<SubmitOutcome, FlowError> {
        self.expect_stage(FlowStage::Collecting, "submit")?;

        let result = validate_lead(&self.form, self.settings.phone_policy);
        if !result.is_valid() {
            leptos::logging::log!("Trial form rejected with {} errors", result.len());
            self.errors = result;
            return Ok(SubmitOutcome::Rejected);
        }

        self.errors = result;
        self.stage = FlowStage::Computing;
        self.timer
            .arm(scheduler, self.settings.analysis_delay, TimerPurpose::Analysis);
        Ok(SubmitOutcome::Accepted)
    }

    /// Deliver a fired timer.
    ///
    /// Tokens from an earlier session or for a timer that is no longer
    /// pending are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> Option<FlowEffect> {
        if !self.timer.accept(token) {
            leptos::logging::log!("Ignoring stale {:?} timer", token.purpose);
            return None;
        }

        match (self.stage, token.purpose) {
            (FlowStage::Computing, TimerPurpose::Analysis) => {
                let category = self.form.category.map(|c| c.to_string()).unwrap_or_default();
                let region = self.form.region.map(|r| r.to_string()).unwrap_or_default();
                let competitors = recommend(&category, &region, &default_competitors());
                self.recommendations = Some(RecommendationSet::new(competitors));
                self.stage = FlowStage::Reviewing;
                None
            }
            (FlowStage::Finishing, TimerPurpose::Handoff) => {
                Some(FlowEffect::Redirect(self.settings.app_url.clone()))
            }
            (stage, purpose) => {
                leptos::logging::warn!("Unexpected {:?} timer while {}", purpose, stage);
                None
            }
        }
    }

    pub fn edit_competitor(&mut self, index: usize, name: &str) -> Result<(), FlowError> {
        self.reviewing_set("edit competitors")?
            .edit_competitor(index, name)
    }

    pub fn toggle_channel(&mut self, channel: &str) -> Result<ChannelToggle, FlowError> {
        self.reviewing_set("change channels")?.toggle_channel(channel)
    }

    /// Accept the review and start the hand-off delay.
    ///
    /// Returns the summary that is logged for the sales team.
    pub fn confirm(&mut self, scheduler: &S) -> Result<LeadSummary, FlowError> {
        self.expect_stage(FlowStage::Reviewing, "confirm")?;
        let summary = self.summary();

        match serde_json::to_string(&summary) {
            Ok(json) => leptos::logging::log!("Trial lead confirmed: {}", json),
            Err(e) => leptos::logging::warn!("Failed to serialize lead summary: {}", e),
        }

        self.stage = FlowStage::Finishing;
        self.timer
            .arm(scheduler, self.settings.handoff_delay, TimerPurpose::Handoff);
        Ok(summary)
    }

    /// Start over with an empty form. Called whenever the drawer opens.
    pub fn reopen(&mut self, scheduler: &S) {
        self.reset(scheduler);
    }

    /// Abandon the flow. Any pending timer is cancelled.
    pub fn close(&mut self, scheduler: &S) {
        if self.stage != FlowStage::Collecting {
            leptos::logging::log!("Trial drawer closed while {}", self.stage);
        }
        self.reset(scheduler);
    }

    fn reset(&mut self, scheduler: &S) {
        self.timer.disarm(scheduler);
        self.stage = FlowStage::Collecting;
        self.form = LeadForm::default();
        self.errors = ValidationResult::new();
        self.recommendations = None;
        self.category_origin = FieldOrigin::Unset;
        self.region_origin = FieldOrigin::Unset;
    }

    fn summary(&self) -> LeadSummary {
        let (competitors, channels) = match &self.recommendations {
            Some(set) => (
                set.competitors().to_vec(),
                set.selected_channels().to_vec(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        LeadSummary {
            name: self.form.name.trim().to_string(),
            hotel_brand: self.form.hotel_brand.clone(),
            category: self.form.category.map(|c| c.to_string()).unwrap_or_default(),
            region: self.form.region.map(|r| r.to_string()).unwrap_or_default(),
            email: self.form.email.trim().to_string(),
            phone: self.form.phone.trim().to_string(),
            competitors,
            channels,
        }
    }

    fn expect_stage(&self, expected: FlowStage, action: &'static str) -> Result<(), FlowError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(FlowError::wrong_stage(action, self.stage))
        }
    }

    fn reviewing_set(&mut self, action: &'static str) -> Result<&mut RecommendationSet, FlowError> {
        let stage = self.stage;
        match (stage, self.recommendations.as_mut()) {
            (FlowStage::Reviewing, Some(set)) => Ok(set),
            _ => Err(FlowError::wrong_stage(action, stage)),
        }
    }
}

fn origin_for(is_set: bool) -> FieldOrigin {
    if is_set {
        FieldOrigin::Manual
    } else {
        FieldOrigin::Unset
    }
}

fn parse_option<T>(
    value: &str,
    field: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, FlowError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse(value).map(Some).ok_or_else(|| FlowError::UnknownOption {
        field,
        value: value.to_string(),
    })
}
