//! Lead-capture domain: forms, validation, hotel directory, recommendations
//! and the timer-driven drawer flows. Nothing here depends on the DOM.

#[cfg(feature = "ssr")]
pub mod config;
mod demo_flow;
mod error;
mod flow;
mod forms;
pub mod hotel_directory;
mod lead_flow;
mod login_flow;
mod notice;
pub mod recommendations;
pub mod scheduler;
pub mod settings;
#[cfg(test)]
mod tests;
pub mod validation;

pub use demo_flow::{DemoRequestFlow, DemoStage};
pub use error::FlowError;
pub use flow::{FlowEffect, SubmitOutcome};
pub use forms::{DemoRequest, LeadForm, LoginForm};
pub use hotel_directory::{HotelCategory, Region};
pub use lead_flow::{FieldOrigin, FlowStage, LeadCaptureFlow, LeadSummary};
pub use login_flow::{LoginFlow, LoginStage};
pub use notice::{Notice, NoticeKind};
pub use recommendations::{ChannelToggle, RecommendationSet};
pub use scheduler::{BrowserScheduler, ManualScheduler, Scheduler, TimerPurpose, TimerToken};
pub use settings::{AutofillPolicy, FlowSettings};
pub use validation::{DemoField, FieldError, LeadField, LoginField, PhonePolicy, ValidationResult};
