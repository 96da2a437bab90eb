//! Browser-facing components. Everything reactive lives here; the state
//! machines it drives are in `crate::core`.

pub mod common;
pub mod drawers;
pub mod icon;
pub mod navigation;
pub mod notifications;
pub mod pages;
pub mod reveal;
pub mod sections;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
