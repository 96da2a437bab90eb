//! Slide-in drawers hosting the lead-capture, demo and login flows.
//!
//! Each drawer owns its flow in a local signal and hands the flow a
//! [`BrowserScheduler`](crate::core::BrowserScheduler) whose fired timers are
//! fed straight back into the same signal.

pub mod context;
mod demo_drawer;
mod lead_drawer;
mod login_drawer;

use leptos::prelude::*;

pub use context::{DrawerContext, DrawerKind, provide_drawer_context, use_drawer_context};
pub use demo_drawer::DemoDrawer;
pub use lead_drawer::TrialDrawer;
pub use login_drawer::LoginDrawer;

/// Consent line at the bottom of the lead forms
#[component]
fn TermsNotice(#[prop(default = "")] trailer: &'static str) -> impl IntoView {
    view! {
        <p class="text-xs text-slate-500 text-center leading-relaxed">
            "By submitting this form, you agree to our "
            <a href="#" class="text-blue-600 hover:underline">"Privacy Policy"</a>
            " and "
            <a href="#" class="text-blue-600 hover:underline">"Terms of Service"</a>
            ". "
            {trailer}
        </p>
    }
}

/// All drawers, mounted once per page
#[component]
pub fn Drawers() -> impl IntoView {
    view! {
        <TrialDrawer/>
        <DemoDrawer/>
        <LoginDrawer/>
    }
}
