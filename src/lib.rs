//! Navigator - marketing site for hotel revenue intelligence
//!
//! A server-rendered Leptos page with hydrated lead-capture drawers: a
//! multi-step free-trial flow, a demo request and a demo login. The flow
//! state machines live in [`core`] and run without a browser; [`ui`] binds
//! them to signals and timers.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
