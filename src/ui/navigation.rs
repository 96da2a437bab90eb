//! Full-page navigation out of the marketing site

use crate::core::{FlowEffect, FlowError, Notice};
use crate::ui::notifications::NotificationManager;

/// Point the browser at `url`. Outside the browser this does nothing.
pub fn redirect_to(url: &str) -> Result<(), FlowError> {
    #[cfg(feature = "hydrate")]
    {
        let window =
            web_sys::window().ok_or_else(|| FlowError::Navigation("no window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| FlowError::Navigation(format!("{:?}", e)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Ok(())
    }
}

/// Log a flow error caught at a component boundary and show a generic toast
pub fn report_flow_error(notifications: NotificationManager, error: &FlowError) {
    leptos::logging::warn!("Drawer action failed: {}", error);
    notifications.notify(Notice::from_flow_error(error));
}

/// Carry out an effect requested by a flow
pub fn follow_effect(effect: FlowEffect, notifications: NotificationManager) {
    match effect {
        FlowEffect::Redirect(url) => {
            leptos::logging::log!("Redirecting to {}", url);
            if let Err(e) = redirect_to(&url) {
                report_flow_error(notifications, &e);
            }
        }
    }
}
