use leptos::prelude::*;

/// Inline image for one of the SVGs under `public/icons`
#[component]
pub fn Icon(
    /// File stem of the icon
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=format!("/icons/{}.svg", name)
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}
