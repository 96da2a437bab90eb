use leptos::prelude::*;

/// Ring spinner with an optional headline and caption underneath
#[component]
pub fn Spinner(
    /// Headline under the spinner
    #[prop(default = "")]
    label: &'static str,
    /// Smaller caption under the headline
    #[prop(default = "")]
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-center">
            <div class="spinner spinner-lg" role="status" aria-live="polite">
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <h3 class="mt-6 text-xl font-semibold text-slate-800">{label}</h3>
            })}
            {(!caption.is_empty()).then(|| view! {
                <p class="mt-2 text-slate-600">{caption}</p>
            })}
        </div>
    }
}

/// Spinner sized for a button label
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! {
        <span class="spinner spinner-sm mr-2 inline-block align-middle" aria-hidden="true"></span>
    }
}
