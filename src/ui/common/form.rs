use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error line under a field
#[component]
fn FieldErrorLine(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <p class="field-error" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4 flex-shrink-0"/>
                    <span>{err}</span>
                </p>
            }
        })
    }
}

/// Label with an optional required marker and trailing hint
#[component]
fn FieldLabel(
    label: String,
    required: bool,
    #[prop(optional_no_strip)] hint: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <label class="label">
            {label}
            {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            {move || hint.and_then(|h| h.get()).map(|h| view! {
                <span class="ml-2 text-xs font-normal text-emerald-600">{h}</span>
            })}
        </label>
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Browser autocomplete hint
    #[prop(default = "on")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required/>
            <input
                type=input_type
                class="input-base"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldErrorLine error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: String,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=false/>
            <textarea
                class="input-base resize-none"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select/dropdown form field component.
///
/// The first option is an empty-valued placeholder; picking it reports `""`.
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Text of the empty placeholder option
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Option labels; each label is also its value
    options: Vec<String>,
    /// Short note rendered next to the label
    #[prop(optional)]
    hint: Option<Signal<Option<String>>>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required hint=hint/>
            <select
                class="select-base"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options.into_iter().map(|text| {
                    let label = text.clone();
                    view! { <option value=text>{label}</option> }
                }).collect_view()}
            </select>
            <FieldErrorLine error=error/>
        </div>
    }
}

/// Select with `<optgroup>` sections
#[component]
pub fn GroupedSelectField(
    label: String,
    #[prop(default = false)]
    required: bool,
    placeholder: String,
    value: Signal<String>,
    on_change: Callback<String>,
    /// (group label, option labels)
    groups: Vec<(&'static str, Vec<&'static str>)>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required/>
            <select
                class="select-base"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {groups.into_iter().map(|(group, options)| {
                    view! {
                        <optgroup label=group>
                            {options.into_iter().map(|text| {
                                view! { <option value=text>{text}</option> }
                            }).collect_view()}
                        </optgroup>
                    }
                }).collect_view()}
            </select>
            <FieldErrorLine error=error/>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_select_field_renders_each_option_as_value_and_text() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <SelectField
                    label="Region".to_string()
                    placeholder="Select region".to_string()
                    value=Signal::derive(String::new)
                    on_change=Callback::new(|_: String| {})
                    options=vec!["Europe".to_string(), "Asia Pacific".to_string()]
                />
            }
            .to_html();

            assert!(html.contains(r#"value="Europe""#));
            assert!(html.contains(r#"value="Asia Pacific""#));
            assert_eq!(html.matches("Asia Pacific").count(), 2);
        });
    }
}
