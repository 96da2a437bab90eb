use leptos::prelude::*;

use crate::core::{BrowserScheduler, DemoField, DemoRequestFlow, DemoStage, FlowSettings};
use crate::ui::common::{Drawer, FormField, InlineSpinner, TextAreaField};
use crate::ui::drawers::TermsNotice;
use crate::ui::drawers::context::{DrawerKind, use_drawer_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::report_flow_error;
use crate::ui::notifications::use_notifications;

/// Heading of the thank-you panel
fn thank_you_heading(first_name: &str) -> String {
    if first_name.is_empty() {
        "Thank you.".to_string()
    } else {
        format!("Thank you, {}.", first_name)
    }
}

/// "Book a demo" drawer
#[component]
pub fn DemoDrawer() -> impl IntoView {
    let drawers = use_drawer_context();
    let notifications = use_notifications();
    let is_open = drawers.is_open(DrawerKind::Demo);

    let flow = RwSignal::new_local(DemoRequestFlow::<BrowserScheduler>::new(
        FlowSettings::default(),
    ));
    let scheduler = StoredValue::new_local(BrowserScheduler::new(move |token| {
        if flow.try_update(|f| f.on_timer(token)) == Some(true) {
            leptos::logging::log!("Demo request submitted");
        }
    }));

    Effect::new(move |_| {
        let open = is_open.get();
        scheduler.with_value(|s| {
            flow.update(|f| if open { f.reopen(s) } else { f.close(s) });
        });
    });

    let stage = Memo::new(move |_| flow.with(|f| f.stage()));
    let submitted = Signal::derive(move || stage.get() == DemoStage::Submitted);
    let submitting = Signal::derive(move || stage.get() == DemoStage::Submitting);

    let edit = move |field: DemoField, value: String| {
        if let Some(Err(e)) = flow.try_update(|f| f.edit(field, &value)) {
            report_flow_error(notifications, &e);
        }
    };
    let error = move |field: DemoField| {
        Signal::derive(move || flow.with(|f| f.errors().message(field)))
    };
    let text = move |read: fn(&DemoRequestFlow<BrowserScheduler>) -> String| {
        Signal::derive(move || flow.with(read))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = scheduler.with_value(|s| flow.try_update(|f| f.submit(s)));
        if let Some(Err(e)) = outcome {
            report_flow_error(notifications, &e);
        }
    };

    let title = Signal::derive(move || {
        if submitted.get() { "Thank you" } else { "Book a Live Demo" }.to_string()
    });
    let subtitle = Signal::derive(move || {
        if submitted.get() {
            "We appreciate your interest in Navigator."
        } else {
            "A quick conversation to assess your needs."
        }
        .to_string()
    });

    let form_view = move || {
        view! {
            <form class="space-y-6" on:submit=on_submit novalidate>
                <FormField
                    label="Full Name".to_string()
                    required=true
                    placeholder="Jane Doe".to_string()
                    autocomplete="name"
                    value=text(|f| f.request().full_name.clone())
                    on_input=Callback::new(move |v| edit(DemoField::FullName, v))
                    disabled=submitting
                    error=error(DemoField::FullName)
                />
                <FormField
                    label="Company / Hotel".to_string()
                    required=true
                    placeholder="Hotel or company name".to_string()
                    autocomplete="organization"
                    value=text(|f| f.request().company.clone())
                    on_input=Callback::new(move |v| edit(DemoField::Company, v))
                    disabled=submitting
                    error=error(DemoField::Company)
                />
                <FormField
                    label="Work Email".to_string()
                    required=true
                    input_type="email"
                    placeholder="name@company.com".to_string()
                    autocomplete="email"
                    value=text(|f| f.request().email.clone())
                    on_input=Callback::new(move |v| edit(DemoField::Email, v))
                    disabled=submitting
                    error=error(DemoField::Email)
                />
                <FormField
                    label="Phone (optional)".to_string()
                    input_type="tel"
                    placeholder="+1 555 123 4567".to_string()
                    autocomplete="tel"
                    value=text(|f| f.request().phone.clone())
                    on_input=Callback::new(move |v| edit(DemoField::Phone, v))
                    disabled=submitting
                    error=error(DemoField::Phone)
                />
                <TextAreaField
                    label="Anything specific you'd like to see?".to_string()
                    placeholder="Tell us about your property or goals".to_string()
                    value=text(|f| f.request().notes.clone())
                    on_input=Callback::new(move |v| edit(DemoField::Notes, v))
                    disabled=submitting
                />

                <div class="bg-slate-50 rounded-lg p-4 text-sm text-slate-600 flex items-center">
                    <span class="w-2 h-2 bg-green-500 rounded-full mr-2"></span>
                    "A Navigator specialist will reach out within one business day."
                </div>

                <button
                    type="submit"
                    class="btn-gradient w-full py-4 text-lg"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() {
                        view! { <InlineSpinner/> "Scheduling..." }.into_any()
                    } else {
                        "Request Demo".into_any()
                    }}
                </button>
            </form>
        }
    };

    let thank_you_view = move || {
        let heading = flow.with(|f| thank_you_heading(f.thank_you_name().unwrap_or("")));
        view! {
            <div class="py-6 text-center">
                <div class="mx-auto w-14 h-14 rounded-full bg-green-100 flex items-center justify-center mb-4">
                    <Icon name=icons::CHECK class="w-7 h-7"/>
                </div>
                <h3 class="text-2xl font-bold text-slate-800">{heading}</h3>
                <p class="text-slate-600 mt-2">
                    "We've received your request and a Navigator specialist will reach out shortly to coordinate a brief discovery and live walkthrough tailored to your property."
                </p>
                <div class="mt-6 rounded-xl bg-slate-50 p-4 text-left text-slate-700">
                    <p class="font-medium mb-1">"What happens next"</p>
                    <ul class="list-disc list-inside space-y-1 text-sm">
                        <li>"You'll get a confirmation email with proposed time slots."</li>
                        <li>"We'll focus on the areas most relevant to your goals."</li>
                        <li>"No pressure. Our aim is to be genuinely helpful."</li>
                    </ul>
                </div>
                <button
                    class="mt-6 w-full py-3 rounded-lg font-semibold bg-slate-900 text-white hover:opacity-95"
                    on:click=move |_| drawers.close()
                >
                    "Close"
                </button>
            </div>
        }
    };

    view! {
        <Drawer
            title=title
            subtitle=subtitle
            is_open=is_open
            on_close=drawers.closer()
            aria_label="Book a demo"
            footer=|| view! { <TermsNotice/> }
        >
            {move || if submitted.get() {
                thank_you_view().into_any()
            } else {
                form_view().into_any()
            }}
        </Drawer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thank_you_heading() {
        assert_eq!(thank_you_heading("Maria"), "Thank you, Maria.");
        assert_eq!(thank_you_heading(""), "Thank you.");
    }
}
