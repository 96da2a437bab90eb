use leptos::prelude::*;

use crate::core::{BrowserScheduler, FlowSettings, LoginField, LoginFlow, LoginStage};
use crate::ui::common::{Drawer, FormField, InlineSpinner};
use crate::ui::drawers::context::{DrawerKind, use_drawer_context};
use crate::ui::navigation::{follow_effect, report_flow_error};
use crate::ui::notifications::use_notifications;

/// Demo login; any credentials forward to the application
#[component]
pub fn LoginDrawer() -> impl IntoView {
    let drawers = use_drawer_context();
    let notifications = use_notifications();
    let is_open = drawers.is_open(DrawerKind::Login);

    let flow = RwSignal::new_local(LoginFlow::<BrowserScheduler>::new(FlowSettings::default()));
    let scheduler = StoredValue::new_local(BrowserScheduler::new(move |token| {
        if let Some(effect) = flow.try_update(|f| f.on_timer(token)).flatten() {
            follow_effect(effect, notifications);
        }
    }));

    Effect::new(move |_| {
        let open = is_open.get();
        scheduler.with_value(|s| {
            flow.update(|f| if open { f.reopen(s) } else { f.close(s) });
        });
    });

    let signing_in = Signal::derive(move || flow.with(|f| f.stage()) == LoginStage::SigningIn);

    let edit = move |field: LoginField, value: String| {
        if let Some(Err(e)) = flow.try_update(|f| f.edit(field, &value)) {
            report_flow_error(notifications, &e);
        }
    };
    let error = move |field: LoginField| {
        Signal::derive(move || flow.with(|f| f.errors().message(field)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = scheduler.with_value(|s| flow.try_update(|f| f.submit(s)));
        if let Some(Err(e)) = outcome {
            report_flow_error(notifications, &e);
        }
    };

    view! {
        <Drawer
            title="Login"
            subtitle="Use any email and password to continue"
            is_open=is_open
            on_close=drawers.closer()
            aria_label="Login"
            header_class="bg-gradient-to-r from-slate-800 to-slate-700"
            footer=|| view! {
                <p class="text-xs text-slate-500 text-center">
                    "This is a demo login. Any credentials will work."
                </p>
            }
        >
            <form class="space-y-6" on:submit=on_submit novalidate>
                <FormField
                    label="Email".to_string()
                    input_type="email"
                    placeholder="you@company.com".to_string()
                    autocomplete="username"
                    value=Signal::derive(move || flow.with(|f| f.form().email.clone()))
                    on_input=Callback::new(move |v| edit(LoginField::Email, v))
                    disabled=signing_in
                    error=error(LoginField::Email)
                />
                <FormField
                    label="Password".to_string()
                    input_type="password"
                    placeholder="Enter any password".to_string()
                    autocomplete="current-password"
                    value=Signal::derive(move || flow.with(|f| f.form().password.clone()))
                    on_input=Callback::new(move |v| edit(LoginField::Password, v))
                    disabled=signing_in
                    error=error(LoginField::Password)
                />

                <button
                    type="submit"
                    class="w-full py-3 rounded-lg font-semibold text-white transition-all duration-300 bg-gradient-to-r from-blue-600 to-purple-600 hover:opacity-95 disabled:bg-none disabled:bg-slate-400 disabled:cursor-not-allowed"
                    disabled=move || signing_in.get()
                >
                    {move || if signing_in.get() {
                        view! { <InlineSpinner/> "Logging in..." }.into_any()
                    } else {
                        "Login".into_any()
                    }}
                </button>
            </form>
        </Drawer>
    }
}
