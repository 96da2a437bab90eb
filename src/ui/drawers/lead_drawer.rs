//! "Start free trial" drawer hosting the lead-capture flow

use leptos::prelude::*;

use crate::core::hotel_directory::BRAND_GROUPS;
use crate::core::recommendations::{DISTRIBUTION_CHANNELS, MAX_SELECTED_CHANNELS};
use crate::core::{
    BrowserScheduler, FieldOrigin, FlowSettings, FlowStage, HotelCategory, LeadCaptureFlow,
    LeadField, Region,
};
use crate::ui::common::{Drawer, FormField, GroupedSelectField, SelectField, Spinner};
use crate::ui::drawers::context::{DrawerKind, use_drawer_context};
use crate::ui::drawers::TermsNotice;
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::{follow_effect, report_flow_error};
use crate::ui::notifications::use_notifications;

const AUTO_POPULATED: &str = "(Auto-populated - can override)";

/// "Currently selected" line under the channel chips
fn selection_summary(selected: &[String]) -> String {
    let joined = if selected.is_empty() {
        "none".to_string()
    } else {
        selected.join(", ")
    };
    format!("Currently selected: {} (max {})", joined, MAX_SELECTED_CHANNELS)
}

#[component]
pub fn TrialDrawer() -> impl IntoView {
    let drawers = use_drawer_context();
    let notifications = use_notifications();
    let is_open = drawers.is_open(DrawerKind::Trial);

    let flow = RwSignal::new_local(LeadCaptureFlow::<BrowserScheduler>::new(
        FlowSettings::default(),
    ));
    let scheduler = StoredValue::new_local(BrowserScheduler::new(move |token| {
        if let Some(effect) = flow.try_update(|f| f.on_timer(token)).flatten() {
            follow_effect(effect, notifications);
        }
    }));

    // Every open starts a fresh session; closing drops pending timers
    Effect::new(move |_| {
        let open = is_open.get();
        scheduler.with_value(|s| {
            flow.update(|f| if open { f.reopen(s) } else { f.close(s) });
        });
    });

    let stage = Memo::new(move |_| flow.with(|f| f.stage()));

    let edit = move |field: LeadField, value: String| {
        if let Some(Err(e)) = flow.try_update(|f| f.edit(field, &value)) {
            report_flow_error(notifications, &e);
        }
    };
    let error = move |field: LeadField| {
        Signal::derive(move || flow.with(|f| f.errors().message(field)))
    };
    let text = move |read: fn(&LeadCaptureFlow<BrowserScheduler>) -> String| {
        Signal::derive(move || flow.with(read))
    };
    let auto_hint = move |origin: fn(&LeadCaptureFlow<BrowserScheduler>) -> FieldOrigin| {
        Signal::derive(move || {
            flow.with(|f| origin(f) == FieldOrigin::Directory)
                .then(|| AUTO_POPULATED.to_string())
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = scheduler.with_value(|s| flow.try_update(|f| f.submit(s)));
        match outcome {
            Some(Err(e)) => report_flow_error(notifications, &e),
            Some(Ok(outcome)) if !outcome.is_accepted() => {
                leptos::logging::log!("Trial form has errors, staying on the form");
            }
            _ => {}
        }
    };

    let form_view = move || {
        let brand_groups = BRAND_GROUPS
            .iter()
            .map(|g| (g.label, g.brands.to_vec()))
            .collect::<Vec<_>>();
        let categories = HotelCategory::ALL.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        let regions = Region::ALL.iter().map(|r| r.to_string()).collect::<Vec<_>>();

        view! {
            <form class="space-y-6" on:submit=on_submit novalidate>
                <FormField
                    label="Full Name".to_string()
                    required=true
                    placeholder="Enter your full name".to_string()
                    autocomplete="name"
                    value=text(|f| f.form().name.clone())
                    on_input=Callback::new(move |v| edit(LeadField::Name, v))
                    error=error(LeadField::Name)
                />

                <div>
                    <GroupedSelectField
                        label="Hotel Brand/Chain".to_string()
                        required=true
                        placeholder="Select your hotel brand/chain".to_string()
                        value=text(|f| f.form().hotel_brand.clone())
                        on_change=Callback::new(move |v| edit(LeadField::HotelBrand, v))
                        groups=brand_groups
                        error=error(LeadField::HotelBrand)
                    />
                    <Show when=move || flow.with(|f| {
                        f.category_origin() == FieldOrigin::Directory
                            && f.region_origin() == FieldOrigin::Directory
                    })>
                        <p class="mt-2 flex items-center gap-1 text-sm text-emerald-600">
                            <Icon name=icons::CHECK class="w-4 h-4"/>
                            "Category and region auto-populated"
                        </p>
                    </Show>
                </div>

                <SelectField
                    label="Hotel Category".to_string()
                    required=true
                    placeholder="Select hotel category".to_string()
                    value=text(|f| f.form().category.map(|c| c.to_string()).unwrap_or_default())
                    on_change=Callback::new(move |v| edit(LeadField::Category, v))
                    options=categories
                    hint=auto_hint(|f| f.category_origin())
                    error=error(LeadField::Category)
                />

                <SelectField
                    label="Region".to_string()
                    required=true
                    placeholder="Select your region".to_string()
                    value=text(|f| f.form().region.map(|r| r.to_string()).unwrap_or_default())
                    on_change=Callback::new(move |v| edit(LeadField::Region, v))
                    options=regions
                    hint=auto_hint(|f| f.region_origin())
                    error=error(LeadField::Region)
                />

                <FormField
                    label="Work Email".to_string()
                    required=true
                    input_type="email"
                    placeholder="Enter your work email".to_string()
                    autocomplete="email"
                    value=text(|f| f.form().email.clone())
                    on_input=Callback::new(move |v| edit(LeadField::Email, v))
                    error=error(LeadField::Email)
                />

                <FormField
                    label="Phone Number".to_string()
                    required=true
                    input_type="tel"
                    placeholder="Enter your phone number".to_string()
                    autocomplete="tel"
                    value=text(|f| f.form().phone.clone())
                    on_input=Callback::new(move |v| edit(LeadField::Phone, v))
                    error=error(LeadField::Phone)
                />

                <div class="rounded-lg bg-slate-50 p-4 space-y-2 text-sm text-slate-600">
                    {["Free 30-day trial", "No credit card required", "Setup in under 2 weeks"]
                        .into_iter()
                        .map(|point| view! {
                            <div class="flex items-center">
                                <span class="w-2 h-2 bg-green-500 rounded-full mr-2"></span>
                                {point}
                            </div>
                        })
                        .collect_view()}
                </div>

                <button type="submit" class="btn-gradient w-full py-4 text-lg">
                    "Start Free Trial Now"
                </button>
            </form>
        }
    };

    view! {
        <Drawer
            title="Start Your Free Trial"
            subtitle="Get started with Navigator in 2 minutes"
            is_open=is_open
            on_close=drawers.closer()
            aria_label="Start free trial"
            footer=|| view! {
                <TermsNotice trailer="We'll contact you within 24 hours to set up your trial."/>
            }
        >
            {move || match stage.get() {
                FlowStage::Collecting => form_view().into_any(),
                FlowStage::Computing => view! {
                    <Spinner
                        label="Analyzing your market and compset..."
                        caption="Finding competitors and best OTAs for your property"
                    />
                }.into_any(),
                FlowStage::Reviewing => view! { <ReviewStep flow=flow scheduler=scheduler/> }.into_any(),
                FlowStage::Finishing => view! {
                    <Spinner
                        label="Onboarding you to Navigator..."
                        caption="Redirecting you to your dashboard"
                    />
                }.into_any(),
            }}
        </Drawer>
    }
}

/// Editable competitors and channel picker shown once analysis is done
#[component]
fn ReviewStep(
    flow: RwSignal<LeadCaptureFlow<BrowserScheduler>, LocalStorage>,
    scheduler: StoredValue<BrowserScheduler, LocalStorage>,
) -> impl IntoView {
    let notifications = use_notifications();

    // Only the slot count drives the inputs so typing keeps focus
    let competitor_count =
        Memo::new(move |_| flow.with(|f| f.recommendations().map_or(0, |r| r.competitors().len())));

    let competitor = move |index: usize| {
        flow.with(|f| {
            f.recommendations()
                .and_then(|r| r.competitors().get(index).cloned())
                .unwrap_or_default()
        })
    };
    let is_selected = move |channel: &str| {
        flow.with(|f| f.recommendations().is_some_and(|r| r.is_selected(channel)))
    };
    let can_select_more =
        move || flow.with(|f| f.recommendations().is_some_and(|r| r.can_select_more()));

    let on_competitor = move |index: usize, name: String| {
        if let Some(Err(e)) = flow.try_update(|f| f.edit_competitor(index, &name)) {
            report_flow_error(notifications, &e);
        }
    };
    let on_toggle = move |channel: &'static str| {
        if let Some(Err(e)) = flow.try_update(|f| f.toggle_channel(channel)) {
            report_flow_error(notifications, &e);
        }
    };
    let on_confirm = move |_| {
        let confirmed = scheduler.with_value(|s| flow.try_update(|f| f.confirm(s)));
        if let Some(Err(e)) = confirmed {
            report_flow_error(notifications, &e);
        }
    };

    view! {
        <div class="space-y-6">
            <div>
                <h3 class="text-lg font-bold text-slate-800">"Recommended Competitors"</h3>
                <p class="text-slate-600 text-sm">
                    "Edit if needed. We suggest 5 based on your category and region."
                </p>
                <div class="mt-3 space-y-2">
                    {move || (0..competitor_count.get()).map(|index| view! {
                        <input
                            type="text"
                            class="input-base py-2"
                            aria-label=format!("Competitor {}", index + 1)
                            prop:value=move || competitor(index)
                            on:input=move |ev| on_competitor(index, event_target_value(&ev))
                        />
                    }).collect_view()}
                </div>
            </div>

            <div>
                <h3 class="text-lg font-bold text-slate-800">"Select 3 OTAs"</h3>
                <p class="text-slate-600 text-sm">
                    "Choose up to three distribution partners to monitor first."
                </p>
                <div class="mt-3 grid grid-cols-2 gap-2">
                    {DISTRIBUTION_CHANNELS.into_iter().map(|channel| view! {
                        <label
                            class="channel-chip"
                            class:channel-chip-selected=move || is_selected(channel)
                            class:opacity-50=move || !is_selected(channel) && !can_select_more()
                        >
                            <input
                                type="checkbox"
                                prop:checked=move || is_selected(channel)
                                on:change=move |_| on_toggle(channel)
                            />
                            <span class="text-slate-700">{channel}</span>
                        </label>
                    }).collect_view()}
                </div>
                <p class="text-xs text-slate-500 mt-1">
                    {move || flow.with(|f| {
                        selection_summary(f.recommendations().map_or(&[][..], |r| r.selected_channels()))
                    })}
                </p>
            </div>

            <button class="btn-gradient w-full py-3" on:click=on_confirm>
                "Confirm & Continue"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_summary() {
        let selected = vec!["Booking.com".to_string(), "Expedia".to_string()];
        assert_eq!(
            selection_summary(&selected),
            "Currently selected: Booking.com, Expedia (max 3)"
        );
        assert_eq!(selection_summary(&[]), "Currently selected: none (max 3)");
    }
}
