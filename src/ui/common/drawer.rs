use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Side drawer sliding in from the right, over a dimmed backdrop.
///
/// Escape and backdrop clicks call `on_close`. Body scroll locking is done
/// once for all drawers by the drawer context.
#[component]
pub fn Drawer(
    /// Drawer title
    #[prop(into)]
    title: Signal<String>,
    /// Line under the title
    #[prop(into)]
    subtitle: Signal<String>,
    /// Whether drawer is open
    is_open: Signal<bool>,
    /// Callback to close drawer
    on_close: Callback<()>,
    /// Accessible name of the dialog
    aria_label: &'static str,
    /// Header background classes
    #[prop(default = "bg-gradient-to-r from-brand-deep to-brand-sky")]
    header_class: &'static str,
    /// Drawer content
    children: Children,
    /// Small print pinned to the bottom of the drawer
    #[prop(optional, into)]
    footer: Option<ViewFn>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "drawer-backdrop opacity-100"
                } else {
                    "drawer-backdrop opacity-0 pointer-events-none"
                }
            }
            on:click=move |_| on_close.run(())
            aria-hidden="true"
        ></div>

        <aside
            class=move || {
                if is_open.get() { "drawer-panel translate-x-0" } else { "drawer-panel translate-x-full" }
            }
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <div class=format!("{} text-white p-6 flex-shrink-0", header_class)>
                <div class="flex items-center justify-between">
                    <div>
                        <h2 class="text-2xl font-bold mb-1">{move || title.get()}</h2>
                        <p class="text-white/80 text-sm">{move || subtitle.get()}</p>
                    </div>
                    <button
                        class="p-2 hover:bg-white/20 rounded-lg transition-colors"
                        on:click=move |_| on_close.run(())
                        aria-label="Close drawer"
                    >
                        <Icon name=icons::X class="w-6 h-6 invert"/>
                    </button>
                </div>
            </div>

            <div class="flex-1 overflow-y-auto overscroll-contain">
                <div class="p-6">{children()}</div>
            </div>

            {footer.map(|footer| view! {
                <div class="border-t border-slate-200 p-6 bg-slate-50 flex-shrink-0">
                    {footer.run()}
                </div>
            })}
        </aside>
    }
}
