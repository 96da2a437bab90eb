use leptos::prelude::*;

use crate::ui::drawers::{DrawerKind, use_drawer_context};
use crate::ui::icon::{Icon, icons};

/// In-page anchors shown in the navigation bar
const NAV_LINKS: [(&str, &str); 4] = [
    ("#how", "How it works"),
    ("#ecosystem", "Ecosystem"),
    ("#compare", "Compare"),
    ("#testimonials", "Testimonials"),
];

/// Gradient square next to the wordmark
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-8 h-8 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600" aria-hidden="true"></div>
    }
}

/// Fixed header with anchor navigation and the login / trial buttons
#[component]
pub fn Header() -> impl IntoView {
    let drawers = use_drawer_context();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-slate-900/85 backdrop-blur border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-6">
                <div class="h-16 flex items-center justify-between">
                    <a href="#hero" class="flex items-center gap-2">
                        <Logo/>
                        <span class="text-xl font-extrabold text-white">"Navigator"</span>
                    </a>

                    <nav class="hidden md:flex items-center gap-6 text-sm font-medium text-slate-200">
                        {NAV_LINKS.into_iter().map(|(href, label)| view! {
                            <a href=href class="hover:text-white transition-colors">{label}</a>
                        }).collect_view()}
                    </nav>

                    <div class="flex items-center gap-3">
                        <button
                            class="hidden sm:inline-flex px-4 py-2 rounded-lg border border-white/40 text-white hover:bg-white/10"
                            on:click=move |_| drawers.open(DrawerKind::Login)
                        >
                            "Login"
                        </button>
                        <button
                            class="px-4 py-2 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold hover:opacity-90"
                            on:click=move |_| drawers.open(DrawerKind::Trial)
                        >
                            "Start Free Trial"
                        </button>

                        <button
                            class="md:hidden p-2 rounded-lg hover:bg-white/10 transition-colors"
                            on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || mobile_menu_open.get().to_string()
                        >
                            {move || {
                                let name = if mobile_menu_open.get() { icons::X } else { icons::MENU };
                                view! { <Icon name=name class="w-6 h-6 invert"/> }
                            }}
                        </button>
                    </div>
                </div>

                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="flex flex-col gap-1 py-4 border-t border-slate-800">
                        {NAV_LINKS.into_iter().map(|(href, label)| view! {
                            <a
                                href=href
                                class="block px-4 py-2 text-sm font-medium text-slate-200 hover:text-white hover:bg-white/5 rounded-lg"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {label}
                            </a>
                        }).collect_view()}
                        <button
                            class="text-left px-4 py-2 text-sm font-medium text-slate-200 hover:text-white hover:bg-white/5 rounded-lg"
                            on:click=move |_| {
                                set_mobile_menu_open.set(false);
                                drawers.open(DrawerKind::Login);
                            }
                        >
                            "Login"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}
