use leptos::prelude::*;

use crate::ui::drawers::{DrawerKind, use_drawer_context};

const WHY_NAVIGATOR: [&str; 4] = [
    "Most accurate rate shopping across 1100+ sources",
    "Real-time parity breach detection & resolution",
    "Early signals on demand shifts & market trends",
    "Flexible APIs for smooth integration",
];

const ASSURANCES: [&str; 3] = [
    "No credit card required",
    "2-minute setup",
    "500+ hotels trust Navigator",
];

/// Rounded check mark used in the hero card
#[component]
fn GradientCheck() -> impl IntoView {
    view! {
        <svg class="h-6 w-6" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <rect x="1.25" y="1.25" width="21.5" height="21.5" rx="6" stroke="url(#brandGradient)" stroke-width="2.5" fill="none" />
            <path d="M6 12l4 4 8-8" stroke="url(#brandGradient)" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" fill="none" />
        </svg>
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let drawers = use_drawer_context();

    view! {
        <section id="hero" class="relative min-h-screen flex items-center overflow-hidden pt-16 hero-backdrop">
            // Shared gradient for the check marks below
            <svg class="absolute w-0 h-0" aria-hidden="true">
                <defs>
                    <linearGradient id="brandGradient" x1="0" y1="0" x2="24" y2="24" gradientUnits="userSpaceOnUse">
                        <stop offset="0" stop-color="#1800FF" />
                        <stop offset="1" stop-color="#008FFF" />
                    </linearGradient>
                </defs>
            </svg>
            <div class="absolute inset-0 bg-gradient-to-r from-black/60 via-black/40 to-transparent" aria-hidden="true"></div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 py-16 grid lg:grid-cols-2 gap-12 items-center">
                <div class="text-left">
                    <h1 class="text-5xl lg:text-7xl font-bold mb-6 leading-[1.1] text-white fade-in-up">
                        "Revenue Intelligence"
                        <span class="block text-transparent bg-gradient-to-r from-brand-deep to-brand-sky bg-clip-text">
                            "That Works While You Sleep"
                        </span>
                    </h1>

                    <div class="fade-in-up fade-delay-500">
                        <div class="flex flex-col sm:flex-row gap-4 items-start">
                            <button
                                class="group rounded-2xl p-[2px] bg-gradient-to-r from-brand-deep to-brand-sky hover:opacity-95 transition-all duration-300"
                                on:click=move |_| drawers.open(DrawerKind::Trial)
                            >
                                <span class="block px-10 py-5 rounded-[14px] text-white font-bold text-xl">
                                    "Start Free Trial"
                                    <span class="ml-2 inline-block group-hover:translate-x-1 transition-transform duration-300">"→"</span>
                                </span>
                            </button>
                            <button
                                class="px-8 py-5 border-2 border-white/80 text-white rounded-2xl font-semibold text-lg hover:bg-white/10 transition-all duration-300"
                                on:click=move |_| drawers.open(DrawerKind::Demo)
                            >
                                "Book a Demo"
                            </button>
                        </div>
                        <div class="mt-6 flex flex-wrap items-center gap-x-6 gap-y-2 text-slate-300 text-sm">
                            {ASSURANCES.into_iter().map(|text| view! {
                                <div class="flex items-center">
                                    <span class="w-2 h-2 bg-green-400 rounded-full mr-2"></span>
                                    {text}
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="fade-in-up fade-delay-700">
                    <div class="rounded-3xl p-[2px] bg-gradient-to-r from-brand-deep/60 to-brand-sky/60">
                        <div class="bg-blue-950/80 backdrop-blur-xl rounded-3xl p-8 border border-white/10">
                            <h3 class="text-2xl font-bold text-white mb-4">"Why hotels choose Navigator"</h3>
                            <p class="text-slate-200 italic">"The Most Reliable Rate Intelligence Platform"</p>
                            <ul class="mt-4 space-y-3">
                                {WHY_NAVIGATOR.into_iter().map(|point| view! {
                                    <li class="flex items-start">
                                        <span class="mt-1 mr-3 inline-flex h-6 w-6 items-center justify-center">
                                            <GradientCheck/>
                                        </span>
                                        <span class="text-white">{point}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                            <div class="mt-6 flex justify-center">
                                <span class="inline-flex items-center px-6 py-2 rounded-full bg-white/10 backdrop-blur-md border border-white/20 text-white text-sm md:text-base font-semibold shadow-lg">
                                    "Beyond Light, uncover every competitor insight for maximum revenue gain."
                                </span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
