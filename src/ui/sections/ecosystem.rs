use leptos::prelude::*;

use crate::ui::reveal::REVEAL;

const INTEGRATIONS: [(&str, &str); 3] = [
    (
        "Navigator UI",
        "Out-of-the-box, fast UI built for hotel revenue teams. No engineering required.",
    ),
    (
        "API for all leading RMSs",
        "Deliver clean, matched rate intelligence directly into your RMS via secure APIs.",
    ),
    (
        "API for BI System",
        "Stream ready-to-use datasets into your BI tools and warehouse for analysis.",
    ),
];

/// Ways Navigator plugs into an existing stack
#[component]
pub fn EcosystemSection() -> impl IntoView {
    view! {
        <section id="ecosystem" class="relative py-20 bg-gradient-to-br from-slate-900 via-blue-950 to-slate-900">
            <div class="relative z-10 max-w-6xl mx-auto px-6">
                <div class=format!("{} grid md:grid-cols-2 gap-10 items-center min-h-[480px]", REVEAL)>
                    <div>
                        <h2 class="text-4xl md:text-5xl font-extrabold text-white">
                            "Built to Plug "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-brand-deep to-brand-sky">
                                "into Your Ecosystem"
                            </span>
                        </h2>
                        <p class="mt-4 text-blue-100 text-lg max-w-xl">
                            "Whether you need a full UI experience or raw rate feeds into your BI stack, Navigator adapts to your workflows."
                        </p>
                    </div>

                    <div class="md:justify-self-end w-full max-w-md">
                        <div class="rounded-3xl border border-white/20 bg-white/5 backdrop-blur-lg p-5 lg:p-6">
                            <div class="grid grid-cols-1 gap-4">
                                {INTEGRATIONS.into_iter().map(|(title, body)| view! {
                                    <div
                                        class="rounded-2xl p-[1px] bg-gradient-to-r from-brand-deep/40 to-brand-sky/40 hover:from-brand-deep hover:to-brand-sky hover:-translate-y-0.5 transition-transform duration-300"
                                        aria-label=format!("{} option", title)
                                    >
                                        <div class="rounded-2xl h-full bg-slate-900/60 p-4 md:p-5">
                                            <h3 class="text-white font-semibold tracking-tight">{title}</h3>
                                            <p class="text-slate-200/80 text-sm mt-1">{body}</p>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
