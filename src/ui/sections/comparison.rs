//! Differentiator matrix and the per-segment solution tabs

use leptos::prelude::*;

use crate::ui::drawers::{DrawerKind, use_drawer_context};
use crate::ui::reveal::REVEAL;

struct MatrixRow {
    label: &'static str,
    navigator: &'static str,
    other: &'static str,
}

const MATRIX: [MatrixRow; 7] = [
    MatrixRow {
        label: "OTA & Meta Coverage",
        navigator: "800+ channels globally",
        other: "Limited scope",
    },
    MatrixRow {
        label: "Rate Accuracy & Freshness",
        navigator: "Real-time, validated snapshots",
        other: "Delays or stale data",
    },
    MatrixRow {
        label: "Parity Comparison Logic",
        navigator: "True apple-to-apple comparisons",
        other: "Mismatched or estimated rates",
    },
    MatrixRow {
        label: "Test Booking Engine",
        navigator: "Scalable, reliable on all OTAs",
        other: "Frequent failures on key sites",
    },
    MatrixRow {
        label: "Demand Signals",
        navigator: "Data across hotels, events, airlines, cruises",
        other: "Limited to events",
    },
    MatrixRow {
        label: "API Flexibility",
        navigator: "Plug-and-play integrations",
        other: "Rigid or slow to adapt",
    },
    MatrixRow {
        label: "Customer Support",
        navigator: "Dedicated 24/7 hotel support",
        other: "Delayed, templated responses",
    },
];

#[component]
pub fn DifferentiatorMatrix() -> impl IntoView {
    view! {
        <section id="compare" class="relative py-20 bg-slate-50">
            <div class=format!("{} max-w-6xl mx-auto px-6", REVEAL)>
                <div class="text-center mb-10">
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-900">
                        "What Makes "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-indigo-600">"Navigator"</span>
                        " Different?"
                    </h2>
                    <p class="mt-3 text-slate-600">
                        "A clear decision table, so you can see the operational reality, not marketing gloss."
                    </p>
                </div>

                <div class="rounded-2xl overflow-hidden border border-slate-200 bg-white shadow-xl" role="table">
                    <div class="grid grid-cols-12" role="row">
                        <div class="col-span-4 px-6 py-5 font-semibold text-slate-700 bg-slate-50" role="columnheader">"Comparison"</div>
                        <div class="col-span-4 px-6 py-5 text-center font-bold bg-gradient-to-r from-blue-700 to-indigo-700 text-white" role="columnheader">"Navigator"</div>
                        <div class="col-span-4 px-6 py-5 text-center font-semibold text-slate-700 bg-slate-50" role="columnheader">"Other Solutions"</div>
                    </div>
                    <div class="divide-y divide-slate-200">
                        {MATRIX.iter().enumerate().map(|(idx, row)| {
                            let odd = idx % 2 == 1;
                            view! {
                                <div class="grid grid-cols-12" role="row">
                                    <div
                                        class="col-span-4 px-6 py-5 font-medium text-slate-700"
                                        class=("bg-slate-50/60", odd)
                                        class=("bg-white", !odd)
                                        role="cell"
                                    >
                                        {row.label}
                                    </div>
                                    <div class="col-span-4 px-6 py-5 bg-blue-50 text-slate-900" role="cell">
                                        <span class="inline-block rounded-md bg-white/60 border border-blue-200 px-2 py-1 text-sm font-semibold text-blue-900">
                                            {row.navigator}
                                        </span>
                                    </div>
                                    <div
                                        class="col-span-4 px-6 py-5 text-slate-600"
                                        class=("bg-slate-50", odd)
                                        class=("bg-slate-100", !odd)
                                        role="cell"
                                    >
                                        {row.other}
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

struct Segment {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    features: [&'static str; 6],
    setup_time: &'static str,
    properties: &'static str,
    impact: &'static str,
    cta: &'static str,
    cta_drawer: DrawerKind,
}

const SEGMENTS: [Segment; 3] = [
    Segment {
        title: "Enterprise & Chain Hotels",
        subtitle: "Portfolio intelligence at scale",
        description: "Manage multiple properties with unified insights, centralized control, and enterprise-grade API integration.",
        features: [
            "Multi-property dashboard with portfolio analytics",
            "Enterprise API integration (2-week implementation)",
            "Custom reporting for C-level executives",
            "Dedicated success manager and priority support",
            "SOC 2 compliance with 99.9% uptime SLA",
            "White-label options for management companies",
        ],
        setup_time: "2 weeks",
        properties: "10-10,000+",
        impact: "40% efficiency",
        cta: "Schedule Enterprise Demo",
        cta_drawer: DrawerKind::Demo,
    },
    Segment {
        title: "Independent Hotels",
        subtitle: "Maximum revenue, minimum complexity",
        description: "Perfect for boutique hotels and independent properties. Get enterprise-level intelligence without the enterprise complexity.",
        features: [
            "One-click setup with immediate insights",
            "Automated pricing recommendations",
            "Simple dashboard designed for busy owners",
            "No long-term contracts or setup fees",
            "Built-in training and support materials",
            "Mobile-first design for on-the-go management",
        ],
        setup_time: "24 hours",
        properties: "1-10",
        impact: "23% ADR boost",
        cta: "Start Free Trial",
        cta_drawer: DrawerKind::Trial,
    },
    Segment {
        title: "Revenue Management Companies",
        subtitle: "Data intelligence that scales",
        description: "Professional tools for revenue management consultants and companies managing multiple client properties.",
        features: [
            "Client portal with branded reporting",
            "Bulk property management tools",
            "Advanced analytics and forecasting",
            "Custom KPI tracking and alerts",
            "White-label client presentations",
            "Revenue consultant certification program",
        ],
        setup_time: "1 week",
        properties: "Unlimited",
        impact: "60% time saved",
        cta: "Partner with Navigator",
        cta_drawer: DrawerKind::Demo,
    },
];

/// Split a segment title into the bold first two words and the rest for the tab
fn tab_lines(title: &str) -> (String, String) {
    let words: Vec<&str> = title.split_whitespace().collect();
    let split = words.len().min(2);
    (words[..split].join(" "), words[split..].join(" "))
}

#[component]
pub fn SegmentsSection() -> impl IntoView {
    let drawers = use_drawer_context();
    let (active, set_active) = signal(0usize);

    view! {
        <section id="segments" class="relative py-20 bg-slate-50">
            <div class="max-w-6xl mx-auto px-6">
                <div class=format!("{} text-center mb-12", REVEAL)>
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">
                        "One Platform, Intelligent Revenue Growth"
                    </h2>
                    <p class="text-xl text-slate-600 max-w-4xl mx-auto mb-8">
                        "Navigator adapts to your hotel's unique needs. Whether you're managing a single property or a global portfolio, our AI-powered platform delivers the right solution for your business."
                    </p>
                </div>

                <div class=REVEAL>
                    <div class="flex flex-wrap justify-center mb-8 bg-white rounded-2xl p-2 shadow-lg max-w-4xl mx-auto" role="tablist">
                        {SEGMENTS.iter().enumerate().map(|(index, segment)| {
                            let (lead, rest) = tab_lines(segment.title);
                            view! {
                                <button
                                    class="px-6 py-4 rounded-xl font-semibold transition-all duration-300 flex-1 min-w-0"
                                    class=("segment-tab-active", move || active.get() == index)
                                    class=("segment-tab-idle", move || active.get() != index)
                                    role="tab"
                                    aria-selected=move || (active.get() == index).to_string()
                                    on:click=move |_| set_active.set(index)
                                >
                                    <div class="text-sm md:text-base font-bold truncate">{lead}</div>
                                    <div class="text-xs opacity-80 truncate">{rest}</div>
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="bg-white rounded-3xl shadow-2xl overflow-hidden" role="tabpanel">
                        {move || {
                            let segment = &SEGMENTS[active.get().min(SEGMENTS.len() - 1)];
                            let cta_drawer = segment.cta_drawer;
                            view! {
                                <div class="p-8 md:p-12 grid lg:grid-cols-2 gap-12 items-center">
                                    <div>
                                        <h3 class="text-3xl md:text-4xl font-bold text-slate-800 mb-4">{segment.title}</h3>
                                        <p class="text-xl text-blue-600 font-semibold mb-6">{segment.subtitle}</p>
                                        <p class="text-lg text-slate-600 mb-8 leading-relaxed">{segment.description}</p>

                                        <div class="grid grid-cols-3 gap-4 mb-8">
                                            <Metric value=segment.setup_time label="Setup Time" highlight=false/>
                                            <Metric value=segment.properties label="Properties" highlight=false/>
                                            <Metric value=segment.impact label="Average Impact" highlight=true/>
                                        </div>

                                        <button
                                            class="btn-gradient px-8 py-4"
                                            on:click=move |_| drawers.open(cta_drawer)
                                        >
                                            {segment.cta}
                                        </button>
                                    </div>

                                    <div>
                                        <h4 class="text-xl font-bold text-slate-800 mb-6">"What's included:"</h4>
                                        <ul class="space-y-4">
                                            {segment.features.into_iter().map(|feature| view! {
                                                <li class="flex items-start">
                                                    <span class="mt-1.5 mr-3 h-3 w-3 flex-shrink-0 rounded bg-gradient-to-r from-brand-deep to-brand-sky"></span>
                                                    <span class="text-slate-700 leading-relaxed">{feature}</span>
                                                </li>
                                            }).collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Metric(value: &'static str, label: &'static str, highlight: bool) -> impl IntoView {
    view! {
        <div class="text-center p-4 bg-slate-50 rounded-xl">
            <div class="text-2xl font-bold" class=("text-green-600", highlight) class=("text-slate-800", !highlight)>
                {value}
            </div>
            <div class="text-sm text-slate-600">{label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_lines() {
        assert_eq!(
            tab_lines("Revenue Management Companies"),
            ("Revenue Management".to_string(), "Companies".to_string())
        );
        assert_eq!(
            tab_lines("Independent Hotels"),
            ("Independent Hotels".to_string(), String::new())
        );
    }

    #[test]
    fn test_every_segment_has_a_call_to_action() {
        for segment in &SEGMENTS {
            assert!(!segment.cta.is_empty(), "{}", segment.title);
        }
    }
}
