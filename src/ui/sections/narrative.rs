//! Stats row, product introduction and the four-layer "how it works" walk-through

use leptos::prelude::*;

use crate::ui::reveal::REVEAL;

const STATS: [(&str, &str); 5] = [
    ("$2.4K", "Avg daily revenue leakage"),
    ("24/7", "Rate and parity violations"),
    ("48h", "Early demand surge signals"),
    ("1100+", "Data sources monitored"),
    ("4 hrs", "Manual work saved daily"),
];

struct Feature {
    title: &'static str,
    body: &'static str,
    accent: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Rate Tracking",
        body: "Detects rate discrepancies and parity violations automatically, even the subtle ones, across hundreds of OTAs and POS combinations.",
        accent: "from-blue-600 to-indigo-500",
    },
    Feature {
        title: "Predictive Demand Signals",
        body: "Uses AI to surface spikes and dips in demand before they happen, so you can adjust rates proactively.",
        accent: "from-violet-600 to-purple-400",
    },
    Feature {
        title: "Smarter Filtering, Less Noise",
        body: "Cuts through the clutter by flagging only the violations and shifts that actually matter to your market segment.",
        accent: "from-purple-500 to-violet-300",
    },
    Feature {
        title: "AI-Powered Recommendations",
        body: "From price positioning to parity resolution paths, Navigator guides your next move with data-backed intelligence.",
        accent: "from-blue-600 to-amber-400",
    },
];

struct Step {
    title: &'static str,
    intro: &'static str,
    points: &'static [&'static str],
    takeaway: &'static str,
    badge: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        title: "Multi-Source Market Scanning",
        intro: "Navigator continuously scans and collects pricing and demand signals from over 1,100 data sources, including:",
        points: &[
            "800+ OTAs, brand.com sites, metasearch platforms",
            "Global demand indicators: events, airline data, car rentals, cruises, and more",
            "Member-only rates, mobile rates, and multi-POS visibility",
        ],
        takeaway: "This ensures you always see what guests see, wherever they're booking.",
        badge: "bg-blue-600",
    },
    Step {
        title: "Data Cleaning, Matching & Validation",
        intro: "Raw data is useless without refinement. Navigator uses proprietary algorithms to:",
        points: &[
            "Match room types and rate plans apple-to-apple",
            "Remove outliers and anomalies",
            "Ensure real-time freshness with no cached or outdated pricing",
        ],
        takeaway: "Clean, accurate, immediately actionable rate intelligence.",
        badge: "bg-purple-600",
    },
    Step {
        title: "Unified Commercial Intelligence",
        intro: "Navigator doesn't just give you a rate table. It synthesizes:",
        points: &[
            "Competitor pricing movements",
            "Demand surges in feeder markets",
            "Parity violations across distribution",
            "Impact areas that need immediate action",
        ],
        takeaway: "One dashboard. All the signals you need. No spreadsheets.",
        badge: "bg-indigo-600",
    },
    Step {
        title: "Decision Support via AI",
        intro: "AI models surface the most urgent and revenue-impacting insights:",
        points: &[
            "Detect potential underpricing or overpricing",
            "Flag parity leak sources in real time",
            "Recommend optimal rate changes to stay ahead",
        ],
        takeaway: "Not just data. Your 24×7 virtual revenue analyst.",
        badge: "bg-pink-600",
    },
];

#[component]
pub fn NarrativeSection() -> impl IntoView {
    view! {
        <section id="how" class="relative py-20 bg-white overflow-hidden">
            <div class="max-w-6xl mx-auto px-6">
                <div class=format!("{} grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-6 mb-16", REVEAL)>
                    {STATS.into_iter().map(|(value, label)| view! {
                        <div class="bg-white rounded-3xl p-8 border border-slate-200">
                            <div class="text-3xl md:text-4xl font-bold text-slate-900 mb-2">{value}</div>
                            <div class="text-slate-500">{label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <IntroducingNavigator/>

            <div class="max-w-6xl mx-auto px-6 mt-16">
                <HowItWorks/>
            </div>
        </section>
    }
}

#[component]
fn IntroducingNavigator() -> impl IntoView {
    view! {
        <div class=format!("{} py-12 md:py-16 px-6 md:px-12 lg:px-24 bg-slate-50 border-y border-slate-200", REVEAL)>
            <div class="text-center max-w-4xl mx-auto mb-12">
                <div class="text-slate-500 font-semibold tracking-wide mb-3">"Introducing Navigator"</div>
                <h3 class="text-3xl md:text-4xl font-bold text-slate-800 mb-4">
                    "Powering Decisions with " <span class="text-blue-600">"AI"</span> " that Gets Hospitality"
                </h3>
                <p class="text-lg text-slate-700 mb-2">"Navigator doesn't just track data. It understands it."</p>
                <p class="text-lg text-slate-600">
                    "Built with hospitality-specific AI, Navigator helps commercial teams make sharper, faster pricing decisions by identifying patterns no human could spot in time."
                </p>
            </div>

            <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-6">
                {FEATURES.iter().map(|feature| view! {
                    <div class="bg-white rounded-2xl p-8 border border-slate-200 hover:shadow-lg transition-all duration-300">
                        <div class=format!("mb-4 h-2 w-16 rounded-full bg-gradient-to-r {}", feature.accent)></div>
                        <h4 class="text-xl font-bold text-slate-800 mb-3">{feature.title}</h4>
                        <p class="text-slate-600 leading-relaxed">{feature.body}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <div class=format!("{} grid lg:grid-cols-2 gap-10 items-start", REVEAL)>
            <div class="lg:sticky lg:top-24 self-start">
                <div class="text-slate-600 font-semibold tracking-wide uppercase mb-1">"How navigator works:"</div>
                <h3 class="text-3xl md:text-4xl font-bold mb-3 text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-purple-600">
                    "From Market Signals to Better Pricing Decisions"
                </h3>
                <p class="text-slate-600 mt-2">"To solve this, Navigator does the heavy lifting across four layers:"</p>
                <div class="mt-6 rounded-3xl bg-gradient-to-br from-slate-900 to-blue-900 p-8 text-white">
                    <div class="flex items-start text-sm md:text-base">
                        <span class="mr-2 mt-1.5 h-2 w-2 flex-shrink-0 rounded-full bg-emerald-400"></span>
                        <span>
                            "Navigator is built to help hotel commercial teams answer one critical question: \u{201c}Are we priced right, right now?\u{201d}"
                        </span>
                    </div>
                </div>
            </div>

            <ol class="grid grid-cols-1 gap-6">
                {STEPS.iter().enumerate().map(|(i, step)| view! {
                    <li class="relative rounded-2xl bg-white border border-slate-200 p-6 hover:shadow-md transition-all duration-300">
                        <div class=format!(
                            "absolute -top-3 -left-3 h-10 w-10 rounded-xl {} text-white font-bold flex items-center justify-center",
                            step.badge,
                        )>
                            {i + 1}
                        </div>
                        <h4 class="text-xl font-bold text-slate-800 mb-2">{step.title}</h4>
                        <p class="text-slate-600 mb-3">{step.intro}</p>
                        <ul class="list-disc pl-5 space-y-1 text-slate-600">
                            {step.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                        </ul>
                        <div class="mt-3 inline-flex items-center gap-2 rounded-full bg-emerald-50 text-emerald-700 border border-emerald-200 px-3 py-1 text-sm font-medium">
                            <span class="h-2 w-2 rounded-full bg-emerald-500"></span>
                            {step.takeaway}
                        </div>
                    </li>
                }).collect_view()}
            </ol>
        </div>
    }
}
