//! Pricing tiers with a monthly / yearly toggle, the API block and the trial guarantee

use leptos::prelude::*;

use crate::ui::drawers::{DrawerKind, use_drawer_context};
use crate::ui::reveal::REVEAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Billing {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Price {
    /// Monthly price and the discounted yearly total, in whole dollars
    Fixed { monthly: u32, yearly: u32 },
    Custom,
}

struct PriceLines {
    amount: String,
    period: &'static str,
    saving: Option<String>,
}

impl Price {
    fn lines(self, billing: Billing) -> PriceLines {
        match (self, billing) {
            (Price::Fixed { monthly, .. }, Billing::Monthly) => PriceLines {
                amount: format!("${}", monthly),
                period: "per month",
                saving: None,
            },
            (Price::Fixed { monthly, yearly }, Billing::Yearly) => PriceLines {
                amount: format!("${}", (yearly as f64 / 12.0).round() as u32),
                period: "per month, billed annually",
                saving: Some(format!(
                    "Save ${} per year",
                    (monthly * 12).saturating_sub(yearly)
                )),
            },
            (Price::Custom, _) => PriceLines {
                amount: "Custom".to_string(),
                period: "Contact for pricing",
                saving: None,
            },
        }
    }
}

struct Tier {
    name: &'static str,
    subtitle: &'static str,
    price: Price,
    description: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    cta_drawer: DrawerKind,
    popular: bool,
    color: &'static str,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Navigator Essential",
        subtitle: "Perfect for Independent Hotels",
        price: Price::Fixed { monthly: 299, yearly: 2690 },
        description: "Everything you need to optimize revenue and outperform competitors",
        features: &[
            "Real-time rate monitoring",
            "Demand forecasting",
            "Basic competitive intelligence",
            "Email support",
            "Rate parity alerts",
            "Monthly reporting",
            "Mobile app access",
            "Basic integrations",
        ],
        cta: "Start Free Trial",
        cta_drawer: DrawerKind::Trial,
        popular: false,
        color: "from-blue-500 to-indigo-600",
    },
    Tier {
        name: "Navigator Professional",
        subtitle: "Ideal for Hotel Groups",
        price: Price::Fixed { monthly: 799, yearly: 7190 },
        description: "Advanced features for multi-property revenue optimization",
        features: &[
            "Everything in Essential",
            "Advanced analytics dashboard",
            "Multi-property management",
            "Priority phone support",
            "Custom reporting",
            "API access (basic)",
            "Team collaboration tools",
            "Advanced integrations",
            "Predictive pricing recommendations",
            "Market positioning insights",
        ],
        cta: "Start Free Trial",
        cta_drawer: DrawerKind::Trial,
        popular: true,
        color: "from-purple-500 to-pink-600",
    },
    Tier {
        name: "Navigator Enterprise",
        subtitle: "Built for Hotel Chains",
        price: Price::Custom,
        description: "Full API integration and white-label solutions for large operations",
        features: &[
            "Everything in Professional",
            "Full API integration",
            "Custom data feeds",
            "Dedicated account manager",
            "White-label options",
            "SLA guarantees (99.9% uptime)",
            "Custom training programs",
            "Advanced security features",
            "Unlimited properties",
            "Custom integrations",
            "Priority feature requests",
        ],
        cta: "Schedule Consultation",
        cta_drawer: DrawerKind::Demo,
        popular: false,
        color: "from-indigo-600 to-purple-700",
    },
];

const API_FEATURES: [(&str, &str); 4] = [
    ("Implementation Speed", "Get integrated in 2 weeks, not 6 months"),
    ("Flexible Data Exchange", "Real-time or batch processing to fit your needs"),
    ("Scalable Architecture", "From 10 to 10,000 properties on the same platform"),
    ("Enterprise Security", "SOC 2 compliant with 99.9% uptime SLA"),
];

const GUARANTEES: [(&str, &str); 3] = [
    ("No Setup Fees", "Get started immediately without any upfront costs"),
    ("No Credit Card Required", "Experience full platform access without commitment"),
    ("Guaranteed Results", "See revenue impact or get your money back"),
];

#[component]
pub fn PricingSection() -> impl IntoView {
    let drawers = use_drawer_context();
    let (billing, set_billing) = signal(Billing::Monthly);

    let toggle = move |value: Billing, label: &'static str| {
        view! {
            <button
                class="relative px-6 py-3 rounded-md font-semibold transition-all duration-300"
                class=("bg-blue-600", move || billing.get() == value)
                class=("text-white", move || billing.get() == value)
                class=("shadow-md", move || billing.get() == value)
                class=("text-slate-600", move || billing.get() != value)
                aria-pressed=move || (billing.get() == value).to_string()
                on:click=move |_| set_billing.set(value)
            >
                {label}
                {(value == Billing::Yearly).then(|| view! {
                    <span class="absolute -top-2 -right-2 bg-green-500 text-white text-xs px-2 py-1 rounded-full">
                        "Save 10%"
                    </span>
                })}
            </button>
        }
    };

    view! {
        <section id="pricing" class="relative py-20 overflow-hidden bg-gradient-to-br from-slate-50 via-white to-blue-50">
            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <div class=format!("{} text-center mb-16", REVEAL)>
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">
                        "Flexible Pricing for"
                        <span class="block text-transparent bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text">
                            "Every Hotel"
                        </span>
                    </h2>
                    <p class="text-xl text-slate-600 max-w-3xl mx-auto leading-relaxed">
                        "From independent properties to large chains, Navigator has the perfect plan to fit your needs and budget."
                    </p>
                </div>

                <div class="flex justify-center mb-12">
                    <div class="bg-white p-2 rounded-lg shadow-lg border border-slate-200 flex">
                        {toggle(Billing::Monthly, "Monthly")}
                        {toggle(Billing::Yearly, "Yearly")}
                    </div>
                </div>

                <div class=format!("{} grid md:grid-cols-3 gap-8 mb-16", REVEAL)>
                    {TIERS.iter().map(|tier| {
                        let price = tier.price;
                        let cta_drawer = tier.cta_drawer;
                        view! {
                            <div
                                class="relative bg-white rounded-2xl shadow-xl border-2 overflow-hidden transition-all duration-300 h-full flex flex-col"
                                class=("border-purple-500", tier.popular)
                                class=("md:scale-105", tier.popular)
                                class=("border-slate-200", !tier.popular)
                            >
                                {tier.popular.then(|| view! {
                                    <div class="absolute top-3 right-3 bg-gradient-to-r from-purple-500 to-pink-500 text-white px-4 py-1 rounded-full text-xs font-semibold">
                                        "Most Popular"
                                    </div>
                                })}

                                <div class=format!("bg-gradient-to-r {} p-8 text-white text-center", tier.color)>
                                    <h3 class="text-2xl font-bold mb-2">{tier.name}</h3>
                                    <p class="text-white/90 mb-6">{tier.subtitle}</p>
                                    {move || {
                                        let lines = price.lines(billing.get());
                                        view! {
                                            <div class="mb-4">
                                                <div class="text-4xl font-bold">{lines.amount}</div>
                                                <div class="text-white/80">{lines.period}</div>
                                                {lines.saving.map(|saving| view! {
                                                    <div class="text-green-200 text-sm mt-1">{saving}</div>
                                                })}
                                            </div>
                                        }
                                    }}
                                    <p class="text-white/90 text-sm">{tier.description}</p>
                                </div>

                                <div class="p-8 flex-1 flex flex-col">
                                    <ul class="space-y-4 mb-8 flex-1">
                                        {tier.features.iter().map(|feature| view! {
                                            <li class="flex items-start">
                                                <span class="text-green-500 mr-3 mt-1">"✓"</span>
                                                <span class="text-slate-700">{*feature}</span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                    <button
                                        class="w-full py-4 rounded-lg font-semibold text-lg text-white shadow-lg hover:scale-105 transition-all duration-300 bg-gradient-to-r"
                                        class=("from-purple-500", tier.popular)
                                        class=("to-pink-500", tier.popular)
                                        class=("from-blue-500", !tier.popular)
                                        class=("to-indigo-600", !tier.popular)
                                        on:click=move |_| drawers.open(cta_drawer)
                                    >
                                        {tier.cta}
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class=REVEAL>
                    <div class="bg-gradient-to-r from-slate-800 to-slate-700 rounded-2xl p-12 text-white">
                        <div class="grid md:grid-cols-2 gap-12 items-center">
                            <div>
                                <h3 class="text-3xl font-bold mb-6">"Enterprise API Integration"</h3>
                                <p class="text-slate-300 mb-8 text-lg leading-relaxed">
                                    "Seamlessly integrate Navigator into your existing tech stack with our enterprise-grade API. Built for hotel chains that need custom solutions and white-label integration."
                                </p>
                                <button
                                    class="px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg font-semibold hover:scale-105 transition-all duration-300"
                                    on:click=move |_| drawers.open(DrawerKind::Demo)
                                >
                                    "Schedule API Demo"
                                </button>
                            </div>
                            <div class="grid grid-cols-2 gap-6">
                                {API_FEATURES.into_iter().map(|(title, body)| view! {
                                    <div class="text-center p-6 bg-white/10 rounded-xl border border-white/20">
                                        <h4 class="font-semibold mb-2">{title}</h4>
                                        <p class="text-slate-300 text-sm">{body}</p>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                <div class=format!("{} text-center mt-16", REVEAL)>
                    <div class="bg-gradient-to-r from-green-50 to-emerald-50 rounded-2xl p-12 border border-green-200">
                        <h3 class="text-3xl font-bold text-slate-800 mb-6">"Risk-Free 30-Day Trial"</h3>
                        <p class="text-xl text-slate-600 mb-8 max-w-3xl mx-auto">
                            "Try Navigator completely free for 30 days. If you don't see measurable revenue improvement, we'll refund your first month and pay for your current platform subscription."
                        </p>
                        <div class="grid md:grid-cols-3 gap-8 mb-8">
                            {GUARANTEES.into_iter().map(|(title, body)| view! {
                                <div class="text-center">
                                    <h4 class="font-semibold text-slate-800 mb-2">{title}</h4>
                                    <p class="text-slate-600">{body}</p>
                                </div>
                            }).collect_view()}
                        </div>
                        <button
                            class="px-12 py-5 bg-gradient-to-r from-green-600 to-emerald-600 text-white rounded-lg font-semibold text-xl hover:scale-105 transition-all duration-300 shadow-xl"
                            on:click=move |_| drawers.open(DrawerKind::Trial)
                        >
                            "Start Your Free Trial Now"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_price_lines() {
        let lines = Price::Fixed { monthly: 299, yearly: 2690 }.lines(Billing::Monthly);
        assert_eq!(lines.amount, "$299");
        assert_eq!(lines.period, "per month");
        assert!(lines.saving.is_none());
    }

    #[test]
    fn test_yearly_price_lines_show_saving() {
        let lines = Price::Fixed { monthly: 799, yearly: 7190 }.lines(Billing::Yearly);
        // 7190 / 12 = 599.17
        assert_eq!(lines.amount, "$599");
        assert_eq!(lines.saving.as_deref(), Some("Save $2398 per year"));
    }

    #[test]
    fn test_custom_price_ignores_billing() {
        let lines = Price::Custom.lines(Billing::Yearly);
        assert_eq!(lines.amount, "Custom");
        assert_eq!(lines.period, "Contact for pricing");
        assert!(lines.saving.is_none());
    }
}
