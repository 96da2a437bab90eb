use leptos::prelude::*;

use crate::ui::reveal::REVEAL;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    quote: &'static str,
    result: &'static str,
}

const TESTIMONIALS: [Testimonial; 8] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Revenue Manager",
        company: "Dubai Luxury Hotels",
        quote: "Navigator increased our ADR by 23% in just 3 months. I finally sleep through the night knowing our revenue is protected by intelligent automation.",
        result: "+23% ADR",
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "Director of Revenue",
        company: "Atlantic Resort Group",
        quote: "Implementation took 2 weeks vs 6 months with our previous platform. Our RevPAR is up 31% and we're spending 90% less time on analysis.",
        result: "+31% RevPAR",
    },
    Testimonial {
        name: "Amanda Foster",
        role: "VP Revenue Management",
        company: "Heritage Hotel Collection",
        quote: "Navigator's predictive analytics helped us capture a 45% revenue boost during festival season. The forecast accuracy is consistently 94%+.",
        result: "+45% Revenue",
    },
    Testimonial {
        name: "James Sullivan",
        role: "General Manager",
        company: "Alpine Mountain Resort",
        quote: "Navigator automatically adjusted our rates during peak ski season, capturing 38% more revenue than last year. Set it and forget it revenue optimization.",
        result: "+38% Season Revenue",
    },
    Testimonial {
        name: "Lisa Kim",
        role: "Revenue Director",
        company: "Metropolitan Suites Chain",
        quote: "Managing 15 properties was overwhelming until Navigator. Now I monitor all locations from one dashboard and our portfolio revenue is up 29%.",
        result: "+29% Portfolio",
    },
    Testimonial {
        name: "David Park",
        role: "Owner-Operator",
        company: "Coastal Boutique Inn",
        quote: "As an independent hotel owner, Navigator gives me enterprise-level intelligence without the complexity. Revenue is up 26% and I saved $50K in consulting fees.",
        result: "+26% Revenue",
    },
    Testimonial {
        name: "Rachel Torres",
        role: "Regional Revenue Manager",
        company: "Global Hospitality Group",
        quote: "Navigator's API integration with our PMS was seamless. 200 properties connected in 3 weeks, and we're seeing 35% better rate optimization across the portfolio.",
        result: "+35% Rate Optimization",
    },
    Testimonial {
        name: "Thomas Mitchell",
        role: "Revenue Consultant",
        company: "Hospitality Revenue Partners",
        quote: "Navigator transformed how I serve my clients. White-label reporting saves me 20 hours per week, and my clients love the real-time insights dashboard.",
        result: "20hrs/week saved",
    },
];

const TRUSTED_BY: [&str; 6] = [
    "Dubai Luxury Hotels",
    "Atlantic Resort Group",
    "Heritage Collection",
    "Metropolitan Suites",
    "Alpine Mountain Resort",
    "Coastal Boutique Inn",
];

/// Uppercase first letters of each word in a name, used for avatars
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <div class="flex-none w-96 bg-white rounded-2xl p-8 border border-slate-200 shadow-xl">
            <div class="flex items-center mb-6">
                <div class="w-16 h-16 rounded-full bg-gradient-to-r from-brand-deep to-brand-sky flex items-center justify-center text-white font-bold text-xl mr-4">
                    {initials(testimonial.name)}
                </div>
                <div>
                    <div class="font-bold text-slate-900 text-lg">{testimonial.name}</div>
                    <div class="text-slate-500">{testimonial.role}</div>
                    <div class="text-slate-400 text-sm">{testimonial.company}</div>
                </div>
            </div>
            <p class="text-slate-600 leading-relaxed mb-6 text-base">
                {format!("\u{201c}{}\u{201d}", testimonial.quote)}
            </p>
            <div class="flex items-center justify-between">
                <div class="flex items-center text-yellow-400" aria-label="5-star rating">
                    "★★★★★" <span class="ml-2 text-slate-500 text-sm">"5-star rating"</span>
                </div>
                <div class="text-emerald-600 font-semibold">{testimonial.result}</div>
            </div>
        </div>
    }
}

/// Auto-scrolling customer quotes followed by the trusted-by brand row
#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="relative">
            <div class="max-w-6xl mx-auto px-6">
                <div class="h-px bg-gradient-to-r from-brand-deep via-brand-sky to-brand-deep opacity-50 rounded-full mb-8"></div>
            </div>
            <div class="relative w-full py-16 overflow-hidden min-h-[600px] bg-white">
                <div class=format!("{} text-center mb-12", REVEAL)>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 text-slate-900">
                        "Trusted by Leading Hotels Worldwide"
                    </h2>
                    <p class="text-xl text-slate-600 max-w-3xl mx-auto">
                        "Over 500 hotels have transformed their revenue management with Navigator"
                    </p>
                </div>

                <div class="overflow-hidden">
                    // The list is rendered twice so the marquee loops without a gap
                    <div class="flex gap-8 animate-scroll-infinite">
                        {TESTIMONIALS.iter().map(|testimonial| view! { <TestimonialCard testimonial=testimonial/> }).collect_view()}
                        {TESTIMONIALS.iter().map(|testimonial| view! { <TestimonialCard testimonial=testimonial/> }).collect_view()}
                    </div>
                </div>

                <div class="text-center mt-12">
                    <p class="text-slate-600 text-lg mb-6">"Trusted by 500+ hotels including:"</p>
                    <div class="flex flex-wrap justify-center items-center gap-6">
                        {TRUSTED_BY.into_iter().map(|brand| view! {
                            <div class="text-slate-700 font-semibold px-6 py-3 bg-white rounded-xl border border-slate-200">
                                {brand}
                            </div>
                        }).collect_view()}
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
    fn test_initials() {
        assert_eq!(initials("Michael Rodriguez"), "MR");
        assert_eq!(initials("  amanda   foster "), "AF");
        assert_eq!(initials(""), "");
    }
}
