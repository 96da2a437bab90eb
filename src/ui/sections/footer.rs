use leptos::prelude::*;

use super::header::Logo;

struct Contact {
    team: &'static str,
    blurb: &'static str,
    email: &'static str,
    phone: &'static str,
}

const CONTACTS: [Contact; 3] = [
    Contact {
        team: "Sales & Demos",
        blurb: "Get started with Navigator",
        email: "sales@navigator.com",
        phone: "+1 (555) 123-4567",
    },
    Contact {
        team: "API Integration",
        blurb: "Enterprise & hotel chains",
        email: "developers@navigator.com",
        phone: "+1 (555) 123-4568",
    },
    Contact {
        team: "Customer Support",
        blurb: "We're here to help",
        email: "support@navigator.com",
        phone: "+1 (555) 123-4569",
    },
];

const TRUST: [(&str, &str); 3] = [
    ("500+", "Hotels using Navigator"),
    ("99.9%", "Uptime guarantee"),
    ("SOC 2", "Security certified"),
];

const LEGAL_LINKS: [(&str, &str); 3] = [
    ("/privacy", "Privacy Policy"),
    ("/terms", "Terms of Service"),
    ("/cookies", "Cookie Policy"),
];

/// `tel:` target for a display phone number
fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-slate-900 text-white overflow-hidden">
            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <div class="py-12">
                    <div class="text-center mb-12">
                        <div class="mb-3 flex justify-center items-center gap-2">
                            <Logo/>
                            <span class="text-2xl font-extrabold">"Navigator"</span>
                        </div>
                        <p class="text-lg text-slate-300">"Revenue Intelligence That Works While You Sleep"</p>
                    </div>

                    <div class="text-center mb-12 max-w-3xl mx-auto">
                        <h3 class="text-xl font-bold mb-6">"Ready to get started?"</h3>
                        <div class="grid md:grid-cols-3 gap-8">
                            {CONTACTS.iter().map(|contact| view! {
                                <div>
                                    <h4 class="font-semibold text-blue-300 mb-2">{contact.team}</h4>
                                    <p class="text-slate-300 mb-3">{contact.blurb}</p>
                                    <a href=format!("mailto:{}", contact.email) class="text-white hover:text-blue-300 transition-colors duration-300 block">
                                        {contact.email}
                                    </a>
                                    <a href=tel_href(contact.phone) class="text-white hover:text-blue-300 transition-colors duration-300">
                                        {contact.phone}
                                    </a>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="text-center mb-12">
                        <div class="grid md:grid-cols-3 gap-8 max-w-xl mx-auto">
                            {TRUST.into_iter().map(|(value, label)| view! {
                                <div>
                                    <div class="text-2xl font-bold text-white mb-1">{value}</div>
                                    <p class="text-slate-300 text-sm">{label}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-slate-800 py-8">
                    <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                        <div class="text-slate-400 text-sm">
                            "© 2024 Navigator. All rights reserved. | Revenue Intelligence Platform for Hotels"
                        </div>
                        <div class="flex gap-6 text-sm">
                            {LEGAL_LINKS.into_iter().map(|(href, label)| view! {
                                <a href=href class="text-slate-400 hover:text-white transition-colors duration-300">{label}</a>
                            }).collect_view()}
                        </div>
                        <div class="text-slate-400 text-sm">"Made with ❤️ for revenue managers worldwide"</div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("+1 (555) 123-4567"), "tel:+15551234567");
    }
}
