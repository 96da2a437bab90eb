//! Landing page component
//!
//! Composes the marketing sections in page order and owns the page-wide
//! contexts: the drawer switch and the notification queue. The drawers and
//! toasts render once here so any section can open them.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::drawers::{Drawers, provide_drawer_context};
use crate::ui::notifications::{NotificationsContainer, provide_notifications};
use crate::ui::reveal::RevealScript;
use crate::ui::sections::{
    DifferentiatorMatrix, EcosystemSection, Footer, Header, HeroSection, NarrativeSection,
    PricingSection, SegmentsSection, TestimonialsSection,
};

const DESCRIPTION: &str = "Navigator is revenue intelligence for hotels: rate shopping across 1100+ sources, parity breach detection and early demand signals.";

/// Marketing landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_drawer_context();
    let notifications = provide_notifications();

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <Header />
            <main>
                <HeroSection />
                <NarrativeSection />
                <EcosystemSection />
                <DifferentiatorMatrix />
                <SegmentsSection />
                <PricingSection />
                <TestimonialsSection />
            </main>
            <Footer />
        </div>

        <Drawers />
        <NotificationsContainer manager=notifications />
        <RevealScript />
    }
}

/// SEO meta tags for the landing page
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Navigator - Revenue Intelligence That Works While You Sleep" />

        <Meta name="description" content=DESCRIPTION />
        <Meta name="keywords" content="hotel revenue management, rate shopping, rate parity, demand forecasting, OTA monitoring, hotel pricing" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Navigator - Revenue Intelligence for Hotels" />
        <Meta property="og:description" content=DESCRIPTION />

        // Twitter
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content="Navigator - Revenue Intelligence for Hotels" />
        <Meta name="twitter:description" content=DESCRIPTION />

        <Link rel="icon" href="/favicon.svg" />
    }
}
