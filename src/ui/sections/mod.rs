//! Marketing page sections, top to bottom

mod comparison;
mod ecosystem;
mod footer;
mod header;
mod hero;
mod narrative;
mod pricing;
mod testimonials;

pub use comparison::{DifferentiatorMatrix, SegmentsSection};
pub use ecosystem::EcosystemSection;
pub use footer::Footer;
pub use header::{Header, Logo};
pub use hero::HeroSection;
pub use narrative::NarrativeSection;
pub use pricing::PricingSection;
pub use testimonials::TestimonialsSection;
