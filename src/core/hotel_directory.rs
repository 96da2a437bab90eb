//! Static hotel brand directory
//!
//! Maps a brand/chain name to the category and region used to pre-fill the
//! trial form. Lookups are exact-match on the brand name.

use derive_more::Display;

/// Hotel category options offered in the trial form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum HotelCategory {
    #[display("Luxury Resort")]
    LuxuryResort,
    #[display("Business Hotel")]
    BusinessHotel,
    #[display("Boutique Hotel")]
    BoutiqueHotel,
    #[display("Budget Hotel")]
    BudgetHotel,
    #[display("Extended Stay")]
    ExtendedStay,
    #[display("Vacation Rental")]
    VacationRental,
    #[display("Hotel Chain")]
    HotelChain,
    #[display("Independent Hotel")]
    IndependentHotel,
    #[display("Resort & Spa")]
    ResortAndSpa,
    #[display("Conference Center")]
    ConferenceCenter,
}

impl HotelCategory {
    pub const ALL: [HotelCategory; 10] = [
        HotelCategory::LuxuryResort,
        HotelCategory::BusinessHotel,
        HotelCategory::BoutiqueHotel,
        HotelCategory::BudgetHotel,
        HotelCategory::ExtendedStay,
        HotelCategory::VacationRental,
        HotelCategory::HotelChain,
        HotelCategory::IndependentHotel,
        HotelCategory::ResortAndSpa,
        HotelCategory::ConferenceCenter,
    ];

    /// Parse a display label back into a category
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_string() == label)
    }
}

/// Region options offered in the trial form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Region {
    #[display("North America")]
    NorthAmerica,
    #[display("Europe")]
    Europe,
    #[display("Asia Pacific")]
    AsiaPacific,
    #[display("Middle East & Africa")]
    MiddleEastAfrica,
    #[display("Latin America")]
    LatinAmerica,
    #[display("Caribbean")]
    Caribbean,
    #[display("Southeast Asia")]
    SoutheastAsia,
    #[display("Australia & New Zealand")]
    AustraliaNewZealand,
    #[display("Central Asia")]
    CentralAsia,
    #[display("Nordic Countries")]
    NordicCountries,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::MiddleEastAfrica,
        Region::LatinAmerica,
        Region::Caribbean,
        Region::SoutheastAsia,
        Region::AustraliaNewZealand,
        Region::CentralAsia,
        Region::NordicCountries,
    ];

    /// Parse a display label back into a region
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.to_string() == label)
    }
}

/// Category and region a brand resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub category: HotelCategory,
    pub region: Region,
}

/// Brand name that deliberately resolves to nothing, leaving category and
/// region for manual entry
pub const CUSTOM_BRAND: &str = "Other/Custom Hotel";

struct BrandEntry {
    name: &'static str,
    placement: Option<Placement>,
}

const fn listed(name: &'static str, category: HotelCategory, region: Region) -> BrandEntry {
    BrandEntry {
        name,
        placement: Some(Placement { category, region }),
    }
}

const fn unlisted(name: &'static str) -> BrandEntry {
    BrandEntry {
        name,
        placement: None,
    }
}

use HotelCategory as C;
use Region as R;

static DIRECTORY: &[BrandEntry] = &[
    // Luxury international chains
    listed("Four Seasons Hotels", C::LuxuryResort, R::NorthAmerica),
    listed("Ritz-Carlton", C::LuxuryResort, R::NorthAmerica),
    listed("St. Regis Hotels", C::LuxuryResort, R::NorthAmerica),
    listed("Park Hyatt", C::LuxuryResort, R::AsiaPacific),
    listed("Mandarin Oriental", C::LuxuryResort, R::AsiaPacific),
    listed("Aman Resorts", C::ResortAndSpa, R::AsiaPacific),
    listed("Bulgari Hotels", C::LuxuryResort, R::Europe),
    listed("Edition Hotels", C::BoutiqueHotel, R::Europe),
    // Business
    listed("Hilton Hotels", C::BusinessHotel, R::NorthAmerica),
    listed("Marriott Hotels", C::BusinessHotel, R::NorthAmerica),
    listed("Hyatt Hotels", C::BusinessHotel, R::NorthAmerica),
    listed("InterContinental", C::BusinessHotel, R::Europe),
    listed("Westin Hotels", C::BusinessHotel, R::NorthAmerica),
    listed("Sheraton Hotels", C::BusinessHotel, R::NorthAmerica),
    listed("Crowne Plaza", C::BusinessHotel, R::Europe),
    // Boutique & independent
    listed("Kimpton Hotels", C::BoutiqueHotel, R::NorthAmerica),
    listed("Thompson Hotels", C::BoutiqueHotel, R::NorthAmerica),
    listed("SLS Hotels", C::BoutiqueHotel, R::NorthAmerica),
    listed("Morgans Hotel Group", C::BoutiqueHotel, R::NorthAmerica),
    listed("Design Hotels", C::BoutiqueHotel, R::Europe),
    // Resort & spa
    listed("Grand Hyatt", C::ResortAndSpa, R::AsiaPacific),
    listed("JW Marriott", C::ResortAndSpa, R::NorthAmerica),
    listed("Conrad Hotels", C::ResortAndSpa, R::AsiaPacific),
    listed("Waldorf Astoria", C::ResortAndSpa, R::NorthAmerica),
    listed("Six Senses", C::ResortAndSpa, R::AsiaPacific),
    // Middle East & Africa
    listed("Jumeirah Hotels", C::LuxuryResort, R::MiddleEastAfrica),
    listed("Atlantis Resorts", C::ResortAndSpa, R::MiddleEastAfrica),
    listed("One&Only Resorts", C::LuxuryResort, R::MiddleEastAfrica),
    // Budget & extended stay
    listed("Hampton Inn", C::BudgetHotel, R::NorthAmerica),
    listed("Holiday Inn Express", C::BudgetHotel, R::NorthAmerica),
    listed("Extended Stay America", C::ExtendedStay, R::NorthAmerica),
    listed("Homewood Suites", C::ExtendedStay, R::NorthAmerica),
    // European chains
    listed("Accor Hotels", C::HotelChain, R::Europe),
    listed("NH Hotel Group", C::BusinessHotel, R::Europe),
    listed("Scandic Hotels", C::BusinessHotel, R::NordicCountries),
    // Independent
    listed("Independent Hotel", C::IndependentHotel, R::NorthAmerica),
    unlisted(CUSTOM_BRAND),
];

/// Resolve a brand to its category and region.
///
/// Returns `None` for unknown brands and for [`CUSTOM_BRAND`].
pub fn lookup(brand: &str) -> Option<Placement> {
    DIRECTORY
        .iter()
        .find(|entry| entry.name == brand)
        .and_then(|entry| entry.placement)
}

/// Whether the brand appears in the directory at all
pub fn is_known_brand(brand: &str) -> bool {
    DIRECTORY.iter().any(|entry| entry.name == brand)
}

/// A labelled group of brands for the grouped brand picker
#[derive(Debug, Clone, Copy)]
pub struct BrandGroup {
    pub label: &'static str,
    pub brands: &'static [&'static str],
}

pub const BRAND_GROUPS: &[BrandGroup] = &[
    BrandGroup {
        label: "Luxury Hotels",
        brands: &[
            "Four Seasons Hotels",
            "Ritz-Carlton",
            "St. Regis Hotels",
            "Park Hyatt",
            "Mandarin Oriental",
            "Bulgari Hotels",
            "Jumeirah Hotels",
            "One&Only Resorts",
        ],
    },
    BrandGroup {
        label: "Business Hotels",
        brands: &[
            "Hilton Hotels",
            "Marriott Hotels",
            "Hyatt Hotels",
            "InterContinental",
            "Westin Hotels",
            "Sheraton Hotels",
            "Crowne Plaza",
            "NH Hotel Group",
            "Scandic Hotels",
        ],
    },
    BrandGroup {
        label: "Boutique Hotels",
        brands: &[
            "Kimpton Hotels",
            "Thompson Hotels",
            "SLS Hotels",
            "Morgans Hotel Group",
            "Design Hotels",
            "Edition Hotels",
        ],
    },
    BrandGroup {
        label: "Resort & Spa",
        brands: &[
            "Grand Hyatt",
            "JW Marriott",
            "Conrad Hotels",
            "Waldorf Astoria",
            "Six Senses",
            "Aman Resorts",
            "Atlantis Resorts",
        ],
    },
    BrandGroup {
        label: "Budget & Extended Stay",
        brands: &[
            "Hampton Inn",
            "Holiday Inn Express",
            "Extended Stay America",
            "Homewood Suites",
        ],
    },
    BrandGroup {
        label: "Hotel Chains",
        brands: &["Accor Hotels"],
    },
    BrandGroup {
        label: "Independent",
        brands: &["Independent Hotel", CUSTOM_BRAND],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_four_seasons() {
        let placement = lookup("Four Seasons Hotels").unwrap();
        assert_eq!(placement.category, HotelCategory::LuxuryResort);
        assert_eq!(placement.region, Region::NorthAmerica);
    }

    #[test]
    fn test_lookup_custom_brand_has_no_placement() {
        assert!(is_known_brand(CUSTOM_BRAND));
        assert!(lookup(CUSTOM_BRAND).is_none());
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(lookup("four seasons hotels").is_none());
        assert!(lookup("Four Seasons").is_none());
        assert!(lookup(" Four Seasons Hotels").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_every_grouped_brand_is_in_directory() {
        for group in BRAND_GROUPS {
            for brand in group.brands {
                assert!(is_known_brand(brand), "{brand} missing from directory");
            }
        }
    }

    #[test]
    fn test_every_listed_brand_is_grouped() {
        for entry in DIRECTORY {
            assert!(
                BRAND_GROUPS.iter().any(|g| g.brands.contains(&entry.name)),
                "{} not offered in any group",
                entry.name
            );
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for category in HotelCategory::ALL {
            assert_eq!(HotelCategory::from_label(&category.to_string()), Some(category));
        }
        for region in Region::ALL {
            assert_eq!(Region::from_label(&region.to_string()), Some(region));
        }
        assert_eq!(HotelCategory::from_label("Motel"), None);
        assert_eq!(Region::from_label(""), None);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(HotelCategory::ResortAndSpa.to_string(), "Resort & Spa");
        assert_eq!(Region::MiddleEastAfrica.to_string(), "Middle East & Africa");
    }
}
