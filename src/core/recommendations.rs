//! Competitor recommendations and channel selection for the review step
//!
//! Recommendations come from two fixed tables keyed by category and region.
//! Category peers rank ahead of regional players, which rank ahead of the
//! caller's defaults.

use super::error::FlowError;

/// Maximum number of competitors suggested
pub const MAX_COMPETITORS: usize = 5;

/// Maximum number of distribution channels that can be selected at once
pub const MAX_SELECTED_CHANNELS: usize = 3;

/// Competitors shown when nothing more specific is known
pub const DEFAULT_COMPETITORS: [&str; 5] = ["Hilton", "Marriott", "Hyatt", "IHG", "Accor"];

/// Channels the visitor can flag for monitoring
pub const DISTRIBUTION_CHANNELS: [&str; 6] = [
    "Booking.com",
    "Expedia",
    "Agoda",
    "Hotels.com",
    "Trip.com",
    "Priceline",
];

/// Channels preselected when the review step opens
pub const DEFAULT_CHANNELS: [&str; 3] = ["Booking.com", "Expedia", "Agoda"];

fn region_candidates(region: &str) -> &'static [&'static str] {
    match region {
        "North America" => &["Hilton", "Marriott", "Hyatt", "IHG", "Wyndham"],
        "Europe" => &["Accor", "NH Hotels", "Scandic", "Radisson", "Meliá"],
        "Asia Pacific" => &["Shangri-La", "Mandarin Oriental", "Taj", "Hyatt", "Hilton"],
        _ => &[],
    }
}

fn category_candidates(category: &str) -> &'static [&'static str] {
    match category {
        "Luxury Resort" => &[
            "Four Seasons",
            "Ritz-Carlton",
            "St. Regis",
            "Aman",
            "Mandarin Oriental",
        ],
        "Business Hotel" => &["Hilton", "Marriott", "IHG", "Hyatt", "Radisson"],
        "Boutique Hotel" => &["Kimpton", "Thompson", "Moxy", "CitizenM", "SLS"],
        _ => &[],
    }
}

/// The default competitor list as owned strings
pub fn default_competitors() -> Vec<String> {
    DEFAULT_COMPETITORS.iter().map(|s| s.to_string()).collect()
}

/// Suggest up to [`MAX_COMPETITORS`] competitors for a category and region.
///
/// Concatenates category peers, regional players and `previous`, keeps the
/// first occurrence of each name, and truncates. Never returns an empty list
/// unless `previous` is itself empty.
pub fn recommend(category: &str, region: &str, previous: &[String]) -> Vec<String> {
    let mut combined: Vec<String> = Vec::with_capacity(MAX_COMPETITORS);

    let candidates = category_candidates(category)
        .iter()
        .copied()
        .chain(region_candidates(region).iter().copied())
        .chain(previous.iter().map(String::as_str));

    for name in candidates {
        if combined.len() == MAX_COMPETITORS {
            break;
        }
        if !combined.iter().any(|existing| existing == name) {
            combined.push(name.to_string());
        }
    }

    if combined.is_empty() {
        previous.to_vec()
    } else {
        combined
    }
}

/// What a channel toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelToggle {
    Selected,
    Deselected,
    /// Selection ignored because the limit was already reached
    LimitReached,
}

/// Competitors and channels shown on the review step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationSet {
    competitors: Vec<String>,
    selected_channels: Vec<String>,
}

impl RecommendationSet {
    /// Create a set with the given competitors and the default channel selection
    pub fn new(competitors: Vec<String>) -> Self {
        Self {
            competitors,
            selected_channels: DEFAULT_CHANNELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn competitors(&self) -> &[String] {
        &self.competitors
    }

    /// Selected channels in selection order
    pub fn selected_channels(&self) -> &[String] {
        &self.selected_channels
    }

    pub fn is_selected(&self, channel: &str) -> bool {
        self.selected_channels.iter().any(|c| c == channel)
    }

    pub fn can_select_more(&self) -> bool {
        self.selected_channels.len() < MAX_SELECTED_CHANNELS
    }

    /// Replace the competitor name in an existing slot
    pub fn edit_competitor(&mut self, index: usize, name: &str) -> Result<(), FlowError> {
        let len = self.competitors.len();
        let slot = self
            .competitors
            .get_mut(index)
            .ok_or(FlowError::CompetitorOutOfRange { index, len })?;
        *slot = name.to_string();
        Ok(())
    }

    /// Select or deselect a channel.
    ///
    /// Selecting when [`MAX_SELECTED_CHANNELS`] are already chosen leaves the
    /// selection unchanged.
    pub fn toggle_channel(&mut self, channel: &str) -> Result<ChannelToggle, FlowError> {
        if !DISTRIBUTION_CHANNELS.contains(&channel) {
            return Err(FlowError::UnknownChannel(channel.to_string()));
        }

        if let Some(pos) = self.selected_channels.iter().position(|c| c == channel) {
            self.selected_channels.remove(pos);
            return Ok(ChannelToggle::Deselected);
        }

        if !self.can_select_more() {
            return Ok(ChannelToggle::LimitReached);
        }

        self.selected_channels.push(channel.to_string());
        Ok(ChannelToggle::Selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_luxury_north_america() {
        let result = recommend("Luxury Resort", "North America", &default_competitors());
        assert_eq!(
            result,
            vec!["Four Seasons", "Ritz-Carlton", "St. Regis", "Aman", "Mandarin Oriental"]
        );
    }

    #[test]
    fn test_recommend_orders_category_before_region_before_defaults() {
        let previous = vec!["Default A".to_string()];

        // category peers win over the regional list
        let result = recommend("Boutique Hotel", "Europe", &previous);
        assert_eq!(result, vec!["Kimpton", "Thompson", "Moxy", "CitizenM", "SLS"]);

        // regional players win over the defaults
        let result = recommend("Resort & Spa", "Europe", &previous);
        assert_eq!(result, vec!["Accor", "NH Hotels", "Scandic", "Radisson", "Meliá"]);

        let result = recommend("Unknown", "Unknown", &previous);
        assert_eq!(result, previous);
    }

    #[test]
    fn test_recommend_deduplicates_preserving_first_occurrence() {
        // Business Hotel and North America share Hilton, Marriott, Hyatt, IHG
        let result = recommend("Business Hotel", "North America", &default_competitors());
        assert_eq!(result, vec!["Hilton", "Marriott", "IHG", "Hyatt", "Radisson"]);

        let mut unique = result.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), result.len());
    }

    #[test]
    fn test_recommend_fills_from_defaults_when_tables_miss() {
        let result = recommend("Budget Hotel", "Caribbean", &default_competitors());
        assert_eq!(result, default_competitors());
    }

    #[test]
    fn test_recommend_never_empty_when_defaults_exist() {
        for (category, region) in [("", ""), ("Luxury Resort", ""), ("", "Europe")] {
            let result = recommend(category, region, &default_competitors());
            assert!(!result.is_empty());
            assert!(result.len() <= MAX_COMPETITORS);
        }
    }

    #[test]
    fn test_recommend_with_empty_previous_and_no_match() {
        assert!(recommend("", "", &[]).is_empty());
    }

    #[test]
    fn test_new_set_selects_defaults() {
        let set = RecommendationSet::new(default_competitors());
        assert_eq!(set.selected_channels(), &["Booking.com", "Expedia", "Agoda"]);
        assert!(!set.can_select_more());
    }

    #[test]
    fn test_fourth_channel_is_ignored() {
        let mut set = RecommendationSet::new(default_competitors());
        let before = set.selected_channels().to_vec();

        let outcome = set.toggle_channel("Priceline").unwrap();

        assert_eq!(outcome, ChannelToggle::LimitReached);
        assert_eq!(set.selected_channels(), before.as_slice());
        assert!(!set.is_selected("Priceline"));
    }

    #[test]
    fn test_deselect_then_select() {
        let mut set = RecommendationSet::new(default_competitors());

        assert_eq!(set.toggle_channel("Expedia").unwrap(), ChannelToggle::Deselected);
        assert!(set.can_select_more());
        assert_eq!(set.toggle_channel("Trip.com").unwrap(), ChannelToggle::Selected);
        assert_eq!(set.selected_channels(), &["Booking.com", "Agoda", "Trip.com"]);
    }

    #[test]
    fn test_unknown_channel_is_rejected() {
        let mut set = RecommendationSet::new(default_competitors());
        assert_eq!(
            set.toggle_channel("Airbnb"),
            Err(FlowError::UnknownChannel("Airbnb".to_string()))
        );
    }

    #[test]
    fn test_edit_competitor_in_place() {
        let mut set = RecommendationSet::new(default_competitors());
        set.edit_competitor(1, "Kempinski").unwrap();
        assert_eq!(set.competitors()[1], "Kempinski");
        assert_eq!(set.competitors().len(), 5);

        assert_eq!(
            set.edit_competitor(5, "Nope"),
            Err(FlowError::CompetitorOutOfRange { index: 5, len: 5 })
        );
    }
}
