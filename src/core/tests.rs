#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::core::recommendations::MAX_SELECTED_CHANNELS;
    use crate::core::{
        AutofillPolicy, ChannelToggle, FieldError, FlowEffect, FlowSettings, FlowStage,
        HotelCategory, LeadCaptureFlow, LeadField, ManualScheduler, Region, SubmitOutcome,
    };

    type Flow = LeadCaptureFlow<ManualScheduler>;

    /// Advance the clock and feed every fired token to the flow
    fn run(clock: &ManualScheduler, flow: &mut Flow, millis: u64) -> Vec<FlowEffect> {
        clock
            .advance(Duration::from_millis(millis))
            .into_iter()
            .filter_map(|token| flow.on_timer(token))
            .collect()
    }

    fn fill_jane(flow: &mut Flow) {
        flow.edit(LeadField::Name, "Jane Doe").unwrap();
        flow.edit(LeadField::HotelBrand, "Four Seasons Hotels").unwrap();
        flow.edit(LeadField::Email, "jane@fs.com").unwrap();
        flow.edit(LeadField::Phone, "555-0100").unwrap();
    }

    #[test]
    fn test_full_trial_journey() {
        let clock = ManualScheduler::new();
        let mut flow: Flow = LeadCaptureFlow::new(FlowSettings::default());
        fill_jane(&mut flow);

        assert_eq!(flow.form().category, Some(HotelCategory::LuxuryResort));
        assert_eq!(flow.form().region, Some(Region::NorthAmerica));

        assert_eq!(flow.submit(&clock).unwrap(), SubmitOutcome::Accepted);
        assert_eq!(flow.stage(), FlowStage::Computing);

        assert!(run(&clock, &mut flow, 1800).is_empty());
        assert_eq!(flow.stage(), FlowStage::Reviewing);
        let set = flow.recommendations().unwrap();
        assert_eq!(
            set.competitors(),
            ["Four Seasons", "Ritz-Carlton", "St. Regis", "Aman", "Mandarin Oriental"]
        );

        flow.edit_competitor(3, "Rosewood").unwrap();
        assert_eq!(flow.toggle_channel("Agoda").unwrap(), ChannelToggle::Deselected);
        assert_eq!(flow.toggle_channel("Hotels.com").unwrap(), ChannelToggle::Selected);

        let summary = flow.confirm(&clock).unwrap();
        assert_eq!(summary.competitors[3], "Rosewood");
        assert_eq!(summary.channels, vec!["Booking.com", "Expedia", "Hotels.com"]);
        assert_eq!(flow.stage(), FlowStage::Finishing);

        assert_eq!(
            run(&clock, &mut flow, 1500),
            vec![FlowEffect::Redirect("/app".to_string())]
        );
    }

    #[test]
    fn test_bad_email_blocks_submit() {
        let clock = ManualScheduler::new();
        let mut flow: Flow = LeadCaptureFlow::new(FlowSettings::default());
        fill_jane(&mut flow);
        flow.edit(LeadField::Email, "not-an-email").unwrap();

        assert_eq!(flow.submit(&clock).unwrap(), SubmitOutcome::Rejected);
        assert_eq!(flow.errors().len(), 1);
        assert_eq!(
            flow.errors().get(LeadField::Email),
            Some(FieldError::InvalidFormat)
        );
        assert!(run(&clock, &mut flow, 10_000).is_empty());
        assert_eq!(flow.stage(), FlowStage::Collecting);
    }

    #[test]
    fn test_close_while_computing_never_reaches_review() {
        let clock = ManualScheduler::new();
        let mut flow: Flow = LeadCaptureFlow::new(FlowSettings::default());
        fill_jane(&mut flow);
        flow.submit(&clock).unwrap();

        run(&clock, &mut flow, 1000);
        flow.close(&clock);
        run(&clock, &mut flow, 5000);

        assert_eq!(flow.stage(), FlowStage::Collecting);
        assert!(flow.recommendations().is_none());
        assert!(flow.form().name.is_empty());
    }

    #[test]
    fn test_close_while_finishing_never_redirects() {
        let clock = ManualScheduler::new();
        let mut flow: Flow = LeadCaptureFlow::new(FlowSettings::default());
        fill_jane(&mut flow);
        flow.submit(&clock).unwrap();
        run(&clock, &mut flow, 1800);
        flow.confirm(&clock).unwrap();

        flow.close(&clock);

        assert!(run(&clock, &mut flow, 1500).is_empty());
        assert_eq!(flow.stage(), FlowStage::Collecting);
    }

    #[test]
    fn test_reopen_mid_analysis_then_resubmit() {
        // the first session's timer must not cut the second session's delay short
        let clock = ManualScheduler::new();
        let mut flow: Flow = LeadCaptureFlow::new(FlowSettings::default());
        fill_jane(&mut flow);
        flow.submit(&clock).unwrap();
        run(&clock, &mut flow, 1000);

        flow.reopen(&clock);
        fill_jane(&mut flow);
        flow.submit(&clock).unwrap();

        run(&clock, &mut flow, 800);
        assert_eq!(flow.stage(), FlowStage::Computing);
        run(&clock, &mut flow, 1000);
        assert_eq!(flow.stage(), FlowStage::Reviewing);
    }

    #[test]
    fn test_manual_choice_survives_brand_pick_when_preserved() {
        let settings =
            FlowSettings::default().with_autofill_policy(AutofillPolicy::PreserveManualEdits);
        let mut flow: Flow = LeadCaptureFlow::new(settings);

        flow.edit(LeadField::Category, "Boutique Hotel").unwrap();
        flow.edit(LeadField::Region, "Europe").unwrap();
        flow.edit(LeadField::HotelBrand, "Four Seasons Hotels").unwrap();

        assert_eq!(flow.form().category, Some(HotelCategory::BoutiqueHotel));
        assert_eq!(flow.form().region, Some(Region::Europe));
    }

    #[test]
    fn test_channel_limit_holds_through_review() {
        let clock = ManualScheduler::new();
        let mut flow: Flow = LeadCaptureFlow::new(FlowSettings::default());
        fill_jane(&mut flow);
        flow.submit(&clock).unwrap();
        run(&clock, &mut flow, 1800);

        for channel in ["Hotels.com", "Trip.com", "Priceline"] {
            assert_eq!(
                flow.toggle_channel(channel).unwrap(),
                ChannelToggle::LimitReached
            );
        }
        let selected = flow.recommendations().unwrap().selected_channels();
        assert_eq!(selected.len(), MAX_SELECTED_CHANNELS);
        assert_eq!(selected, ["Booking.com", "Expedia", "Agoda"]);
    }
}
