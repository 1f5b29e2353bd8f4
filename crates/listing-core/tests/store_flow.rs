//! End-to-end store behavior over the seed data set.

use listing_core::{seed_store, Channel, MatchRequest, QuickAction, StoreError};
use listing_events::{LogCategory, PropertyMode};

#[test]
fn append_to_unknown_property_leaves_seed_untouched() {
    let mut store = seed_store();
    let total_before = store.total_log_count();

    let result = store.append(
        "prop-404",
        LogCategory::Trust,
        "Phantom Event",
        None,
        None,
    );

    assert!(matches!(
        result,
        Err(StoreError::PropertyNotFound(ref id)) if id == "prop-404"
    ));
    assert_eq!(store.total_log_count(), total_before);
}

#[test]
fn living_match_request_with_custom_area_adds_two_events_each() {
    let mut store = seed_store();
    let living_ids: Vec<String> = store
        .in_mode(PropertyMode::Living)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(living_ids.len(), 2, "seed has two LIVING properties");

    let counts_before: Vec<usize> = store
        .all_properties()
        .map(|p| p.log_count())
        .collect();

    let matched = store.post_match_request(
        &MatchRequest::new(PropertyMode::Living, "Furnished 2-bed near fiber", "$1,000/mo")
            .with_custom_area(),
    );
    assert_eq!(matched, 2);

    for id in &living_ids {
        let property = store.get(id).unwrap();
        let social = property
            .logs
            .iter()
            .filter(|e| e.category == LogCategory::Social && e.title == "Hot Request Match")
            .count();
        let user = property
            .logs
            .iter()
            .filter(|e| e.category == LogCategory::User && e.title == "Custom Search Zone Saved")
            .count();
        assert_eq!(social, 1);
        assert_eq!(user, 1);
    }

    // Non-living properties gained nothing
    for (property, before) in store.all_properties().zip(counts_before) {
        if property.mode != PropertyMode::Living {
            assert_eq!(property.log_count(), before, "{} must be untouched", property.id);
        } else {
            assert_eq!(property.log_count(), before + 2);
        }
    }
}

#[test]
fn read_returns_date_descending_with_stable_ties() {
    let mut store = seed_store();

    // Two appends land on the same calendar date; the later append must
    // stay ahead of the earlier one after the date sort.
    let first = store
        .apply_quick_action("prop-2", QuickAction::SubmitOffer)
        .unwrap();
    let second = store
        .send_message("prop-2", Channel::Sms, "Viewing this weekend?")
        .unwrap();

    let timeline = store.read("prop-2").unwrap();
    assert!(timeline.len() >= 6);

    for window in timeline.windows(2) {
        assert!(window[0].date >= window[1].date, "dates must be descending");
    }

    let pos_first = timeline.iter().position(|e| e.id == first.id).unwrap();
    let pos_second = timeline.iter().position(|e| e.id == second.id).unwrap();
    assert!(
        pos_second < pos_first,
        "later append wins the tie on equal dates"
    );
}

#[test]
fn appends_are_visible_to_the_next_read() {
    let mut store = seed_store();
    let before = store.read("prop-4").unwrap().len();

    store
        .apply_quick_action("prop-4", QuickAction::ScheduleSiteVisit)
        .unwrap();

    let after = store.read("prop-4").unwrap();
    assert_eq!(after.len(), before + 1);
    assert!(after.iter().any(|e| e.title == "Site Visit Scheduled"));
}
