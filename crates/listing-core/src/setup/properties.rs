//! Property Seed Data
//!
//! Creates the eight seed properties with their initial event logs.
//! The store starts from this fixed set on every process start; nothing
//! is persisted between sessions.

use chrono::NaiveDate;

use listing_events::{LogCategory, LogEvent, Property, PropertyMode, Spec};

use crate::store::PropertyStore;

/// Seed data is compile-time constant; a malformed date here is a bug.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date in seed data")
}

/// Create all seed properties and register them.
pub fn seed_store() -> PropertyStore {
    let mut store = PropertyStore::new();

    // === EVERGREEN AGRICULTURAL STAND ===
    // Verified farmland with a complete trust chain and no risk flags
    let evergreen = Property::new(
        "prop-1",
        "Plot 452 - Evergreen Agricultural Stand",
        "Mutare Road, 20km from Harare CBD",
        45_000,
        PropertyMode::Production,
    )
    .with_image("https://picsum.photos/seed/land1/800/600")
    .with_summary_score(92)
    .with_coordinates(-17.82, 31.05)
    .with_specs(vec![
        Spec::new("Size", "5 Acres"),
        Spec::new("Zoning", "Agricultural"),
        Spec::new("Soil Type", "Red Loam"),
    ])
    .with_logs(vec![
        LogEvent::new(
            "ev-1",
            date(2023, 10, 24),
            LogCategory::Spatial,
            "Boundary Walk Verified",
            "GPS path matched Deed Diagram #GH-991 via LandGlide integration.",
        )
        .verified(),
        LogEvent::new(
            "ev-2",
            date(2023, 10, 25),
            LogCategory::Trust,
            "Ownership Verified",
            "Title Deeds check complete via DealMachine API. No liens found.",
        )
        .verified(),
        LogEvent::new(
            "ev-3",
            date(2023, 11, 2),
            LogCategory::Financial,
            "Soil Productivity Report",
            "Nitrogen levels High. Suitable for Maize and Tobacco.",
        )
        .verified()
        .with_metadata("Yield Potential", "High"),
        LogEvent::new(
            "ev-4",
            date(2023, 11, 10),
            LogCategory::Media,
            "Virtual Tour Uploaded",
            "Owner verified on-site presence via GPS. Viewable in OpenProp mode.",
        )
        .verified(),
        LogEvent::new(
            "ev-new-1",
            date(2023, 11, 12),
            LogCategory::Media,
            "Verified Virtual Tour Uploaded",
            "High-definition 360° tour with verified GPS timestamps via OpenProp.",
        )
        .verified(),
    ]);
    store.register(evergreen);

    // === MODERN LOFT ===
    let loft = Property::new(
        "prop-2",
        "Modern Loft - Tech Hub",
        "Central Plaza, Nairobi",
        1_200,
        PropertyMode::Living,
    )
    .with_image("https://picsum.photos/seed/loft/800/600")
    .with_summary_score(88)
    .with_coordinates(-1.29, 36.82)
    .with_specs(vec![
        Spec::new("Type", "2 Bed Apt"),
        Spec::new("Internet", "Fiber Ready"),
        Spec::new("Furnished", "Yes"),
    ])
    .with_logs(vec![
        LogEvent::new(
            "ev-5",
            date(2023, 11, 15),
            LogCategory::Policy,
            "No Viewing Fee Commitment",
            "Host committed to OpenProp Zero-Fee policy.",
        )
        .verified(),
        LogEvent::new(
            "ev-6",
            date(2023, 12, 1),
            LogCategory::Maintenance,
            "HVAC Serviced",
            "Air conditioning unit repaired and gassed.",
        )
        .verified(),
        LogEvent::new(
            "ev-7",
            date(2024, 1, 5),
            LogCategory::Legal,
            "Lease Template Ready",
            "State-compliant lease generated via DocuSign integration.",
        )
        .verified(),
        LogEvent::new(
            "ev-11",
            date(2024, 2, 14),
            LogCategory::Policy,
            "No Viewing Fee Commitment",
            "Reaffirmed Zero-Fee policy for all interested tenants.",
        )
        .verified(),
    ]);
    store.register(loft);

    // === RETAIL FIX & FLIP ===
    // Distressed stock: risk keywords in the log drag the health score down
    let retail_flip = Property::new(
        "prop-3",
        "Retail Fix & Flip Opportunity",
        "14 Main St, Cape Town",
        180_000,
        PropertyMode::Business,
    )
    .with_image("https://picsum.photos/seed/shop/800/600")
    .with_summary_score(74)
    .with_coordinates(-33.92, 18.42)
    .with_specs(vec![
        Spec::new("Area", "150 sqm"),
        Spec::new("Frontage", "12m"),
        Spec::new("Power", "3-Phase"),
    ])
    .with_logs(vec![
        LogEvent::new(
            "ev-8",
            date(2024, 1, 10),
            LogCategory::Financial,
            "Distressed Asset Signal",
            "Property identified as pre-foreclosure via DealMachine.",
        )
        .verified(),
        // Pending verification
        LogEvent::new(
            "ev-9",
            date(2024, 1, 12),
            LogCategory::Spatial,
            "Footfall Analytics",
            "High traffic zone identified via LoopNet data.",
        ),
        LogEvent::new(
            "ev-10",
            date(2024, 1, 14),
            LogCategory::Maintenance,
            "Roof Inspection Failed",
            "Major leaks detected. Rehab cost estimated at $15k.",
        )
        .verified()
        .with_metadata("Risk", "High"),
    ]);
    store.register(retail_flip);

    // === SUNNY SIDE COTTAGE ===
    let cottage = Property::new(
        "prop-4",
        "Sunny Side Cottage - Short Stay",
        "Victoria Falls, Zimbabwe",
        85,
        PropertyMode::Travel,
    )
    .with_image("https://picsum.photos/seed/travel1/800/600")
    .with_summary_score(96)
    .with_coordinates(-17.92, 25.85)
    .with_specs(vec![
        Spec::new("Sleeps", "4 Guests"),
        Spec::new("Rating", "4.9/5"),
        Spec::new("WiFi", "Starlink"),
    ])
    .with_logs(vec![
        LogEvent::new(
            "travel-1",
            date(2023, 12, 20),
            LogCategory::Media,
            "Verified Virtual Tour",
            "3D walkthrough verified by OpenProp. Matches current furniture.",
        )
        .verified(),
        LogEvent::new(
            "travel-2",
            date(2024, 1, 2),
            LogCategory::Maintenance,
            "Deep Clean Verified",
            "Professional cleaning crew logged exit clean. Ready for check-in.",
        )
        .verified()
        .with_metadata("Cleaner", "Spotless Co."),
        LogEvent::new(
            "travel-3",
            date(2024, 1, 15),
            LogCategory::Social,
            "Superhost Status",
            "Achieved 10 consecutive 5-star reviews.",
        )
        .verified(),
        LogEvent::new(
            "travel-4",
            date(2024, 2, 1),
            LogCategory::Financial,
            "Dynamic Pricing Update",
            "Adjusted rates for peak season based on local event logs.",
        )
        .verified(),
    ]);
    store.register(cottage);

    // === SHARED PENTHOUSE ===
    let penthouse = Property::new(
        "prop-5",
        "Shared Penthouse - Roommate Wanted",
        "Kigali Heights, Rwanda",
        450,
        PropertyMode::Living,
    )
    .with_image("https://picsum.photos/seed/roommate/800/600")
    .with_summary_score(82)
    .with_coordinates(-1.95, 30.09)
    .with_specs(vec![
        Spec::new("Room", "Master Ensuite"),
        Spec::new("Gender", "Mixed"),
        Spec::new("Bills", "Split 50/50"),
    ])
    .with_logs(vec![
        LogEvent::new(
            "live-1",
            date(2024, 1, 10),
            LogCategory::Social,
            "Current Tenant Verified",
            "Identity and employment verification complete for lead tenant.",
        )
        .verified(),
        LogEvent::new(
            "live-2",
            date(2024, 1, 12),
            LogCategory::Financial,
            "Bill History Uploaded",
            "Past 6 months of electricity and water bills uploaded for transparency.",
        )
        .verified()
        .with_metadata("Avg Cost", "$45/mo"),
        LogEvent::new(
            "live-3",
            date(2024, 1, 20),
            LogCategory::Spatial,
            "Commute Analysis",
            "10 min walk to Convention Center verified via Rightmove integration.",
        )
        .verified(),
    ]);
    store.register(penthouse);

    // === BLUE CHIP OFFICE PARK ===
    let office_park = Property::new(
        "prop-6",
        "Blue Chip Office Park",
        "Sandton, Johannesburg",
        3_500,
        PropertyMode::Business,
    )
    .with_image("https://picsum.photos/seed/office/800/600")
    .with_summary_score(95)
    .with_coordinates(-26.10, 28.05)
    .with_specs(vec![
        Spec::new("Grade", "AAA"),
        Spec::new("Parking", "10 Bays"),
        Spec::new("Backup", "Solar + Gen"),
    ])
    .with_logs(vec![
        LogEvent::new(
            "biz-1",
            date(2023, 9, 15),
            LogCategory::Trust,
            "Commercial Zoning Verified",
            "Zoning certificate verified. Approved for Financial Services.",
        )
        .verified(),
        LogEvent::new(
            "biz-2",
            date(2023, 11, 20),
            LogCategory::Maintenance,
            "Solar Installation Log",
            "50kW Solar System commissioned. Grid-tie authorized.",
        )
        .verified()
        .with_metadata("Savings", "40% Power"),
        LogEvent::new(
            "biz-3",
            date(2024, 2, 10),
            LogCategory::Spatial,
            "Connectivity Scan",
            "Fiber dark line active. 5G coverage verified.",
        )
        .verified(),
    ]);
    store.register(office_park);

    // === GOLDEN VALLEY WHEAT FARM ===
    let wheat_farm = Property::new(
        "prop-7",
        "Golden Valley Wheat Farm",
        "Chisamba, Zambia",
        320_000,
        PropertyMode::Production,
    )
    .with_image("https://picsum.photos/seed/wheat/800/600")
    .with_summary_score(89)
    .with_coordinates(-14.96, 28.25)
    .with_specs(vec![
        Spec::new("Arable", "50 Hectares"),
        Spec::new("Water", "River Rights"),
        Spec::new("Center Pivot", "2 Units"),
    ])
    .with_logs(vec![
        LogEvent::new(
            "agri-1",
            date(2023, 5, 10),
            LogCategory::Spatial,
            "Land id Map Layer",
            "Topography and flood lines mapped. 95% arable land confirmed.",
        )
        .verified(),
        LogEvent::new(
            "agri-2",
            date(2023, 8, 15),
            LogCategory::Financial,
            "Crop Yield History",
            "Past 3 seasons production logs uploaded. Avg 7 tons/ha.",
        )
        .verified(),
        LogEvent::new(
            "agri-3",
            date(2024, 1, 20),
            LogCategory::Legal,
            "Water Rights Verified",
            "Extraction permit valid until 2030.",
        )
        .verified(),
    ]);
    store.register(wheat_farm);

    // === DISTRESSED VICTORIAN FIXER-UPPER ===
    let fixer_upper = Property::new(
        "prop-8",
        "Distressed Victorian Fixer-Upper",
        "Woodstock, Cape Town",
        110_000,
        PropertyMode::Business,
    )
    .with_image("https://picsum.photos/seed/fixer/800/600")
    .with_summary_score(65)
    .with_coordinates(-33.93, 18.45)
    .with_specs(vec![
        Spec::new("Strategy", "Flip"),
        Spec::new("ARV", "$195k"),
        Spec::new("Condition", "Poor"),
    ])
    .with_logs(vec![
        LogEvent::new(
            "flip-1",
            date(2024, 2, 15),
            LogCategory::Financial,
            "70% Rule Analysis",
            "Asking price is 65% of ARV minus repairs. Green light.",
        )
        .verified()
        .with_metadata("Potential Profit", "$35k"),
        LogEvent::new(
            "flip-2",
            date(2024, 2, 16),
            LogCategory::Maintenance,
            "Structural Engineer Report",
            "Foundation cracking detected. Est repair $5,000.",
        )
        .verified()
        .with_metadata("Risk", "Medium"),
        LogEvent::new(
            "flip-3",
            date(2024, 2, 17),
            LogCategory::User,
            "Renovation Budget Draft",
            "FlipperForce integration: Kitchen ($8k), Bath ($4k), Paint ($3k).",
        ),
    ]);
    store.register(fixer_upper);

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_store_has_eight_properties() {
        let store = seed_store();
        assert_eq!(store.len(), 8);
        assert_eq!(store.ids().len(), 8);
        assert_eq!(store.ids()[0], "prop-1");
        assert_eq!(store.ids()[7], "prop-8");
    }

    #[test]
    fn test_seed_mode_partition() {
        let store = seed_store();
        assert_eq!(store.in_mode(PropertyMode::Living).len(), 2);
        assert_eq!(store.in_mode(PropertyMode::Business).len(), 3);
        assert_eq!(store.in_mode(PropertyMode::Production).len(), 2);
        assert_eq!(store.in_mode(PropertyMode::Travel).len(), 1);
    }

    #[test]
    fn test_seed_logs_are_newest_append_first() {
        let store = seed_store();
        let evergreen = store.get("prop-1").unwrap();
        assert_eq!(evergreen.log_count(), 5);
        // Last seeded event sits at the head of storage
        assert_eq!(evergreen.logs[0].id, "ev-new-1");
        assert_eq!(evergreen.logs[4].id, "ev-1");
    }

    #[test]
    fn test_seed_contains_unverified_entries() {
        let store = seed_store();
        let retail = store.get("prop-3").unwrap();
        let footfall = retail.logs.iter().find(|e| e.id == "ev-9").unwrap();
        assert!(!footfall.verified);

        let fixer = store.get("prop-8").unwrap();
        let draft = fixer.logs.iter().find(|e| e.id == "flip-3").unwrap();
        assert!(!draft.verified);
    }

    #[test]
    fn test_seed_metadata_preserved() {
        let store = seed_store();
        let retail = store.get("prop-3").unwrap();
        let roof = retail.logs.iter().find(|e| e.id == "ev-10").unwrap();
        let metadata = roof.metadata.as_ref().unwrap();
        assert_eq!(metadata.get("Risk").map(ToString::to_string), Some("High".into()));
    }
}
