//! Demo farmer-section harvest records

use chrono::NaiveDate;

use super::history::{build_history, HistoryOptions};
use super::trend::TrendPattern;
use crate::models::FarmerSectionHarvestRecord;
use crate::types::ShiftBaseRates;

/// Window length of every demo record
pub const DEMO_HISTORY_DAYS: u32 = 14;

/// Most recent day of every demo record
pub fn demo_anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 22).unwrap_or_default()
}

struct DemoSection {
    id: &'static str,
    farmer_id: &'static str,
    section_id: &'static str,
    item_id: &'static str,
    item_name: &'static str,
    area_m2: f64,
    rates: ShiftBaseRates,
    pattern: TrendPattern,
    seed: &'static str,
    noise_pct: f64,
    seasonality_pct: f64,
    amplitude: f64,
    expected_harvest_kg: f64,
    planted_amount: f64,
    expected_fruiting_per_plant: f64,
}

const LOGISTIC_CENTER_ID: &str = "lc-north-1";

fn demo_sections() -> [DemoSection; 6] {
    let tomato = ShiftBaseRates::new(0.42, 0.31, 0.18, 0.05);
    let cucumber = ShiftBaseRates::new(0.55, 0.40, 0.22, 0.08);

    [
        DemoSection {
            id: "fsh-tomato-a",
            farmer_id: "farmer-001",
            section_id: "sec-a1",
            item_id: "item-tomato-cherry",
            item_name: "Cherry Tomato",
            area_m2: 1200.0,
            rates: tomato,
            pattern: TrendPattern::Up,
            seed: "tomato-a",
            noise_pct: 0.06,
            seasonality_pct: 0.04,
            amplitude: 0.18,
            expected_harvest_kg: 6500.0,
            planted_amount: 3000.0,
            expected_fruiting_per_plant: 2.2,
        },
        DemoSection {
            id: "fsh-tomato-b",
            farmer_id: "farmer-001",
            section_id: "sec-a2",
            item_id: "item-tomato-cherry",
            item_name: "Cherry Tomato",
            area_m2: 850.0,
            rates: tomato,
            pattern: TrendPattern::Bow,
            seed: "tomato-b",
            noise_pct: 0.08,
            seasonality_pct: 0.05,
            amplitude: 0.22,
            expected_harvest_kg: 4300.0,
            planted_amount: 2100.0,
            expected_fruiting_per_plant: 2.0,
        },
        DemoSection {
            id: "fsh-tomato-c",
            farmer_id: "farmer-002",
            section_id: "sec-b1",
            item_id: "item-tomato-cherry",
            item_name: "Cherry Tomato",
            area_m2: 1500.0,
            rates: tomato,
            pattern: TrendPattern::Flat,
            seed: "tomato-c",
            noise_pct: 0.04,
            seasonality_pct: 0.03,
            amplitude: 0.0,
            expected_harvest_kg: 7800.0,
            planted_amount: 3700.0,
            expected_fruiting_per_plant: 2.1,
        },
        DemoSection {
            id: "fsh-cucumber-a",
            farmer_id: "farmer-001",
            section_id: "sec-a1",
            item_id: "item-cucumber",
            item_name: "Cucumber",
            area_m2: 900.0,
            rates: cucumber,
            pattern: TrendPattern::Hump,
            seed: "cucumber-a",
            noise_pct: 0.07,
            seasonality_pct: 0.04,
            amplitude: 0.2,
            expected_harvest_kg: 5200.0,
            planted_amount: 1800.0,
            expected_fruiting_per_plant: 3.1,
        },
        DemoSection {
            id: "fsh-cucumber-b",
            farmer_id: "farmer-002",
            section_id: "sec-b2",
            item_id: "item-cucumber",
            item_name: "Cucumber",
            area_m2: 1100.0,
            rates: cucumber,
            pattern: TrendPattern::Down,
            seed: "cucumber-b",
            noise_pct: 0.05,
            seasonality_pct: 0.06,
            amplitude: 0.16,
            expected_harvest_kg: 6100.0,
            planted_amount: 2200.0,
            expected_fruiting_per_plant: 2.9,
        },
        DemoSection {
            id: "fsh-cucumber-c",
            farmer_id: "farmer-003",
            section_id: "sec-c1",
            item_id: "item-cucumber",
            item_name: "Cucumber",
            area_m2: 700.0,
            rates: cucumber,
            pattern: TrendPattern::Up,
            seed: "cucumber-c",
            noise_pct: 0.09,
            seasonality_pct: 0.02,
            amplitude: 0.12,
            expected_harvest_kg: 3900.0,
            planted_amount: 1400.0,
            expected_fruiting_per_plant: 3.0,
        },
    ]
}

/// Build the six demo records (two crops × three sections).
///
/// Pure factory; callers memoize the result if they need it more than once.
pub fn demo_farmer_section_harvest() -> Vec<FarmerSectionHarvestRecord> {
    let anchor = demo_anchor_date();

    demo_sections()
        .into_iter()
        .map(|section| {
            let options = HistoryOptions::default()
                .with_pattern(section.pattern)
                .with_seed(section.seed)
                .with_noise_pct(section.noise_pct)
                .with_seasonality_pct(section.seasonality_pct)
                .with_amplitude(section.amplitude);

            FarmerSectionHarvestRecord {
                id: section.id.to_string(),
                farmer_id: Some(section.farmer_id.to_string()),
                section_id: section.section_id.to_string(),
                logistic_center_id: Some(LOGISTIC_CENTER_ID.to_string()),
                item_id: section.item_id.to_string(),
                item_name: section.item_name.to_string(),
                area_m2: section.area_m2,
                history: build_history(anchor, DEMO_HISTORY_DAYS, &section.rates, &options),
                expected_harvest_kg: Some(section.expected_harvest_kg),
                planted_amount: Some(section.planted_amount),
                expected_fruiting_per_plant: Some(section.expected_fruiting_per_plant),
            }
        })
        .collect()
}

/// Resolve the demo dataset as if it had been fetched
pub async fn fetch_farmer_section_harvest() -> Vec<FarmerSectionHarvestRecord> {
    demo_farmer_section_harvest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_records_two_crops_three_sections_each() {
        let records = demo_farmer_section_harvest();
        assert_eq!(records.len(), 6);

        let items: HashSet<_> = records.iter().map(|r| r.item_id.as_str()).collect();
        assert_eq!(items.len(), 2);
        for item in items {
            let count = records.iter().filter(|r| r.item_id == item).count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn test_ids_unique() {
        let records = demo_farmer_section_harvest();
        let ids: HashSet<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_every_record_covers_window() {
        for record in demo_farmer_section_harvest() {
            assert_eq!(record.history.len(), (DEMO_HISTORY_DAYS * 4) as usize);
            assert_eq!(record.history[0].date, demo_anchor_date());
            assert_eq!(record.latest_date(), Some(demo_anchor_date()));
            assert_eq!(record.latest_day().len(), 4);
        }
    }

    #[test]
    fn test_records_have_distinct_histories() {
        let records = demo_farmer_section_harvest();
        for (i, a) in records.iter().enumerate() {
            for b in records.iter().skip(i + 1) {
                assert_ne!(a.history, b.history, "{} vs {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_records_pass_validation() {
        for record in demo_farmer_section_harvest() {
            assert!(crate::validation::validate_area_m2(record.area_m2).is_ok());
            assert!(record.history.iter().all(|p| p.harvested_kg_per_m2 >= 0.0));
        }
    }

    #[test]
    fn test_factory_is_stable() {
        assert_eq!(demo_farmer_section_harvest(), demo_farmer_section_harvest());
    }
}
