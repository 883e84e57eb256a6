use super::random::{date, RandomSource, Sampler};
use crate::platform::{
    AreaBreakdownItem, CustomField, CustomFieldValue, RequestedUpgrade, UpgradeStatus,
};

const CUSTOM_FIELD_NAMES: [&str; 6] = [
    "Legacy ID",
    "Internal Rating",
    "Market Segment Code",
    "Special Handling Required",
    "Next Review Date",
    "External System Link",
];

const TAGS: [&str; 10] = [
    "High Priority",
    "Investor Target",
    "Luxury",
    "Eco-Friendly",
    "Phase 1",
    "Phase 2",
    "Under Review",
    "Flagged",
    "Premium Location",
    "Fast Track",
];

const UPGRADE_NAMES: [&str; 5] = [
    "Marble Flooring",
    "Smart Thermostat",
    "Premium Kitchen Appliances",
    "Jacuzzi Tub",
    "Extended Balcony",
];

const UPGRADE_NOTES: [&str; 3] = [
    "Client to confirm by EOD.",
    "Awaiting stock.",
    "Requires custom order.",
];

const ROOMS: [&str; 5] = [
    "Living Room",
    "Master Bedroom",
    "Kitchen",
    "Bathroom 1",
    "Balcony",
];

pub fn custom_fields<R: RandomSource>(sampler: &mut Sampler<R>, count: usize) -> Vec<CustomField> {
    (0..count)
        .map(|_| {
            let value = match sampler.number(0, 3) {
                0 => CustomFieldValue::Text(format!("CF-{}", &sampler.id()[..5])),
                1 => CustomFieldValue::Number(sampler.number(1, 1000) as f64),
                2 => CustomFieldValue::Date(
                    sampler.date_between(date(2022, 1, 1), date(2025, 1, 1)),
                ),
                _ => CustomFieldValue::Boolean(sampler.chance(0.5)),
            };
            CustomField {
                field_name: sampler.pick(&CUSTOM_FIELD_NAMES).to_string(),
                value,
            }
        })
        .collect()
}

/// With probability `1 - threshold`, one to `max` custom fields; otherwise none.
pub fn optional_custom_fields<R: RandomSource>(
    sampler: &mut Sampler<R>,
    threshold: f64,
    max: usize,
) -> Vec<CustomField> {
    if sampler.chance(threshold) {
        let count = sampler.count(1, max);
        custom_fields(sampler, count)
    } else {
        Vec::new()
    }
}

pub fn tags<R: RandomSource>(sampler: &mut Sampler<R>, max: usize) -> Vec<String> {
    sampler
        .pick_many(&TAGS, max)
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn optional_tags<R: RandomSource>(
    sampler: &mut Sampler<R>,
    threshold: f64,
    max: usize,
) -> Vec<String> {
    if sampler.chance(threshold) {
        let limit = sampler.count(1, max);
        tags(sampler, limit)
    } else {
        Vec::new()
    }
}

pub fn requested_upgrades<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<RequestedUpgrade> {
    (0..count)
        .map(|_| RequestedUpgrade {
            upgrade_name: sampler.pick(&UPGRADE_NAMES).to_string(),
            cost: sampler.amount(1_000, 25_000),
            status: *sampler.pick(&UpgradeStatus::ordered()),
            notes: sampler.maybe(0.7, |s| s.pick(&UPGRADE_NOTES).to_string()),
        })
        .collect()
}

/// Splits `total_area` across two to five rooms.
///
/// Each room takes between 10% and 40% of the total, capped by what is left.
/// Any remainder lands on the last room, or on an "Other" row when no room
/// was allocated at all.
pub fn area_breakdown<R: RandomSource>(
    sampler: &mut Sampler<R>,
    total_area: u32,
) -> Vec<AreaBreakdownItem> {
    let room_count = sampler.count(2, ROOMS.len());
    let low = i64::from(total_area) / 10;
    let high = i64::from(total_area) * 2 / 5;

    let mut remaining = total_area;
    let mut breakdown: Vec<AreaBreakdownItem> = Vec::with_capacity(room_count);
    for room in ROOMS.iter().take(room_count) {
        if remaining == 0 {
            break;
        }
        let drawn = sampler.number(low, high).max(0) as u32;
        let area = remaining.min(drawn);
        breakdown.push(AreaBreakdownItem {
            room_name: room.to_string(),
            area_sqft: area,
        });
        remaining -= area;
    }

    if remaining > 0 {
        match breakdown.last_mut() {
            Some(last) => last.area_sqft += remaining,
            None => breakdown.push(AreaBreakdownItem {
                room_name: "Other".to_string(),
                area_sqft: remaining,
            }),
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_breakdown_accounts_for_every_square_foot() {
        let mut sampler = Sampler::seeded(17);
        for total in [500_u32, 1_234, 3_000] {
            let rooms = area_breakdown(&mut sampler, total);
            assert!((1..=5).contains(&rooms.len()));
            let allocated: u32 = rooms.iter().map(|room| room.area_sqft).sum();
            assert_eq!(allocated, total);
        }
    }

    #[test]
    fn zero_area_produces_no_rooms() {
        let mut sampler = Sampler::seeded(2);
        assert!(area_breakdown(&mut sampler, 0).is_empty());
    }

    #[test]
    fn tags_come_from_the_fixed_vocabulary() {
        let mut sampler = Sampler::seeded(4);
        let chosen = tags(&mut sampler, 4);
        assert!(!chosen.is_empty() && chosen.len() <= 4);
        assert!(chosen.iter().all(|tag| TAGS.contains(&tag.as_str())));
    }
}
