use chrono::NaiveDate;

use super::adherence::calculate_payment_adherence;
use super::random::{date, RandomSource, Sampler};
use super::shared::{area_breakdown, optional_custom_fields, optional_tags, requested_upgrades};
use crate::platform::{
    Invoice, Orientation, PopulatedUnitDetail, ProjectId, UnitAvailabilityStatus, UnitId,
    UnitSizeUnit, UnitView,
};

const FEATURES: [&str; 8] = [
    "Balcony",
    "Smart Home Ready",
    "Sea View Upgrade",
    "Private Garden",
    "Pool Access",
    "Gym Membership Included",
    "Covered Parking",
    "High Floor",
];

const FINISH_PACKAGES: [&str; 4] = ["Standard", "Premium", "Luxury Gold", "Modern Minimalist"];

const CUSTOMIZATION_NOTES: [&str; 2] = [
    "Client requested specific tile color.",
    "Wants additional power outlets in living room.",
];

const UNITS_PER_BLOCK: usize = 20;

/// Placeholder unit drawn before invoicing. The real unit generated later
/// keeps the slot's id, price and availability, so invoices join cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSlot {
    pub id: UnitId,
    pub initial_price: u64,
    pub availability_status: UnitAvailabilityStatus,
}

pub fn unit_slots<R: RandomSource>(sampler: &mut Sampler<R>, total_units: usize) -> Vec<UnitSlot> {
    (0..total_units)
        .map(|_| UnitSlot {
            id: UnitId(sampler.id()),
            initial_price: sampler.amount(500_000, 5_000_000),
            availability_status: *sampler.pick(&UnitAvailabilityStatus::ordered()),
        })
        .collect()
}

/// Block letter, position within the block, then a random digit: the slot at
/// position 22 becomes `B-3x`.
fn unit_number<R: RandomSource>(sampler: &mut Sampler<R>, position: usize) -> String {
    let block = char::from(b'A' + (position / UNITS_PER_BLOCK).min(25) as u8);
    format!(
        "{}-{}{}",
        block,
        position % UNITS_PER_BLOCK + 1,
        sampler.number(0, 9)
    )
}

/// Expands a project's slots into full unit records, deriving payment
/// adherence from the complete invoice list as of `today`.
pub fn populated_units<R: RandomSource>(
    sampler: &mut Sampler<R>,
    project_id: &ProjectId,
    project_name: &str,
    slots: &[UnitSlot],
    invoices: &[Invoice],
    today: NaiveDate,
) -> Vec<PopulatedUnitDetail> {
    slots
        .iter()
        .enumerate()
        .map(|(position, slot)| {
            let size = sampler.number(500, 3000) as u32;
            let feature_limit = sampler.count(1, 4);
            let view_choice = sampler.count(0, UnitView::ordered().len());
            let mut unit = PopulatedUnitDetail {
                id: slot.id.clone(),
                unit_number: unit_number(sampler, position),
                project_id: project_id.clone(),
                project_name: project_name.to_string(),
                floor: Some(sampler.number(1, 50) as u32),
                size,
                size_unit: *sampler.pick(&UnitSizeUnit::ordered()),
                view: UnitView::ordered().get(view_choice).copied(),
                bedrooms: Some(sampler.number(1, 5) as u32),
                initial_price: slot.initial_price,
                current_price: sampler.amount(550_000, 5_500_000),
                availability_status: slot.availability_status,
                unit_features: sampler
                    .pick_many(&FEATURES, feature_limit)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                last_maintenance_date: sampler
                    .maybe(0.3, |s| s.date_between(date(2022, 1, 1), date(2023, 12, 31))),
                floor_plan_url: format!("https://picsum.photos/seed/unit{}/400/300", sampler.id()),
                selected_finishes_package: sampler
                    .maybe(0.4, |s| s.pick(&FINISH_PACKAGES).to_string()),
                requested_upgrades: if sampler.chance(0.6) {
                    let count = sampler.count(1, 3);
                    requested_upgrades(sampler, count)
                } else {
                    Vec::new()
                },
                customization_notes: sampler
                    .maybe(0.8, |s| s.pick(&CUSTOMIZATION_NOTES).to_string()),
                floor_plan_version: sampler
                    .maybe(0.5, |s| format!("v{}.{}", s.number(1, 3), s.number(0, 5))),
                floor_plan_last_revised_date: sampler
                    .maybe(0.6, |s| s.date_between(date(2022, 7, 1), date(2023, 7, 1))),
                area_breakdown: if sampler.chance(0.5) {
                    area_breakdown(sampler, size)
                } else {
                    Vec::new()
                },
                orientation: sampler.maybe(0.3, |s| *s.pick(&Orientation::ordered())),
                custom_fields: optional_custom_fields(sampler, 0.7, 3),
                tags: optional_tags(sampler, 0.6, 4),
                payment_adherence: None,
            };
            unit.payment_adherence = calculate_payment_adherence(&unit, invoices, today);
            unit
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_keep_their_slot_identity() {
        let mut sampler = Sampler::seeded(10);
        let slots = unit_slots(&mut sampler, 45);
        let project_id = ProjectId("p1".to_string());
        let units = populated_units(
            &mut sampler,
            &project_id,
            "Elysian Towers",
            &slots,
            &[],
            date(2024, 1, 15),
        );
        assert_eq!(units.len(), slots.len());
        for (unit, slot) in units.iter().zip(&slots) {
            assert_eq!(unit.id, slot.id);
            assert_eq!(unit.initial_price, slot.initial_price);
            assert_eq!(unit.availability_status, slot.availability_status);
            assert!(unit.payment_adherence.is_none());
            assert_eq!(unit.project_id, project_id);
        }
        assert!(units[0].unit_number.starts_with("A-1"));
        assert!(units[44].unit_number.starts_with("C-5"));
    }
}
