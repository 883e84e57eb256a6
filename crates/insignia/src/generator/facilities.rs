use chrono::Months;

use super::fixtures::{BUYER_NAMES, TECHNICIAN_NAMES};
use super::random::{date, RandomSource, Sampler};
use super::shared::{optional_custom_fields, optional_tags};
use crate::platform::{
    AssetComponent, AssetStatus, AssetType, ComponentStatus, FacilityAsset, MaintenanceLogEntry,
    MaintenanceTask, MaintenanceTaskStatus, MaintenanceTaskType, ServiceProvider, TaskPriority,
};

const LOG_NOTES: [&str; 5] = [
    "Routine inspection completed.",
    "Filter replaced.",
    "System recalibrated.",
    "Minor repairs performed.",
    "Component upgraded.",
];

const MANUFACTURERS: [&str; 3] = ["Generic Corp", "GlobalTech", "Reliable Parts Co."];

const TASK_DESCRIPTIONS: [&str; 10] = [
    "Inspect and clean filters",
    "Check fluid levels",
    "Lubricate moving parts",
    "Test safety sensors",
    "Replace worn component",
    "Calibrate system",
    "Emergency repair call",
    "Scheduled system overhaul",
    "Software Update",
    "Pressure Test",
];

const EXTERNAL_CONTRACTORS: [&str; 3] = [
    "External HVAC Experts",
    "Elevator Co.",
    "Plumbing Specialists",
];

const TASK_NOTES: [&str; 4] = [
    "Parts ordered, awaiting delivery.",
    "Requires specialized equipment.",
    "Client notified of delay.",
    "Completed ahead of schedule.",
];

const TOOLS: [&str; 4] = ["Standard Toolkit", "Ladder", "Voltage Meter", "Welding Kit"];

const PROVIDER_SPECIALIZATIONS: [&str; 10] = [
    "HVAC",
    "Elevators",
    "Plumbing",
    "Electrical",
    "Fire Safety",
    "Landscaping",
    "Security Systems",
    "General Maintenance",
    "Pest Control",
    "Waste Management",
];

const PROVIDER_PREFIXES: [&str; 7] = ["Alpha", "Beta", "Gamma", "Delta", "Omega", "Prime", "Vertex"];

const PROVIDER_SUFFIXES: [&str; 6] = [
    "Solutions",
    "Maintenance",
    "Services",
    "Pro",
    "Experts",
    "Group",
];

const STREETS: [&str; 3] = ["Sheikh Zayed Rd", "Business Bay Ave", "Al Khail St"];

fn component_names(asset_type: AssetType) -> &'static [&'static str] {
    match asset_type {
        AssetType::Hvac => &["Compressor", "Fan Motor", "Thermostat", "Filter Bank"],
        AssetType::Elevator => &["Motor Unit", "Control Panel", "Door Mechanism", "Safety Brakes"],
        AssetType::PlumbingSystem => &["Main Pump", "Water Heater", "Pressure Valve"],
        AssetType::ElectricalPanel => &["Main Breaker", "Circuit Breaker A1", "Surge Protector"],
        _ => &["Primary Unit", "Sensor Array", "Power Supply", "Housing"],
    }
}

pub fn maintenance_log<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<MaintenanceLogEntry> {
    (0..count)
        .map(|_| MaintenanceLogEntry {
            date: sampler.date_between(date(2022, 1, 1), date(2023, 12, 31)),
            notes: sampler.pick(&LOG_NOTES).to_string(),
            performed_by: sampler.pick(&TECHNICIAN_NAMES).to_string(),
            cost: sampler.maybe(0.3, |s| s.amount(50, 500)),
        })
        .collect()
}

/// Components named after the asset type; ids read `COMP-ELE-1a2b-1`.
pub fn asset_components<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    asset_type: AssetType,
) -> Vec<AssetComponent> {
    let names = component_names(asset_type);
    let prefix: String = asset_type.label().chars().take(3).collect::<String>().to_uppercase();
    (0..count)
        .map(|i| AssetComponent {
            component_id: format!("COMP-{}-{}-{}", prefix, &sampler.id()[..4], i + 1),
            name: sampler.pick(names).to_string(),
            serial_number: sampler.maybe(0.3, |s| format!("SN-{}", s.number(100_000, 999_999))),
            install_date: sampler.date_between(date(2020, 1, 1), date(2022, 1, 1)),
            warranty_expiry_date: sampler
                .maybe(0.5, |s| s.date_between(date(2024, 1, 1), date(2026, 1, 1))),
            last_service_date: sampler
                .maybe(0.4, |s| s.date_between(date(2022, 7, 1), date(2023, 12, 1))),
            manufacturer: sampler.maybe(0.6, |s| s.pick(&MANUFACTURERS).to_string()),
            supplier: None,
            status: Some(*sampler.pick(&ComponentStatus::ordered())),
        })
        .collect()
}

pub fn facility_assets<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    project_names: &[String],
) -> Vec<FacilityAsset> {
    (0..count)
        .map(|i| {
            let asset_type = *sampler.pick(&AssetType::ordered());
            let installation_date = sampler.date_between(date(2020, 1, 1), date(2023, 1, 1));
            let last_maintenance_date =
                sampler.maybe(0.2, |s| s.date_between(date(2023, 1, 1), date(2023, 12, 1)));
            // Follows the last service by three to twelve months when one is known.
            let follow_up = match last_maintenance_date {
                Some(last) if sampler.chance(0.3) => {
                    let months = sampler.number(3, 12) as u32;
                    last.checked_add_months(Months::new(months))
                }
                _ => None,
            };
            let next_maintenance_due_date = follow_up
                .unwrap_or_else(|| sampler.date_between(date(2024, 1, 1), date(2024, 12, 31)));

            let block = char::from(b'A' + (i % 5) as u8);
            let tower = char::from(b'A' + (i % 3) as u8);
            let locations = [
                "Rooftop".to_string(),
                format!("Tower {}, Level {}", tower, sampler.number(1, 10)),
                "Basement B1".to_string(),
                "Common Area".to_string(),
                format!("Villa {}", sampler.number(1, 20)),
            ];
            let log_count = sampler.count(1, 5);
            let component_count = sampler.count(2, 5);

            FacilityAsset {
                id: format!("FA-{}", sampler.id().to_uppercase()),
                name: format!("{} Unit {}-{}", asset_type.label(), block, sampler.number(1, 3)),
                asset_type,
                project_location: sampler.try_pick(project_names).cloned().unwrap_or_default(),
                specific_location: Some(sampler.pick(&locations).clone()),
                status: *sampler.pick(&AssetStatus::ordered()),
                installation_date,
                last_maintenance_date,
                next_maintenance_due_date: Some(next_maintenance_due_date),
                assigned_technician: sampler
                    .maybe(0.4, |s| s.pick(&TECHNICIAN_NAMES).to_string()),
                maintenance_log: maintenance_log(sampler, log_count),
                warranty_expiry_date: sampler
                    .maybe(0.5, |s| s.date_between(date(2024, 1, 1), date(2026, 1, 1))),
                purchase_cost: sampler.maybe(0.4, |s| s.amount(5_000, 150_000)),
                operational_hours: Some(sampler.percent(1_000, 20_000)),
                expected_lifespan_years: Some(sampler.percent(10, 30)),
                components: asset_components(sampler, component_count, asset_type),
                custom_fields: optional_custom_fields(sampler, 0.7, 2),
                tags: optional_tags(sampler, 0.6, 3),
            }
        })
        .collect()
}

/// Work orders against random assets. Only completed tasks carry costs, and
/// the total is the sum of whichever cost parts are present.
pub fn maintenance_tasks<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    assets: &[FacilityAsset],
) -> Vec<MaintenanceTask> {
    if assets.is_empty() {
        return Vec::new();
    }
    let assignees: Vec<&str> = TECHNICIAN_NAMES
        .iter()
        .chain(EXTERNAL_CONTRACTORS.iter())
        .copied()
        .collect();

    (0..count)
        .map(|_| {
            let asset = sampler.pick(assets);
            let reported_date = sampler.date_between(date(2023, 10, 1), date(2024, 1, 10));
            let status = *sampler.pick(&MaintenanceTaskStatus::ordered());
            let completed = status == MaintenanceTaskStatus::Completed;
            let labor_costs = completed.then(|| sampler.amount(100, 1_000));
            let parts_cost = if completed {
                sampler.maybe(0.4, |s| s.amount(50, 2_000))
            } else {
                None
            };
            let total_cost = match (labor_costs, parts_cost) {
                (Some(labor), Some(parts)) => Some(labor + parts),
                (labor, parts) => labor.or(parts),
            };

            MaintenanceTask {
                id: format!("MT-{}", sampler.id().to_uppercase()),
                facility_asset_id: asset.id.clone(),
                facility_asset_name: asset.name.clone(),
                task_description: format!(
                    "{} for {}",
                    sampler.pick(&TASK_DESCRIPTIONS),
                    asset.asset_type.label()
                ),
                priority: *sampler.pick(&TaskPriority::ordered()),
                task_type: Some(*sampler.pick(&MaintenanceTaskType::ordered())),
                status,
                reported_date,
                scheduled_date: matches!(
                    status,
                    MaintenanceTaskStatus::Scheduled | MaintenanceTaskStatus::InProgress
                )
                .then(|| sampler.date_within_days(reported_date, 14)),
                completed_date: completed.then(|| sampler.date_within_days(reported_date, 30)),
                assigned_to: sampler.pick(&assignees).to_string(),
                notes: sampler.maybe(0.6, |s| s.pick(&TASK_NOTES).to_string()),
                estimated_hours: Some(sampler.percent(1, 8)),
                actual_hours: completed.then(|| sampler.percent(1, 10)),
                labor_costs,
                parts_cost,
                total_cost,
                invoice_reference: if completed && total_cost.is_some() {
                    Some(format!("INV-MAINT-{}", &sampler.id()[..5]))
                } else {
                    None
                },
                tools_required: if sampler.chance(0.5) {
                    let limit = sampler.count(1, 2);
                    sampler
                        .pick_many(&TOOLS, limit)
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}

pub fn service_providers<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<ServiceProvider> {
    (0..count)
        .map(|i| {
            let specialization_limit = sampler.count(1, 3);
            ServiceProvider {
                id: format!("SP-{}", sampler.id().to_uppercase()),
                name: format!(
                    "{} {} {}",
                    sampler.pick(&PROVIDER_PREFIXES),
                    sampler.pick(&PROVIDER_SUFFIXES),
                    i + 1
                ),
                contact_person: sampler.pick(&BUYER_NAMES).to_string(),
                contact_number: format!(
                    "+971 5{} {} {}",
                    sampler.number(0, 8),
                    sampler.number(100, 999),
                    sampler.number(1000, 9999)
                ),
                email: format!("contact@{}.ae", &sampler.id()[..6]),
                specialization: sampler
                    .pick_many(&PROVIDER_SPECIALIZATIONS, specialization_limit)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                rating: sampler.maybe(0.2, |s| s.float(3.0, 5.0, 1)),
                notes: sampler.maybe(0.7, |_| "Preferred vendor for high-rise projects.".to_string()),
                contract_id: sampler.maybe(0.5, |s| format!("CON-{}", &s.id()[..6])),
                contract_expiry_date: sampler
                    .maybe(0.6, |s| s.date_between(date(2024, 7, 1), date(2026, 12, 31))),
                address: sampler.maybe(0.4, |s| {
                    format!("{} {}, Dubai", s.number(10, 99), s.pick(&STREETS))
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_totals_add_up_cost_parts() {
        let mut sampler = Sampler::seeded(5);
        let names = vec!["Elysian Towers".to_string()];
        let assets = facility_assets(&mut sampler, 10, &names);
        let tasks = maintenance_tasks(&mut sampler, 300, &assets);
        assert_eq!(tasks.len(), 300);
        for task in &tasks {
            let expected = match (task.labor_costs, task.parts_cost) {
                (None, None) => None,
                (labor, parts) => Some(labor.unwrap_or(0) + parts.unwrap_or(0)),
            };
            assert_eq!(task.total_cost, expected);
            if task.status != MaintenanceTaskStatus::Completed {
                assert!(task.total_cost.is_none());
                assert!(task.invoice_reference.is_none());
            }
            assert!(assets.iter().any(|asset| asset.id == task.facility_asset_id));
            assert!(task.task_description.contains(" for "));
        }
    }

    #[test]
    fn components_carry_asset_prefix() {
        let mut sampler = Sampler::seeded(8);
        let components = asset_components(&mut sampler, 4, AssetType::Elevator);
        assert_eq!(components.len(), 4);
        assert!(components[0].component_id.starts_with("COMP-ELE-"));
        assert!(components[3].component_id.ends_with("-4"));
        assert!(maintenance_tasks(&mut sampler, 5, &[]).is_empty());
    }

    #[test]
    fn every_asset_has_a_next_service_date() {
        let mut sampler = Sampler::seeded(13);
        let assets = facility_assets(&mut sampler, 40, &[]);
        for asset in &assets {
            let next = asset.next_maintenance_due_date.expect("next service date");
            if let Some(last) = asset.last_maintenance_date {
                assert!(next > last || next.format("%Y").to_string() == "2024");
            }
            assert!(asset.project_location.is_empty());
        }
    }
}
