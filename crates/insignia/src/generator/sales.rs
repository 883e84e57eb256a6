use super::fixtures::{AGENT_NAMES, BROKER_AGENCIES, BUYER_NAMES};
use super::random::{date, RandomSource, Sampler};
use super::shared::{optional_custom_fields, optional_tags};
use crate::platform::{
    AutomatedCommunicationLog, Broker, BrokerStatus, BudgetRange, CommunicationChannel,
    CommunicationType, ContactMethod, DeliveryStatus, InteractionType, Lead, LeadInteraction,
    LeadSource, LeadStatus, OverviewProject, PaymentPlanStructure, PopulatedUnitDetail,
    ProjectType, ReservationStatus, UnitAvailabilityStatus, UnitReservation, UnitViewing,
    ViewingOutcome,
};

const INTERACTION_SUMMARIES: [&str; 4] = [
    "Discussed pricing options.",
    "Scheduled site visit.",
    "Sent brochure.",
    "Followed up on proposal.",
];

const NEXT_ACTIONS: [&str; 3] = ["Send follow-up email", "Call to confirm", "Prepare offer"];

const DETAILED_NEEDS: [&str; 4] = [
    "Looking for a spacious family home with a garden.",
    "Needs a penthouse unit with city views.",
    "Investment property, high ROI potential is key.",
    "Requires ground floor access and modern amenities.",
];

const POSITIVE_NOTES: [&str; 3] = ["Loved the view!", "Spacious layout.", "Good amenities."];

const NEGATIVE_NOTES: [&str; 3] = [
    "Price is a bit high.",
    "Kitchen too small.",
    "Needs more storage.",
];

const MAX_RESERVATIONS: usize = 30;

pub fn lead_interactions<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<LeadInteraction> {
    (0..count)
        .map(|_| LeadInteraction {
            date: sampler.date_between(date(2023, 9, 1), date(2024, 1, 15)),
            interaction_type: *sampler.pick(&InteractionType::ordered()),
            agent: sampler.pick(&AGENT_NAMES).to_string(),
            summary: sampler.pick(&INTERACTION_SUMMARIES).to_string(),
            next_action: sampler.maybe(0.5, |s| s.pick(&NEXT_ACTIONS).to_string()),
            next_action_date: sampler
                .maybe(0.3, |s| s.date_between(date(2024, 1, 16), date(2024, 2, 15))),
            duration_minutes: sampler.maybe(0.5, |s| s.percent(15, 60)),
        })
        .collect()
}

pub fn leads<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    project_names: &[String],
) -> Vec<Lead> {
    (0..count)
        .map(|i| {
            let budget_min = sampler.amount(300_000, 2_000_000);
            let interaction_count = sampler.count(2, 7);
            Lead {
                id: sampler.id(),
                name: format!("{} Lead {}", sampler.pick(&BUYER_NAMES), i),
                source: *sampler.pick(&LeadSource::ordered()),
                status: *sampler.pick(&LeadStatus::ordered()),
                assigned_agent: sampler.pick(&AGENT_NAMES).to_string(),
                last_contact_date: sampler.date_between(date(2023, 11, 1), date(2024, 1, 15)),
                project_interest: sampler
                    .try_pick(project_names)
                    .cloned()
                    .unwrap_or_default(),
                notes: "Interested in 3BR, budget $1.5M. Follow up next week.".to_string(),
                lead_score: Some(sampler.percent(30, 95)),
                preferred_contact_method: Some(*sampler.pick(&ContactMethod::ordered())),
                detailed_needs: Some(sampler.pick(&DETAILED_NEEDS).to_string()),
                budget_range: Some(BudgetRange {
                    min: budget_min,
                    max: budget_min + sampler.amount(100_000, 1_000_000),
                }),
                interaction_history: lead_interactions(sampler, interaction_count),
                custom_fields: optional_custom_fields(sampler, 0.7, 2),
                tags: optional_tags(sampler, 0.6, 3),
            }
        })
        .collect()
}

/// Viewings pairing random leads with random units; empty when either side is.
pub fn unit_viewings<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    leads: &[Lead],
    units: &[&PopulatedUnitDetail],
) -> Vec<UnitViewing> {
    if leads.is_empty() || units.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let lead = sampler.pick(leads);
            let unit = *sampler.pick(units);
            UnitViewing {
                id: format!("VW-{}", sampler.id().to_uppercase()),
                date: sampler.date_between(date(2023, 10, 1), date(2024, 1, 15)),
                lead_id: lead.id.clone(),
                lead_name: lead.name.clone(),
                agent: sampler.pick(&AGENT_NAMES).to_string(),
                unit_id: unit.id.clone(),
                unit_number: unit.unit_number.clone(),
                project_name: unit.project_name.clone(),
                feedback_score: sampler.maybe(0.2, |s| s.number(1, 5) as u8),
                positive_notes: sampler.maybe(0.5, |s| s.pick(&POSITIVE_NOTES).to_string()),
                negative_notes: sampler.maybe(0.6, |s| s.pick(&NEGATIVE_NOTES).to_string()),
                outcome: sampler.maybe(0.4, |s| *s.pick(&ViewingOutcome::ordered())),
            }
        })
        .collect()
}

/// Three to eight reservations per project, drawn from its sold and reserved
/// units, capped at thirty overall.
pub fn reservations<R: RandomSource>(
    sampler: &mut Sampler<R>,
    projects: &[OverviewProject],
    plans: &[PaymentPlanStructure],
) -> Vec<UnitReservation> {
    let mut reservations = Vec::new();
    for project in projects {
        let per_project = sampler.count(3, 8);
        let committed = project
            .units
            .iter()
            .filter(|unit| unit.availability_status.is_committed())
            .take(per_project);
        for unit in committed {
            let sold = unit.availability_status == UnitAvailabilityStatus::Sold;
            let reservation_date = sampler.date_between(date(2023, 7, 1), date(2023, 12, 31));
            reservations.push(UnitReservation {
                unit_id: unit.id.clone(),
                unit_number: unit.unit_number.clone(),
                project_name: project.name.clone(),
                status: if sold {
                    ReservationStatus::Sold
                } else {
                    ReservationStatus::Reserved
                },
                client_name: sampler.pick(&BUYER_NAMES).to_string(),
                reservation_date,
                booking_date: if sold {
                    Some(sampler.date_within_days(reservation_date, 30))
                } else {
                    None
                },
                linked_payment_plan: sampler
                    .try_pick(plans)
                    .map(|plan| plan.plan_name.clone())
                    .unwrap_or_default(),
                sale_price: sold.then_some(unit.current_price),
                agent_id: Some(sampler.pick(&AGENT_NAMES).to_string()),
            });
        }
    }
    reservations.truncate(MAX_RESERVATIONS);
    reservations
}

pub fn brokers<R: RandomSource>(sampler: &mut Sampler<R>, count: usize) -> Vec<Broker> {
    (0..count)
        .map(|i| {
            let deals = sampler.percent(1, 15);
            let surname = sampler
                .pick(&BUYER_NAMES)
                .split_whitespace()
                .nth(1)
                .unwrap_or_default()
                .to_string();
            let specialization_limit = sampler.count(1, 2);
            let email_agency: String = sampler
                .pick(&BROKER_AGENCIES)
                .to_lowercase()
                .split_whitespace()
                .collect();
            Broker {
                id: sampler.id(),
                name: format!("Broker {} {}", surname, i),
                agency: sampler.pick(&BROKER_AGENCIES).to_string(),
                clients_registered: sampler.percent(deals * 2, deals * 10),
                deals_closed: deals,
                commission_earned: sampler.amount(10_000, 250_000),
                status: *sampler.pick(&BrokerStatus::ordered()),
                leads_generated: Some(sampler.percent(20, 100)),
                lead_to_viewing_rate: Some(sampler.float(20.0, 70.0, 2)),
                viewing_to_offer_rate: Some(sampler.float(10.0, 50.0, 2)),
                average_deal_closure_time_days: Some(sampler.percent(15, 90)),
                specialization: sampler.pick_many(&ProjectType::ordered(), specialization_limit),
                contact_email: Some(format!("{}@{}.com", &sampler.id()[..5], email_agency)),
                contact_phone: Some(format!(
                    "+971 50 {} {}",
                    sampler.number(100, 999),
                    sampler.number(1000, 9999)
                )),
            }
        })
        .collect()
}

pub fn communication_logs<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<AutomatedCommunicationLog> {
    (0..count)
        .map(|_| AutomatedCommunicationLog {
            id: sampler.id(),
            customer_id: format!("CUST-{}", sampler.number(1000, 5000)),
            customer_name: sampler.pick(&BUYER_NAMES).to_string(),
            communication_type: *sampler.pick(&CommunicationType::ordered()),
            channel: *sampler.pick(&CommunicationChannel::ordered()),
            sent_date: sampler.date_between(date(2023, 12, 1), date(2024, 1, 15)),
            status: *sampler.pick(&DeliveryStatus::ordered()),
            content_snippet: "Your next installment of $XXX is due on YYY...".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_platform_data, GenerationOptions};

    #[test]
    fn leads_only_name_generated_projects() {
        let mut sampler = Sampler::seeded(6);
        let names = vec!["Elysian Towers".to_string(), "Azure Bay".to_string()];
        for lead in leads(&mut sampler, 20, &names) {
            assert!(names.contains(&lead.project_interest));
            let budget = lead.budget_range.expect("budget drawn");
            assert!(budget.max > budget.min);
        }
        assert!(leads(&mut sampler, 3, &[])
            .iter()
            .all(|lead| lead.project_interest.is_empty()));
    }

    #[test]
    fn reservations_mirror_committed_units() {
        let options = GenerationOptions {
            project_count: 5,
            reference_date: date(2024, 1, 15),
        };
        let data = generate_platform_data(&options, &mut Sampler::seeded(14)).expect("dataset");
        let reservations = &data.modules.sales_crm.reservations.samples;
        assert!(reservations.len() <= MAX_RESERVATIONS);

        for reservation in reservations {
            let unit = data
                .units()
                .find(|unit| unit.id == reservation.unit_id)
                .expect("reservation joins to a unit");
            let sold = unit.availability_status == UnitAvailabilityStatus::Sold;
            assert_eq!(reservation.status == ReservationStatus::Sold, sold);
            assert_eq!(reservation.booking_date.is_some(), sold);
            assert_eq!(reservation.sale_price.is_some(), sold);
        }
    }

    #[test]
    fn viewings_need_leads_and_units() {
        let mut sampler = Sampler::seeded(2);
        assert!(unit_viewings(&mut sampler, 5, &[], &[]).is_empty());
    }
}
