use chrono::NaiveDate;

use crate::platform::{Invoice, InvoiceStatus, PaymentAdherenceMetrics, PopulatedUnitDetail};

/// Summarizes how punctually a committed unit's buyer has paid.
///
/// Returns `None` for units that are neither sold nor reserved, and for
/// committed units without a single invoice. `today` decides which unpaid
/// invoices are already late and which one is due next.
pub fn calculate_payment_adherence(
    unit: &PopulatedUnitDetail,
    invoices: &[Invoice],
    today: NaiveDate,
) -> Option<PaymentAdherenceMetrics> {
    if !unit.availability_status.is_committed() {
        return None;
    }

    let mut unit_invoices: Vec<&Invoice> = invoices
        .iter()
        .filter(|invoice| invoice.unit_id == unit.id)
        .collect();
    if unit_invoices.is_empty() {
        return None;
    }
    unit_invoices.sort_by_key(|invoice| invoice.due_date);

    let mut total_days_overdue = 0_i64;
    let mut paid_count = 0_usize;
    let mut paid_on_time = 0_usize;
    let mut overdue_installments = 0_usize;
    let mut next_payment_due_date: Option<NaiveDate> = None;
    let mut last_payment: Option<(NaiveDate, f64)> = None;

    for invoice in &unit_invoices {
        match (invoice.status, invoice.payment_date) {
            (InvoiceStatus::Paid, Some(paid_on)) => {
                paid_count += 1;
                let days_late = (paid_on - invoice.due_date).num_days();
                if days_late > 0 {
                    total_days_overdue += days_late;
                } else {
                    paid_on_time += 1;
                }
                if last_payment.map_or(true, |(latest, _)| paid_on > latest) {
                    last_payment = Some((paid_on, invoice.amount_due));
                }
            }
            (InvoiceStatus::Overdue, _) => overdue_installments += 1,
            (InvoiceStatus::Sent | InvoiceStatus::Draft, _) if invoice.due_date < today => {
                overdue_installments += 1;
            }
            _ => {}
        }

        if invoice.status.is_outstanding()
            && invoice.due_date >= today
            && next_payment_due_date.map_or(true, |next| invoice.due_date < next)
        {
            next_payment_due_date = Some(invoice.due_date);
        }
    }

    let (average_days_overdue, on_time_payment_percentage) = if paid_count > 0 {
        (
            total_days_overdue as f64 / paid_count as f64,
            paid_on_time as f64 / paid_count as f64 * 100.0,
        )
    } else {
        (0.0, 100.0)
    };

    Some(PaymentAdherenceMetrics {
        average_days_overdue,
        on_time_payment_percentage,
        total_installments: unit_invoices.len(),
        overdue_installments,
        next_payment_due_date,
        last_payment_amount: last_payment.map(|(_, amount)| amount),
        last_payment_date: last_payment.map(|(date, _)| date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::date;
    use crate::platform::{
        InstallmentMilestone, ProjectId, UnitAvailabilityStatus, UnitId, UnitSizeUnit,
    };

    fn unit(status: UnitAvailabilityStatus) -> PopulatedUnitDetail {
        PopulatedUnitDetail {
            id: UnitId("u-1".to_string()),
            unit_number: "A-11".to_string(),
            project_id: ProjectId("p-1".to_string()),
            project_name: "Azure Residences".to_string(),
            floor: None,
            size: 900,
            size_unit: UnitSizeUnit::Sqft,
            view: None,
            bedrooms: Some(2),
            initial_price: 1_000_000,
            current_price: 1_100_000,
            availability_status: status,
            unit_features: Vec::new(),
            last_maintenance_date: None,
            floor_plan_url: String::new(),
            selected_finishes_package: None,
            requested_upgrades: Vec::new(),
            customization_notes: None,
            floor_plan_version: None,
            floor_plan_last_revised_date: None,
            area_breakdown: Vec::new(),
            orientation: None,
            custom_fields: Vec::new(),
            tags: Vec::new(),
            payment_adherence: None,
        }
    }

    fn invoice(
        status: InvoiceStatus,
        due_date: NaiveDate,
        payment_date: Option<NaiveDate>,
    ) -> Invoice {
        Invoice {
            id: format!("INV-{}", due_date),
            invoice_number: "INV-2023-1000".to_string(),
            unit_id: UnitId("u-1".to_string()),
            buyer_name: "Alice Smith".to_string(),
            installment_milestone: InstallmentMilestone::Booking,
            amount_due: 100_000.0,
            issue_date: date(2023, 1, 1),
            due_date,
            status,
            payment_date,
            payment_method: None,
            transaction_id: None,
            payment_attempts: None,
            late_fee_applied: None,
            notes: None,
            linked_payment_plan_name: None,
        }
    }

    #[test]
    fn available_units_have_no_metrics() {
        let invoices = [invoice(InvoiceStatus::Sent, date(2024, 3, 1), None)];
        let today = date(2024, 1, 15);
        for status in [UnitAvailabilityStatus::Available, UnitAvailabilityStatus::Blocked] {
            assert!(calculate_payment_adherence(&unit(status), &invoices, today).is_none());
        }
        assert!(
            calculate_payment_adherence(&unit(UnitAvailabilityStatus::Sold), &[], today).is_none()
        );
    }

    #[test]
    fn unpaid_history_defaults_to_full_punctuality() {
        let invoices = [
            invoice(InvoiceStatus::Sent, date(2023, 12, 1), None),
            invoice(InvoiceStatus::Draft, date(2024, 2, 1), None),
            invoice(InvoiceStatus::Overdue, date(2024, 3, 1), None),
            invoice(InvoiceStatus::Cancelled, date(2023, 6, 1), None),
        ];
        let metrics = calculate_payment_adherence(
            &unit(UnitAvailabilityStatus::Reserved),
            &invoices,
            date(2024, 1, 15),
        )
        .expect("reserved unit with invoices");

        assert_eq!(metrics.on_time_payment_percentage, 100.0);
        assert_eq!(metrics.average_days_overdue, 0.0);
        assert_eq!(metrics.total_installments, 4);
        // Sent past due plus explicit Overdue.
        assert_eq!(metrics.overdue_installments, 2);
        assert_eq!(metrics.next_payment_due_date, Some(date(2024, 2, 1)));
        assert!(metrics.last_payment_date.is_none());
    }

    #[test]
    fn mixed_history_averages_lateness_over_paid_installments() {
        let invoices = [
            invoice(InvoiceStatus::Paid, date(2023, 5, 1), Some(date(2023, 5, 4))),
            invoice(InvoiceStatus::Paid, date(2023, 8, 1), Some(date(2023, 7, 30))),
        ];
        let metrics = calculate_payment_adherence(
            &unit(UnitAvailabilityStatus::Sold),
            &invoices,
            date(2024, 1, 15),
        )
        .expect("sold unit with invoices");

        assert_eq!(metrics.on_time_payment_percentage, 50.0);
        assert_eq!(metrics.average_days_overdue, 1.5);
        assert_eq!(metrics.last_payment_date, Some(date(2023, 7, 30)));
        assert_eq!(metrics.last_payment_amount, Some(100_000.0));
        assert_eq!(metrics.overdue_installments, 0);
        assert!(metrics.next_payment_due_date.is_none());
    }
}
