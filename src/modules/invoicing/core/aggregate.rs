use std::collections::{BTreeMap, HashSet};

use crate::modules::invoicing::core::billing::{
    InvoiceComputation, InvoiceLineItem, Project, RateAssignment, RateKey, TimeEntry,
};
use crate::modules::invoicing::core::period::BillingPeriod;

/// Aggregates a client's approved hours for `period` into invoice lines and totals.
///
/// Total function: an empty client or a malformed period yields the empty
/// invoice. Pairs without a rate assignment are billed at zero and reported in
/// `missing_rates`. When several assignments match a pair the first one in
/// `rates` wins. Lines come out ordered by (project, employee).
pub fn compute_invoice(
    client: &str,
    period: &str,
    time_entries: &[TimeEntry],
    projects: &[Project],
    rates: &[RateAssignment],
    vat_rate: f64,
) -> InvoiceComputation {
    if client.is_empty() || BillingPeriod::parse(period).is_none() {
        return InvoiceComputation::empty();
    }

    let client_projects: HashSet<&str> = projects
        .iter()
        .filter(|p| p.client_name == client)
        .map(|p| p.name.as_str())
        .collect();

    // Keyed by (project, employee) so iteration order is the line order.
    let mut grouped: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for entry in time_entries.iter().filter(|e| {
        e.approval_state.is_billable()
            && e.period_key == period
            && e.hours > 0.0
            && client_projects.contains(e.project_name.as_str())
    }) {
        *grouped
            .entry((entry.project_name.as_str(), entry.employee_name.as_str()))
            .or_insert(0.0) += entry.hours;
    }

    let mut computation = InvoiceComputation::empty();
    for ((project_name, employee_name), hours) in grouped {
        let rate = rates
            .iter()
            .find(|r| r.employee_name == employee_name && r.project_name == project_name);
        let hourly_rate = match rate {
            Some(r) => r.hourly_rate,
            None => {
                computation.missing_rates.push(RateKey {
                    employee_name: employee_name.to_string(),
                    project_name: project_name.to_string(),
                });
                0.0
            }
        };
        computation.lines.push(InvoiceLineItem {
            employee_name: employee_name.to_string(),
            project_name: project_name.to_string(),
            hours,
            hourly_rate,
            subtotal: hours * hourly_rate,
        });
    }

    computation.total_hours = computation.lines.iter().fold(0.0, |acc, l| acc + l.hours);
    computation.subtotal = computation
        .lines
        .iter()
        .fold(0.0, |acc, l| acc + l.subtotal);
    computation.vat = computation.subtotal * vat_rate.max(0.0);
    computation.total = computation.subtotal + computation.vat;
    computation
}
