// Back-office records for two clients around February 2026.

use crate::modules::invoicing::adapters::outbound::billing_sources_in_memory::BillingRecords;
use crate::modules::invoicing::core::billing::{ApprovalState, Project, RateAssignment, TimeEntry};

pub fn entry(
    employee_name: &str,
    project_name: &str,
    period_key: &str,
    hours: f64,
    approval_state: ApprovalState,
) -> TimeEntry {
    TimeEntry {
        employee_name: employee_name.to_string(),
        project_name: project_name.to_string(),
        period_key: period_key.to_string(),
        hours,
        approval_state,
    }
}

pub fn project(name: &str, client_name: &str) -> Project {
    Project {
        name: name.to_string(),
        client_name: client_name.to_string(),
    }
}

pub fn rate(employee_name: &str, project_name: &str, hourly_rate: f64) -> RateAssignment {
    RateAssignment {
        employee_name: employee_name.to_string(),
        project_name: project_name.to_string(),
        hourly_rate,
    }
}

/// Banco Nacional bills 2557.5 before VAT for 2026-02:
/// Maria 8h x 70, Carlos 16h x 85 and Laura 7.5h x 85.
pub fn banco_nacional_february() -> BillingRecords {
    use ApprovalState::*;

    BillingRecords {
        time_entries: vec![
            entry("Carlos Martinez", "Portal Bancario v2", "2026-02", 8.0, Approved),
            entry("Laura Sanchez", "Portal Bancario v2", "2026-02", 7.5, Approved),
            entry("Carlos Martinez", "Portal Bancario v2", "2026-02", 8.0, Approved),
            entry("Laura Sanchez", "Portal Bancario v2", "2026-02", 4.0, Pending),
            entry("Maria Gomez", "Dashboard Analytics", "2026-02", 8.0, Approved),
            entry("Sofia Ruiz", "Dashboard Analytics", "2026-02", 8.0, Rejected),
            entry("Ana Lopez", "App Movil CRM", "2026-02", 6.0, Approved),
            entry("Carlos Martinez", "Portal Bancario v2", "2026-01", 8.0, Approved),
        ],
        projects: vec![
            project("Portal Bancario v2", "Banco Nacional"),
            project("Dashboard Analytics", "Banco Nacional"),
            project("App Movil CRM", "TechCorp Solutions"),
        ],
        rates: vec![
            rate("Carlos Martinez", "Portal Bancario v2", 85.0),
            rate("Laura Sanchez", "Portal Bancario v2", 85.0),
            rate("Maria Gomez", "Dashboard Analytics", 70.0),
            rate("Ana Lopez", "App Movil CRM", 95.0),
        ],
    }
}
