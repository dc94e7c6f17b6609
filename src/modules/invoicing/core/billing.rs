use serde::{Deserialize, Serialize};

/// Review outcome of a reported time entry. Only `Approved` entries are billable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalState {
    Approved,
    Pending,
    Rejected,
}

impl ApprovalState {
    pub fn is_billable(self) -> bool {
        match self {
            ApprovalState::Approved => true,
            ApprovalState::Pending | ApprovalState::Rejected => false,
        }
    }
}

/// Hours one employee reported against one project within a billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub employee_name: String,
    pub project_name: String,
    /// `YYYY-MM`
    pub period_key: String,
    pub hours: f64,
    pub approval_state: ApprovalState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub client_name: String,
}

/// Hourly price charged for an employee on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateAssignment {
    pub employee_name: String,
    pub project_name: String,
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RateKey {
    pub employee_name: String,
    pub project_name: String,
}

impl std::fmt::Display for RateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.employee_name, self.project_name)
    }
}

/// One aggregated (employee, project) row of a draft invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub employee_name: String,
    pub project_name: String,
    pub hours: f64,
    pub hourly_rate: f64,
    pub subtotal: f64,
}

/// Result of aggregating a client's approved hours for one period.
///
/// `missing_rates` lists, in line order, the pairs that were billed at the
/// fallback rate of zero because no rate assignment matched them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceComputation {
    pub lines: Vec<InvoiceLineItem>,
    pub total_hours: f64,
    pub subtotal: f64,
    pub vat: f64,
    pub total: f64,
    pub missing_rates: Vec<RateKey>,
}

impl InvoiceComputation {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A VAT rate is a finite, non-negative fraction such as `0.21`.
pub fn is_valid_vat_rate(vat_rate: f64) -> bool {
    vat_rate.is_finite() && vat_rate >= 0.0
}
