// Shared test fixture for the IssueInvoice command.

use crate::modules::invoicing::use_cases::issue_invoice::command::IssueInvoice;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct IssueInvoiceDto {
    pub invoice_id: String,
    pub client: String,
    pub period: String,
    pub vat_rate: f64,
}

pub struct IssueInvoiceBuilder {
    inner: IssueInvoice,
}

impl Default for IssueInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl IssueInvoiceBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/issue_invoice.json").unwrap();
        let dto: IssueInvoiceDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: IssueInvoice {
                invoice_id: dto.invoice_id,
                client: dto.client,
                period: dto.period,
                vat_rate: dto.vat_rate,
                issued_at: 1772323200000,
                issued_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn invoice_id(mut self, v: impl Into<String>) -> Self {
        self.inner.invoice_id = v.into();
        self
    }

    pub fn client(mut self, v: impl Into<String>) -> Self {
        self.inner.client = v.into();
        self
    }

    pub fn period(mut self, v: impl Into<String>) -> Self {
        self.inner.period = v.into();
        self
    }

    pub fn vat_rate(mut self, v: f64) -> Self {
        self.inner.vat_rate = v;
        self
    }

    pub fn issued_at(mut self, v: i64) -> Self {
        self.inner.issued_at = v;
        self
    }

    pub fn issued_by(mut self, v: impl Into<String>) -> Self {
        self.inner.issued_by = v.into();
        self
    }

    pub fn build(self) -> IssueInvoice {
        self.inner
    }
}

#[cfg(test)]
mod issue_invoice_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = IssueInvoiceBuilder::default().build();
        assert_eq!(built.invoice_id, "inv-fixed-0001");
        assert_eq!(built.client, "Banco Nacional");
        assert_eq!(built.period, "2026-02");
        assert_eq!(built.vat_rate, 0.21);
        assert_eq!(built.issued_by, "user-fixed-0001");
        assert_eq!(built.issued_at, 1_772_323_200_000i64);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = IssueInvoiceBuilder::new()
            .invoice_id("inv-123")
            .client("TechCorp Solutions")
            .period("2026-03")
            .vat_rate(0.1)
            .issued_at(3333)
            .issued_by("tester")
            .build();

        assert_eq!(custom.invoice_id, "inv-123");
        assert_eq!(custom.client, "TechCorp Solutions");
        assert_eq!(custom.period, "2026-03");
        assert_eq!(custom.vat_rate, 0.1);
        assert_eq!(custom.issued_at, 3333);
        assert_eq!(custom.issued_by, "tester");
    }
}
