use crate::modules::invoicing::core::billing::InvoiceComputation;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewInvoice {
    pub client: String,
    pub period: String,
    pub vat_rate: f64,
}

/// Draft invoice for one client and period.
///
/// `issued_invoice_number` is set once the period has been invoiced for the
/// client, in which case the hours are locked and the preview is informative only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicePreview {
    pub client: String,
    pub period: String,
    pub vat_rate: f64,
    #[serde(flatten)]
    pub computation: InvoiceComputation,
    pub issued_invoice_number: Option<String>,
}

/// One invoice stream per (client, period).
pub fn invoice_stream_id(client: &str, period: &str) -> String {
    format!("Invoice-{client}-{period}")
}

#[cfg(test)]
mod preview_invoice_query_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_derive_the_stream_id_from_client_and_period() {
        assert_eq!(
            invoice_stream_id("Banco Nacional", "2026-02"),
            "Invoice-Banco Nacional-2026-02"
        );
    }

    #[rstest]
    fn it_should_flatten_the_computation_when_serialized() {
        let preview = InvoicePreview {
            client: "Banco Nacional".into(),
            period: "2026-02".into(),
            vat_rate: 0.21,
            computation: InvoiceComputation::empty(),
            issued_invoice_number: None,
        };
        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["lines"], serde_json::json!([]));
        assert_eq!(json["total"], serde_json::json!(0.0));
        assert_eq!(json["issued_invoice_number"], serde_json::Value::Null);
    }
}
