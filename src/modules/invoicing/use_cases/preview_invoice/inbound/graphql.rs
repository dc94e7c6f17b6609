use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::invoicing::core::billing::{InvoiceLineItem, RateKey};
use crate::modules::invoicing::use_cases::preview_invoice::query::{InvoicePreview, PreviewInvoice};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlInvoiceLine {
    pub employee_name: String,
    pub project_name: String,
    pub hours: f64,
    pub hourly_rate: f64,
    pub subtotal: f64,
}

impl From<InvoiceLineItem> for GqlInvoiceLine {
    fn from(l: InvoiceLineItem) -> Self {
        Self {
            employee_name: l.employee_name,
            project_name: l.project_name,
            hours: l.hours,
            hourly_rate: l.hourly_rate,
            subtotal: l.subtotal,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRateKey {
    pub employee_name: String,
    pub project_name: String,
}

impl From<RateKey> for GqlRateKey {
    fn from(k: RateKey) -> Self {
        Self {
            employee_name: k.employee_name,
            project_name: k.project_name,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlInvoicePreview {
    pub client: String,
    pub period: String,
    pub lines: Vec<GqlInvoiceLine>,
    pub total_hours: f64,
    pub subtotal: f64,
    pub vat_rate: f64,
    pub vat: f64,
    pub total: f64,
    pub missing_rates: Vec<GqlRateKey>,
    pub issued_invoice_number: Option<String>,
}

impl From<InvoicePreview> for GqlInvoicePreview {
    fn from(p: InvoicePreview) -> Self {
        Self {
            client: p.client,
            period: p.period,
            lines: p.computation.lines.into_iter().map(Into::into).collect(),
            total_hours: p.computation.total_hours,
            subtotal: p.computation.subtotal,
            vat_rate: p.vat_rate,
            vat: p.computation.vat,
            total: p.computation.total,
            missing_rates: p
                .computation
                .missing_rates
                .into_iter()
                .map(Into::into)
                .collect(),
            issued_invoice_number: p.issued_invoice_number,
        }
    }
}

#[derive(Default)]
pub struct PreviewInvoiceQuery;

#[Object]
impl PreviewInvoiceQuery {
    async fn preview_invoice(
        &self,
        context: &Context<'_>,
        client: String,
        period: String,
        vat_rate: Option<f64>,
    ) -> GqlResult<GqlInvoicePreview> {
        let state = context.data_unchecked::<AppState>();
        let query = PreviewInvoice {
            client,
            period,
            vat_rate: vat_rate.unwrap_or(state.default_vat_rate),
        };
        let preview = state
            .preview_handler
            .handle(query)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(preview.into())
    }
}
