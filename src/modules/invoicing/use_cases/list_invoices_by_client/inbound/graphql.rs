use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::invoicing::use_cases::list_invoices_by_client::projection::InvoiceView;
use crate::modules::invoicing::use_cases::preview_invoice::inbound::graphql::GqlInvoiceLine;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlInvoice {
    pub invoice_id: String,
    pub invoice_number: String,
    pub client: String,
    pub period: String,
    pub lines: Vec<GqlInvoiceLine>,
    pub total_hours: f64,
    pub subtotal: f64,
    pub vat_rate: f64,
    pub vat: f64,
    pub total: f64,
    pub issued_at: i64,
    pub issued_by: String,
}

impl From<InvoiceView> for GqlInvoice {
    fn from(v: InvoiceView) -> Self {
        Self {
            invoice_id: v.invoice_id,
            invoice_number: v.invoice_number,
            client: v.client,
            period: v.period,
            lines: v.lines.into_iter().map(Into::into).collect(),
            total_hours: v.total_hours,
            subtotal: v.subtotal,
            vat_rate: v.vat_rate,
            vat: v.vat,
            total: v.total,
            issued_at: v.issued_at,
            issued_by: v.issued_by,
        }
    }
}

#[derive(Default)]
pub struct ListInvoicesQuery;

#[Object]
impl ListInvoicesQuery {
    async fn list_invoices_by_client(
        &self,
        context: &Context<'_>,
        client: String,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlInvoice>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .queries
            .list_by_client(
                &client,
                offset.unwrap_or(0).max(0) as u64,
                limit.unwrap_or(20).max(0) as u64,
                sort_desc.unwrap_or(true),
            )
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn invoice_by_period(
        &self,
        context: &Context<'_>,
        client: String,
        period: String,
    ) -> GqlResult<Option<GqlInvoice>> {
        let state = context.data_unchecked::<AppState>();
        let found = state.queries.find_by_period(&client, &period).await?;
        Ok(found.map(Into::into))
    }
}
