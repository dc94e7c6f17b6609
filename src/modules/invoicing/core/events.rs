pub mod v1 {
    pub mod invoice_issued;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum InvoiceEvent {
    InvoiceIssuedV1(v1::invoice_issued::InvoiceIssuedV1),
}
