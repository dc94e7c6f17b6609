pub mod billing;

pub mod commands {
    pub mod issue_invoice;
}

pub mod events {
    pub mod domain_event;
    pub mod invoice_issued_v1;
}
