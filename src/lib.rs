pub mod shared {
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod invoicing {
        pub mod core {
            pub mod aggregate;
            pub mod billing;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod period;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod preview_invoice {
                pub mod handler;
                pub mod query;
                pub mod sources_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod issue_invoice {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod numbering_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_invoices_by_client {
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod billing_sources_in_memory;
                pub mod intent_outbox;
                pub mod invoice_numbers_in_memory;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
