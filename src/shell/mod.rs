// Composition root for the invoicing bounded context.
//
// - Read config from environment.
// - Instantiate the in-memory infrastructure and seed the billing sources.
// - Wire implementations into use case handlers.
// - Expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
