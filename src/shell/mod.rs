// Composition root for the events service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire them into the event store and expose it over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
