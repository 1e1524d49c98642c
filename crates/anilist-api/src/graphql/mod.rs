//! GraphQL plumbing for the AniList API.
//!
//! Defines the operation abstraction, the generic `execute` capability,
//! the error taxonomy, and the `reqwest`-backed client that talks to
//! `https://graphql.anilist.co`.

mod api;
mod client;
mod envelope;
mod error;
mod operation;
mod rate_limiter;

#[allow(clippy::module_name_repetitions)]
pub use api::{GraphqlApi, LocalGraphqlApi};
pub use client::{ANILIST_ENDPOINT, AniListClient, AniListClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use envelope::{GraphqlError, GraphqlLocation};
pub use error::AniListError;
pub use operation::{Fragment, Operation, compose_document};
