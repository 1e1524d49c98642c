//! `GraphqlApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::operation::Operation;

/// Generic "execute a named operation" capability.
///
/// Abstracts the GraphQL transport so the service facade can run against
/// the HTTP client or an in-memory mock.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(GraphqlApi: Send)]
pub trait LocalGraphqlApi {
    /// Executes `operation` with the given variables and decodes its
    /// `data` payload into `O::Response`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered, the remote API
    /// reports GraphQL errors, or the payload does not match `O::Response`.
    /// Failures raised by the transport are [`AniListError`](super::AniListError) values.
    async fn execute<O: Operation>(
        &self,
        operation: &O,
        variables: &O::Variables,
    ) -> Result<O::Response>;
}
