//! Typed client library for the AniList GraphQL API.
//!
//! [`anime::AnimeService`] exposes one method per predefined anime query and
//! runs them through any [`graphql::LocalGraphqlApi`] implementation.
//! [`graphql::AniListClient`] is the HTTP implementation backed by `reqwest`.

/// Anime query catalog, response types, and the service facade.
pub mod anime;

/// GraphQL operation plumbing and the AniList HTTP client.
pub mod graphql;
