//! `AnimeService` - typed facade over the anime operations.
#![allow(clippy::future_not_send)]

use anyhow::{Context, Result};
use tracing::instrument;

use super::queries::{
    GetAnimeById, GetAnimeByTitle, GetAnimeCharacters, GetAnimeListByGenre, GetAnimePopular,
    GetAnimeRecommendations, GetAnimeRelations, GetAnimeStaff, GetAnimeTrending, SearchAnime,
};
use super::types::{CharacterConnection, CharacterEdge, MediaResponse, PageResponse};
use super::variables::{
    GenreVariables, MediaIdVariables, MediaPageVariables, Paging, SearchVariables, TitleVariables,
};
use crate::graphql::{AniListError, LocalGraphqlApi, Operation};

/// Anime lookups backed by any [`LocalGraphqlApi`] client.
///
/// Every method except [`Self::get_all_characters_from_anime`] sends a
/// single request and returns the client's result unchanged.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct AnimeService<C> {
    /// GraphQL client.
    client: C,
    /// Upper bound on pages fetched by the accumulating methods.
    max_pages: Option<u32>,
}

impl<C> AnimeService<C> {
    /// Creates a service without a page bound.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self {
            client,
            max_pages: None,
        }
    }

    /// Fails [`Self::get_all_characters_from_anime`] instead of fetching
    /// page `limit + 1`. A limit of 0 fails before any request.
    #[must_use]
    pub const fn max_pages(mut self, limit: u32) -> Self {
        self.max_pages = Some(limit);
        self
    }

    /// Underlying client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }
}

impl<C: LocalGraphqlApi> AnimeService<C> {
    /// Retrieves an anime with its first 25 characters, staff, and studios.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_anime_by_id(&self, id: u32) -> Result<MediaResponse> {
        self.client
            .execute(&GetAnimeById, &MediaPageVariables::new(id))
            .await
    }

    /// Fetches every character edge of an anime, following
    /// `pageInfo.hasNextPage` one page at a time.
    ///
    /// Edges keep the API's order across pages. Null edges and edges
    /// without a character node are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails (no partial result is
    /// returned), if the page counter overflows, or with
    /// [`AniListError::PageLimitExceeded`] when a page bound is configured
    /// and reached.
    #[instrument(skip(self))]
    pub async fn get_all_characters_from_anime(&self, id: u32) -> Result<Vec<CharacterEdge>> {
        let mut all_characters: Vec<CharacterEdge> = Vec::new();
        let mut page: u32 = 1;

        loop {
            if let Some(limit) = self.max_pages
                && page > limit
            {
                tracing::warn!(limit, "character pagination reached page bound");
                return Err(AniListError::PageLimitExceeded {
                    operation: GetAnimeCharacters::NAME,
                    limit,
                }
                .into());
            }

            let variables = MediaPageVariables::new(id).page(page);

            tracing::debug!(page, per_page = variables.per_page, "character page request");

            let response = self
                .client
                .execute(&GetAnimeCharacters, &variables)
                .await
                .with_context(|| format!("character page {page} failed (media id: {id})"))?;

            let connection = response.media.and_then(|media| media.characters);
            let has_next_page = connection
                .as_ref()
                .is_some_and(CharacterConnection::has_next_page);
            let edges = connection.map_or_else(Vec::new, CharacterConnection::into_present_edges);

            tracing::debug!(
                page,
                fetched = edges.len(),
                has_next_page,
                "character page completed"
            );

            all_characters.extend(edges);

            if !has_next_page {
                break;
            }

            page = page.checked_add(1).context("page counter overflow")?;
        }

        tracing::info!(
            total = all_characters.len(),
            pages = page,
            "character pagination completed"
        );

        Ok(all_characters)
    }

    /// Retrieves the first page (25 edges) of an anime's characters.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_characters(&self, media_id: u32) -> Result<MediaResponse> {
        self.client
            .execute(&GetAnimeCharacters, &MediaPageVariables::new(media_id))
            .await
    }

    /// Searches anime by title or keyword.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_anime_by_search(&self, search: &str, paging: Paging) -> Result<PageResponse> {
        self.client
            .execute(&SearchAnime, &SearchVariables::new(search, paging))
            .await
    }

    /// Retrieves currently trending anime.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_trending_anime(&self, paging: Paging) -> Result<PageResponse> {
        self.client.execute(&GetAnimeTrending, &paging).await
    }

    /// Retrieves the most popular anime.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_popular_anime(&self, paging: Paging) -> Result<PageResponse> {
        self.client.execute(&GetAnimePopular, &paging).await
    }

    /// Retrieves recommendations based on an anime.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_recommendations(&self, media_id: u32) -> Result<MediaResponse> {
        self.client
            .execute(&GetAnimeRecommendations, &MediaIdVariables::new(media_id))
            .await
    }

    /// Retrieves the staff of an anime.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_staff(&self, media_id: u32) -> Result<MediaResponse> {
        self.client
            .execute(&GetAnimeStaff, &MediaIdVariables::new(media_id))
            .await
    }

    /// Retrieves media related to an anime (sequels, prequels, ...).
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_relations(&self, media_id: u32) -> Result<MediaResponse> {
        self.client
            .execute(&GetAnimeRelations, &MediaIdVariables::new(media_id))
            .await
    }

    /// Retrieves an anime by title.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_anime_by_title(&self, title: &str) -> Result<MediaResponse> {
        self.client
            .execute(&GetAnimeByTitle, &TitleVariables::new(title))
            .await
    }

    /// Retrieves anime of one genre.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    #[instrument(skip(self))]
    pub async fn get_anime_list_by_genre(&self, genre: &str, paging: Paging) -> Result<PageResponse> {
        self.client
            .execute(&GetAnimeListByGenre, &GenreVariables::new(genre, paging))
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use serde_json::{Value, json};

    use super::*;
    use crate::graphql::GraphqlApi;

    /// Mock client that replays scripted `data` payloads in order and
    /// records every call.
    struct MockGraphqlApi {
        responses: Mutex<VecDeque<Result<Value>>>,
        calls: Mutex<Vec<(&'static str, Value)>>,
    }

    impl MockGraphqlApi {
        fn new(responses: Vec<Result<Value>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(&'static str, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl LocalGraphqlApi for MockGraphqlApi {
        async fn execute<O: Operation>(
            &self,
            _operation: &O,
            variables: &O::Variables,
        ) -> Result<O::Response> {
            let recorded = serde_json::to_value(variables)?;
            self.calls.lock().unwrap().push((O::NAME, recorded));
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .context("no scripted response left")?;
            Ok(serde_json::from_value(next?)?)
        }
    }

    /// Thread-safe client implementing the `Send` variant directly.
    struct SendGraphqlApi {
        data: Value,
    }

    impl GraphqlApi for SendGraphqlApi {
        async fn execute<O: Operation>(
            &self,
            _operation: &O,
            _variables: &O::Variables,
        ) -> Result<O::Response> {
            Ok(serde_json::from_value(self.data.clone())?)
        }
    }

    fn assert_send<T: Send>(_: &T) {}

    async fn fetch_title<C: GraphqlApi>(service: &AnimeService<C>, id: u32) -> Result<String> {
        let response = service.get_anime_by_id(id).await?;
        let media = response.media.context("missing media")?;
        Ok(String::from(media.display_title()))
    }

    /// Builds a `GetAnimeCharacters` payload. `None` ids become null nodes.
    fn character_page(ids: &[Option<u32>], has_next_page: Option<bool>) -> Result<Value> {
        let edges: Vec<Value> = ids
            .iter()
            .map(|id| match id {
                Some(id) => json!({ "role": "SUPPORTING", "node": { "id": id } }),
                None => json!({ "role": "BACKGROUND", "node": null }),
            })
            .collect();
        Ok(json!({
            "Media": {
                "id": 1,
                "characters": {
                    "pageInfo": { "hasNextPage": has_next_page },
                    "edges": edges
                }
            }
        }))
    }

    fn ids(edges: &[CharacterEdge]) -> Vec<u32> {
        edges
            .iter()
            .map(|edge| edge.node.as_ref().unwrap().id)
            .collect()
    }

    fn service_error() -> Result<Value> {
        Err(AniListError::http("GetAnimeCharacters", 503, "Service Unavailable").into())
    }

    #[tokio::test]
    async fn test_get_anime_by_id_returns_matching_id() {
        // Arrange
        let mock = MockGraphqlApi::new(vec![Ok(json!({ "Media": { "id": 21 } }))]);
        let service = AnimeService::new(mock);

        // Act
        let response = service.get_anime_by_id(21).await.unwrap();

        // Assert
        assert_eq!(response.media.unwrap().id, 21);
        assert_eq!(
            service.client().calls(),
            vec![("GetAnimeById", json!({ "id": 21, "page": 1, "perPage": 25 }))]
        );
    }

    #[tokio::test]
    async fn test_all_characters_two_pages_skips_null_nodes() {
        // Arrange: page1 = [A, B] + next, page2 = [C, null] + end
        let mock = MockGraphqlApi::new(vec![
            character_page(&[Some(1), Some(2)], Some(true)),
            character_page(&[Some(3), None], Some(false)),
        ]);
        let service = AnimeService::new(mock);

        // Act
        let edges = service.get_all_characters_from_anime(1).await.unwrap();

        // Assert
        assert_eq!(ids(&edges), vec![1, 2, 3]);
        assert_eq!(
            service.client().calls(),
            vec![
                ("GetAnimeCharacters", json!({ "id": 1, "page": 1, "perPage": 25 })),
                ("GetAnimeCharacters", json!({ "id": 1, "page": 2, "perPage": 25 })),
            ]
        );
    }

    #[tokio::test]
    async fn test_all_characters_single_page_fetches_once() {
        // Arrange
        let mock = MockGraphqlApi::new(vec![character_page(&[Some(7)], Some(false))]);
        let service = AnimeService::new(mock);

        // Act
        let edges = service.get_all_characters_from_anime(1).await.unwrap();

        // Assert
        assert_eq!(ids(&edges), vec![7]);
        assert_eq!(service.client().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_all_characters_missing_page_info_stops() {
        // Arrange
        let mock = MockGraphqlApi::new(vec![Ok(json!({
            "Media": { "id": 1, "characters": { "edges": [{ "role": "MAIN", "node": { "id": 4 } }] } }
        }))]);
        let service = AnimeService::new(mock);

        // Act
        let edges = service.get_all_characters_from_anime(1).await.unwrap();

        // Assert
        assert_eq!(ids(&edges), vec![4]);
        assert_eq!(service.client().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_all_characters_null_media_yields_empty() {
        // Arrange
        let mock = MockGraphqlApi::new(vec![Ok(json!({ "Media": null }))]);
        let service = AnimeService::new(mock);

        // Act
        let edges = service.get_all_characters_from_anime(1).await.unwrap();

        // Assert
        assert!(edges.is_empty());
        assert_eq!(service.client().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_all_characters_is_concatenation_of_present_edges() {
        // Arrange
        let pages: Vec<Vec<Option<u32>>> = vec![
            vec![Some(10), None, Some(11)],
            vec![],
            vec![None, None],
            vec![Some(12), Some(13), None, Some(14)],
        ];
        let last = pages.len().saturating_sub(1);
        let responses = pages
            .iter()
            .enumerate()
            .map(|(i, page)| character_page(page, Some(i != last)))
            .collect();
        let expected: Vec<u32> = pages.iter().flatten().flatten().copied().collect();
        let service = AnimeService::new(MockGraphqlApi::new(responses));

        // Act
        let edges = service.get_all_characters_from_anime(1).await.unwrap();

        // Assert
        assert_eq!(ids(&edges), expected);
        assert_eq!(service.client().calls().len(), pages.len());
    }

    #[tokio::test]
    async fn test_all_characters_aborts_on_page_failure() {
        // Arrange: page 2 of 3 fails
        let mock = MockGraphqlApi::new(vec![
            character_page(&[Some(1), Some(2)], Some(true)),
            service_error(),
            character_page(&[Some(3)], Some(false)),
        ]);
        let service = AnimeService::new(mock);

        // Act
        let result = service.get_all_characters_from_anime(1).await;

        // Assert
        let err = result.unwrap_err();
        assert!(err.to_string().contains("character page 2 failed"));
        assert!(err.downcast_ref::<AniListError>().unwrap().is_transport());
        assert_eq!(service.client().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_all_characters_respects_page_bound() {
        // Arrange: the API claims more pages forever
        let mock = MockGraphqlApi::new(vec![
            character_page(&[Some(1)], Some(true)),
            character_page(&[Some(2)], Some(true)),
            character_page(&[Some(3)], Some(true)),
        ]);
        let service = AnimeService::new(mock).max_pages(2);

        // Act
        let err = service.get_all_characters_from_anime(1).await.unwrap_err();

        // Assert
        assert!(matches!(
            err.downcast_ref::<AniListError>(),
            Some(AniListError::PageLimitExceeded { limit: 2, .. })
        ));
        assert_eq!(service.client().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_zero_page_bound_fetches_nothing() {
        // Arrange
        let mock = MockGraphqlApi::new(vec![character_page(&[Some(1)], Some(true))]);
        let service = AnimeService::new(mock).max_pages(0);

        // Act
        let err = service.get_all_characters_from_anime(1).await.unwrap_err();

        // Assert
        assert!(matches!(
            err.downcast_ref::<AniListError>(),
            Some(AniListError::PageLimitExceeded { limit: 0, .. })
        ));
        assert!(service.client().calls().is_empty());
    }

    #[tokio::test]
    async fn test_service_runs_on_send_client() {
        // Arrange
        let client = SendGraphqlApi {
            data: json!({ "Media": { "id": 1, "title": { "romaji": "Cowboy Bebop" } } }),
        };

        // Act
        let variables = MediaPageVariables::new(1);
        let future = GraphqlApi::execute(&client, &GetAnimeById, &variables);
        assert_send(&future);
        let direct = future.await.unwrap();
        let title = fetch_title(&AnimeService::new(client), 1).await.unwrap();

        // Assert
        assert_eq!(direct.media.unwrap().id, 1);
        assert_eq!(title, "Cowboy Bebop");
    }

    #[tokio::test]
    async fn test_page_bound_not_hit_when_last_page_reached() {
        // Arrange
        let mock = MockGraphqlApi::new(vec![
            character_page(&[Some(1)], Some(true)),
            character_page(&[Some(2)], Some(false)),
        ]);
        let service = AnimeService::new(mock).max_pages(2);

        // Act
        let edges = service.get_all_characters_from_anime(1).await.unwrap();

        // Assert
        assert_eq!(ids(&edges), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_get_characters_requests_first_page() {
        // Arrange
        let mock = MockGraphqlApi::new(vec![character_page(&[Some(1)], Some(true))]);
        let service = AnimeService::new(mock);

        // Act
        let response = service.get_characters(30).await.unwrap();

        // Assert
        assert!(response.media.unwrap().characters.unwrap().has_next_page());
        assert_eq!(
            service.client().calls(),
            vec![("GetAnimeCharacters", json!({ "id": 30, "page": 1, "perPage": 25 }))]
        );
    }

    #[tokio::test]
    async fn test_list_methods_use_default_paging() {
        // Arrange
        let page = json!({ "Page": { "pageInfo": { "hasNextPage": false }, "media": [] } });
        let mock = MockGraphqlApi::new(vec![
            Ok(page.clone()),
            Ok(page.clone()),
            Ok(page.clone()),
            Ok(page),
        ]);
        let service = AnimeService::new(mock);

        // Act
        service.get_trending_anime(Paging::default()).await.unwrap();
        service.get_popular_anime(Paging::default()).await.unwrap();
        service
            .get_anime_by_search("Frieren", Paging::default())
            .await
            .unwrap();
        service
            .get_anime_list_by_genre("Action", Paging::new(3, 20))
            .await
            .unwrap();

        // Assert
        assert_eq!(
            service.client().calls(),
            vec![
                ("GetAnimeTrending", json!({ "page": 1, "perPage": 10 })),
                ("GetAnimePopular", json!({ "page": 1, "perPage": 10 })),
                (
                    "SearchAnime",
                    json!({ "query": "Frieren", "page": 1, "perPage": 10 })
                ),
                (
                    "GetAnimeListByGenre",
                    json!({ "genre": "Action", "page": 3, "perPage": 20 })
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_id_lookups_send_only_id() {
        // Arrange
        let media = json!({ "Media": { "id": 9 } });
        let mock = MockGraphqlApi::new(vec![
            Ok(media.clone()),
            Ok(media.clone()),
            Ok(media.clone()),
            Ok(media),
        ]);
        let service = AnimeService::new(mock);

        // Act
        service.get_recommendations(9).await.unwrap();
        service.get_staff(9).await.unwrap();
        service.get_relations(9).await.unwrap();
        service.get_anime_by_title("Monster").await.unwrap();

        // Assert
        assert_eq!(
            service.client().calls(),
            vec![
                ("GetAnimeRecommendations", json!({ "id": 9 })),
                ("GetAnimeStaff", json!({ "id": 9 })),
                ("GetAnimeRelations", json!({ "id": 9 })),
                ("GetAnimeByTitle", json!({ "title": "Monster" })),
            ]
        );
    }

    #[tokio::test]
    async fn test_forwarding_methods_propagate_remote_errors() {
        // Arrange
        let remote = AniListError::Remote {
            operation: "GetAnimeById",
            status: 404,
            errors: vec![crate::graphql::GraphqlError {
                message: String::from("Not Found."),
                status: Some(404),
                locations: None,
            }],
        };
        let service = AnimeService::new(MockGraphqlApi::new(vec![Err(remote.into())]));

        // Act
        let err = service.get_anime_by_id(0).await.unwrap_err();

        // Assert
        assert!(err.downcast_ref::<AniListError>().unwrap().is_remote());
        assert_eq!(
            err.to_string(),
            "GetAnimeById remote error (status 404): Not Found."
        );
    }
}
