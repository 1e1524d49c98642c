//! Anime query catalog and service facade.
//!
//! Each AniList anime request is a predefined [`Operation`](crate::graphql::Operation)
//! with typed variables and a typed response. [`AnimeService`] wraps them
//! into one method per request.

mod fragments;
mod queries;
mod service;
mod types;
mod variables;

pub use fragments::{CHARACTER_FRAGMENT, MEDIA_FRAGMENT, STAFF_FRAGMENT, STUDIO_FRAGMENT};
pub use queries::{
    GetAnimeById, GetAnimeByTitle, GetAnimeCharacters, GetAnimeListByGenre, GetAnimePopular,
    GetAnimeRecommendations, GetAnimeRelations, GetAnimeStaff, GetAnimeTrending, SearchAnime,
};
#[allow(clippy::module_name_repetitions)]
pub use service::AnimeService;
pub use types::{
    Character, CharacterConnection, CharacterEdge, CharacterRole, Image, Media, MediaConnection,
    MediaEdge, MediaResponse, MediaTitle, Page, PageInfo, PageResponse, PersonName,
    Recommendation, RecommendationConnection, Staff, StaffConnection, StaffEdge, Studio,
    StudioConnection, StudioEdge,
};
pub use variables::{
    DEFAULT_CHARACTERS_PER_PAGE, DEFAULT_LIST_PER_PAGE, DEFAULT_PAGE, GenreVariables,
    MediaIdVariables, MediaPageVariables, Paging, SearchVariables, TitleVariables,
};
