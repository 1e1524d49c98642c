//! Predefined anime operations.

use super::fragments::{CHARACTER_FRAGMENT, MEDIA_FRAGMENT, STAFF_FRAGMENT, STUDIO_FRAGMENT};
use super::types::{MediaResponse, PageResponse};
use super::variables::{
    GenreVariables, MediaIdVariables, MediaPageVariables, Paging, SearchVariables, TitleVariables,
};
use crate::graphql::{Fragment, Operation};

/// Full anime record with one page of characters plus staff and studios.
#[derive(Debug, Clone, Copy)]
pub struct GetAnimeById;

impl Operation for GetAnimeById {
    const NAME: &'static str = "GetAnimeById";
    const BODY: &'static str = r"
query GetAnimeById($id: Int, $page: Int = 1, $perPage: Int = 25) {
  Media(id: $id, type: ANIME) {
    ...MediaFragment
    characters(page: $page, perPage: $perPage) {
      pageInfo {
        hasNextPage
      }
      edges {
        role
        node {
          ...CharacterFragment
        }
      }
    }
    staff {
      edges {
        role
        node {
          ...StaffFragment
        }
      }
    }
    studios {
      edges {
        isMain
        node {
          ...StudioFragment
        }
      }
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[
        MEDIA_FRAGMENT,
        CHARACTER_FRAGMENT,
        STAFF_FRAGMENT,
        STUDIO_FRAGMENT,
    ];
    type Variables = MediaPageVariables;
    type Response = MediaResponse;
}

/// One page of character edges.
#[derive(Debug, Clone, Copy)]
pub struct GetAnimeCharacters;

impl Operation for GetAnimeCharacters {
    const NAME: &'static str = "GetAnimeCharacters";
    const BODY: &'static str = r"
query GetAnimeCharacters($id: Int, $page: Int = 1, $perPage: Int = 25) {
  Media(id: $id, type: ANIME) {
    id
    characters(page: $page, perPage: $perPage) {
      pageInfo {
        hasNextPage
      }
      edges {
        role
        node {
          ...CharacterFragment
        }
      }
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[CHARACTER_FRAGMENT];
    type Variables = MediaPageVariables;
    type Response = MediaResponse;
}

/// Single anime matched by title.
#[derive(Debug, Clone, Copy)]
pub struct GetAnimeByTitle;

impl Operation for GetAnimeByTitle {
    const NAME: &'static str = "GetAnimeByTitle";
    const BODY: &'static str = r"
query GetAnimeByTitle($title: String) {
  Media(search: $title, type: ANIME) {
    ...MediaFragment
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[MEDIA_FRAGMENT];
    type Variables = TitleVariables;
    type Response = MediaResponse;
}

/// Anime list by free-text search.
#[derive(Debug, Clone, Copy)]
pub struct SearchAnime;

impl Operation for SearchAnime {
    const NAME: &'static str = "SearchAnime";
    const BODY: &'static str = r"
query SearchAnime($query: String, $page: Int = 1, $perPage: Int = 10) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      perPage
      currentPage
      lastPage
      hasNextPage
    }
    media(search: $query, type: ANIME, sort: SEARCH_MATCH) {
      ...MediaFragment
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[MEDIA_FRAGMENT];
    type Variables = SearchVariables;
    type Response = PageResponse;
}

/// Currently trending anime.
#[derive(Debug, Clone, Copy)]
pub struct GetAnimeTrending;

impl Operation for GetAnimeTrending {
    const NAME: &'static str = "GetAnimeTrending";
    const BODY: &'static str = r"
query GetAnimeTrending($page: Int = 1, $perPage: Int = 10) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      perPage
      currentPage
      lastPage
      hasNextPage
    }
    media(type: ANIME, sort: TRENDING_DESC) {
      ...MediaFragment
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[MEDIA_FRAGMENT];
    type Variables = Paging;
    type Response = PageResponse;
}

/// Most popular anime.
#[derive(Debug, Clone, Copy)]
pub struct GetAnimePopular;

impl Operation for GetAnimePopular {
    const NAME: &'static str = "GetAnimePopular";
    const BODY: &'static str = r"
query GetAnimePopular($page: Int = 1, $perPage: Int = 10) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      perPage
      currentPage
      lastPage
      hasNextPage
    }
    media(type: ANIME, sort: POPULARITY_DESC) {
      ...MediaFragment
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[MEDIA_FRAGMENT];
    type Variables = Paging;
    type Response = PageResponse;
}

/// Recommendations based on one anime.
#[derive(Debug, Clone, Copy)]
pub struct GetAnimeRecommendations;

impl Operation for GetAnimeRecommendations {
    const NAME: &'static str = "GetAnimeRecommendations";
    const BODY: &'static str = r"
query GetAnimeRecommendations($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    recommendations(sort: RATING_DESC) {
      pageInfo {
        hasNextPage
      }
      nodes {
        id
        rating
        mediaRecommendation {
          ...MediaFragment
        }
      }
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[MEDIA_FRAGMENT];
    type Variables = MediaIdVariables;
    type Response = MediaResponse;
}

/// Staff credited on one anime.
#[derive(Debug, Clone, Copy)]
pub struct GetAnimeStaff;

impl Operation for GetAnimeStaff {
    const NAME: &'static str = "GetAnimeStaff";
    const BODY: &'static str = r"
query GetAnimeStaff($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    staff {
      pageInfo {
        hasNextPage
      }
      edges {
        role
        node {
          ...StaffFragment
        }
      }
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[STAFF_FRAGMENT];
    type Variables = MediaIdVariables;
    type Response = MediaResponse;
}

/// Related media (sequels, prequels, adaptations).
#[derive(Debug, Clone, Copy)]
pub struct GetAnimeRelations;

impl Operation for GetAnimeRelations {
    const NAME: &'static str = "GetAnimeRelations";
    const BODY: &'static str = r"
query GetAnimeRelations($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    relations {
      edges {
        relationType
        node {
          ...MediaFragment
        }
      }
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[MEDIA_FRAGMENT];
    type Variables = MediaIdVariables;
    type Response = MediaResponse;
}

/// Anime list filtered by genre.
#[derive(Debug, Clone, Copy)]
pub struct GetAnimeListByGenre;

impl Operation for GetAnimeListByGenre {
    const NAME: &'static str = "GetAnimeListByGenre";
    const BODY: &'static str = r"
query GetAnimeListByGenre($genre: String, $page: Int = 1, $perPage: Int = 10) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      perPage
      currentPage
      lastPage
      hasNextPage
    }
    media(genre: $genre, type: ANIME, sort: POPULARITY_DESC) {
      ...MediaFragment
    }
  }
}
";
    const FRAGMENTS: &'static [Fragment] = &[MEDIA_FRAGMENT];
    type Variables = GenreVariables;
    type Response = PageResponse;
}
