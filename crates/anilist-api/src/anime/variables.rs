//! Typed GraphQL variables for the anime operations.
//!
//! Rust-side defaults match the defaults declared in the query documents.

use serde::Serialize;

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for character pages.
pub const DEFAULT_CHARACTERS_PER_PAGE: u32 = 25;

/// Default page size for anime lists.
pub const DEFAULT_LIST_PER_PAGE: u32 = 10;

/// `$id` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaIdVariables {
    /// AniList media id.
    pub id: u32,
}

impl MediaIdVariables {
    /// Creates variables for `id`.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { id }
    }
}

/// `$id` plus the character page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPageVariables {
    /// AniList media id.
    pub id: u32,
    /// Character page (default: 1).
    pub page: u32,
    /// Characters per page (default: 25).
    pub per_page: u32,
}

impl MediaPageVariables {
    /// Creates variables for the first character page of `id`.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_CHARACTERS_PER_PAGE,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

/// `$title` lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleVariables {
    /// Title to match.
    pub title: String,
}

impl TitleVariables {
    /// Creates variables for `title`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// List page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// Page number (default: 1).
    pub page: u32,
    /// Items per page (default: 10).
    pub per_page: u32,
}

impl Paging {
    /// Creates a page window.
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIST_PER_PAGE)
    }
}

/// Free-text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchVariables {
    /// Search string, sent as `$query`.
    pub query: String,
    /// Page window.
    #[serde(flatten)]
    pub paging: Paging,
}

impl SearchVariables {
    /// Creates search variables.
    #[must_use]
    pub fn new(query: impl Into<String>, paging: Paging) -> Self {
        Self {
            query: query.into(),
            paging,
        }
    }
}

/// Genre filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreVariables {
    /// Genre name (e.g. "Action").
    pub genre: String,
    /// Page window.
    #[serde(flatten)]
    pub paging: Paging,
}

impl GenreVariables {
    /// Creates genre variables.
    #[must_use]
    pub fn new(genre: impl Into<String>, paging: Paging) -> Self {
        Self {
            genre: genre.into(),
            paging,
        }
    }
}
