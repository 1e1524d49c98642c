//! AniList response types.
//!
//! Mirrors the fields selected by the anime fragments. Every nested field
//! is optional: the remote schema allows `null` almost everywhere and each
//! operation selects a different subset.

use serde::Deserialize;

// --- Response roots ---

/// `data` payload of operations rooted at `Media`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaResponse {
    /// Matched anime (`null` when the API returns no media).
    #[serde(rename = "Media")]
    pub media: Option<Media>,
}

/// `data` payload of operations rooted at `Page`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageResponse {
    /// Page of results.
    #[serde(rename = "Page")]
    pub page: Option<Page>,
}

/// One page of anime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Pagination metadata.
    pub page_info: Option<PageInfo>,
    /// Anime on this page.
    pub media: Option<Vec<Option<Media>>>,
}

impl Page {
    /// Iterates over the non-null anime of this page.
    pub fn media(&self) -> impl Iterator<Item = &Media> {
        self.media.iter().flatten().flatten()
    }
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total number of items.
    pub total: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
    /// Current page number.
    pub current_page: Option<u32>,
    /// Last page number.
    pub last_page: Option<u32>,
    /// Whether another page follows.
    pub has_next_page: Option<bool>,
}

// --- Media ---

/// Anime record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// AniList media id.
    pub id: u32,
    /// `MyAnimeList` id.
    pub id_mal: Option<u32>,
    /// Titles.
    pub title: Option<MediaTitle>,
    /// Synopsis.
    pub description: Option<String>,
    /// Format (e.g. `TV`, `MOVIE`).
    pub format: Option<String>,
    /// Release status (e.g. `FINISHED`).
    pub status: Option<String>,
    /// Episode count.
    pub episodes: Option<u32>,
    /// Episode length in minutes.
    pub duration: Option<u32>,
    /// Season (e.g. `SPRING`).
    pub season: Option<String>,
    /// Season year.
    pub season_year: Option<u32>,
    /// Genres.
    pub genres: Option<Vec<String>>,
    /// Weighted average score (0-100).
    pub average_score: Option<u32>,
    /// Number of users with the anime on their list.
    pub popularity: Option<u32>,
    /// Cover image URLs.
    pub cover_image: Option<Image>,
    /// Banner image URL.
    pub banner_image: Option<String>,
    /// AniList page URL.
    pub site_url: Option<String>,
    /// Characters (paginated).
    pub characters: Option<CharacterConnection>,
    /// Staff.
    pub staff: Option<StaffConnection>,
    /// Studios.
    pub studios: Option<StudioConnection>,
    /// Related media.
    pub relations: Option<MediaConnection>,
    /// User recommendations.
    pub recommendations: Option<RecommendationConnection>,
}

impl Media {
    /// Best available display title.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_ref()
            .and_then(MediaTitle::preferred)
            .unwrap_or("<untitled>")
    }
}

/// Anime titles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTitle {
    /// Romanized title.
    pub romaji: Option<String>,
    /// English title.
    pub english: Option<String>,
    /// Native title.
    pub native: Option<String>,
    /// Title in the viewer's preferred language.
    pub user_preferred: Option<String>,
}

impl MediaTitle {
    /// First present of user-preferred, romaji, English, native.
    #[must_use]
    pub fn preferred(&self) -> Option<&str> {
        self.user_preferred
            .as_deref()
            .or(self.romaji.as_deref())
            .or(self.english.as_deref())
            .or(self.native.as_deref())
    }
}

/// Image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Image {
    /// Large image.
    pub large: Option<String>,
    /// Medium image.
    pub medium: Option<String>,
}

/// Name of a character or staff member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    /// Full name.
    pub full: Option<String>,
    /// Native name.
    pub native: Option<String>,
    /// Name in the viewer's preferred language.
    pub user_preferred: Option<String>,
}

impl PersonName {
    /// First present of user-preferred, full, native.
    #[must_use]
    pub fn preferred(&self) -> Option<&str> {
        self.user_preferred
            .as_deref()
            .or(self.full.as_deref())
            .or(self.native.as_deref())
    }
}

// --- Characters ---

/// Paginated character edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterConnection {
    /// Pagination metadata.
    pub page_info: Option<PageInfo>,
    /// Edges as returned (may contain `null`).
    pub edges: Option<Vec<Option<CharacterEdge>>>,
}

impl CharacterConnection {
    /// Whether another page follows. Missing metadata means no.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page_info
            .and_then(|info| info.has_next_page)
            .unwrap_or(false)
    }

    /// Consumes the connection, keeping edges with a character node in order.
    #[must_use]
    pub fn into_present_edges(self) -> Vec<CharacterEdge> {
        self.edges
            .into_iter()
            .flatten()
            .flatten()
            .filter(|edge| edge.node.is_some())
            .collect()
    }
}

/// Character with its role in the anime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterEdge {
    /// Role in the anime.
    pub role: Option<CharacterRole>,
    /// Character.
    pub node: Option<Character>,
}

/// Character role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterRole {
    /// Main character.
    Main,
    /// Supporting character.
    Supporting,
    /// Background character.
    Background,
    /// Role not known to this client.
    #[serde(other)]
    Other,
}

impl CharacterRole {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Supporting => "SUPPORTING",
            Self::Background => "BACKGROUND",
            Self::Other => "OTHER",
        }
    }
}

/// Character record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// AniList character id.
    pub id: u32,
    /// Name.
    pub name: Option<PersonName>,
    /// Image URLs.
    pub image: Option<Image>,
    /// Gender.
    pub gender: Option<String>,
    /// Age (free text, e.g. "17-18").
    pub age: Option<String>,
    /// AniList page URL.
    pub site_url: Option<String>,
}

// --- Staff ---

/// Staff edges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffConnection {
    /// Pagination metadata.
    pub page_info: Option<PageInfo>,
    /// Edges as returned.
    pub edges: Option<Vec<Option<StaffEdge>>>,
}

impl StaffConnection {
    /// Iterates over the non-null edges.
    pub fn edges(&self) -> impl Iterator<Item = &StaffEdge> {
        self.edges.iter().flatten().flatten()
    }
}

/// Staff member with their role on the anime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaffEdge {
    /// Role (e.g. "Director").
    pub role: Option<String>,
    /// Staff member.
    pub node: Option<Staff>,
}

/// Staff record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// AniList staff id.
    pub id: u32,
    /// Name.
    pub name: Option<PersonName>,
    /// Image URLs.
    pub image: Option<Image>,
    /// Primary occupations.
    pub primary_occupations: Option<Vec<String>>,
    /// AniList page URL.
    pub site_url: Option<String>,
}

// --- Studios ---

/// Studio edges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudioConnection {
    /// Edges as returned.
    pub edges: Option<Vec<Option<StudioEdge>>>,
}

/// Studio credited on the anime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioEdge {
    /// Whether this is the main studio.
    pub is_main: Option<bool>,
    /// Studio.
    pub node: Option<Studio>,
}

/// Studio record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Studio {
    /// AniList studio id.
    pub id: u32,
    /// Name.
    pub name: Option<String>,
    /// Whether it is an animation studio.
    pub is_animation_studio: Option<bool>,
    /// AniList page URL.
    pub site_url: Option<String>,
}

// --- Relations & recommendations ---

/// Related media edges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaConnection {
    /// Edges as returned.
    pub edges: Option<Vec<Option<MediaEdge>>>,
}

impl MediaConnection {
    /// Iterates over the non-null edges.
    pub fn edges(&self) -> impl Iterator<Item = &MediaEdge> {
        self.edges.iter().flatten().flatten()
    }
}

/// Related media with the relation type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEdge {
    /// Relation (e.g. `SEQUEL`, `ADAPTATION`).
    pub relation_type: Option<String>,
    /// Related media.
    pub node: Option<Media>,
}

/// Recommendation nodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationConnection {
    /// Pagination metadata.
    pub page_info: Option<PageInfo>,
    /// Nodes as returned.
    pub nodes: Option<Vec<Option<Recommendation>>>,
}

impl RecommendationConnection {
    /// Iterates over the non-null recommendations.
    pub fn nodes(&self) -> impl Iterator<Item = &Recommendation> {
        self.nodes.iter().flatten().flatten()
    }
}

/// User recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Recommendation id.
    pub id: u32,
    /// Net user rating.
    pub rating: Option<i32>,
    /// Recommended anime.
    pub media_recommendation: Option<Media>,
}
