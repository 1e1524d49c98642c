//! Result rendering through `tracing` events.

use std::fmt::Display;

use anilist_api::anime::{CharacterEdge, CharacterRole, Media, Page, PersonName};

/// Renders an optional value, `-` when absent.
fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.to_string())
}

/// Renders the details of a single anime.
pub fn render_media(media: &Media) {
    tracing::info!("ID:\t\t{}", media.id);
    tracing::info!("Title:\t\t{}", media.display_title());
    tracing::info!("Format:\t\t{}", or_dash(media.format.as_deref()));
    tracing::info!("Status:\t\t{}", or_dash(media.status.as_deref()));
    tracing::info!("Episodes:\t{}", or_dash(media.episodes));
    tracing::info!(
        "Season:\t\t{} {}",
        or_dash(media.season.as_deref()),
        or_dash(media.season_year)
    );
    tracing::info!("Score:\t\t{}", or_dash(media.average_score));
    tracing::info!(
        "Genres:\t\t{}",
        media
            .genres
            .as_ref()
            .filter(|g| !g.is_empty())
            .map_or_else(|| String::from("-"), |g| g.join(", "))
    );

    let studios: Vec<&str> = media
        .studios
        .iter()
        .flat_map(|s| s.edges.iter().flatten().flatten())
        .filter(|edge| edge.is_main.unwrap_or(false))
        .filter_map(|edge| edge.node.as_ref()?.name.as_deref())
        .collect();
    if !studios.is_empty() {
        tracing::info!("Studios:\t{}", studios.join(", "));
    }

    if let Some(url) = &media.site_url {
        tracing::info!("URL:\t\t{url}");
    }
}

/// Renders character edges as a table.
pub fn render_characters(edges: &[CharacterEdge]) {
    tracing::info!("ID\tRole\t\tName");
    for edge in edges {
        let Some(character) = &edge.node else {
            continue;
        };
        tracing::info!(
            "{}\t{}\t\t{}",
            character.id,
            edge.role.map_or("-", CharacterRole::as_str),
            or_dash(character.name.as_ref().and_then(PersonName::preferred)),
        );
    }
    tracing::info!("Total: {} characters", edges.len());
}

/// Renders a page of anime as a table.
pub fn render_media_page(page: &Page) {
    tracing::info!("ID\tScore\tEpisodes\tTitle");
    let mut count: usize = 0;
    for media in page.media() {
        tracing::info!(
            "{}\t{}\t{}\t\t{}",
            media.id,
            or_dash(media.average_score),
            or_dash(media.episodes),
            media.display_title(),
        );
        count = count.saturating_add(1);
    }
    match page.page_info.and_then(|info| info.current_page) {
        Some(current) => tracing::info!("Total: {count} anime (page {current})"),
        None => tracing::info!("Total: {count} anime"),
    }
}

/// Renders the staff edges of an anime.
pub fn render_staff(media: &Media) {
    tracing::info!("ID\tRole\t\tName");
    let mut count: usize = 0;
    for edge in media.staff.iter().flat_map(|s| s.edges()) {
        let Some(staff) = &edge.node else {
            continue;
        };
        tracing::info!(
            "{}\t{}\t\t{}",
            staff.id,
            or_dash(edge.role.as_deref()),
            or_dash(staff.name.as_ref().and_then(PersonName::preferred)),
        );
        count = count.saturating_add(1);
    }
    tracing::info!("Total: {count} staff");
}

/// Renders the related media of an anime.
pub fn render_relations(media: &Media) {
    tracing::info!("ID\tRelation\tTitle");
    let mut count: usize = 0;
    for edge in media.relations.iter().flat_map(|r| r.edges()) {
        let Some(related) = &edge.node else {
            continue;
        };
        tracing::info!(
            "{}\t{}\t{}",
            related.id,
            or_dash(edge.relation_type.as_deref()),
            related.display_title(),
        );
        count = count.saturating_add(1);
    }
    tracing::info!("Total: {count} relations");
}

/// Renders the recommendations of an anime.
pub fn render_recommendations(media: &Media) {
    tracing::info!("ID\tRating\tTitle");
    let mut count: usize = 0;
    for recommendation in media.recommendations.iter().flat_map(|r| r.nodes()) {
        let Some(recommended) = &recommendation.media_recommendation else {
            continue;
        };
        tracing::info!(
            "{}\t{}\t{}",
            recommended.id,
            or_dash(recommendation.rating),
            recommended.display_title(),
        );
        count = count.saturating_add(1);
    }
    tracing::info!("Total: {count} recommendations");
}
