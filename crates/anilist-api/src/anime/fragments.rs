//! Shared field selections for media, character, staff, and studio records.

use crate::graphql::Fragment;

/// Core anime fields.
pub const MEDIA_FRAGMENT: Fragment = Fragment {
    name: "MediaFragment",
    definition: r"
fragment MediaFragment on Media {
  id
  idMal
  title {
    romaji
    english
    native
    userPreferred
  }
  description(asHtml: false)
  format
  status
  episodes
  duration
  season
  seasonYear
  genres
  averageScore
  popularity
  coverImage {
    large
    medium
  }
  bannerImage
  siteUrl
}
",
};

/// Character fields.
pub const CHARACTER_FRAGMENT: Fragment = Fragment {
    name: "CharacterFragment",
    definition: r"
fragment CharacterFragment on Character {
  id
  name {
    full
    native
    userPreferred
  }
  image {
    large
    medium
  }
  gender
  age
  siteUrl
}
",
};

/// Staff fields.
pub const STAFF_FRAGMENT: Fragment = Fragment {
    name: "StaffFragment",
    definition: r"
fragment StaffFragment on Staff {
  id
  name {
    full
    native
    userPreferred
  }
  image {
    large
    medium
  }
  primaryOccupations
  siteUrl
}
",
};

/// Studio fields.
pub const STUDIO_FRAGMENT: Fragment = Fragment {
    name: "StudioFragment",
    definition: r"
fragment StudioFragment on Studio {
  id
  name
  isAnimationStudio
  siteUrl
}
",
};
