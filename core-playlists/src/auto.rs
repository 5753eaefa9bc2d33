//! Auto playlists
//!
//! An auto playlist pairs an ordinary playlist identity with a rule
//! configuration. Membership is regenerated from the rules against the
//! current song catalog whenever the configuration is saved, never curated
//! by hand.

use core_library::models::{Playlist, Song};
use serde::{Deserialize, Serialize};

/// Song attribute a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleField {
    Title,
    Artist,
    Album,
}

/// How a rule's value is matched against the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFilter {
    Is,
    IsNot,
    Contains,
    NotContains,
}

/// One membership criterion. Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoPlaylistRule {
    pub field: RuleField,
    pub filter: RuleFilter,
    pub value: String,
}

impl AutoPlaylistRule {
    pub fn new(field: RuleField, filter: RuleFilter, value: impl Into<String>) -> Self {
        Self {
            field,
            filter,
            value: value.into(),
        }
    }

    /// Whether the song satisfies this rule.
    pub fn matches(&self, song: &Song) -> bool {
        let attribute = match self.field {
            RuleField::Title => &song.title,
            RuleField::Artist => &song.artist,
            RuleField::Album => &song.album,
        };

        let attribute = attribute.to_lowercase();
        let value = self.value.to_lowercase();

        match self.filter {
            RuleFilter::Is => attribute == value,
            RuleFilter::IsNot => attribute != value,
            RuleFilter::Contains => attribute.contains(&value),
            RuleFilter::NotContains => !attribute.contains(&value),
        }
    }
}

/// Ordering applied to generated members before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AutoPlaylistSort {
    /// Keep catalog order.
    #[default]
    None,
    TitleAsc,
    TitleDesc,
    DurationAsc,
    DurationDesc,
}

/// Rule-configured playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoPlaylist {
    /// Identity as registered in the media index.
    pub playlist: Playlist,
    /// Membership criteria.
    pub rules: Vec<AutoPlaylistRule>,
    /// True: a song must satisfy every rule. False: any rule suffices.
    pub match_all: bool,
    /// Cap on generated membership, applied after sorting.
    pub truncate: Option<usize>,
    /// Ordering of the generated members.
    pub sort: AutoPlaylistSort,
}

impl AutoPlaylist {
    /// New configuration for a playlist that is not registered yet (id 0).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            playlist: Playlist::new(0, name),
            rules: Vec::new(),
            match_all: true,
            truncate: None,
            sort: AutoPlaylistSort::default(),
        }
    }

    /// Same configuration rebound to the identity the media index assigned.
    pub fn with_id(&self, id: i64) -> Self {
        let mut rebound = self.clone();
        rebound.playlist.id = id;
        rebound
    }

    /// Regenerate membership from the given song catalog.
    ///
    /// An empty rule set matches every song regardless of the match flag.
    pub fn generate(&self, songs: &[Song]) -> Vec<Song> {
        let mut members: Vec<Song> = songs
            .iter()
            .filter(|song| {
                if self.rules.is_empty() {
                    return true;
                }
                if self.match_all {
                    self.rules.iter().all(|rule| rule.matches(song))
                } else {
                    self.rules.iter().any(|rule| rule.matches(song))
                }
            })
            .cloned()
            .collect();

        match self.sort {
            AutoPlaylistSort::None => {}
            AutoPlaylistSort::TitleAsc => {
                members.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
            }
            AutoPlaylistSort::TitleDesc => {
                members.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
            }
            AutoPlaylistSort::DurationAsc => {
                members.sort_by_key(|song| song.duration_ms);
            }
            AutoPlaylistSort::DurationDesc => {
                members.sort_by_key(|song| std::cmp::Reverse(song.duration_ms));
            }
        }

        if let Some(cap) = self.truncate {
            members.truncate(cap);
        }

        members
    }
}
