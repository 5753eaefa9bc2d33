//! Session-scoped library cache.
//!
//! A `Library` holds the five entity collections the browser pages render.
//! It is an owned value handed to consumers by reference rather than a
//! process-wide global; the `&mut self` accessors confine mutation to one
//! owner at a time, so no internal locking is needed.
//!
//! Collections are append-only between resets: entities arrive one at a
//! time while a scan walks the media index, and the only removal operation
//! is a whole-cache reset. Accessors stable-sort the backing storage in
//! place on every call and return a view of that same storage, so a call is
//! idempotent once the collection is in order but always pays the sort.

use crate::error::Result;
use crate::media::MediaIndex;
use crate::models::{Album, Artist, Genre, Playlist, Song};
use crate::sort::{compare_names, LetterRule};
use tracing::info;

/// In-memory cache of the browsable library.
#[derive(Debug, Default)]
pub struct Library {
    songs: Vec<Song>,
    albums: Vec<Album>,
    artists: Vec<Artist>,
    playlists: Vec<Playlist>,
    genres: Vec<Genre>,
    letter_rule: LetterRule,
}

impl Library {
    /// Create an empty library using the default letter rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library with an explicit letter rule.
    pub fn with_letter_rule(letter_rule: LetterRule) -> Self {
        Self {
            letter_rule,
            ..Self::default()
        }
    }

    /// Insert a song.
    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Insert an album.
    pub fn add_album(&mut self, album: Album) {
        self.albums.push(album);
    }

    /// Insert an artist.
    pub fn add_artist(&mut self, artist: Artist) {
        self.artists.push(artist);
    }

    /// Insert a playlist.
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Insert a genre.
    pub fn add_genre(&mut self, genre: Genre) {
        self.genres.push(genre);
    }

    /// All songs, ordered by title with leading articles stripped.
    pub fn songs(&mut self) -> &[Song] {
        let rule = self.letter_rule;
        self.songs
            .sort_by(|a, b| compare_names(&a.title, &b.title, true, rule));
        &self.songs
    }

    /// All albums, ordered by name with leading articles stripped.
    pub fn albums(&mut self) -> &[Album] {
        let rule = self.letter_rule;
        self.albums
            .sort_by(|a, b| compare_names(&a.name, &b.name, true, rule));
        &self.albums
    }

    /// All artists, ordered by name.
    pub fn artists(&mut self) -> &[Artist] {
        let rule = self.letter_rule;
        self.artists
            .sort_by(|a, b| compare_names(&a.name, &b.name, false, rule));
        &self.artists
    }

    /// All playlists, ordered by name.
    pub fn playlists(&mut self) -> &[Playlist] {
        let rule = self.letter_rule;
        self.playlists
            .sort_by(|a, b| compare_names(&a.name, &b.name, false, rule));
        &self.playlists
    }

    /// All genres, ordered by name.
    pub fn genres(&mut self) -> &[Genre] {
        let rule = self.letter_rule;
        self.genres
            .sort_by(|a, b| compare_names(&a.name, &b.name, false, rule));
        &self.genres
    }

    /// Drop every collection.
    pub fn reset_all(&mut self) {
        self.songs = Vec::new();
        self.albums = Vec::new();
        self.artists = Vec::new();
        self.playlists = Vec::new();
        self.genres = Vec::new();
    }

    /// True when every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
            && self.albums.is_empty()
            && self.artists.is_empty()
            && self.playlists.is_empty()
            && self.genres.is_empty()
    }

    /// Clear the cache and repopulate every collection from the media index.
    pub async fn rescan(&mut self, index: &dyn MediaIndex) -> Result<()> {
        self.reset_all();

        for song in index.all_songs().await? {
            self.add_song(song);
        }
        for album in index.all_albums().await? {
            self.add_album(album);
        }
        for artist in index.all_artists().await? {
            self.add_artist(artist);
        }
        for playlist in index.all_playlists().await? {
            self.add_playlist(playlist);
        }
        for genre in index.all_genres().await? {
            self.add_genre(genre);
        }

        info!(
            songs = self.songs.len(),
            albums = self.albums.len(),
            artists = self.artists.len(),
            playlists = self.playlists.len(),
            genres = self.genres.len(),
            "Library rescan complete"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{create_test_pool, SqliteMediaIndex};

    fn song(id: i64, title: &str) -> Song {
        Song {
            id,
            title: title.to_string(),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            album_id: 1,
            duration_ms: 200_000,
            path: format!("/music/{}.mp3", id),
        }
    }

    #[test]
    fn test_add_then_get_contains_song_once() {
        let mut library = Library::new();
        library.add_song(song(1, "Only One"));

        let songs = library.songs();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Only One");
    }

    #[test]
    fn test_repeated_accessor_calls_are_idempotent() {
        let mut library = Library::new();
        library.add_song(song(1, "Banana"));
        library.add_song(song(2, "Apple"));
        library.add_song(song(3, "Cherry"));

        let first: Vec<i64> = library.songs().iter().map(|s| s.id).collect();
        let second: Vec<i64> = library.songs().iter().map(|s| s.id).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![2, 1, 3]);
    }

    #[test]
    fn test_song_order_with_digits_and_articles() {
        // Keys after normalization: "banana", "1999", "apple". Under the
        // default letter rule no multi-character key counts as alphabetic,
        // so the order is plainly lexicographic: digits first.
        let mut library = Library::new();
        library.add_song(song(1, "Banana"));
        library.add_song(song(2, "1999"));
        library.add_song(song(3, "The Apple"));

        let titles: Vec<&str> = library.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["1999", "The Apple", "Banana"]);
    }

    #[test]
    fn test_song_order_with_leading_letter_rule() {
        // Same input under the corrected rule: names that do not lead with
        // a letter go last.
        let mut library = Library::with_letter_rule(LetterRule::LeadingLetter);
        library.add_song(song(1, "Banana"));
        library.add_song(song(2, "1999"));
        library.add_song(song(3, "The Apple"));

        let titles: Vec<&str> = library.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["The Apple", "Banana", "1999"]);
    }

    #[test]
    fn test_albums_strip_articles_but_artists_do_not() {
        let mut library = Library::new();
        library.add_album(Album {
            id: 1,
            name: "The Division Bell".to_string(),
            artist: "Pink Floyd".to_string(),
            year: Some(1994),
        });
        library.add_album(Album {
            id: 2,
            name: "Animals".to_string(),
            artist: "Pink Floyd".to_string(),
            year: Some(1977),
        });

        // "division bell" > "animals": the article is gone before comparing.
        let names: Vec<&str> = library.albums().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Animals", "The Division Bell"]);

        library.add_artist(Artist {
            id: 1,
            name: "The Kinks".to_string(),
        });
        library.add_artist(Artist {
            id: 2,
            name: "ABBA".to_string(),
        });

        // Artists keep their article: "abba" < "the kinks".
        let names: Vec<&str> = library.artists().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["ABBA", "The Kinks"]);
    }

    #[test]
    fn test_playlists_and_genres_sort_by_raw_lowercase_name() {
        let mut library = Library::new();
        library.add_playlist(Playlist::new(1, "workout"));
        library.add_playlist(Playlist::new(2, "Chill"));
        let names: Vec<&str> = library
            .playlists()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chill", "workout"]);

        library.add_genre(Genre {
            id: 1,
            name: "Rock".to_string(),
        });
        library.add_genre(Genre {
            id: 2,
            name: "Ambient".to_string(),
        });
        let names: Vec<&str> = library.genres().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ambient", "Rock"]);
    }

    #[test]
    fn test_reset_all_then_is_empty() {
        let mut library = Library::new();
        assert!(library.is_empty());

        library.add_song(song(1, "Something"));
        library.add_genre(Genre {
            id: 1,
            name: "Rock".to_string(),
        });
        assert!(!library.is_empty());

        library.reset_all();
        assert!(library.is_empty());
    }

    #[tokio::test]
    async fn test_rescan_populates_all_collections() {
        let pool = create_test_pool().await.unwrap();
        let index = SqliteMediaIndex::new(pool);
        index.initialize().await.unwrap();

        let genre = index.insert_genre("Rock").await.unwrap();
        index.insert_song(&song(0, "Riff"), genre.id).await.unwrap();
        index
            .insert_album(&Album {
                id: 0,
                name: "Album".to_string(),
                artist: "Artist".to_string(),
                year: None,
            })
            .await
            .unwrap();
        index.insert_artist("Artist").await.unwrap();
        index.create_playlist("Mix", &[]).await.unwrap();

        let mut library = Library::new();
        library.rescan(&index).await.unwrap();

        assert!(!library.is_empty());
        assert_eq!(library.songs().len(), 1);
        assert_eq!(library.albums().len(), 1);
        assert_eq!(library.artists().len(), 1);
        assert_eq!(library.playlists().len(), 1);
        assert_eq!(library.genres().len(), 1);
    }

    #[tokio::test]
    async fn test_rescan_replaces_previous_contents() {
        let pool = create_test_pool().await.unwrap();
        let index = SqliteMediaIndex::new(pool);
        index.initialize().await.unwrap();
        index.insert_song(&song(0, "Fresh"), 0).await.unwrap();

        let mut library = Library::new();
        library.add_song(song(99, "Stale"));
        library.rescan(&index).await.unwrap();

        let titles: Vec<&str> = library.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Fresh"]);
    }
}
