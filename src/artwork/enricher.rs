//! Cover-art enrichment for a freshly generated song list.
//!
//! One lookup per song, all in flight together. The returned list always
//! has the input's length and order; a failed lookup keeps the song's
//! existing cover or falls back to a placeholder seeded by its title.

use futures::future::join_all;

use crate::model::Song;
use crate::traits::ArtworkApi;

const PLACEHOLDER_BASE: &str = "https://picsum.photos/seed";

/// Deterministic placeholder image for a title.
pub fn placeholder_url(title: &str, size: u32) -> String {
    format!("{PLACEHOLDER_BASE}/{}/{size}", encode_component(title))
}

/// Percent-encode a URI component. `!'()*` stay literal, as with `encodeURIComponent`.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '!' | '\'' | '(' | ')' | '*' => out.push(c),
            _ => {
                let mut buf = [0; 4];
                out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
            }
        }
    }
    out
}

/// Attach artwork to every song.
pub async fn enrich_covers<A>(api: &A, songs: Vec<Song>, placeholder_size: u32) -> Vec<Song>
where
    A: ArtworkApi + ?Sized,
{
    let total = songs.len();
    let lookups = songs
        .into_iter()
        .map(|song| enrich_one(api, song, placeholder_size));
    let enriched = join_all(lookups).await;

    let found = enriched.iter().filter(|(_, hit)| *hit).count();
    tracing::debug!("Artwork found for {}/{} songs", found, total);

    enriched.into_iter().map(|(song, _)| song).collect()
}

/// Enrich a single song. The flag reports whether the lookup hit.
async fn enrich_one<A>(api: &A, mut song: Song, placeholder_size: u32) -> (Song, bool)
where
    A: ArtworkApi + ?Sized,
{
    match api.find_artwork(&song.artist, &song.title).await {
        Ok(url) => {
            song.cover_url = Some(url);
            (song, true)
        }
        Err(e) => {
            tracing::warn!("Failed to fetch cover for {}: {}", song.title, e);
            if song.cover_url.is_none() {
                song.cover_url = Some(placeholder_url(&song.title, placeholder_size));
            }
            (song, false)
        }
    }
}
