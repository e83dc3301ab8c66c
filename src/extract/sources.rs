use indicatif::ProgressBar;

use crate::{
    Res,
    catalog::Catalog,
    types::{Label, PlaylistResponse, PlaylistSummary},
};

/// Where playlists for an extraction come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistSource {
    /// Playlists found by a search term; the term becomes the label.
    Search { query: String, limit: u32 },
    /// Playlists of a browse category; the category id becomes the label.
    Category { category_id: String, limit: u32 },
    /// A single known playlist with a caller supplied label.
    Playlist { playlist_id: String, label: Label },
}

impl PlaylistSource {
    pub fn label(&self) -> Label {
        match self {
            PlaylistSource::Search { query, .. } => Label::new(query.as_str()),
            PlaylistSource::Category { category_id, .. } => Label::new(category_id.as_str()),
            PlaylistSource::Playlist { label, .. } => label.clone(),
        }
    }
}

/// Resolves `sources` into full playlists paired with their label.
///
/// Sources are resolved in order, and the playlists of one source keep the
/// order the catalog returned them in. Playlists are fetched one at a time.
///
/// # Errors
///
/// Any failing catalog call aborts the whole load.
pub async fn load_playlists<C>(
    catalog: &C,
    sources: &[PlaylistSource],
    progress: Option<&ProgressBar>,
) -> Res<Vec<(PlaylistResponse, Label)>>
where
    C: Catalog + ?Sized,
{
    let mut playlists = Vec::new();

    for source in sources {
        let label = source.label();
        let ids: Vec<String> = match source {
            PlaylistSource::Search { query, limit } => {
                summary_ids(catalog.search_playlists(query, *limit).await?)
            }
            PlaylistSource::Category { category_id, limit } => {
                summary_ids(catalog.category_playlists(category_id, *limit).await?)
            }
            PlaylistSource::Playlist { playlist_id, .. } => vec![playlist_id.clone()],
        };

        for id in ids {
            if let Some(pb) = progress {
                pb.set_message(format!("Fetching playlist {} ({})...", id, label));
            }
            let playlist = catalog.playlist(&id).await?;
            playlists.push((playlist, label.clone()));
        }
    }

    Ok(playlists)
}

fn summary_ids(summaries: Vec<PlaylistSummary>) -> Vec<String> {
    summaries
        .into_iter()
        .map(|s| s.id)
        .filter(|id| !id.is_empty())
        .collect()
}
