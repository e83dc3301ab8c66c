use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use indicatif::ProgressBar;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::{
    catalog::{Catalog, PreviewFetcher},
    convert,
    extract::{ExtractError, ExtractedRecords, PlaylistRecord, TrackRecord},
    types::{AudioFormat, Label, PlaylistResponse, Track},
    utils, warning,
};

/// Fields of a track that passed the name/artist check.
struct SongFields<'t> {
    name: &'t str,
    artist_name: &'t str,
    artist_id: Option<&'t str>,
}

impl<'t> SongFields<'t> {
    fn from_track(track: &'t Track) -> Option<Self> {
        let artist = track.first_artist()?;
        if track.name.is_empty() || artist.name.is_empty() {
            return None;
        }

        Some(SongFields {
            name: &track.name,
            artist_name: &artist.name,
            artist_id: artist.id.as_deref().filter(|id| !id.is_empty()),
        })
    }
}

/// Artist id to space-joined genres, scoped to one `extract` call.
type GenreCache = HashMap<String, String>;

/// Walks labelled playlists and produces [`ExtractedRecords`].
///
/// The extractor borrows its collaborators; it holds no state between
/// `extract` calls.
pub struct PlaylistRecordExtractor<'a, C: ?Sized, F: ?Sized> {
    catalog: &'a C,
    fetcher: &'a F,
    audio_dir: PathBuf,
    format: AudioFormat,
    progress: Option<ProgressBar>,
}

impl<'a, C, F> PlaylistRecordExtractor<'a, C, F>
where
    C: Catalog + ?Sized,
    F: PreviewFetcher + ?Sized,
{
    pub fn new(catalog: &'a C, fetcher: &'a F, audio_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            fetcher,
            audio_dir: audio_dir.into(),
            format: AudioFormat::default(),
            progress: None,
        }
    }

    pub fn with_format(mut self, format: AudioFormat) -> Self {
        self.format = format;
        self
    }

    /// Ticks `progress` once per track entry; its length is set by `extract`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Extracts records from `playlists`, in playlist order then track order.
    ///
    /// With `download_audio` set, every usable track becomes a [`TrackRecord`]
    /// and its preview is written to the audio directory as
    /// `<sanitized song name>.<format>`. Otherwise each playlist with at least
    /// one usable track becomes a single [`PlaylistRecord`].
    ///
    /// # Errors
    ///
    /// Fails on the first artist lookup that fails, or when the audio
    /// directory or a preview file cannot be written. Records gathered so far
    /// are discarded.
    pub async fn extract(
        &self,
        playlists: &[(PlaylistResponse, Label)],
        download_audio: bool,
    ) -> Result<ExtractedRecords, ExtractError> {
        if let Some(pb) = &self.progress {
            let total: usize = playlists.iter().map(|(p, _)| p.entry_count()).sum();
            pb.set_length(total as u64);
        }

        let mut genres = GenreCache::new();

        if download_audio {
            async_fs::create_dir_all(&self.audio_dir)
                .await
                .map_err(|source| ExtractError::Io {
                    path: self.audio_dir.clone(),
                    source,
                })?;

            let mut records = Vec::new();
            for (playlist, label) in playlists {
                for track in playlist.tracks() {
                    if let Some(record) = self.track_record(track, label, &mut genres).await? {
                        records.push(record);
                    }
                }
                self.finish_playlist(playlist);
            }
            return Ok(ExtractedRecords::Tracks(records));
        }

        let mut records = Vec::new();
        for (playlist, label) in playlists {
            if let Some(record) = self.playlist_record(playlist, label, &mut genres).await? {
                records.push(record);
            }
            self.finish_playlist(playlist);
        }
        Ok(ExtractedRecords::Playlists(records))
    }

    async fn track_record(
        &self,
        track: &Track,
        label: &Label,
        genres: &mut GenreCache,
    ) -> Result<Option<TrackRecord>, ExtractError> {
        self.tick();
        let Some(song) = SongFields::from_track(track) else {
            return Ok(None);
        };

        let artist_genre = self.genres_for(song.artist_id, genres).await?;
        let mut record = TrackRecord {
            track_name: song.name.to_string(),
            preview: None,
            artist_name: song.artist_name.to_string(),
            artist_genre,
            label: label.clone(),
        };

        let Some(url) = track.preview_url.as_deref().filter(|u| !u.is_empty()) else {
            return Ok(Some(record));
        };

        let Some(audio) = self.download(song.name, url).await else {
            return Ok(None);
        };

        let path = self.audio_dir.join(format!(
            "{}.{}",
            utils::sanitize_filename(song.name),
            self.format.extension()
        ));
        write_preview(&path, &audio).await?;

        record.preview = Some(path);
        Ok(Some(record))
    }

    async fn playlist_record(
        &self,
        playlist: &PlaylistResponse,
        label: &Label,
        genres: &mut GenreCache,
    ) -> Result<Option<PlaylistRecord>, ExtractError> {
        let mut lines = Vec::new();
        let mut last_genre = String::new();

        for track in playlist.tracks() {
            self.tick();
            let Some(song) = SongFields::from_track(track) else {
                continue;
            };

            let genre = self.genres_for(song.artist_id, genres).await?;
            lines.push(utils::combined_line(song.name, song.artist_name, &genre));
            last_genre = genre;
        }

        if lines.is_empty() {
            return Ok(None);
        }

        Ok(Some(PlaylistRecord {
            playlist_id: playlist.id.clone(),
            tracks: lines,
            artist_genre: last_genre,
            label: label.clone(),
        }))
    }

    async fn genres_for(
        &self,
        artist_id: Option<&str>,
        cache: &mut GenreCache,
    ) -> Result<String, ExtractError> {
        let Some(artist_id) = artist_id else {
            return Ok(String::new());
        };

        if let Some(genres) = cache.get(artist_id) {
            return Ok(genres.clone());
        }

        let genres = self
            .catalog
            .artist_genres(artist_id)
            .await
            .map_err(|source| ExtractError::ArtistLookup {
                artist_id: artist_id.to_string(),
                source,
            })?;

        let joined = utils::join_genres(&genres);
        cache.insert(artist_id.to_string(), joined.clone());
        Ok(joined)
    }

    /// Fetches the preview and converts it to the configured format.
    /// `None` means the track must be skipped.
    async fn download(&self, song: &str, url: &str) -> Option<Vec<u8>> {
        let bytes = match self.fetcher.fetch_preview(url).await {
            Ok(Some(bytes)) if !bytes.is_empty() => bytes,
            Ok(_) => {
                warning!("Preview of \"{}\" came back empty, skipping", song);
                return None;
            }
            Err(e) => {
                warning!("Failed to fetch preview of \"{}\", skipping. Err: {}", song, e);
                return None;
            }
        };

        match self.format {
            AudioFormat::Mp3 => Some(bytes),
            AudioFormat::Wav => {
                match tokio::task::spawn_blocking(move || convert::transcode_to_wav(bytes)).await {
                    Ok(Ok(wav)) => Some(wav),
                    Ok(Err(e)) => {
                        warning!("Failed to convert preview of \"{}\", skipping. Err: {}", song, e);
                        None
                    }
                    Err(e) => {
                        warning!("Conversion task for \"{}\" failed, skipping. Err: {}", song, e);
                        None
                    }
                }
            }
        }
    }

    fn tick(&self) {
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }

    /// Accounts for `null` entries, which `tracks()` never yields.
    fn finish_playlist(&self, playlist: &PlaylistResponse) {
        if let Some(pb) = &self.progress {
            let skipped = playlist.entry_count() - playlist.tracks().count();
            pb.inc(skipped as u64);
        }
    }
}

async fn write_preview(path: &Path, audio: &[u8]) -> Result<(), ExtractError> {
    let io_err = |source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).await.map_err(io_err)?;
    file.write_all(audio).await.map_err(io_err)?;
    file.flush().await.map_err(io_err)
}
