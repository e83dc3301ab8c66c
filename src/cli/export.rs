use std::{collections::BTreeMap, path::PathBuf};

use tabled::Table;

use crate::{
    error, export,
    extract::{ExtractedRecords, PlaylistRecordExtractor, PlaylistSource, load_playlists},
    info,
    spotify::{HttpPreviewFetcher, SpotifyClient},
    success,
    types::{AudioFormat, Label, LabelSummaryRow, PlaylistResponse},
    utils, warning,
};

/// Everything `spotex export` was asked to do.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub sources: Vec<PlaylistSource>,
    pub download: bool,
    pub format: AudioFormat,
    pub audio_dir: PathBuf,
    pub output: PathBuf,
}

pub async fn export(request: ExportRequest) {
    if request.sources.is_empty() {
        error!("Nothing to export. Pass at least one --genre, --category or --playlist.");
    }

    let client = match SpotifyClient::from_cache().await {
        Ok(c) => c,
        Err(e) => error!(
            "Failed to load token. Please run spotex auth\n Error: {}",
            e
        ),
    };

    let pb = utils::spinner("Searching playlists...");
    let playlists = match load_playlists(&client, &request.sources, Some(&pb)).await {
        Ok(p) => p,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    if playlists.is_empty() {
        warning!("No playlists found for the given sources.");
        return;
    }
    info!("Fetched {} playlist(s)", playlists.len());

    let fetcher = HttpPreviewFetcher::new();
    let pb = utils::progress_bar("Extracting tracks");
    let extractor = PlaylistRecordExtractor::new(&client, &fetcher, &request.audio_dir)
        .with_format(request.format)
        .with_progress(pb.clone());

    let records = match extractor.extract(&playlists, request.download).await {
        Ok(r) => r,
        Err(e) => {
            pb.finish_and_clear();
            error!("Extraction failed, nothing was exported. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    let written = match export::write_records(&request.output, &records) {
        Ok(n) => n,
        Err(e) => error!(
            "Failed to write {}. Err: {}",
            request.output.display(),
            e
        ),
    };

    success!(
        "Exported {} record(s) to {}",
        written,
        request.output.display()
    );
    if request.download {
        let downloaded = match &records {
            ExtractedRecords::Tracks(tracks) => {
                tracks.iter().filter(|t| t.preview.is_some()).count()
            }
            ExtractedRecords::Playlists(_) => 0,
        };
        success!(
            "Stored {} preview(s) in {}",
            downloaded,
            request.audio_dir.display()
        );
    }

    println!("{}", Table::new(summarize(&playlists, &records)));
}

/// One row per label: playlists fetched and records produced.
fn summarize(
    playlists: &[(PlaylistResponse, Label)],
    records: &ExtractedRecords,
) -> Vec<LabelSummaryRow> {
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for (_, label) in playlists {
        counts.entry(label.as_str()).or_default().0 += 1;
    }
    for label in records.labels() {
        counts.entry(label.as_str()).or_default().1 += 1;
    }

    counts
        .into_iter()
        .map(|(label, (playlists, records))| LabelSummaryRow {
            label: label.to_string(),
            playlists,
            records,
        })
        .collect()
}
