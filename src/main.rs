use std::{path::PathBuf, sync::Arc};

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotex::{
    cli, config,
    extract::PlaylistSource,
    types::{AudioFormat, Label, PkceToken},
    utils, warning,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Export playlist tracks to CSV, optionally downloading previews
    Export(ExportOptions),

    /// List browse categories
    Categories(CategoriesOptions),

    /// Convert downloaded MP3 previews to WAV
    Convert(ConvertOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Search playlists for a genre term; can be repeated
    #[clap(long = "genre", action = ArgAction::Append)]
    pub genres: Vec<String>,

    /// Use the playlists of a browse category; can be repeated
    #[clap(long = "category", action = ArgAction::Append)]
    pub categories: Vec<String>,

    /// Export a playlist by id, URI or URL; can be repeated
    #[clap(
        long = "playlist",
        action = ArgAction::Append,
        value_parser = utils::parse_playlist_id
    )]
    pub playlists: Vec<String>,

    /// Label attached to playlists given with --playlist
    #[clap(long, default_value = "unlabeled")]
    pub label: String,

    /// Maximum playlists per genre or category (1-50)
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub limit: u32,

    /// Download track previews and emit one record per track
    #[clap(long)]
    pub download: bool,

    /// File format for downloaded previews
    #[clap(long, value_enum, default_value_t = AudioFormat::Mp3)]
    pub format: AudioFormat,

    /// Directory for downloaded previews [default: SPOTEX_AUDIO_DIR or ./data]
    #[clap(long)]
    pub audio_dir: Option<PathBuf>,

    /// CSV file to write [default: SPOTEX_EXPORT_FILE or data.csv]
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

impl ExportOptions {
    fn into_request(self) -> cli::ExportRequest {
        let limit = self.limit;
        let label = Label::new(self.label);

        let sources = self
            .genres
            .into_iter()
            .map(|query| PlaylistSource::Search { query, limit })
            .chain(
                self.categories
                    .into_iter()
                    .map(|category_id| PlaylistSource::Category { category_id, limit }),
            )
            .chain(
                self.playlists
                    .into_iter()
                    .map(|playlist_id| PlaylistSource::Playlist {
                        playlist_id,
                        label: label.clone(),
                    }),
            )
            .collect();

        cli::ExportRequest {
            sources,
            download: self.download,
            format: self.format,
            audio_dir: self.audio_dir.unwrap_or_else(config::audio_dir),
            output: self.output.unwrap_or_else(config::export_file),
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CategoriesOptions {
    /// Maximum number of categories to list (1-50)
    #[clap(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=50))]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertOptions {
    /// Directory containing MP3 files
    #[clap(long)]
    from: PathBuf,

    /// Directory the WAV files are written to
    #[clap(long)]
    to: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Export(opt) => cli::export(opt.into_request()).await,
        Command::Categories(opt) => cli::categories(opt.limit).await,
        Command::Convert(opt) => cli::convert(opt.from, opt.to).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
