use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlist::{cli, config, error, types::MixMode, types::PkceToken};
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

    /// Show a playlist's tracks ordered by popularity
    Rank(RankOptions),

    /// Merge two or more playlists into a new private playlist
    Mix(MixOptions),

    /// Add recently added tracks from the configured sources to the genre playlists
    Update(UpdateOptions),

    /// Reorder one of your playlists by popularity
    Sort(SortOptions),

    /// Keep only the most popular tracks of one of your playlists
    Top(TopOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RankOptions {
    /// Playlist URL or id
    playlist: String,

    /// Number of tracks to show, or 'all'
    #[clap(long, default_value = "all")]
    count: String,
}

#[derive(Parser, Debug, Clone)]
pub struct MixOptions {
    /// Playlist URLs or ids, at least two
    #[clap(required = true, num_args = 2..)]
    playlists: Vec<String>,

    /// How tracks of the playlists are combined
    #[clap(long, value_enum, default_value_t = MixMode::Sequential)]
    mode: MixMode,

    /// Name of the new playlist
    #[clap(long)]
    name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct UpdateOptions {
    /// Tracks added within this many days count as new
    #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,

    /// Source list to use instead of <data dir>/playlists.txt
    #[clap(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct SortOptions {
    /// Playlist URL or id
    playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// Playlist URL or id
    playlist: String,

    /// Number of tracks to keep
    #[clap(long)]
    count: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Rank(opt) => cli::rank(opt.playlist, opt.count).await,
        Command::Mix(opt) => cli::mix(opt.playlists, opt.mode, opt.name).await,
        Command::Update(opt) => cli::update(opt.days, opt.config).await,
        Command::Sort(opt) => cli::sort(opt.playlist).await,
        Command::Top(opt) => cli::top(opt.playlist, opt.count).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
