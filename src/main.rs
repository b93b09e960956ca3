use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spoplcli::{cli, config, error};

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
  author=env!("CARGO_PKG_AUTHORS"),
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

    /// Create a genre playlist from your saved tracks
    Create(CreateOptions),

    /// List the genres found in your saved tracks
    Genres(GenresOptions),

    /// Some helper information about your account and library
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Genre to filter by; omit for the interactive flow
    #[clap(long)]
    pub genre: Option<String>,

    /// Playlist name (defaults to a name derived from the genre)
    #[clap(long)]
    pub name: Option<String>,

    /// Playlist description
    #[clap(long)]
    pub description: Option<String>,

    /// Make the playlist public
    #[clap(long)]
    pub public: bool,

    /// Make the playlist collaborative (forces it private)
    #[clap(long)]
    pub collaborative: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Search for genres
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    #[clap(long)]
    user: bool,
    #[clap(long)]
    library: bool,
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
        Command::Auth => cli::auth().await,

        Command::Create(opt) => {
            cli::create(
                opt.genre,
                opt.name,
                opt.description,
                opt.public,
                opt.collaborative,
            )
            .await
        }

        Command::Genres(opt) => cli::genres(opt.search).await,

        Command::Info(opt) => cli::info(opt.user, opt.library).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
