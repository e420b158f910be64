use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use pipedport::{cli, config, pipeline::InputMode, warning};

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
    /// Convert playlists to a Piped Music import document
    Convert(ConvertArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Playlist links; read from --input or stdin when omitted
    pub references: Vec<String>,

    /// File with one reference per line, or pasted Spotify data ("-" for stdin)
    #[clap(long, short)]
    pub input: Option<PathBuf>,

    /// How to interpret the input
    #[clap(long, value_enum, default_value_t = InputMode::Auto)]
    pub mode: InputMode,

    /// Write the document to this file instead of stdout
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Relay template to fetch through; can be repeated, replaces the defaults
    #[clap(long = "relay", num_args = 1)]
    pub relays: Vec<String>,

    /// Pause between two YouTube searches in milliseconds
    #[clap(long)]
    pub search_delay_ms: Option<u64>,

    /// Hide the search progress bar
    #[clap(long)]
    pub no_progress: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => {
            let options = cli::ConvertOptions {
                references: args.references,
                input: args.input,
                mode: args.mode,
                output: args.output,
                relays: args.relays,
                search_delay_ms: args.search_delay_ms,
                no_progress: args.no_progress,
            };
            cli::convert(config::Settings::from_env(), options).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
