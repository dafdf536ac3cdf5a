use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use cocktailcli::{cli, config, utils, warning};

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
    /// List cocktails starting with the default letter
    List,

    /// Search cocktails by name
    Search(SearchOptions),

    /// List cocktails starting with a letter
    Letter(LetterOptions),

    /// Show ingredients and instructions for a cocktail
    Show(ShowOptions),

    /// Search the web for a query in the default browser
    Google(SearchOptions),

    /// Show the current time, updated every second
    Clock,

    /// Start the local web front end
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    #[clap(num_args = 0.., trailing_var_arg = true)]
    pub query: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LetterOptions {
    /// Single letter a-z
    #[clap(value_parser = utils::parse_letter)]
    pub letter: char,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowOptions {
    /// Cocktail identifier as shown by `list`
    pub id: String,
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
        Command::List => cli::list().await,
        Command::Search(opt) => cli::search(opt.query.join(" ")).await,
        Command::Letter(opt) => cli::letter(opt.letter).await,
        Command::Show(opt) => cli::show(opt.id).await,
        Command::Google(opt) => cli::google(opt.query.join(" ")).await,
        Command::Clock => cli::clock().await,
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
