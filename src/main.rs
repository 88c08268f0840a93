use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moviedbcli::{
    cli::{self, Context},
    config::{self, Config},
    types::MovieList,
    warning,
};

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
    /// Fetch a page of popular people
    #[clap(alias = "get-persons")]
    ListPeople(ListPeopleOptions),

    /// Fetch the data of a single person
    #[clap(alias = "get-person")]
    FetchPerson(FetchPersonOptions),

    /// Fetch a page of popular or now playing movies
    #[clap(alias = "get-movies")]
    ListMovies(ListMoviesOptions),

    /// Fetch the data of a single movie
    #[clap(alias = "get-movie")]
    FetchMovie(FetchMovieOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ListPeopleOptions {
    /// The page of data results to fetch
    #[clap(long)]
    pub page: u32,

    /// Fetch the popular persons (currently the only listing)
    #[clap(short, long, required = true)]
    pub popular: bool,

    /// Save the page to the local JSON cache
    #[clap(short, long)]
    pub save: bool,

    /// Read the page from the local JSON cache
    #[clap(short, long)]
    pub local: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct FetchPersonOptions {
    /// The id of the person
    #[clap(short, long)]
    pub id: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct ListMoviesOptions {
    /// The page of movies data results to fetch
    #[clap(long)]
    pub page: u32,

    /// Fetch the popular movies (default)
    #[clap(short, long)]
    pub popular: bool,

    /// Fetch the movies that are playing now
    #[clap(short, long)]
    pub now_playing: bool,

    /// Save the page to the local JSON cache
    #[clap(short, long)]
    pub save: bool,

    /// Read the page from the local JSON cache
    #[clap(short, long)]
    pub local: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct FetchMovieOptions {
    /// The id of the movie
    #[clap(short, long)]
    pub id: u64,

    /// Fetch the reviews of the movie instead of its details
    #[clap(short, long)]
    pub reviews: bool,
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

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let config = Config::from_env();
    if config.api_key.is_none() {
        warning!("No API key configured. Set MOVIEDB_API_KEY to query the API.");
    }
    let ctx = Context::new(&config);

    let result = match cli.command {
        Command::ListPeople(opt) => cli::list_people(&ctx, opt.page, opt.save, opt.local).await,
        Command::FetchPerson(opt) => cli::fetch_person(&ctx, opt.id).await,
        Command::ListMovies(opt) => {
            let kind = MovieList::from_flags(opt.popular, opt.now_playing);
            cli::list_movies(&ctx, kind, opt.page, opt.save, opt.local).await
        }
        Command::FetchMovie(opt) => cli::fetch_movie(&ctx, opt.id, opt.reviews).await,
        Command::Completions(_) => Ok(()),
    };

    // failures were already reported on the spinner
    if result.is_err() {
        std::process::exit(1);
    }
}
