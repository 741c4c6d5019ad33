use std::path::PathBuf;
use std::process::ExitCode;

use booking::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use booking::error::{AUTH_FALLBACK, MOVIES_FALLBACK, SHOWS_FALLBACK};
use booking::{ApiClient, ApiConfig, ApiError, AuthForm, AuthMode, BookingNotice, Id, Identity, SessionStore};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod flow;
mod render;
mod storage;
mod transport;

use storage::FileStorage;
use transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("not logged in; run `booking-cli login` first")]
    NotLoggedIn,
    #[error("{0}")]
    Invalid(&'static str),
    #[error("{0}")]
    Rejected(String),
    #[error("no seat `{seat}` in show {show}")]
    UnknownSeat { show: String, seat: String },
    #[error("seat `{0}` is already booked")]
    SeatTaken(String),
}

#[derive(Parser, Debug)]
#[command(name = "booking-cli", about = "Movie booking API client")]
struct Cli {
    #[arg(long, env = "BOOKING_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    #[arg(long, env = "BOOKING_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(long, env = "BOOKING_SESSION_FILE", default_value = ".movie-booking-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and store the session.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
    Movies,
    /// List showtimes for a movie.
    Shows { movie_id: Id },
    /// Print the seat map for a showtime.
    Seats { show_id: Id },
    /// Book one seat, by id or by label such as `B4`.
    Book { show_id: Id, seat: String },
}

struct CliContext {
    api: ApiClient<ReqwestTransport>,
    session: SessionStore<FileStorage>,
}

impl CliContext {
    fn identity(&self) -> Result<&Identity, CliError> {
        self.session.current().ok_or(CliError::NotLoggedIn)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ApiConfig::new(&cli.base_url, cli.timeout_secs);
    let transport = ReqwestTransport::new(config.timeout())?;
    tracing::debug!(base_url = config.base_url(), "starting");
    let mut ctx = CliContext {
        api: ApiClient::new(config, transport),
        session: SessionStore::load(FileStorage::new(cli.session_file)),
    };

    match cli.command {
        Command::Login { email, password } => {
            let form = AuthForm { mode: AuthMode::Login, email, password, ..AuthForm::default() };
            authenticate(&mut ctx, &form).await
        }
        Command::Register { name, email, password } => {
            let form = AuthForm { mode: AuthMode::Register, name, email, password, ..AuthForm::default() };
            authenticate(&mut ctx, &form).await
        }
        Command::Logout => {
            ctx.session.clear();
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => {
            println!("{}", render::identity_line(ctx.identity()?));
            Ok(())
        }
        Command::Movies => run_movies(&ctx).await,
        Command::Shows { movie_id } => run_shows(&ctx, &movie_id).await,
        Command::Seats { show_id } => run_seats(&ctx, show_id).await,
        Command::Book { show_id, seat } => run_book(&ctx, show_id, &seat).await,
    }
}

async fn authenticate(ctx: &mut CliContext, form: &AuthForm) -> Result<(), CliError> {
    let submission = form.submission().map_err(CliError::Invalid)?;
    let identity = ctx
        .api
        .authenticate(&submission)
        .await
        .map_err(|e| CliError::Rejected(e.user_message(AUTH_FALLBACK)))?;
    println!("Logged in as {}", render::identity_line(&identity));
    ctx.session.save(identity);
    Ok(())
}

async fn run_movies(ctx: &CliContext) -> Result<(), CliError> {
    let movies = ctx
        .api
        .movies(Some(ctx.identity()?))
        .await
        .map_err(|e| CliError::Rejected(e.user_message(MOVIES_FALLBACK)))?;
    if movies.is_empty() {
        println!("No movies available.");
    }
    for movie in &movies {
        println!("{}", render::movie_line(movie));
    }
    Ok(())
}

async fn run_shows(ctx: &CliContext, movie_id: &Id) -> Result<(), CliError> {
    let shows = ctx
        .api
        .shows(Some(ctx.identity()?), movie_id)
        .await
        .map_err(|e| CliError::Rejected(e.user_message(SHOWS_FALLBACK)))?;
    if shows.is_empty() {
        println!("No showtimes available.");
    }
    for show in &shows {
        println!("{}", render::show_line(show));
    }
    Ok(())
}

async fn run_seats(ctx: &CliContext, show_id: Id) -> Result<(), CliError> {
    let identity = ctx.identity()?;
    let engine = flow::load_seats(&ctx.api, Some(identity), show_id).await?;
    println!("{}", render::seat_map(&engine, Some(&identity.id)));
    let open = render::open_seat_ids(&engine);
    if !open.is_empty() {
        println!("\nOpen seats: {open}");
    }
    Ok(())
}

async fn run_book(ctx: &CliContext, show_id: Id, seat: &str) -> Result<(), CliError> {
    let identity = ctx.identity()?;
    let (engine, receipt) = flow::book_seat(&ctx.api, Some(identity), show_id, seat).await?;
    let notice = engine
        .notice()
        .map_or_else(|| BookingNotice::Success { booking_id: receipt.id.clone() }.message(), BookingNotice::message);
    println!("{notice}");
    println!("{}", render::seat_map(&engine, Some(&identity.id)));
    Ok(())
}
