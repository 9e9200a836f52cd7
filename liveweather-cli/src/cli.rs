use std::{io::Write, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{Confirm, CustomType, InquireError, Select, Text};
use liveweather_core::{
    Config, DesktopNotifier, FetchError, LocationCatalog, NoopNotifier, Notification, Notifier,
    WeatherProvider, WeatherRequest, fetch_weather, notify::send_best_effort,
    provider::provider_from_config,
};

use crate::{render, session::Session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "liveweather", version, about = "Live weather lookup")]
pub struct Cli {
    /// Country → cities JSON file (overrides config).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides config).
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Don't send desktop notifications.
    #[arg(long, global = true)]
    pub no_notify: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick a country and city and fetch weather interactively (default).
    Interactive,

    /// Show current weather for one city.
    Show {
        #[arg(long)]
        country: String,

        #[arg(long)]
        city: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List countries in the location catalog.
    Countries,

    /// List cities for a country in the location catalog.
    Cities { country: String },

    /// Edit settings interactively and save them.
    Configure,
}

/// What the commands share: effective config, provider and notifier.
struct App {
    config: Config,
    provider: Box<dyn WeatherProvider>,
    notifier: Box<dyn Notifier>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        self.apply_overrides(&mut config);
        tracing::debug!(?config, "Effective configuration");

        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(config),
            Command::Countries => {
                let catalog = load_catalog(&config)?;
                for country in catalog.countries() {
                    println!("{country}");
                }
                Ok(())
            }
            Command::Cities { country } => {
                let catalog = load_catalog(&config)?;
                let cities = catalog.cities(&country);
                if cities.is_empty() {
                    eprintln!("No cities listed for '{country}'.");
                }
                for city in cities {
                    println!("{city}");
                }
                Ok(())
            }
            Command::Show { country, city, json } => {
                if let Some(notice) = uncatalogued_notice(&config, &country, &city) {
                    eprintln!("{notice}");
                }
                let app = build_app(config)?;
                show(&app, &WeatherRequest::new(city, country), json).await
            }
            Command::Interactive => {
                let catalog = load_catalog(&config)?;
                let app = build_app(config)?;
                interactive(&app, &catalog, &mut InquirePrompter).await
            }
        }
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.catalog {
            config.catalog_path = Some(path.clone());
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        if self.no_notify {
            config.notifications = false;
        }
    }
}

fn build_app(config: Config) -> Result<App> {
    let provider = provider_from_config(&config)?;
    let notifier: Box<dyn Notifier> = if config.notifications {
        Box::new(DesktopNotifier)
    } else {
        Box::new(NoopNotifier)
    };

    Ok(App { config, provider, notifier })
}

/// Catalog problems are fatal: the interactive shell has nothing to offer without it.
fn load_catalog(config: &Config) -> Result<LocationCatalog> {
    let path = config.resolve_catalog_path();
    LocationCatalog::load(&path)
        .context("Hint: pass --catalog <file> or set `catalog_path` with `liveweather configure`.")
}

/// `show` takes any pair, so a catalog miss is only a notice. An unreadable
/// catalog is ignored here.
fn uncatalogued_notice(config: &Config, country: &str, city: &str) -> Option<String> {
    let catalog = match LocationCatalog::load(&config.resolve_catalog_path()) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::debug!("Skipping catalog check: {err:#}");
            return None;
        }
    };

    if catalog.contains(country, city) {
        return None;
    }
    tracing::warn!(%country, %city, "Location is not in the catalog");
    Some(format!("Note: {city}, {country} is not in the location catalog."))
}

fn report_error(err: &FetchError) {
    eprintln!("{}", err.user_message());
}

/// One fetch: loading line, request, then the result panel or the not-found notice.
async fn fetch_and_render(app: &App, request: &WeatherRequest) {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "{}", render::LOADING);
    let _ = stderr.flush();

    tracing::debug!(city = %request.city, country = %request.country, "Fetch triggered");
    let weather =
        fetch_weather(app.provider.as_ref(), request, report_error_after_loading).await;

    clear_loading();

    match &weather {
        Some(w) => {
            send_best_effort(app.notifier.as_ref(), &Notification::for_result(w));
            println!("{}", render::panel(w));
        }
        None => eprintln!("{}", FetchError::NotFound.user_message()),
    }
}

fn clear_loading() {
    let _ = write!(std::io::stderr(), "\r\x1b[2K");
}

fn report_error_after_loading(err: &FetchError) {
    clear_loading();
    report_error(err);
}

async fn show(app: &App, request: &WeatherRequest, json: bool) -> Result<()> {
    if !json {
        fetch_and_render(app, request).await;
        return Ok(());
    }

    match fetch_weather(app.provider.as_ref(), request, report_error).await {
        Some(w) => {
            send_best_effort(app.notifier.as_ref(), &Notification::for_result(&w));
            let out = serde_json::to_string_pretty(&w).context("Failed to serialize result")?;
            println!("{out}");
        }
        None => eprintln!("{}", FetchError::NotFound.user_message()),
    }
    Ok(())
}

const GET_WEATHER: &str = "Get weather";
const CHANGE_SELECTION: &str = "Change country/city";
const QUIT: &str = "Quit";

/// A single-choice prompt. `None` means the user backed out.
trait Prompter {
    fn select(
        &mut self,
        message: &str,
        options: Vec<String>,
        start: usize,
    ) -> Result<Option<String>>;
}

struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn select(
        &mut self,
        message: &str,
        options: Vec<String>,
        start: usize,
    ) -> Result<Option<String>> {
        let answer = Select::new(message, options)
            .with_starting_cursor(start)
            .prompt();

        match answer {
            Ok(choice) => Ok(Some(choice)),
            Err(e) if is_cancel(&e) => Ok(None),
            Err(e) => Err(e).context("Prompt failed"),
        }
    }
}

/// Outcome of one country/city round.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Picked { country: String, city: String },
    NoCities(String),
    Cancelled,
}

async fn interactive(
    app: &App,
    catalog: &LocationCatalog,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let mut session = Session::new();

    if app.config.splash && session.take_splash() {
        println!("{}", render::SPLASH);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    if catalog.is_empty() {
        anyhow::bail!("Location catalog is empty");
    }

    loop {
        let (country, city) = match select_location(prompter, &session, catalog)? {
            Selection::Picked { country, city } => (country, city),
            Selection::NoCities(country) => {
                tracing::warn!(%country, "Country has no cities");
                eprintln!("No cities listed for '{country}'. Choose another country.");
                continue;
            }
            Selection::Cancelled => return Ok(()),
        };

        tracing::info!(%country, %city, "Location selected");
        for _ in 0..session.record_selection(&country, &city) {
            println!("{}", render::SELECTED_BADGE);
            tokio::time::sleep(Duration::from_millis(600)).await;
        }

        let request = WeatherRequest::new(city, country);
        loop {
            let actions = [GET_WEATHER, CHANGE_SELECTION, QUIT].map(String::from).to_vec();
            let Some(action) = prompter.select("What next?", actions, 0)? else {
                return Ok(());
            };

            match action.as_str() {
                GET_WEATHER => fetch_and_render(app, &request).await,
                CHANGE_SELECTION => break,
                _ => return Ok(()),
            }
        }
    }
}

/// Prompt for country, then for one of its cities.
fn select_location(
    prompter: &mut dyn Prompter,
    session: &Session,
    catalog: &LocationCatalog,
) -> Result<Selection> {
    let countries: Vec<String> = catalog.countries().map(str::to_string).collect();
    let prev = session.previous();
    let start = prev
        .and_then(|(c, _)| countries.iter().position(|x| x == c))
        .unwrap_or(0);

    let Some(country) = prompter.select("Select Country", countries, start)? else {
        return Ok(Selection::Cancelled);
    };

    let cities = catalog.cities(&country).to_vec();
    if cities.is_empty() {
        return Ok(Selection::NoCities(country));
    }

    let start = prev
        .filter(|(c, _)| *c == country)
        .and_then(|(_, city)| cities.iter().position(|x| x == city))
        .unwrap_or(0);

    Ok(match prompter.select("Select City", cities, start)? {
        Some(city) => Selection::Picked { country, city },
        None => Selection::Cancelled,
    })
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

fn configure(mut config: Config) -> Result<()> {
    let path = Config::config_file_path()?;
    println!("Editing {}", path.display());

    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    config.notifications = Confirm::new("Send desktop notifications?")
        .with_default(config.notifications)
        .prompt()?;

    config.splash = Confirm::new("Show welcome splash?")
        .with_default(config.splash)
        .prompt()?;

    let current = config
        .catalog_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let catalog = Text::new("Location catalog path (empty for default):")
        .with_initial_value(&current)
        .prompt()?;
    let catalog = catalog.trim();
    config.catalog_path = if catalog.is_empty() {
        None
    } else {
        Some(PathBuf::from(catalog))
    };

    config.save()?;
    tracing::info!("Saved configuration to {}", path.display());
    println!("Saved.");
    Ok(())
}
