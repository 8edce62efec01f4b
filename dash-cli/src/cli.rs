use std::{future::Future, time::Duration};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use tokio::time::{Interval, MissedTickBehavior};
use weather_dash_core::{
    DashboardConfig, HistoryTracker, OpenWeatherProvider, RefreshReport, WeatherProvider,
    catalog::{self, ALL_CITIES_LABEL, REFRESH_OPTIONS, REGION_GROUPS},
    config::API_KEY_ENV,
    provider::MIN_API_KEY_LEN,
    refresh, validate_api_key,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Realtime weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and refresh interval.
    Configure,

    /// List regions and their cities.
    Regions,

    /// Fetch the selected cities once and print their cards.
    Show(SelectionArgs),

    /// Keep the dashboard on screen, refreshing on a timer.
    Watch {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Refresh interval in seconds; defaults to the configured one.
        #[arg(long)]
        interval: Option<u64>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
    /// Cities to monitor. When empty, defaults for the region are used.
    pub cities: Vec<String>,

    /// Region to pick defaults from, e.g. "Japan" or "All Cities".
    #[arg(long)]
    pub region: Option<String>,

    /// Extra free-form city to add to the selection.
    #[arg(long)]
    pub city: Option<String>,

    /// Only show temperature and conditions on each card.
    #[arg(long)]
    pub compact: bool,

    /// Also print a comparison table when more than one city has data.
    #[arg(long)]
    pub compare: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = DashboardConfig::load()?.apply_env();

        match self.command {
            Command::Configure => configure(config),
            Command::Regions => {
                print_regions();
                Ok(())
            }
            Command::Show(selection) => {
                let provider = checked_provider(&config)?;
                let cities = resolve_selection(&selection, &config)?;
                let mut history = HistoryTracker::new();
                let report = refresh(&provider, &cities, &mut history).await;
                print_report(&report, &history, &selection);
                if report.is_empty() {
                    bail!("No data available. Please check your API key or city selection.");
                }
                Ok(())
            }
            Command::Watch {
                selection,
                interval,
            } => {
                let provider = checked_provider(&config)?;
                let cities = resolve_selection(&selection, &config)?;
                let every = interval
                    .map(|s| Duration::from_secs(s.max(1)))
                    .unwrap_or_else(|| config.refresh_interval());
                watch(&provider, &cities, &selection, every).await
            }
        }
    }
}

fn configure(mut config: DashboardConfig) -> anyhow::Result<()> {
    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim().to_string();
    if !validate_api_key(Some(&key)) {
        bail!("API key must be at least {MIN_API_KEY_LEN} characters.");
    }

    let labels: Vec<&str> = REFRESH_OPTIONS.iter().map(|(label, _)| *label).collect();
    let current = catalog::refresh_label(config.refresh_interval_secs)
        .and_then(|l| labels.iter().position(|x| *x == l))
        .unwrap_or(1);
    let chosen = Select::new("Auto-refresh interval:", labels)
        .with_starting_cursor(current)
        .prompt()
        .context("Failed to read refresh interval")?;

    if let Some((_, secs)) = REFRESH_OPTIONS.iter().find(|(label, _)| *label == chosen) {
        config.refresh_interval_secs = *secs;
    }
    config.api_key = Some(key);
    config.save()?;

    println!(
        "Saved configuration to {}",
        DashboardConfig::config_file_path()?.display()
    );
    Ok(())
}

fn print_regions() {
    for (group, _) in REGION_GROUPS {
        println!("{group}");
        for region in catalog::regions_in_group(group) {
            let cities = catalog::cities_in(region).unwrap_or_default();
            println!("  {region}: {}", cities.join(", "));
        }
    }
}

fn checked_provider(config: &DashboardConfig) -> anyhow::Result<OpenWeatherProvider> {
    if !config.has_valid_api_key() {
        bail!(
            "Missing or invalid API key!\n\
             Hint: run `weather-dash configure`, or put {API_KEY_ENV}=your_api_key_here in a .env file."
        );
    }
    Ok(config.provider())
}

/// Positional cities win; otherwise the saved selection, otherwise region defaults.
fn resolve_selection(
    args: &SelectionArgs,
    config: &DashboardConfig,
) -> anyhow::Result<Vec<String>> {
    let candidates: Vec<String> = if !args.cities.is_empty() {
        args.cities.clone()
    } else if args.region.is_none() && !config.cities.is_empty() {
        config.cities.clone()
    } else {
        let query = args.region.as_deref().unwrap_or(ALL_CITIES_LABEL);
        let region = catalog::find_region(query).with_context(|| {
            format!("Unknown region '{query}'. Run `weather-dash regions` to list them.")
        })?;
        let available = catalog::available_cities(region).unwrap_or_default();
        catalog::default_selection(&available)
    };

    // Trimmed, blank-free, first occurrence wins.
    let mut selection = Vec::with_capacity(candidates.len() + 1);
    for city in candidates.iter().chain(&args.city) {
        catalog::add_custom_city(&mut selection, city);
    }

    if selection.is_empty() {
        bail!("Please select at least one city to monitor.");
    }
    Ok(selection)
}

fn print_report(report: &RefreshReport, history: &HistoryTracker, args: &SelectionArgs) {
    for err in &report.failures {
        eprintln!("{}", render::failure(err));
    }
    if report.is_empty() {
        return;
    }

    println!("📍 Current Weather\n");
    for record in &report.records {
        println!(
            "{}",
            render::card(record, history.delta(&record.city), !args.compact)
        );
    }

    if args.compare && report.records.len() > 1 {
        println!("{}", render::comparison(&report.records));
    }
}

async fn watch<P: WeatherProvider>(
    provider: &P,
    cities: &[String],
    args: &SelectionArgs,
    every: Duration,
) -> anyhow::Result<()> {
    watch_until(provider, cities, args, every, tokio::signal::ctrl_c()).await;
    Ok(())
}

/// Interval that waits a full period after a late tick instead of bursting.
fn refresh_ticker(every: Duration) -> Interval {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Runs refresh cycles until `shutdown` resolves, including mid-cycle.
async fn watch_until<P, F>(
    provider: &P,
    cities: &[String],
    args: &SelectionArgs,
    every: Duration,
    shutdown: F,
) where
    P: WeatherProvider,
    F: Future,
{
    let mut history = HistoryTracker::new();
    let mut ticker = refresh_ticker(every);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => break,
        }

        let report = tokio::select! {
            report = refresh(provider, cities, &mut history) => report,
            _ = &mut shutdown => break,
        };

        // Clear screen and move the cursor home.
        print!("\x1b[2J\x1b[H");
        println!(
            "🌤️  Weather Dashboard · updated {} · every {}s (Ctrl-C to quit)\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            every.as_secs()
        );
        print_report(&report, &history, args);
        if report.is_empty() {
            println!("No data available. Please check your API key or city selection.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;
    use weather_dash_core::{ErrorKind, FetchError, WeatherRecord};

    fn args(cities: &[&str], region: Option<&str>, city: Option<&str>) -> SelectionArgs {
        SelectionArgs {
            cities: cities.iter().map(|c| c.to_string()).collect(),
            region: region.map(str::to_string),
            city: city.map(str::to_string),
            compact: false,
            compare: false,
        }
    }

    #[test]
    fn explicit_cities_win() {
        let cfg = DashboardConfig {
            cities: vec!["Lima".into()],
            ..Default::default()
        };
        let sel = resolve_selection(&args(&[" Kyoto ", "Osaka"], None, None), &cfg).unwrap();
        assert_eq!(sel, vec!["Kyoto", "Osaka"]);
    }

    #[test]
    fn duplicate_cities_are_fetched_once() {
        let cfg = DashboardConfig::default();
        let picked = args(&["Tokyo", " Tokyo", "", "Osaka"], None, Some("Tokyo "));
        let sel = resolve_selection(&picked, &cfg).unwrap();
        assert_eq!(sel, vec!["Tokyo", "Osaka"]);

        let cfg = DashboardConfig {
            cities: vec!["Lima".into(), "Lima".into(), " Cusco".into()],
            ..Default::default()
        };
        let sel = resolve_selection(&args(&[], None, None), &cfg).unwrap();
        assert_eq!(sel, vec!["Lima", "Cusco"]);
    }

    #[test]
    fn saved_cities_used_without_region() {
        let cfg = DashboardConfig {
            cities: vec!["Lima".into()],
            ..Default::default()
        };
        let sel = resolve_selection(&args(&[], None, Some("Cusco")), &cfg).unwrap();
        assert_eq!(sel, vec!["Lima", "Cusco"]);
    }

    #[test]
    fn region_defaults() {
        let cfg = DashboardConfig::default();
        let sel = resolve_selection(&args(&[], None, None), &cfg).unwrap();
        assert_eq!(sel, vec!["Sydney", "Tokyo", "Ho Chi Minh"]);

        let sel = resolve_selection(&args(&[], Some("united kingdom"), None), &cfg).unwrap();
        assert_eq!(sel, vec!["London"]);
    }

    #[test]
    fn empty_selection_is_an_error() {
        let cfg = DashboardConfig::default();
        let err = resolve_selection(&args(&[], Some("Peru"), Some("  ")), &cfg).unwrap_err();
        assert!(err.to_string().contains("at least one city"));

        let err = resolve_selection(&args(&[], Some("Narnia"), None), &cfg).unwrap_err();
        assert!(err.to_string().contains("Unknown region"));
    }

    #[test]
    fn provider_requires_valid_key() {
        let cfg = DashboardConfig::default();
        let err = checked_provider(&cfg).err().unwrap();
        assert!(err.to_string().contains("Missing or invalid API key"));

        let cfg = DashboardConfig {
            api_key: Some("0123456789".into()),
            ..Default::default()
        };
        assert!(checked_provider(&cfg).is_ok());
    }

    #[derive(Debug, Default)]
    struct StalledProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeatherProvider for StalledProvider {
        async fn fetch(&self, city: &str) -> Result<WeatherRecord, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(FetchError::new(ErrorKind::Timeout, city, "stalled"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn late_tick_waits_a_full_period() {
        let mut ticker = refresh_ticker(Duration::from_secs(30));
        ticker.tick().await;

        // A cycle that overran two periods.
        tokio::time::advance(Duration::from_secs(70)).await;
        ticker.tick().await;

        let after_late_tick = Instant::now();
        ticker.tick().await;
        assert!(after_late_tick.elapsed() >= Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_interrupts_a_running_cycle() {
        let provider = StalledProvider::default();
        let cities = vec!["Reykjavik".to_string()];
        let started = Instant::now();

        watch_until(
            &provider,
            &cities,
            &args(&[], None, None),
            Duration::from_secs(60),
            tokio::time::sleep(Duration::from_secs(5)),
        )
        .await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert!(started.elapsed() < Duration::from_secs(60));
    }
}
