//! Weather report TUI
//!
//! Renders readings from a weather data endpoint as a table with three
//! transient states around it: idle prompt, loading spinner, inline error.
//!
//! # Usage
//!
//! ```sh
//! # Against a local backend serving GET /weather
//! cargo run -- --endpoint http://127.0.0.1:5000
//!
//! # Re-fetch automatically every 30 seconds
//! cargo run -- --endpoint http://127.0.0.1:5000 --refresh-interval 30
//! ```

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use weather_report::action::Action;
use weather_report::api;
use weather_report::components::{Component, ReportView, ReportViewProps};
use weather_report::effect::Effect;
use weather_report::events::{self, EventKind};
use weather_report::reducer::reducer;
use weather_report::state::{AppState, LOADING_ANIM_TICK_MS};
use weather_report::store::Store;
use weather_report::tasks::TaskManager;

/// Weather report TUI
#[derive(Parser, Debug)]
#[command(name = "weather-report")]
#[command(about = "Fetches weather readings from an HTTP endpoint and renders them as a table")]
struct Args {
    /// Base URL of the weather data endpoint
    #[arg(long, short, default_value = "http://127.0.0.1:5000")]
    endpoint: String,

    /// Auto-refresh interval in seconds (0 disables auto-refresh)
    #[arg(long, short, default_value = "0")]
    refresh_interval: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Build the HTTP client before entering TUI mode so a bad
    // configuration is reported on a usable terminal.
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: could not build the HTTP client.");
            eprintln!("Details: {e}");
            std::process::exit(1);
        }
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client, &args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    client: reqwest::Client,
    args: &Args,
) -> io::Result<()> {
    let mut store = Store::new(AppState::default(), reducer);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let mut tasks = TaskManager::new(action_tx.clone());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let cancel_token = CancellationToken::new();
    let _poller = events::spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    // Tick timer for the loading animation
    spawn_interval(
        action_tx.clone(),
        Duration::from_millis(LOADING_ANIM_TICK_MS),
        cancel_token.clone(),
        || Action::Tick,
    );

    // Optional auto-refresh timer
    if args.refresh_interval > 0 {
        spawn_interval(
            action_tx.clone(),
            Duration::from_secs(args.refresh_interval),
            cancel_token.clone(),
            || Action::WeatherFetch,
        );
    }

    let mut view = ReportView;
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                let props = ReportViewProps {
                    state: store.state(),
                    is_focused: true,
                };
                view.render(frame, frame.area(), props);
            })?;
            should_render = false;
        }

        tokio::select! {
            Some(event) = event_rx.recv() => {
                if matches!(event, EventKind::Resize(_, _)) {
                    should_render = true;
                }
                let props = ReportViewProps {
                    state: store.state(),
                    is_focused: true,
                };
                for action in view.handle_event(&event, props) {
                    let _ = action_tx.send(action);
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }

                let result = store.dispatch(action);
                if result.changed {
                    should_render = true;
                }
                for effect in result.effects {
                    handle_effect(effect, &mut tasks, &client, &args.endpoint);
                }
            }

            else => break,
        }
    }

    cancel_token.cancel();
    tasks.cancel_all();
    Ok(())
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, tasks: &mut TaskManager, client: &reqwest::Client, endpoint: &str) {
    match effect {
        Effect::FetchWeather => {
            let client = client.clone();
            let endpoint = endpoint.to_string();
            // Re-spawning under the same key aborts a superseded request.
            tasks.spawn("weather", async move {
                match api::fetch_weather(&client, &endpoint).await {
                    Ok(records) => Action::WeatherDidLoad(records),
                    Err(e) => Action::WeatherDidError(e.user_message()),
                }
            });
        }
    }
}

/// Periodic action source, stopped by the cancellation token.
fn spawn_interval(
    action_tx: mpsc::UnboundedSender<Action>,
    period: Duration,
    cancel_token: CancellationToken,
    make_action: impl Fn() -> Action + Send + 'static,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => break,
                _ = ticker.tick() => {
                    if action_tx.send(make_action()).is_err() {
                        break;
                    }
                }
            }
        }
    });
}
