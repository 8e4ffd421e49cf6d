use moodscope::app::App;
use moodscope::cli::{parse_args, run_cli_command, CliCommand};
use moodscope::config::DashboardConfig;
use moodscope::logging::init_logging;
use moodscope::terminal::{setup_panic_hook, TerminalManager};
use moodscope::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args())?;
    if let Some(result) = run_cli_command(&command) {
        return result.map_err(Into::into);
    }
    let options = match command {
        CliCommand::RunTui(options) => options,
        _ => return Ok(()),
    };

    let config = DashboardConfig::from_env()?.apply_cli(&options)?;

    // The dashboard still works without a log file
    if let Err(err) = init_logging(&config) {
        eprintln!("warning: {}", err.user_message());
    }

    // Load before touching the terminal so data errors print normally
    let mut app = App::new(config)?;
    tracing::info!(
        view = %app.active_view(),
        observations = app.store().observations().len(),
        excluded = app.load_report().excluded_count(),
        warnings = app.warnings().len(),
        "dashboard ready"
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    tracing::info!("dashboard closed");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(app.config().tick_rate_ms);

    loop {
        // Draw only when state changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!(error = %err, "terminal event stream failed");
                        return Err(err.into());
                    }
                    None => return Ok(()),
                }
            }
        }
    }
}
