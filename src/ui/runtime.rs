use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::controller::CatalogController;
use crate::movies::HttpMovieApi;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the terminal UI until the user quits.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let api = HttpMovieApi::new(
        &config.source,
        config.client.timeout(),
        config.client.connect_timeout(),
    )?;
    let source = format!("{} ({})", api.endpoint(), api.style().as_str());
    tracing::info!(
        endpoint = api.endpoint(),
        style = api.style().as_str(),
        retry_interval_ms = config.retry.interval_ms,
        "Starting movie catalog"
    );

    let controller = CatalogController::new(Arc::new(api), config.retry.interval());
    let mut app = App::new(controller);

    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(TICK_RATE);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app, &source))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Tick) => app.on_tick(),
                Some(AppEvent::Resize(_, _)) => {}
                None => break,
            },
            processed = app.controller_mut().process_next() => {
                if processed {
                    app.controller_mut().process_pending();
                    app.on_catalog_changed();
                }
            }
        }
    }

    tracing::info!("Shutting down");
    drop(events);
    drop(guard);
    Ok(())
}
