use std::time::Duration;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_fetch_worker;

pub fn run(config: Config) -> anyhow::Result<()> {
    let client = CatalogClient::new(&config)?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    // The join handle is dropped: an in-flight request has no timeout, so
    // exit must not wait on the worker. The thread dies with the process.
    let (fetch_tx, _worker) = spawn_fetch_worker(client, events.sender())?;

    let mut app = App::new(fetch_tx);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::FetchFinished { seq, outcome }) => app.on_fetch_finished(seq, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
