use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::Duration;

use crate::config::UiConfig;
use crate::dashboard::{AppState, Dashboard};
use crate::error::DashboardError;
use crate::shutdown::ShutdownHandle;
use crate::ui::input::{dispatch, translate_key, translate_paste, UiEvent};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view::project;

/// Terminal front-end loop. Returns when the user quits, shutdown is
/// signalled, or the store goes away.
pub async fn run(
    config: &UiConfig,
    dashboard: &Dashboard,
    shutdown: &ShutdownHandle,
) -> Result<(), DashboardError> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut observer = dashboard.subscribe();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.tick_rate_ms));
    let mut tree = project(&AppState::initial());
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| draw(frame, &tree))?;
            dirty = false;
        }

        tokio::select! {
            _ = shutdown.wait() => break,
            state = observer.next() => match state {
                Some(state) => {
                    // Coalesce bursts; only the newest state is drawn.
                    let state = observer.latest().unwrap_or(state);
                    tree = project(&state);
                    dirty = true;
                }
                None => break,
            },
            event = events.next() => {
                let ui_event = match event {
                    Some(Ok(Event::Key(key))) => translate_key(key),
                    Some(Ok(Event::Paste(text))) => translate_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => {
                        dirty = true;
                        None
                    }
                    Some(Ok(_)) => None,
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                };
                match ui_event {
                    Some(UiEvent::Quit) => {
                        shutdown.signal();
                        break;
                    }
                    Some(event) => dispatch(dashboard, event),
                    None => {}
                }
            }
            _ = ticker.tick() => dirty = true,
        }
    }

    drop(guard);
    Ok(())
}
