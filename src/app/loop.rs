use crate::app::{
    action::Action, command::Command, input::map_event_to_action, navigation::Location,
    persistence::PreferenceStore, reducer, router::ViewLoader, state::AppState, ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

const TICK_RATE: Duration = Duration::from_millis(250);
const EVENT_POLL: Duration = Duration::from_millis(100);

/// Everything the loop owns besides the state: the content loader, the
/// location fragment and the preference file.
pub struct Runtime {
    pub loader: Arc<dyn ViewLoader>,
    pub location: Location,
    pub preferences: PreferenceStore,
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    runtime: Runtime,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || pump_events(&event_tx, event::poll, event::read));

    run_loop_with_events(terminal, app_state, runtime, event_rx).await
}

/// Forwards terminal events until the receiver goes away or reading fails.
/// Polling with a timeout keeps the reader from parking forever in `read`
/// once the loop has quit.
fn pump_events(
    event_tx: &mpsc::Sender<Result<Event, std::io::Error>>,
    mut poll: impl FnMut(Duration) -> std::io::Result<bool>,
    mut read: impl FnMut() -> std::io::Result<Event>,
) {
    while !event_tx.is_closed() {
        let ready = match poll(EVENT_POLL) {
            Ok(ready) => ready,
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        };
        if !ready {
            continue;
        }
        match read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    }
    debug!("event reader stopped");
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut runtime: Runtime,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Initial fragment, as if the location had just changed
    info!(fragment = runtime.location.fragment(), "starting");
    action_tx
        .send(Action::FragmentChanged(runtime.location.fragment().to_string()))
        .await?;

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if action != Action::Tick {
                debug!(?action, "dispatch");
            }
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &mut runtime, &action_tx);
            }
        }
    }

    Ok(())
}

/// Carries out a reducer command. Anything asynchronous runs on its own task
/// and reports back through `tx`.
pub(crate) fn handle_command(command: Command, runtime: &mut Runtime, tx: &mpsc::Sender<Action>) {
    match command {
        Command::WriteFragment(section) => {
            if runtime.location.write(section) {
                let fragment = runtime.location.fragment().to_string();
                runtime.preferences.set_fragment(&fragment);
                notify(tx, Action::FragmentChanged(fragment));
            }
        }
        Command::LoadView(section) => {
            let loader = runtime.loader.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = loader
                    .load(section)
                    .await
                    .map(Arc::new)
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::ViewLoaded(section, result)).await;
            });
        }
        Command::PersistTheme(mode) => runtime.preferences.set_theme(mode),
        Command::Delay(after, action) => {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(after).await;
                let _ = tx.send(*action).await;
            });
        }
        Command::Batch(commands) => {
            for cmd in commands {
                handle_command(cmd, runtime, tx);
            }
        }
    }
}

/// Queues a notification without blocking the loop. When the queue is full
/// it is delivered from a task instead.
fn notify(tx: &mpsc::Sender<Action>, action: Action) {
    if let Err(mpsc::error::TrySendError::Full(action)) = tx.try_send(action) {
        let tx = tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(action).await;
        });
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
