use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::navigation::Location;
use crate::app::persistence::PreferenceStore;
use crate::app::router::{MockViewLoader, ProfileViewLoader, SectionView};
use crate::app::state::AppState;
use crate::domain::nav::SectionId;
use crate::domain::profile::ProfileData;
use crate::theme::ThemeMode;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn runtime(loader: Arc<dyn ViewLoader>, initial: &str) -> Runtime {
    Runtime {
        loader,
        location: Location::new(initial),
        preferences: PreferenceStore::in_memory(),
    }
}

fn profile_runtime(initial: &str) -> Runtime {
    runtime(
        Arc::new(ProfileViewLoader::new(Arc::new(ProfileData::builtin()))),
        initial,
    )
}

fn press(c: char) -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

/// Feeds `events` with a pause after each one so async results land between
/// keystrokes, then quits.
async fn drive(
    terminal: &mut Terminal<TestBackend>,
    runtime: Runtime,
    events: Vec<Result<Event, std::io::Error>>,
) {
    let (event_tx, event_rx) = mpsc::channel(100);
    let feeder = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        for event in events {
            if event_tx.send(event).await.is_err() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        let _ = event_tx.send(press('q')).await;
    });

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        run_loop_with_events(terminal, AppState::default(), runtime, event_rx),
    )
    .await;
    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("loop did not quit"),
    }
    feeder.await.unwrap();
}

#[tokio::test]
async fn test_load_view_reports_failure() {
    let mut mock = MockViewLoader::new();
    mock.expect_load()
        .with(mockall::predicate::eq(SectionId::Blog))
        .returning(|_| Err(anyhow::anyhow!("disk on fire")));

    let mut runtime = runtime(Arc::new(mock), "");
    let (tx, mut rx) = mpsc::channel(4);
    handle_command(Command::LoadView(SectionId::Blog), &mut runtime, &tx);

    let action = rx.recv().await.unwrap();
    assert_eq!(
        action,
        Action::ViewLoaded(SectionId::Blog, Err("disk on fire".to_string()))
    );
}

#[tokio::test]
async fn test_load_view_success_is_keyed_by_section() {
    let mut mock = MockViewLoader::new();
    mock.expect_load().returning(|_| Ok(SectionView::Resume));

    let mut runtime = runtime(Arc::new(mock), "");
    let (tx, mut rx) = mpsc::channel(4);
    handle_command(Command::LoadView(SectionId::Resume), &mut runtime, &tx);

    match rx.recv().await.unwrap() {
        Action::ViewLoaded(SectionId::Resume, Ok(view)) => {
            assert_eq!(*view, SectionView::Resume);
        }
        other => panic!("Expected Action::ViewLoaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fragment_write_notifies_only_on_change() {
    let mut runtime = profile_runtime("#about");
    let (tx, mut rx) = mpsc::channel(4);

    handle_command(Command::WriteFragment(SectionId::Blog), &mut runtime, &tx);
    assert_eq!(
        rx.recv().await.unwrap(),
        Action::FragmentChanged("#blog".into())
    );
    assert_eq!(
        runtime.preferences.prefs.last_fragment.as_deref(),
        Some("#blog")
    );

    handle_command(Command::WriteFragment(SectionId::Blog), &mut runtime, &tx);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_batch_and_delay() {
    let mut runtime = profile_runtime("");
    let (tx, mut rx) = mpsc::channel(4);

    handle_command(
        Command::Batch(vec![
            Command::PersistTheme(ThemeMode::Light),
            Command::delay(Duration::from_millis(20), Action::ScrollCheck),
        ]),
        &mut runtime,
        &tx,
    );
    assert_eq!(runtime.preferences.prefs.theme, Some(ThemeMode::Light));
    assert!(rx.try_recv().is_err());
    assert_eq!(rx.recv().await.unwrap(), Action::ScrollCheck);
}

#[tokio::test]
async fn test_empty_location_lands_on_about() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    drive(&mut terminal, profile_runtime(""), vec![]).await;
    let content = screen(&terminal);
    assert!(content.contains("ABOUT"));
    assert!(content.contains("#about"));
}

#[tokio::test]
async fn test_deep_link_renders_section() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    drive(&mut terminal, profile_runtime("#blog"), vec![]).await;
    let content = screen(&terminal);
    assert!(content.contains("BLOG"));
    assert!(content.contains("#blog"));
}

#[tokio::test]
async fn test_digit_shortcut_navigates_and_loads() {
    let profile = ProfileData::builtin();
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    drive(&mut terminal, profile_runtime(""), vec![press('3')]).await;
    let content = screen(&terminal);
    assert!(content.contains("PORTFOLIO"));
    assert!(content.contains(&profile.projects[0].title));
}

#[tokio::test]
async fn test_palette_navigation_flow() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let ctrl_k = Ok(Event::Key(KeyEvent::new(
        KeyCode::Char('k'),
        KeyModifiers::CONTROL,
    )));
    let enter = Ok(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    drive(
        &mut terminal,
        profile_runtime(""),
        vec![ctrl_k, press('c'), press('o'), press('n'), enter],
    )
    .await;
    let content = screen(&terminal);
    assert!(content.contains("CONTACT"));
    assert!(!content.contains("COMMAND PALETTE"));
}

#[tokio::test]
async fn test_failed_view_renders_inline_error() {
    let mut mock = MockViewLoader::new();
    mock.expect_load()
        .returning(|_| Err(anyhow::anyhow!("content missing")));

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    drive(&mut terminal, runtime(Arc::new(mock), "#resume"), vec![]).await;
    let content = screen(&terminal);
    assert!(content.contains("Could not load this section"));
    assert!(content.contains("content missing"));
}

#[tokio::test]
async fn test_event_reader_stops_once_the_loop_is_gone() {
    let (event_tx, event_rx) = mpsc::channel(4);
    let reader = tokio::task::spawn_blocking(move || {
        pump_events(&event_tx, |_| Ok(false), || unreachable!("nothing is ready"))
    });
    drop(event_rx);

    tokio::time::timeout(Duration::from_secs(2), reader)
        .await
        .expect("reader kept running after the receiver was dropped")
        .unwrap();
}

#[tokio::test]
async fn test_event_reader_forwards_ready_events() {
    let (event_tx, mut event_rx) = mpsc::channel(4);
    let mut sent = false;
    let reader = tokio::task::spawn_blocking(move || {
        pump_events(
            &event_tx,
            |_| Ok(!std::mem::replace(&mut sent, true)),
            || Ok(Event::FocusGained),
        )
    });

    assert_eq!(event_rx.recv().await.unwrap().unwrap(), Event::FocusGained);
    drop(event_rx);
    tokio::time::timeout(Duration::from_secs(2), reader)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Unwind palette, modal, field and tab focus, then quit
        for _ in 0..4 {
            let _ = event_tx
                .send(Ok(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))))
                .await;
        }
        let _ = event_tx.send(press('q')).await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, AppState::default(), profile_runtime(""), event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            // 'q' would end the run early
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(if c == 'q' { 'Q' } else { c })
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
