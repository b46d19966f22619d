use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::PlayerScreen;
use crate::audio::{AudioPlayer, PlayRequest};
use crate::config;
use crate::picker::{AudioFilter, FilePicker, PickResult, spawn_pick};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    picker: Arc<dyn FilePicker>,
    filter: AudioFilter,
    pick_tx: mpsc::Sender<PickResult>,
}

impl EventLoopState {
    pub fn new(
        picker: Arc<dyn FilePicker>,
        filter: AudioFilter,
        pick_tx: mpsc::Sender<PickResult>,
    ) -> Self {
        Self {
            picker,
            filter,
            pick_tx,
        }
    }
}

/// What a key press asks the loop to do next.
#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Play(PlayRequest),
    Quit,
}

/// Main terminal event loop: applies picker and audio completions, draws,
/// and handles input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    screen: &mut PlayerScreen,
    audio_player: &AudioPlayer,
    pick_rx: &mpsc::Receiver<PickResult>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Some(event) = audio_player.try_event() {
            screen.on_audio_event(event);
        }

        while let Ok(result) = pick_rx.try_recv() {
            if let Some(request) = screen.complete_browse(result) {
                audio_player.play(request);
            }
        }

        terminal.draw(|f| ui::draw(f, screen, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key_event(key, screen, state) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Play(request) => audio_player.play(request),
                    KeyOutcome::Quit => break,
                }
            }
        }
    }

    Ok(())
}

fn handle_key_event(
    key: KeyEvent,
    screen: &mut PlayerScreen,
    state: &mut EventLoopState,
) -> KeyOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    // Any key closes an open notice and does nothing else.
    if screen.notice.is_some() {
        screen.dismiss_notice();
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('b') => {
            if screen.begin_browse() {
                spawn_pick(state.picker.clone(), state.filter.clone(), state.pick_tx.clone());
            }
        }
        KeyCode::Char('l') => {
            screen.like_current();
        }
        KeyCode::Char('j') | KeyCode::Down => screen.next(),
        KeyCode::Char('k') | KeyCode::Up => screen.prev(),
        KeyCode::Enter => {
            if let Some(request) = screen.play_selected_liked() {
                return KeyOutcome::Play(request);
            }
        }
        _ => {}
    }

    KeyOutcome::Continue
}
