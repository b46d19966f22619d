use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::PlayerScreen;
use crate::audio::AudioPlayer;
use crate::logging;
use crate::picker::{AudioFilter, DialogPicker, FilePicker, PickResult};

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();

    match logging::init(&settings.logging) {
        Ok(Some(path)) => tracing::info!(log = %path.display(), "encore starting"),
        Ok(None) => {}
        Err(e) => eprintln!("encore: logging disabled: {e}"),
    }
    if let Some(msg) = settings_warning {
        tracing::warn!("{msg}");
    }

    let start_dir = env::args_os().nth(1).map(PathBuf::from);
    let filter = AudioFilter::from_settings(&settings.picker, start_dir);
    let picker: Arc<dyn FilePicker> = Arc::new(DialogPicker::new(settings.picker.title.clone()));

    let audio_player = AudioPlayer::new(settings.audio.clone())?;
    let mut screen = PlayerScreen::new(audio_player.request_seq());
    screen.set_info_handle(audio_player.info_handle());
    screen.set_enforce_permission(settings.permissions.enforce);

    startup::request_permission(&mut screen, &settings.permissions);

    let (pick_tx, pick_rx) = mpsc::channel::<PickResult>();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(picker, filter, pick_tx);
        event_loop::run(
            &mut terminal,
            &settings,
            &mut screen,
            &audio_player,
            &pick_rx,
            &mut state,
        )
    })();

    // Teardown releases the handle even when the loop failed.
    screen.teardown();
    audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        tracing::error!(error = %e, "event loop failed");
    }
    run_result
}
