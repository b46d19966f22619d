//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the player screen using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{PlaybackState, PlayerScreen};
use crate::config::UiSettings;
use crate::permission::PermissionStatus;

const CONTROLS: [(&str, &str); 5] = [
    ("b", "browse"),
    ("l", "like"),
    ("j/k", "up/down"),
    ("enter", "play liked"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Describe what the audio side is doing right now.
fn playback_text(screen: &PlayerScreen, ui: &UiSettings) -> String {
    match &screen.playback {
        PlaybackState::Idle => "Idle".to_string(),
        PlaybackState::Loading { track, .. } => format!("Loading: {}", track.name),
        PlaybackState::Playing { track, total, .. } => {
            let elapsed = screen.elapsed().filter(|_| ui.show_elapsed);
            match (elapsed, total) {
                (Some(e), Some(t)) => format!(
                    "Now Playing: {} [{}{}{}]",
                    track.name,
                    format_mmss(e),
                    ui.time_separator,
                    format_mmss(*t)
                ),
                (Some(e), None) => format!("Now Playing: {} [{}]", track.name, format_mmss(e)),
                (None, _) => format!("Now Playing: {}", track.name),
            }
        }
    }
}

fn status_text(screen: &PlayerScreen, ui: &UiSettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    match &screen.current_track {
        Some(track) => parts.push(format!("Selected: {}", track.name)),
        None => parts.push("Selected: -".to_string()),
    }
    parts.push(playback_text(screen, ui));
    parts.push(format!("Liked: {}", screen.liked.len()));

    if screen.pending_picks > 0 {
        parts.push("Browsing…".to_string());
    }
    if screen.permission() == Some(PermissionStatus::Denied) {
        parts.push("Library: no access".to_string());
    }

    parts.join(" • ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the whole screen into `frame`.
pub fn draw(frame: &mut Frame, screen: &PlayerScreen, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" encore ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(screen, ui_settings))
        .block(left_padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Liked list
    {
        let playing_uri = screen.playback.track().map(|t| t.uri.as_str());
        let items: Vec<ListItem> = screen
            .liked
            .iter()
            .map(|track| {
                if Some(track.uri.as_str()) == playing_uri {
                    ListItem::new(format!("♪ {}", track.name))
                } else {
                    ListItem::new(track.name.as_str())
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" liked music "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if !screen.liked.is_empty() {
            state.select(Some(screen.selected));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    if let Some(notice) = screen.notice {
        let popup_area = centered_rect_sized(60, 5, chunks[2]);
        frame.render_widget(Clear, popup_area);
        let popup = Paragraph::new(notice.text())
            .block(left_padded(" notice (any key closes) "))
            .wrap(Wrap { trim: true });
        frame.render_widget(popup, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(left_padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioEvent, RequestSeq};
    use crate::library::TrackRef;

    #[test]
    fn format_mmss_pads_minutes_and_seconds() {
        assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(125)), "02:05");
    }

    #[test]
    fn status_shows_selected_and_playing_separately() {
        let ui = UiSettings::default();
        let mut screen = PlayerScreen::new(RequestSeq::default());
        assert!(status_text(&screen, &ui).starts_with("Selected: - • Idle"));

        screen.current_track = Some(TrackRef::new("a.mp3", "Song A"));
        let request = screen.play(TrackRef::new("b.mp3", "Song B"));
        assert!(status_text(&screen, &ui).contains("Loading: Song B"));

        screen.on_audio_event(AudioEvent::Started {
            token: request.token,
            total: Some(Duration::from_secs(200)),
        });
        let text = status_text(&screen, &ui);
        assert!(text.contains("Selected: Song A"));
        assert!(text.contains("Now Playing: Song B"));
    }

    #[test]
    fn controls_list_every_key() {
        let text = controls_text();
        for (k, _) in CONTROLS {
            assert!(text.contains(&format!("[{k}]")));
        }
    }
}
