use super::*;
use crate::audio::testing::{FakeBackend, Live};
use crate::audio::{AudioEvent, Engine, InfoHandle, PlayRequest, PlaybackInfo, RequestSeq};
use crate::library::TrackRef;
use crate::permission::PermissionStatus;
use crate::picker::{PickError, PickOutcome};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A screen wired to an engine the way the runtime wires them, minus threads.
struct Harness {
    screen: PlayerScreen,
    engine: Engine<FakeBackend>,
    live: Live,
}

impl Harness {
    fn new() -> Self {
        let seq = RequestSeq::default();
        let backend = FakeBackend::default();
        let live = backend.live.clone();
        let info: InfoHandle = Arc::new(Mutex::new(PlaybackInfo::default()));
        let engine = Engine::new(backend, seq.clone(), info.clone(), 4);
        let mut screen = PlayerScreen::new(seq);
        screen.set_info_handle(info);
        Self {
            screen,
            engine,
            live,
        }
    }

    fn run(&mut self, request: Option<PlayRequest>) {
        if let Some(request) = request {
            let event = self.engine.play(request);
            self.screen.on_audio_event(event);
        }
    }

    fn select(&mut self, track: TrackRef) {
        assert!(self.screen.begin_browse());
        let request = self.screen.complete_browse(Ok(PickOutcome::Picked(track)));
        self.run(request);
    }

    fn live(&self) -> Vec<String> {
        self.live.borrow().clone()
    }
}

fn t(uri: &str, name: &str) -> TrackRef {
    TrackRef::new(uri, name)
}

fn liked_uris(screen: &PlayerScreen) -> Vec<&str> {
    screen.liked.iter().map(|t| t.uri.as_str()).collect()
}

#[test]
fn selecting_a_file_sets_current_track_and_plays_it() {
    let mut h = Harness::new();
    h.select(t("a.mp3", "Song A"));

    assert_eq!(h.screen.current_track, Some(t("a.mp3", "Song A")));
    assert_eq!(h.live(), vec!["a.mp3"]);
    assert!(matches!(
        &h.screen.playback,
        PlaybackState::Playing { track, total: Some(_), .. } if track.uri == "a.mp3"
    ));
    assert_eq!(h.screen.pending_picks, 0);
}

#[test]
fn cancelled_or_failed_selection_changes_nothing() {
    let mut h = Harness::new();
    h.select(t("a.mp3", "Song A"));
    let before = h.screen.playback.clone();

    assert!(h.screen.begin_browse());
    assert!(h.screen.complete_browse(Ok(PickOutcome::Cancelled)).is_none());
    assert!(h.screen.begin_browse());
    let failed = h
        .screen
        .complete_browse(Err(PickError::NotAFile("/nowhere.mp3".into())));
    assert!(failed.is_none());

    assert_eq!(h.screen.current_track, Some(t("a.mp3", "Song A")));
    assert_eq!(h.screen.playback, before);
    assert_eq!(h.live(), vec!["a.mp3"]);
    assert_eq!(h.screen.pending_picks, 0);
}

#[test]
fn playing_b_after_a_leaves_only_b_live() {
    let mut h = Harness::new();
    let a = h.screen.play(t("a.mp3", "A"));
    h.run(Some(a));
    let b = h.screen.play(t("b.mp3", "B"));
    h.run(Some(b));

    assert_eq!(h.live(), vec!["b.mp3"]);
    assert_eq!(h.screen.playback.track().map(|t| t.uri.as_str()), Some("b.mp3"));
}

#[test]
fn like_with_no_current_track_is_a_no_op() {
    let mut h = Harness::new();
    assert!(!h.screen.like_current());
    assert!(h.screen.liked.is_empty());
}

#[test]
fn liking_current_track_twice_keeps_one_entry() {
    let mut h = Harness::new();
    h.select(t("a.mp3", "Song A"));
    assert!(h.screen.like_current());
    assert!(!h.screen.like_current());
    assert_eq!(liked_uris(&h.screen), vec!["a.mp3"]);
}

#[test]
fn likes_follow_selection_order() {
    let mut h = Harness::new();
    h.select(t("a.mp3", "Song A"));
    h.screen.like_current();
    h.select(t("b.mp3", "Song B"));
    h.screen.like_current();
    assert_eq!(liked_uris(&h.screen), vec!["a.mp3", "b.mp3"]);
}

#[test]
fn tapping_a_liked_entry_switches_playback() {
    let mut h = Harness::new();
    h.select(t("b.mp3", "Song B"));
    h.screen.like_current();
    h.select(t("a.mp3", "Song A"));
    assert_eq!(h.live(), vec!["a.mp3"]);

    let request = h.screen.play_liked(0);
    h.run(request);

    assert_eq!(h.live(), vec!["b.mp3"]);
    assert_eq!(h.screen.playback.track().map(|t| t.uri.as_str()), Some("b.mp3"));
}

#[test]
fn replaying_a_liked_entry_keeps_current_track() {
    let mut h = Harness::new();
    h.select(t("a.mp3", "Song A"));
    h.screen.like_current();
    h.select(t("b.mp3", "Song B"));

    let request = h.screen.play_liked(0);
    h.run(request);

    // Like still targets the last browsed track, not the replayed one.
    assert_eq!(h.screen.current_track, Some(t("b.mp3", "Song B")));
    assert!(h.screen.like_current());
    assert_eq!(liked_uris(&h.screen), vec!["a.mp3", "b.mp3"]);
}

#[test]
fn play_liked_out_of_range_does_nothing() {
    let mut h = Harness::new();
    assert!(h.screen.play_liked(3).is_none());
    assert_eq!(h.screen.playback, PlaybackState::Idle);
}

#[test]
fn overlapping_selections_commit_only_the_latest() {
    let mut h = Harness::new();
    assert!(h.screen.begin_browse());
    assert!(h.screen.begin_browse());
    assert_eq!(h.screen.pending_picks, 2);

    // Both pickers answer before the audio thread handles the first request.
    let first = h.screen.complete_browse(Ok(PickOutcome::Picked(t("a.mp3", "A"))));
    let second = h.screen.complete_browse(Ok(PickOutcome::Picked(t("b.mp3", "B"))));
    h.run(first);
    h.run(second);

    assert_eq!(h.live(), vec!["b.mp3"]);
    assert!(matches!(
        &h.screen.playback,
        PlaybackState::Playing { track, .. } if track.uri == "b.mp3"
    ));
}

#[test]
fn late_event_for_an_old_request_is_ignored() {
    let mut h = Harness::new();
    let a = h.screen.play(t("a.mp3", "A"));
    let a_token = a.token;
    let _b = h.screen.play(t("b.mp3", "B"));

    h.screen.on_audio_event(AudioEvent::Started {
        token: a_token,
        total: None,
    });
    assert!(matches!(
        &h.screen.playback,
        PlaybackState::Loading { track, .. } if track.uri == "b.mp3"
    ));
}

#[test]
fn playback_failure_returns_to_idle() {
    let mut h = Harness::new();
    h.select(t("a.mp3", "A"));
    h.select(t("c.broken", "Broken"));

    assert_eq!(h.screen.playback, PlaybackState::Idle);
    assert_eq!(h.screen.current_track, Some(t("c.broken", "Broken")));
    assert!(h.live().is_empty());
}

#[test]
fn elapsed_reads_shared_info_for_current_request() {
    let mut h = Harness::new();
    assert_eq!(h.screen.elapsed(), None);
    h.select(t("a.mp3", "A"));
    h.engine.tick();
    assert_eq!(h.screen.elapsed(), Some(Duration::from_secs(3)));
}

#[test]
fn permission_denial_is_advisory_and_shown_once() {
    let mut h = Harness::new();
    h.screen.apply_permission(PermissionStatus::Denied);
    assert_eq!(h.screen.notice, Some(Notice::PermissionAdvisory));

    h.screen.dismiss_notice();
    h.screen.apply_permission(PermissionStatus::Denied);
    assert_eq!(h.screen.notice, None);

    // Browse is still allowed and still plays.
    h.select(t("a.mp3", "Song A"));
    assert_eq!(h.live(), vec!["a.mp3"]);
}

#[test]
fn granted_permission_raises_no_notice() {
    let mut h = Harness::new();
    h.screen.apply_permission(PermissionStatus::Granted);
    assert_eq!(h.screen.notice, None);
    assert_eq!(h.screen.permission(), Some(PermissionStatus::Granted));
}

#[test]
fn enforced_permission_blocks_browse() {
    let mut h = Harness::new();
    h.screen.set_enforce_permission(true);
    h.screen.apply_permission(PermissionStatus::Denied);
    h.screen.dismiss_notice();

    assert!(!h.screen.begin_browse());
    assert_eq!(h.screen.notice, Some(Notice::PermissionRequired));
    assert_eq!(h.screen.pending_picks, 0);
}

#[test]
fn liked_cursor_wraps() {
    let mut h = Harness::new();
    h.screen.prev();
    assert_eq!(h.screen.selected, 0);

    for uri in ["a.mp3", "b.mp3", "c.mp3"] {
        h.select(t(uri, uri));
        h.screen.like_current();
    }
    h.screen.prev();
    assert_eq!(h.screen.selected, 2);
    h.screen.next();
    assert_eq!(h.screen.selected, 0);
    h.screen.next();
    assert_eq!(h.screen.play_selected_liked().unwrap().track.uri, "b.mp3");
}

#[test]
fn teardown_goes_idle_and_engine_releases() {
    let mut h = Harness::new();
    h.select(t("a.mp3", "A"));
    h.screen.teardown();
    h.engine.shutdown(0);

    assert_eq!(h.screen.playback, PlaybackState::Idle);
    assert!(h.live().is_empty());
}
