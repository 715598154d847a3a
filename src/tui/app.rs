// Page state
//
// One `App` owns everything the page shows: scroll position, reveal progress,
// the completion latch, theme, and the signup form. Input handlers only move
// the scroll offset and queue a snapshot; `on_frame` turns the latest
// snapshot into progress once per frame.

use super::components::{footer, manifesto, theme_toggle, Toast};
use super::layout::{PageLayout, LOG_STRIP_ROWS};
use super::scroll::ScrollState;
use crate::config::{Config, RevealMode};
use crate::logging::{LogBuffer, LogEntry};
use crate::reveal::{
    compute_progress, CompletionLatch, FrameCoalescer, RevealSchedule, ScrollProgress,
    TimedReveal, VisibleSet,
};
use crate::signup::SignupOutcome;
use crate::theme::{Theme, ThemeConfig, ThemeFlag, ThemeState};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Size assumed until the terminal reports its own
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Where the signup form is in its lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Idle,
    /// Waiting on the submission with this id
    Submitting { id: u64 },
    /// Rejected locally; the field stays editable
    Invalid(String),
    /// Terminal state for the page view
    Submitted(SignupOutcome),
}

/// A submission the event loop should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub id: u64,
    pub email: String,
}

#[derive(Debug, Default)]
pub struct SignupForm {
    pub input: String,
    /// Keystrokes go to the field instead of page navigation
    pub editing: bool,
    pub phase: SignupPhase,
    next_id: u64,
    queued: Vec<SignupRequest>,
}

impl SignupForm {
    fn is_submitted(&self) -> bool {
        matches!(self.phase, SignupPhase::Submitted(_))
    }
}

/// Scroll position captured by an input handler, consumed on the next frame
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollSnapshot {
    offset: usize,
    scrollable: usize,
}

pub struct App {
    /// Terminal size in cells
    size: (u16, u16),
    pub layout: PageLayout,
    pub scroll: ScrollState,
    manifesto_rows: Vec<manifesto::ManifestoRow>,
    footer_rows: Vec<footer::FooterRow>,

    // ─── Reveal ──────────────────────────────────────────────
    mode: RevealMode,
    schedule: RevealSchedule,
    pending: FrameCoalescer<ScrollSnapshot>,
    timed: Option<TimedReveal>,
    progress: ScrollProgress,
    visible: VisibleSet,
    latch: CompletionLatch,
    footer_mounted: bool,
    frame_interval: Duration,

    // ─── Theme ───────────────────────────────────────────────
    theme_state: ThemeState,
    theme_config: ThemeConfig,
    pub theme: Theme,

    // ─── Form, overlays ──────────────────────────────────────
    pub signup: SignupForm,
    pub toast: Option<Toast>,
    pub log_buffer: LogBuffer,
    pub show_logs: bool,

    pub should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let theme_config = config.theme_config();
        let theme_state = ThemeState::new(config.theme).on_theme_change(|alternate| {
            tracing::info!(alternate, "Theme changed");
        });
        let schedule = config.reveal.schedule.clone();
        let timed = match config.reveal.mode {
            RevealMode::Timed => Some(TimedReveal::new(config.reveal.timed_duration())),
            RevealMode::Scroll => None,
        };

        let mut app = Self {
            size: DEFAULT_SIZE,
            layout: PageLayout::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1, 0, 0),
            scroll: ScrollState::new(),
            manifesto_rows: Vec::new(),
            footer_rows: Vec::new(),
            mode: config.reveal.mode,
            latch: CompletionLatch::new(),
            schedule,
            pending: FrameCoalescer::new(),
            timed,
            progress: ScrollProgress::START,
            visible: VisibleSet::new(),
            footer_mounted: false,
            frame_interval: config.reveal.frame_interval(),
            theme: Theme::for_flag(theme_state.current(), &theme_config),
            theme_state,
            theme_config,
            signup: SignupForm::default(),
            toast: None,
            log_buffer,
            show_logs: false,
            should_quit: false,
            dirty: true,
        };
        app.relayout(DEFAULT_SIZE.0, DEFAULT_SIZE.1);
        app
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mount and geometry
    // ─────────────────────────────────────────────────────────────────────────

    /// Lay out for the real terminal size and compute progress eagerly, so
    /// the first frame is correct before any input arrives.
    pub fn mount(&mut self, width: u16, height: u16) {
        self.relayout(width, height);
        self.queue_snapshot();
        let progress = self
            .progress_source(Instant::now())
            .unwrap_or(ScrollProgress::START);
        self.apply_progress(progress);
        tracing::info!(
            width,
            height,
            mode = self.mode.as_str(),
            "Page mounted"
        );
    }

    /// Terminal resized; progress is recomputed on the next frame
    pub fn resize(&mut self, width: u16, height: u16) {
        self.relayout(width, height);
        self.queue_snapshot();
    }

    fn relayout(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let mut layout = PageLayout::new(width, height, 0, 0);
        self.manifesto_rows = manifesto::rows(layout.column, layout.viewport);
        self.footer_rows = footer::rows(layout.column);
        layout.manifesto_rows = self.manifesto_rows.len();
        layout.footer_rows = self.footer_rows.len();
        self.layout = layout;
        self.sync_scroll_dimensions();
        self.dirty = true;
    }

    fn sync_scroll_dimensions(&mut self) {
        self.scroll.update_dimensions(
            self.layout.total_rows(self.footer_mounted),
            self.layout.viewport,
        );
    }

    /// Document viewport on screen (everything above the status bar)
    pub fn page_area(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.layout.viewport as u16)
    }

    /// Log strip overlay on screen, when shown
    pub fn logs_area(&self) -> Option<Rect> {
        if !self.show_logs {
            return None;
        }
        let page = self.page_area();
        let height = LOG_STRIP_ROWS.min(page.height);
        Some(Rect::new(page.x, page.bottom() - height, page.width, height))
    }

    pub fn manifesto_rows(&self) -> &[manifesto::ManifestoRow] {
        &self.manifesto_rows
    }

    pub fn footer_rows(&self) -> &[footer::FooterRow] {
        &self.footer_rows
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────

    pub fn scroll_up(&mut self, rows: usize) {
        if self.scroll.scroll_up(rows) {
            self.queue_snapshot();
        }
    }

    pub fn scroll_down(&mut self, rows: usize) {
        if self.scroll.scroll_down(rows) {
            self.queue_snapshot();
        }
    }

    pub fn page_up(&mut self) {
        if self.scroll.page_up() {
            self.queue_snapshot();
        }
    }

    pub fn page_down(&mut self) {
        if self.scroll.page_down() {
            self.queue_snapshot();
        }
    }

    pub fn scroll_to_top(&mut self) {
        if self.scroll.scroll_to_top() {
            self.queue_snapshot();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if self.scroll.scroll_to_bottom() {
            self.queue_snapshot();
        }
    }

    fn queue_snapshot(&mut self) {
        self.pending.push(ScrollSnapshot {
            offset: self.scroll.offset(),
            scrollable: self.layout.reveal_scrollable(),
        });
        self.dirty = true;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reveal
    // ─────────────────────────────────────────────────────────────────────────

    /// Frame tick: apply the latest queued scroll (or the timed clock) and
    /// expire the toast.
    pub fn on_frame(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.toast = None;
            self.dirty = true;
        }

        if let Some(progress) = self.progress_source(now) {
            self.apply_progress(progress);
        }
    }

    /// Progress for this frame, if anything changed it.
    ///
    /// Scroll mode reads the latest queued snapshot; timed mode reads the
    /// clock and drops queued snapshots, which then only move the view.
    fn progress_source(&mut self, now: Instant) -> Option<ScrollProgress> {
        let snapshot = self.pending.take();
        match self.mode {
            RevealMode::Scroll => {
                snapshot.map(|s| compute_progress(s.offset as f64, s.scrollable as f64))
            }
            RevealMode::Timed => self
                .timed
                .as_ref()
                .filter(|t| t.is_started())
                .map(|t| t.progress_at(now)),
        }
    }

    fn apply_progress(&mut self, progress: ScrollProgress) {
        if progress.percent() != self.progress.percent() {
            self.dirty = true;
        }
        self.progress = progress;

        let visible = self.schedule.visible_indices(progress);
        if visible != self.visible {
            tracing::debug!(
                progress = %progress,
                revealed = visible.len(),
                "Reveal updated"
            );
            self.visible = visible;
            self.dirty = true;
        }

        let fired = self
            .latch
            .observe(&self.schedule, progress, |mounted| self.footer_mounted = mounted);
        if fired {
            tracing::info!(progress = %progress, "Manifesto complete, footer mounted");
            self.sync_scroll_dimensions();
            self.dirty = true;
        }
    }

    /// Restart the page view: back to the top with nothing revealed and the
    /// footer unmounted. A submitted form keeps its confirmation.
    pub fn replay(&mut self) {
        self.latch.reset();
        self.footer_mounted = false;
        self.signup.editing = false;
        if let Some(timed) = self.timed.as_mut() {
            timed.reset();
        }

        self.sync_scroll_dimensions();
        self.scroll.scroll_to_top();
        self.progress = ScrollProgress::START;
        self.visible = self.schedule.visible_indices(ScrollProgress::START);
        self.queue_snapshot();
        tracing::info!("Reveal restarted");
    }

    /// Start the timed reveal. Returns false when not in timed mode or the
    /// clock is already running.
    pub fn start_timed(&mut self, now: Instant) -> bool {
        let Some(timed) = self.timed.as_mut() else {
            return false;
        };
        if !timed.start(now) {
            return false;
        }
        tracing::info!("Timed reveal started");
        self.dirty = true;
        true
    }

    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn revealed_count(&self) -> usize {
        self.visible.len()
    }

    pub fn reveal_len(&self) -> usize {
        self.schedule.block_count()
    }

    pub fn footer_mounted(&self) -> bool {
        self.footer_mounted
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn timed_started(&self) -> bool {
        self.timed.as_ref().is_some_and(TimedReveal::is_started)
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        let flag = self.theme_state.toggle();
        self.theme = Theme::for_flag(flag, &self.theme_config);
        tracing::debug!(theme = self.theme.name, "Palette resolved");
        self.dirty = true;
    }

    pub fn theme_flag(&self) -> ThemeFlag {
        self.theme_state.current()
    }

    pub fn toggle_area(&self) -> Rect {
        theme_toggle::area(self.page_area())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────────────────────

    /// Left click at screen cell (`column`, `row`)
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let position = Position::new(column, row);
        if self.toggle_area().contains(position) {
            self.toggle_theme();
            return;
        }
        if self.start_timed(now) {
            return;
        }
        if self.input_screen_row() == Some(row) {
            self.focus_signup();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Signup form
    // ─────────────────────────────────────────────────────────────────────────

    /// Move keyboard focus into the email field (only once the footer exists)
    pub fn focus_signup(&mut self) {
        if !self.footer_mounted || self.signup.is_submitted() {
            return;
        }
        self.signup.editing = true;
        self.scroll_to_bottom();
        self.dirty = true;
    }

    pub fn blur_signup(&mut self) {
        self.signup.editing = false;
        self.dirty = true;
    }

    pub fn input_char(&mut self, c: char) {
        if !self.signup.editing || c.is_control() {
            return;
        }
        self.signup.input.push(c);
        self.clear_invalid();
    }

    pub fn input_backspace(&mut self) {
        if !self.signup.editing {
            return;
        }
        self.signup.input.pop();
        self.clear_invalid();
    }

    fn clear_invalid(&mut self) {
        if matches!(self.signup.phase, SignupPhase::Invalid(_)) {
            self.signup.phase = SignupPhase::Idle;
        }
        self.dirty = true;
    }

    /// Queue the current input for submission.
    ///
    /// A newer submission supersedes any still in flight; only the latest
    /// id's result is applied.
    pub fn submit_signup(&mut self) {
        if !self.footer_mounted || self.signup.is_submitted() {
            return;
        }
        let id = self.signup.next_id;
        self.signup.next_id += 1;
        self.signup.phase = SignupPhase::Submitting { id };
        self.signup.queued.push(SignupRequest {
            id,
            email: self.signup.input.clone(),
        });
        self.dirty = true;
    }

    /// Drain submissions queued since the last call
    pub fn take_signup_requests(&mut self) -> Vec<SignupRequest> {
        std::mem::take(&mut self.signup.queued)
    }

    /// Apply a finished submission
    pub fn finish_signup(&mut self, id: u64, outcome: SignupOutcome) {
        let current = matches!(self.signup.phase, SignupPhase::Submitting { id: cur } if cur == id);
        if !current {
            tracing::debug!(id, "Discarding superseded signup result");
            return;
        }

        if outcome.success {
            self.signup.editing = false;
            self.show_toast(format!("✓ {}", outcome.message));
            self.signup.phase = SignupPhase::Submitted(outcome);
        } else {
            self.signup.phase = SignupPhase::Invalid(outcome.message);
        }
        self.dirty = true;
    }

    /// Screen row of the email field, if it is on screen
    fn input_screen_row(&self) -> Option<u16> {
        if !self.footer_mounted {
            return None;
        }
        let row = self.layout.footer_start() + footer::input_row(&self.footer_rows)?;
        let screen = row.checked_sub(self.scroll.offset())?;
        (screen < self.layout.viewport).then_some(screen as u16)
    }

    /// Terminal cursor position while typing into the email field
    pub fn input_cursor(&self) -> Option<Position> {
        if !self.signup.editing {
            return None;
        }
        let row = self.input_screen_row()?;
        let column = footer::caret_column(&self.layout, &self.signup.input);
        Some(Position::new(column.min(usize::from(u16::MAX)) as u16, row))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
        self.dirty = true;
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        self.dirty = true;
    }

    pub fn recent_logs(&self, count: usize) -> Vec<LogEntry> {
        self.log_buffer.recent(count)
    }

    /// Whether anything changed since the last draw; clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::DeliveryStatus;

    fn mounted(config: &Config) -> App {
        let mut app = App::new(config, LogBuffer::new());
        app.mount(80, 25);
        app
    }

    fn delivered(message: &str) -> SignupOutcome {
        SignupOutcome {
            success: true,
            message: message.to_string(),
            status: DeliveryStatus::Delivered,
        }
    }

    #[test]
    fn test_mount_computes_initial_state() {
        let app = mounted(&Config::default());
        assert_eq!(app.progress(), ScrollProgress::START);
        assert!(app.visible().is_empty());
        assert!(!app.footer_mounted());
        assert_eq!(app.scroll.total(), app.layout.total_rows(false));
    }

    #[test]
    fn test_scroll_is_applied_on_frame() {
        let mut app = mounted(&Config::default());
        let now = Instant::now();

        app.scroll_down(3);
        app.scroll_down(3);
        app.scroll_down(3);
        // Nothing recomputed until the frame tick
        assert_eq!(app.progress(), ScrollProgress::START);

        app.on_frame(now);
        let expected = compute_progress(9.0, app.layout.reveal_scrollable() as f64);
        assert_eq!(app.progress(), expected);
    }

    #[test]
    fn test_scrolling_to_bottom_mounts_footer_once() {
        let mut app = mounted(&Config::default());
        let before = app.scroll.total();

        app.scroll_to_bottom();
        app.on_frame(Instant::now());

        assert!(app.footer_mounted());
        assert_eq!(app.revealed_count(), app.reveal_len());
        assert_eq!(app.scroll.total(), before + app.layout.footer_rows);

        // Scrolling back up keeps the footer
        app.scroll_to_top();
        app.on_frame(Instant::now());
        assert!(app.footer_mounted());
        assert!(app.visible().is_empty());
    }

    #[test]
    fn test_replay_rearms_completion() {
        let mut app = mounted(&Config::default());
        let collapsed = app.scroll.total();

        app.scroll_to_bottom();
        app.on_frame(Instant::now());
        assert!(app.footer_mounted());

        app.replay();
        assert!(!app.footer_mounted());
        assert_eq!(app.scroll.offset(), 0);
        assert_eq!(app.scroll.total(), collapsed);
        assert!(app.visible().is_empty());

        // Crossing the completion point again mounts the footer again
        app.scroll_to_bottom();
        app.on_frame(Instant::now());
        assert!(app.footer_mounted());
        assert_eq!(app.revealed_count(), app.reveal_len());
    }

    #[test]
    fn test_replay_stops_timed_clock() {
        let mut config = Config::default();
        config.reveal.mode = RevealMode::Timed;
        let mut app = mounted(&config);
        let t0 = Instant::now();

        app.start_timed(t0);
        app.on_frame(t0 + config.reveal.timed_duration());
        assert!(app.footer_mounted());

        app.replay();
        app.on_frame(t0 + config.reveal.timed_duration() * 2);
        assert!(!app.timed_started());
        assert!(!app.footer_mounted());
        assert!(app.visible().is_empty());
    }

    #[test]
    fn test_visible_set_follows_progress_both_ways() {
        let mut app = mounted(&Config::default());
        let scrollable = app.layout.reveal_scrollable();

        // Halfway: thresholds 0.10..=0.46 are passed
        app.scroll_down(scrollable / 2);
        app.on_frame(Instant::now());
        assert_eq!(app.revealed_count(), 4);

        app.scroll_up(scrollable);
        app.on_frame(Instant::now());
        assert_eq!(app.revealed_count(), 0);
    }

    #[test]
    fn test_timed_mode_ignores_scroll_until_started() {
        let mut config = Config::default();
        config.reveal.mode = RevealMode::Timed;
        let mut app = mounted(&config);
        let t0 = Instant::now();

        app.scroll_to_bottom();
        app.on_frame(t0);
        assert!(app.visible().is_empty());
        assert!(!app.footer_mounted());

        assert!(app.start_timed(t0));
        assert!(!app.start_timed(t0));
        app.on_frame(t0 + config.reveal.timed_duration() / 2);
        assert!(!app.visible().is_empty());

        app.on_frame(t0 + config.reveal.timed_duration());
        assert!(app.footer_mounted());
    }

    #[test]
    fn test_start_timed_is_noop_in_scroll_mode() {
        let mut app = mounted(&Config::default());
        assert!(!app.start_timed(Instant::now()));
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut app = mounted(&Config::default());
        let original = app.theme_flag();
        let name = app.theme.name;

        app.toggle_theme();
        assert_ne!(app.theme_flag(), original);
        assert_ne!(app.theme.name, name);

        app.toggle_theme();
        assert_eq!(app.theme_flag(), original);
        assert_eq!(app.theme.name, name);
    }

    #[test]
    fn test_click_on_toggle_flips_theme() {
        let mut app = mounted(&Config::default());
        let toggle = app.toggle_area();
        let original = app.theme_flag();

        app.click(toggle.x, toggle.y, Instant::now());
        assert_ne!(app.theme_flag(), original);

        // Clicks elsewhere leave it alone
        app.click(0, 5, Instant::now());
        assert_ne!(app.theme_flag(), original);
    }

    #[test]
    fn test_form_unavailable_before_footer() {
        let mut app = mounted(&Config::default());
        app.focus_signup();
        assert!(!app.signup.editing);
        app.submit_signup();
        assert!(app.take_signup_requests().is_empty());
    }

    #[test]
    fn test_signup_flow() {
        let mut app = mounted(&Config::default());
        app.scroll_to_bottom();
        app.on_frame(Instant::now());

        app.focus_signup();
        assert!(app.signup.editing);
        for c in "ada@example.com".chars() {
            app.input_char(c);
        }
        assert!(app.input_cursor().is_some());

        app.submit_signup();
        let requests = app.take_signup_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].email, "ada@example.com");
        assert!(app.take_signup_requests().is_empty());

        app.finish_signup(requests[0].id, delivered("Notification sent successfully"));
        assert!(matches!(app.signup.phase, SignupPhase::Submitted(_)));
        assert!(!app.signup.editing);
        assert!(app.toast.is_some());

        // Submitted is terminal for the page view
        app.focus_signup();
        assert!(!app.signup.editing);
    }

    #[test]
    fn test_superseded_result_is_ignored() {
        let mut app = mounted(&Config::default());
        app.scroll_to_bottom();
        app.on_frame(Instant::now());
        app.focus_signup();
        app.input_char('a');

        app.submit_signup();
        app.submit_signup();
        let requests = app.take_signup_requests();
        assert_eq!(requests.len(), 2);

        app.finish_signup(requests[0].id, delivered("stale"));
        assert_eq!(
            app.signup.phase,
            SignupPhase::Submitting {
                id: requests[1].id
            }
        );

        app.finish_signup(requests[1].id, delivered("fresh"));
        assert!(matches!(
            &app.signup.phase,
            SignupPhase::Submitted(outcome) if outcome.message == "fresh"
        ));
    }

    #[test]
    fn test_rejected_submission_stays_editable() {
        let mut app = mounted(&Config::default());
        app.scroll_to_bottom();
        app.on_frame(Instant::now());
        app.focus_signup();

        app.submit_signup();
        let id = app.take_signup_requests()[0].id;
        app.finish_signup(
            id,
            SignupOutcome {
                success: false,
                message: "Please enter your email address".to_string(),
                status: DeliveryStatus::Rejected,
            },
        );
        assert!(matches!(app.signup.phase, SignupPhase::Invalid(_)));
        assert!(app.signup.editing);

        // Typing clears the error
        app.input_char('x');
        assert_eq!(app.signup.phase, SignupPhase::Idle);
    }

    #[test]
    fn test_resize_keeps_offset_in_range() {
        let mut app = mounted(&Config::default());
        app.scroll_to_bottom();
        app.resize(200, 60);
        assert!(app.scroll.offset() <= app.scroll.max_offset());
        app.on_frame(Instant::now());
        assert!(app.progress().value() <= 1.0);
    }

    #[test]
    fn test_dirty_flag_cleared_by_take() {
        let mut app = mounted(&Config::default());
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
        app.toggle_logs();
        assert!(app.take_dirty());
        assert!(app.logs_area().is_some());
    }
}
