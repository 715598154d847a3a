// TUI module - Terminal User Interface
//
// This module manages the manifesto page using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, frame ticks, signup results)
// - Rendering the page once per frame when something changed
// - Running signup submissions off the loop

pub mod app;
pub mod components;
pub mod layout;
pub mod scroll;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::signup::{Notifier, SignupOutcome, SignupSubmitter};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: usize = 3;

/// Run the page
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. Dropping the loop also drops the signup result receiver, so
/// submissions still in flight finish silently.
pub async fn run_tui<N>(
    config: Config,
    log_buffer: LogBuffer,
    submitter: Arc<SignupSubmitter<N>>,
) -> Result<()>
where
    N: Notifier + 'static,
{
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    let size = terminal.size().context("Failed to read terminal size")?;
    app.mount(size.width, size.height);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, submitter).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard and mouse input (scroll, theme, form)
/// 2. Frame ticks (apply coalesced scroll, redraw if dirty)
/// 3. Signup results from spawned submissions
async fn run_event_loop<N>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    submitter: Arc<SignupSubmitter<N>>,
) -> Result<()>
where
    N: Notifier + 'static,
{
    let (result_tx, mut result_rx) = mpsc::channel::<(u64, SignupOutcome)>(8);

    let mut frame_interval = tokio::time::interval(app.frame_interval());
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    terminal
        .draw(|f| ui::draw(f, app))
        .context("Failed to draw terminal")?;

    loop {
        tokio::select! {
            // Keyboard, mouse, resize
            input = poll_input() => {
                match input {
                    Some(Event::Key(key_event)) => handle_key_event(app, key_event),
                    Some(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                    Some(Event::Resize(width, height)) => app.resize(width, height),
                    _ => {}
                }
            }

            // One recomputation and at most one draw per frame
            _ = frame_interval.tick() => {
                app.on_frame(Instant::now());
                if app.take_dirty() {
                    terminal
                        .draw(|f| ui::draw(f, app))
                        .context("Failed to draw terminal")?;
                }
            }

            Some((id, outcome)) = result_rx.recv() => {
                app.finish_signup(id, outcome);
            }
        }

        for request in app.take_signup_requests() {
            let submitter = Arc::clone(&submitter);
            let tx = result_tx.clone();
            tracing::debug!(id = request.id, "Submitting signup");
            tokio::spawn(async move {
                let outcome = submitter.submit(&request.email).await;
                // Receiver gone means the page was torn down
                let _ = tx.send((request.id, outcome)).await;
            });
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Wait briefly for a terminal event
async fn poll_input() -> Option<Event> {
    if event::poll(Duration::from_millis(10)).unwrap_or(false) {
        event::read().ok()
    } else {
        None
    }
}

/// Handle keyboard input
///
/// While the email field has focus, printable keys go to the field; otherwise
/// they navigate the page.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        return;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c'))
    {
        app.should_quit = true;
        return;
    }

    if app.signup.editing {
        handle_form_key(app, key_event.code);
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char(' ') => {
            // In timed mode the first Space starts the reveal
            if !app.start_timed(Instant::now()) {
                app.page_down();
            }
        }
        KeyCode::Enter => {
            app.start_timed(Instant::now());
        }
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.replay(),
        KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('/') => app.focus_signup(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.submit_signup(),
        KeyCode::Esc | KeyCode::Tab => app.blur_signup(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.scroll_up(WHEEL_ROWS),
        MouseEventKind::ScrollDown => app.scroll_down(WHEEL_ROWS),
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse_event.column, mouse_event.row, Instant::now())
        }
        _ => {}
    }
}
