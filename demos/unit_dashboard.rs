//! Terminal rendition of the unit detail screen
//!
//! Run with: cargo run --example unit_dashboard
//!
//! Drives the real accordion and action controllers against a simulated
//! unit. Prompts and notifications from the core are shown as overlays and
//! in the event log.
//!
//! ## Keyboard Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `Up/Down` | Navigate sections |
//! | `Enter/Space` | Expand/collapse selected section |
//! | `S` | Start system |
//! | `X` | Stop system |
//! | `Left/Right` | Choose prompt option |
//! | `Enter` | Select prompt option |
//! | `Y/N` | Confirm/cancel prompt |
//! | `Esc` | Dismiss prompt |
//! | `B/Q` | Go back (quit) |

use async_trait::async_trait;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};
use tracing_subscriber::EnvFilter;
use unit_detail_core::{
    BadgeTone, Chevron, ConfirmationDialog, ConfirmationPrompt, DialogAction, Navigator,
    Notification, NotificationKind, Notifier, OptionStyle, RequestOutcome, SectionId,
    UnitDetailConfig, UnitDetailScreen, UnitDetailView,
};

type BoxError = Box<dyn std::error::Error>;

/// A prompt waiting for an answer from the keyboard
struct PendingPrompt {
    prompt: ConfirmationPrompt,
    reply: oneshot::Sender<Option<DialogAction>>,
}

/// Messages from the core and request tasks to the UI loop
enum UiEvent {
    Prompt(PendingPrompt),
    Notice(Notification),
    Outcome(String),
}

/// Confirmation dialog answered by the UI loop
struct TerminalDialog {
    tx: mpsc::UnboundedSender<UiEvent>,
}

#[async_trait]
impl ConfirmationDialog for TerminalDialog {
    async fn confirm(&self, prompt: ConfirmationPrompt) -> Option<DialogAction> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(UiEvent::Prompt(PendingPrompt { prompt, reply }))
            .ok()?;
        // A dropped prompt counts as dismissed
        rx.await.ok().flatten()
    }
}

/// Notifier feeding the event log
struct EventLogNotifier {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl Notifier for EventLogNotifier {
    fn notify(&self, notification: Notification) {
        let _ = self.tx.send(UiEvent::Notice(notification));
    }
}

/// Navigator that ends the demo
struct QuitNavigator {
    done: Arc<AtomicBool>,
}

impl Navigator for QuitNavigator {
    fn go_back(&self) {
        self.done.store(true, Ordering::SeqCst);
    }
}

/// Event log entry
struct LogEntry {
    timestamp: Instant,
    style: Style,
    message: String,
}

/// Main application state
struct App {
    screen: Arc<UnitDetailScreen>,
    events_tx: mpsc::UnboundedSender<UiEvent>,
    events_rx: mpsc::UnboundedReceiver<UiEvent>,
    done: Arc<AtomicBool>,
    selected_row: usize,
    prompt: Option<PendingPrompt>,
    selected_option: usize,
    event_log: Vec<LogEntry>,
    max_log_entries: usize,
    start_time: Instant,
}

impl App {
    fn new() -> Result<Self, BoxError> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let done = Arc::new(AtomicBool::new(false));

        let config = UnitDetailConfig::new()
            .with_start_delay(Duration::from_secs(2))
            .with_stop_delay(Duration::from_secs(3));

        let screen = UnitDetailScreen::new(
            config,
            Arc::new(TerminalDialog {
                tx: events_tx.clone(),
            }),
            Arc::new(EventLogNotifier {
                tx: events_tx.clone(),
            }),
            Arc::new(QuitNavigator { done: done.clone() }),
        )?;

        Ok(Self {
            screen: Arc::new(screen),
            events_tx,
            events_rx,
            done,
            selected_row: 0,
            prompt: None,
            selected_option: 0,
            event_log: Vec::new(),
            max_log_entries: 50,
            start_time: Instant::now(),
        })
    }

    fn log(&mut self, style: Style, message: impl Into<String>) {
        self.event_log.push(LogEntry {
            timestamp: Instant::now(),
            style,
            message: message.into(),
        });

        if self.event_log.len() > self.max_log_entries {
            self.event_log.remove(0);
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                UiEvent::Prompt(pending) => {
                    if self.prompt.is_some() {
                        // One prompt at a time; a second one is dismissed
                        let _ = pending.reply.send(None);
                    } else {
                        self.selected_option = 0;
                        self.prompt = Some(pending);
                    }
                }
                UiEvent::Notice(notification) => {
                    let style = match notification.kind {
                        NotificationKind::Success => Style::default().fg(Color::Green),
                        NotificationKind::Error => Style::default().fg(Color::Red),
                    };
                    self.log(
                        style,
                        format!("{}: {}", notification.title, notification.message),
                    );
                }
                UiEvent::Outcome(message) => {
                    self.log(Style::default().fg(Color::DarkGray), message);
                }
            }
        }
    }

    fn answer_prompt(&mut self, answer: Option<DialogAction>) {
        if let Some(pending) = self.prompt.take() {
            let _ = pending.reply.send(answer);
        }
    }

    fn selected_section(&self) -> Option<SectionId> {
        self.screen
            .view()
            .rows
            .get(self.selected_row)
            .map(|row| row.id)
    }

    fn select_next_row(&mut self) {
        let rows = self.screen.view().rows.len();
        if rows > 0 {
            self.selected_row = (self.selected_row + 1) % rows;
        }
    }

    fn select_prev_row(&mut self) {
        let rows = self.screen.view().rows.len();
        if rows > 0 {
            self.selected_row = (self.selected_row + rows - 1) % rows;
        }
    }

    fn spawn_request(&self, start: bool) {
        let screen = self.screen.clone();
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let (name, result) = if start {
                ("Start", screen.request_start().await)
            } else {
                ("Stop", screen.request_stop().await)
            };

            let message = match result {
                Ok(RequestOutcome::Scheduled) => format!("{} requested", name),
                Ok(RequestOutcome::Cancelled) => format!("{} cancelled", name),
                Ok(RequestOutcome::Rejected(reason)) => {
                    format!("{} not available: {:?}", name, reason)
                }
                Err(e) => format!("{} failed: {}", name, e),
            };
            let _ = tx.send(UiEvent::Outcome(message));
        });
    }
}

/// Main terminal type alias
type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> io::Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Sample field table for sections with data
fn panel_fields(id: SectionId) -> &'static [(&'static str, &'static str)] {
    match id {
        SectionId::General => &[
            ("Unit", "PU-0142"),
            ("Model", "Series 3 Controller"),
            ("Firmware", "2.4.1"),
            ("Installed", "2024-03-18"),
        ],
        SectionId::LastCall => &[
            ("Time", "Today 08:42"),
            ("Duration", "00:03:17"),
            ("Result", "Answered"),
        ],
        _ => &[],
    }
}

fn render_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let view = app.screen.view();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Content
            Constraint::Length(8), // Event log
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    render_header(frame, main_chunks[0], app, &view);
    render_sections(frame, main_chunks[1], app, &view);
    render_event_log(frame, main_chunks[2], app);
    render_status_bar(frame, main_chunks[3], &view);

    if let Some(pending) = &app.prompt {
        render_prompt(frame, &pending.prompt, app.selected_option, size);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, view: &UnitDetailView) {
    let elapsed = app.start_time.elapsed().as_secs();
    let badge_color = match view.badge.tone {
        BadgeTone::Neutral => Color::Gray,
        BadgeTone::Positive => Color::Green,
        BadgeTone::Negative => Color::Red,
    };

    let line = Line::from(vec![
        Span::raw(" UNIT DETAIL | "),
        Span::styled(
            format!(" {} ", view.badge.label),
            Style::default().fg(Color::Black).bg(badge_color),
        ),
        Span::raw(format!(
            " | Uptime: {:02}:{:02} ",
            elapsed / 60,
            elapsed % 60
        )),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

fn render_sections(frame: &mut Frame, area: Rect, app: &App, view: &UnitDetailView) {
    let mut lines = Vec::new();

    for (index, row) in view.rows.iter().enumerate() {
        let chevron = match row.chevron {
            Chevron::Up => "▲",
            Chevron::Down => "▼",
        };
        let style = if index == app.selected_row {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!(" {} {:<28} [{}]", chevron, row.title, row.icon),
            style,
        ));

        if let Some(panel) = view.panel.as_ref().filter(|p| p.id == row.id) {
            match panel.placeholder() {
                Some(text) => lines.push(Line::styled(
                    format!("     {}", text),
                    Style::default().fg(Color::DarkGray),
                )),
                None => {
                    for (label, value) in panel_fields(panel.id) {
                        lines.push(Line::from(format!("     {:<12} {}", label, value)));
                    }
                }
            }
        }
    }

    lines.push(Line::from(""));
    for button in [&view.start_button, &view.stop_button] {
        let style = if button.enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::styled(format!(" [ {} ]", button.label), style));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Sections "));
    frame.render_widget(paragraph, area);
}

fn render_event_log(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .rev()
        .map(|entry| {
            let secs = entry.timestamp.duration_since(app.start_time).as_secs();
            ListItem::new(Line::styled(
                format!("{:>4}s {}", secs, entry.message),
                entry.style,
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Event Log "));
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, view: &UnitDetailView) {
    let status = format!(
        " ↑/↓ select  Enter toggle  S start{}  X stop{}  B back ",
        if view.start_button.enabled { "" } else { " (off)" },
        if view.stop_button.enabled { "" } else { " (off)" },
    );
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::Cyan)),
        area,
    );
}

fn render_prompt(frame: &mut Frame, prompt: &ConfirmationPrompt, selected: usize, area: Rect) {
    let dialog_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, dialog_area);

    let mut buttons = Vec::new();
    for (index, option) in prompt.options.iter().enumerate() {
        let mut style = match option.style {
            OptionStyle::Destructive => Style::default().fg(Color::Red),
            OptionStyle::Cancel => Style::default().fg(Color::Gray),
            OptionStyle::Default => Style::default().fg(Color::Cyan),
        };
        if index == selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        buttons.push(Span::styled(format!(" {} ", option.label), style));
        buttons.push(Span::raw("  "));
    }

    let content = vec![
        Line::from(""),
        Line::from(prompt.message.clone()),
        Line::from(""),
        Line::from(buttons),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {} ", prompt.title))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block),
        dialog_area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

async fn run_app(terminal: &mut Terminal, mut app: App) -> Result<(), BoxError> {
    while !app.done.load(Ordering::SeqCst) {
        app.drain_events();

        terminal.draw(|frame| render_ui(frame, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            // Let request and completion tasks run between frames
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(pending) = &app.prompt {
            let options = pending.prompt.options.len();
            match key.code {
                KeyCode::Left if options > 0 => {
                    app.selected_option = (app.selected_option + options - 1) % options;
                }
                KeyCode::Right | KeyCode::Tab if options > 0 => {
                    app.selected_option = (app.selected_option + 1) % options;
                }
                KeyCode::Enter => {
                    let action = pending
                        .prompt
                        .options
                        .get(app.selected_option)
                        .map(|o| o.action);
                    app.answer_prompt(action);
                }
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    app.answer_prompt(Some(DialogAction::Confirm))
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    app.answer_prompt(Some(DialogAction::Cancel))
                }
                KeyCode::Esc => app.answer_prompt(None),
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Up => app.select_prev_row(),
            KeyCode::Down => app.select_next_row(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = app.selected_section() {
                    app.screen.toggle_section(id);
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') => app.spawn_request(true),
            KeyCode::Char('x') | KeyCode::Char('X') => app.spawn_request(false),
            KeyCode::Char('b')
            | KeyCode::Char('B')
            | KeyCode::Char('q')
            | KeyCode::Char('Q')
            | KeyCode::Esc => app.screen.go_back().await,
            _ => {}
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Log to a file so output doesn't interfere with the TUI
    if let Ok(log_file) = std::fs::File::create("unit_dashboard.log") {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::sync::Mutex::new(log_file))
            .with_ansi(false)
            .init();
    }

    let app = App::new()?;

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, app).await;
    let _ = restore_terminal(&mut terminal);

    result
}
