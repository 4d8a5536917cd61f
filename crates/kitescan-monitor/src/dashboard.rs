//! TUI dashboard using ratatui.
//!
//! One window: a status header, the latest per-instrument analysis, a
//! scrolling log panel, and modal alerts for fired signals.

use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kitescan_core::types::{Analysis, SignalAction};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Lines kept in the log panel.
const LOG_CAPACITY: usize = 200;

struct UiState {
    status: &'static str,
    simulation_mode: bool,
    reports: Vec<(String, Analysis)>,
    log: VecDeque<String>,
    alerts: VecDeque<String>,
}

impl UiState {
    fn new(simulation_mode: bool) -> Self {
        Self {
            status: "Idle",
            simulation_mode,
            reports: Vec::new(),
            log: VecDeque::new(),
            alerts: VecDeque::new(),
        }
    }

    /// Append a timestamped line to the panel and mirror it to the
    /// log file.
    fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        if self.log.len() >= LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log
            .push_back(format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message));
    }

    /// Ingest the results of one analysis run.
    fn ingest(&mut self, reports: Vec<(String, Analysis)>) {
        for (name, analysis) in &reports {
            self.log(format!(
                "{} - Signal: {}, Price: {:.2}, RSI: {:.2}, Fib: [{}]",
                name,
                analysis
                    .action
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| "None".to_string()),
                analysis.last_price,
                analysis.rsi,
                analysis.fib
            ));
            if let Some(action) = analysis.action {
                let alert = format!(
                    "{} signal: {} at Price {:.2}, RSI {:.2}",
                    name, action, analysis.last_price, analysis.rsi
                );
                self.log(format!("ALERT: {}", alert));
                self.alerts.push_back(alert);
            }
        }
        self.reports = reports;
        self.log("Analysis complete.");
    }
}

/// Terminal dashboard.
pub struct Dashboard {
    refresh_ms: u64,
    simulation_mode: bool,
}

impl Dashboard {
    /// Create a new dashboard.
    pub fn new(refresh_ms: u64, simulation_mode: bool) -> Self {
        Self {
            refresh_ms,
            simulation_mode,
        }
    }

    /// Run the dashboard.
    ///
    /// `run_scan` performs one full analysis pass and is invoked
    /// synchronously on the UI thread when `r` is pressed; a slow live
    /// fetch blocks the interface for its duration.
    pub fn run<F>(&self, mut run_scan: F) -> io::Result<()>
    where
        F: FnMut() -> Vec<(String, Analysis)>,
    {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, &mut run_scan);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<F>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        run_scan: &mut F,
    ) -> io::Result<()>
    where
        F: FnMut() -> Vec<(String, Analysis)>,
    {
        let mut state = UiState::new(self.simulation_mode);
        state.log("Scanner initialized.");
        state.log(format!(
            "Mode: {}",
            if self.simulation_mode {
                "Simulation"
            } else {
                "Live Trading"
            }
        ));

        loop {
            terminal.draw(|f| self.ui(f, &state))?;

            if !event::poll(Duration::from_millis(self.refresh_ms))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };

            // An open alert swallows input until dismissed
            if !state.alerts.is_empty() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    state.alerts.pop_front();
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => {
                    state.status = "Running analysis...";
                    state.log("Starting analysis.");
                    terminal.draw(|f| self.ui(f, &state))?;

                    let reports = run_scan();
                    state.ingest(reports);
                    state.status = "Idle";
                }
                KeyCode::Char('c') => {
                    state.log.clear();
                    state.log("Log cleared.");
                }
                _ => {}
            }
        }
    }

    fn ui(&self, frame: &mut Frame, state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(8),  // Signals
                Constraint::Min(8),     // Log
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0], state);
        self.render_signals(frame, chunks[1], state);
        self.render_log(frame, chunks[2], state);

        if let Some(alert) = state.alerts.front() {
            self.render_alert(frame, alert);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &UiState) {
        let (mode, mode_color) = if state.simulation_mode {
            ("Simulation", Color::Cyan)
        } else {
            ("Live Trading", Color::Red)
        };

        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                format!("Status: {}", state.status),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | Mode: "),
            Span::styled(mode, Style::default().fg(mode_color)),
            Span::raw(" | 'r' run analysis, 'c' clear log, 'q' quit"),
        ])])
        .block(Block::default().borders(Borders::ALL).title("Scanner"));
        frame.render_widget(header, area);
    }

    fn render_signals(&self, frame: &mut Frame, area: Rect, state: &UiState) {
        let header_cells = ["Instrument", "Signal", "Price", "RSI", "Fib 100%", "Fib 0%"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1);

        let rows = state.reports.iter().map(|(name, analysis)| {
            let (signal, color) = match analysis.action {
                Some(SignalAction::Buy) => ("BUY", Color::Green),
                Some(SignalAction::Sell) => ("SELL", Color::Red),
                None => ("-", Color::DarkGray),
            };

            Row::new(vec![
                Cell::from(name.clone()),
                Cell::from(signal).style(Style::default().fg(color)),
                Cell::from(format!("{:.2}", analysis.last_price)),
                Cell::from(format!("{:.2}", analysis.rsi)),
                Cell::from(format!("{:.2}", analysis.fib.low)),
                Cell::from(format!("{:.2}", analysis.fib.high)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(20),
                Constraint::Percentage(12),
                Constraint::Percentage(17),
                Constraint::Percentage(17),
                Constraint::Percentage(17),
                Constraint::Percentage(17),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Latest Signals"));

        frame.render_widget(table, area);
    }

    fn render_log(&self, frame: &mut Frame, area: Rect, state: &UiState) {
        let visible = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = state
            .log
            .iter()
            .rev()
            .take(visible)
            .rev()
            .map(|m| Line::from(m.as_str()))
            .collect();

        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"));
        frame.render_widget(paragraph, area);
    }

    fn render_alert(&self, frame: &mut Frame, alert: &str) {
        let area = centered_rect(60, 20, frame.area());
        frame.render_widget(Clear, area);

        let popup = Paragraph::new(vec![
            Line::from(alert.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to dismiss",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Signal Alert")
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(popup, area);
    }
}

/// Center a rect of the given percentage size within `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
