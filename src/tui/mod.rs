//! Ratatui-based terminal UI.
//!
//! One screen: an id input, the result message, the details panel (only while
//! an animal is shown) and the single action that currently applies.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::app::session::{Action, Session};
use crate::error::AppError;

/// Start the TUI.
pub fn run(session: Session) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::io("Failed to initialize terminal", e))?;

    let mut app = App::new(session);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::io("Failed to enable raw mode", e))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::io("Failed to enter alternate screen", e));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    session: Session,
}

impl App {
    fn new(session: Session) -> Self {
        Self { session }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::io("Terminal draw error", e))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100)).map_err(|e| AppError::io("Event poll error", e))? {
                continue;
            }

            match event::read().map_err(|e| AppError::io("Event read error", e))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply one key press. Returns `true` to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = self.session.view().action;

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('y') if ctrl => {
                if action == Some(Action::YieldMilk) {
                    self.session.yield_milk();
                }
            }
            KeyCode::Char('k') if ctrl => {
                if action == Some(Action::KickBack) {
                    self.session.kick_back();
                }
            }
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.session.push_char(c),
            KeyCode::Backspace => self.session.pop_char(),
            KeyCode::Enter => {
                debug!(input = self.session.input(), "check requested");
                self.session.check();
            }
            _ => {}
        }
        false
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let view = self.session.view();
        let details_height = if view.details.is_some() { 6 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(details_height),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_input(frame, chunks[1]);
        self.draw_result(frame, chunks[2]);
        if view.details.is_some() {
            self.draw_details(frame, chunks[3]);
        }
        self.draw_actions(frame, chunks[4]);
        self.draw_footer(frame, chunks[6]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("herd", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" - cow & goat checker ({} animals)", self.session.registry().len())),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_input(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let p = Paragraph::new(format!("{}_", self.session.input()))
            .block(Block::default().title("Animal ID").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.session.view().message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("Result").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_details(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(d) = &self.session.view().details else {
            return;
        };
        let label = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::from(vec![Span::styled("ID:    ", label), Span::raw(d.id.as_str())]),
            Line::from(vec![Span::styled("Age:   ", label), Span::raw(d.age.as_str())]),
            Line::from(vec![Span::styled("Teats: ", label), Span::raw(d.teats.as_str())]),
            Line::from(vec![Span::styled("Milk:  ", label), Span::raw(d.milk.as_str())]),
        ];
        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Details").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_actions(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = match self.session.view().action {
            Some(action) => {
                let key = match action {
                    Action::YieldMilk => "Ctrl+Y",
                    Action::KickBack => "Ctrl+K",
                };
                Line::from(vec![
                    Span::styled(
                        format!("[{key}] {}", action.label()),
                        Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ])
            }
            None => Line::from(Span::styled("-", Style::default().fg(Color::DarkGray))),
        };
        let p = Paragraph::new(line).block(Block::default().title("Action").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "type id  Enter check  Ctrl+Y milk  Ctrl+K kick  Esc quit";
        let p = Paragraph::new(Span::styled(help, Style::default().fg(Color::Gray)))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}
