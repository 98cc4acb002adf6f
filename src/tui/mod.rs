// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The input adapter: a button-grid keypad (ratatui + crossterm) that maps
//! clicks and focus presses to engine events and pulls the two display lines
//! after every press. The engine never sees a widget.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::Calculator;
use crate::ops;
use crate::render::{display_lines, DisplayLines};

mod keypad;
mod theme;

use keypad::GRID_COLS;
use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅽 🅰 🅸 🅰 🅳  ";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

const DISPLAY_HEIGHT: u16 = 4;
const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Runs the interactive terminal UI until the user quits.
pub fn run() -> Result<(), Box<dyn Error>> {
    // Resolve the theme before touching the terminal so a bad env var fails
    // cleanly on stderr.
    let theme = TuiTheme::from_env()?;

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

struct App {
    calc: Calculator,
    theme: TuiTheme,
    /// Focused keypad position as (row, column) into [`keypad::ROWS`].
    focus: (usize, usize),
    /// Button hit regions recorded during the last draw.
    button_areas: Vec<(Rect, (usize, usize))>,
    should_quit: bool,
}

impl App {
    fn new(theme: TuiTheme) -> Self {
        Self {
            calc: Calculator::new(),
            theme,
            // Start on "5", the center of the digit block.
            focus: (2, 1),
            button_areas: Vec::new(),
            should_quit: false,
        }
    }

    fn display(&self) -> DisplayLines {
        display_lines(&self.calc)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => self.move_focus(0, -1),
            KeyCode::Right => self.move_focus(0, 1),
            KeyCode::Up => self.move_focus(-1, 0),
            KeyCode::Down => self.move_focus(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => self.press_focused(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(position) = self.button_at(mouse.column, mouse.row) {
            self.focus = position;
            self.press_focused();
        }
    }

    fn move_focus(&mut self, row_delta: isize, col_delta: isize) {
        let (row, col) = self.focus;
        let row = row.saturating_add_signed(row_delta).min(keypad::ROWS.len() - 1);
        let col = col.saturating_add_signed(col_delta).min(keypad::ROWS[row].len() - 1);
        self.focus = (row, col);
    }

    fn press_focused(&mut self) {
        let (row, col) = self.focus;
        if let Some(button) = keypad::button(row, col) {
            ops::apply_input(&mut self.calc, button.input);
        }
    }

    fn button_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        self.button_areas
            .iter()
            .find(|(rect, _)| rect_contains(*rect, x, y))
            .map(|(_, position)| *position)
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_display(frame, app, layout[0]);
    draw_keypad(frame, app, layout[1]);

    let footer = Paragraph::new(footer_help_line()).style(app.theme.base_style());
    frame.render_widget(footer, layout[2]);
}

fn draw_display(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = app.display();
    let text = Text::from(vec![
        Line::styled(lines.previous().to_owned(), app.theme.pending_style()),
        Line::styled(lines.current().to_owned(), app.theme.entry_style()),
    ]);

    let panel = Paragraph::new(text).alignment(Alignment::Right).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" naiad ")
            .border_style(app.theme.panel_border_style(false))
            .style(app.theme.base_style()),
    );
    frame.render_widget(panel, area);
}

fn draw_keypad(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    app.button_areas.clear();

    let grid = centered_rect(
        area,
        GRID_COLS * CELL_WIDTH,
        keypad::ROWS.len() as u16 * CELL_HEIGHT,
    );

    for (row_idx, row) in keypad::ROWS.iter().enumerate() {
        let y = grid.y.saturating_add(row_idx as u16 * CELL_HEIGHT);
        let mut x = grid.x;
        for (col_idx, button) in row.iter().enumerate() {
            let width = button.span * CELL_WIDTH;
            let cell = Rect::new(x, y, width, CELL_HEIGHT).intersection(area);
            x = x.saturating_add(width);
            if cell.width == 0 || cell.height == 0 {
                continue;
            }

            let focused = app.focus == (row_idx, col_idx);
            let widget = Paragraph::new(button.label).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(app.theme.panel_border_style(focused))
                    .style(app.theme.button_label_style(focused)),
            );
            frame.render_widget(widget, cell);
            app.button_areas.push((cell, (row_idx, col_idx)));
        }
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn footer_help_line() -> Line<'static> {
    let label = Style::default().fg(FOOTER_LABEL_COLOR);
    let key = Style::default().fg(FOOTER_KEY_COLOR);
    Line::from(vec![
        Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)),
        Span::styled("←↑↓→", key),
        Span::styled(" move  ", label),
        Span::styled("⏎", key),
        Span::styled(" press  ", label),
        Span::styled("click", key),
        Span::styled(" press  ", label),
        Span::styled("q", key),
        Span::styled(" quit", label),
    ])
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
