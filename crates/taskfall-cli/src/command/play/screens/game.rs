use std::{cell::Cell, time::Duration};

use crossterm::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use taskfall_engine::{GameSession, GravityTick, ShapeId, SpawnError};

use crate::{
    tui::Runtime,
    ui::widgets::{BoardDisplay, CELL_WIDTH, StatsDisplay, style},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMode {
    Normal,
    /// Line editor for the task text of the next piece.
    EnteringTask { buffer: String },
    /// Popup showing a landed shape's task text.
    Inspecting { id: ShapeId },
}

#[derive(Debug)]
pub struct GameScreen {
    session: GameSession,
    gravity: Duration,
    mode: InputMode,
    board_full: bool,
    is_exiting: bool,
    /// Inner board area of the last draw, for mouse-to-cell translation.
    board_cells: Cell<Rect>,
}

impl GameScreen {
    pub fn new(session: GameSession, gravity: Duration) -> Self {
        Self {
            session,
            gravity,
            mode: InputMode::Normal,
            board_full: false,
            is_exiting: false,
            board_cells: Cell::new(Rect::ZERO),
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) {
        if let Some(key) = event.as_key_event() {
            match self.mode {
                InputMode::Normal => self.handle_normal_key(key.code),
                InputMode::EnteringTask { .. } => self.handle_entry_key(runtime, key.code),
                InputMode::Inspecting { .. } => self.handle_inspect_key(key.code),
            }
        } else if let Event::Mouse(mouse) = event {
            self.handle_mouse(*mouse);
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => _ = self.session.try_move_left(),
            KeyCode::Right => _ = self.session.try_move_right(),
            KeyCode::Up => _ = self.session.try_rotate(),
            KeyCode::Char('a') if self.session.falling_piece().is_none() => {
                self.board_full = false;
                self.mode = InputMode::EnteringTask {
                    buffer: String::new(),
                };
            }
            KeyCode::Char('q') => self.is_exiting = true,
            _ => {}
        }
    }

    fn handle_entry_key(&mut self, runtime: &mut Runtime, code: KeyCode) {
        let InputMode::EnteringTask { buffer } = &mut self.mode else {
            return;
        };
        match code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Enter => {
                if buffer.is_empty() {
                    return;
                }
                let task = std::mem::take(buffer);
                self.mode = InputMode::Normal;
                match self.session.spawn(task) {
                    // the gravity timer runs only while a piece is falling
                    Ok(()) => runtime.set_tick_interval(Some(self.gravity)),
                    Err(SpawnError::BoardFull) => {
                        self.board_full = true;
                        runtime.set_tick_interval(None);
                    }
                    Err(SpawnError::PieceActive) => {}
                }
            }
            _ => {}
        }
    }

    fn handle_inspect_key(&mut self, code: KeyCode) {
        let InputMode::Inspecting { id } = self.mode else {
            return;
        };
        match code {
            KeyCode::Char('d') | KeyCode::Delete => {
                self.session.delete_shape(id);
                self.mode = InputMode::Normal;
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.mode = InputMode::Normal,
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.mode != InputMode::Normal {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((col, row)) = cell_at(self.board_cells.get(), mouse.column, mouse.row) else {
            return;
        };
        if let Some(id) = self.session.select_at(col, row) {
            self.mode = InputMode::Inspecting { id };
        }
    }

    pub fn update(&mut self, runtime: &mut Runtime) {
        if self.session.falling_piece().is_none() {
            runtime.set_tick_interval(None);
            return;
        }
        match self.session.gravity_tick() {
            GravityTick::StillFalling => {}
            GravityTick::Landed { .. } | GravityTick::Idle => runtime.set_tick_interval(None),
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let board = BoardDisplay::new(self.session.board())
            .falling_piece(self.session.falling_piece())
            .block(
                Block::bordered()
                    .title(Line::from("TASKFALL").centered())
                    .style(style::DEFAULT),
            );
        let stats = StatsDisplay::new(&self.session).block(
            Block::bordered()
                .title(Line::from("TASKS").centered())
                .style(style::DEFAULT),
        );

        let help_text = match &self.mode {
            InputMode::Normal => {
                "Controls: ← → (Move) | ↑ (Rotate) | A (Add Task) | Click (Inspect) | Q (Quit)"
            }
            InputMode::EnteringTask { .. } => "Controls: Enter (Drop Task) | Esc (Cancel)",
            InputMode::Inspecting { .. } => "Controls: D (Delete Task) | Esc (Close)",
        };
        let help = Text::from(help_text).style(style::HELP).centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(BoardDisplay::height()),
            Constraint::Length(1),
        ])
        .areas::<2>(frame.area());
        let [board_area, side_area] = Layout::horizontal([
            Constraint::Length(BoardDisplay::width()),
            Constraint::Length(StatsDisplay::width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas::<2>(main_area);
        let [stats_area] = Layout::vertical([Constraint::Length(StatsDisplay::height())])
            .areas::<1>(side_area);

        self.board_cells.set(board_area.inner(Margin::new(1, 1)));

        frame.render_widget(&board, board_area);
        frame.render_widget(&stats, stats_area);
        frame.render_widget(help, help_area);

        match &self.mode {
            InputMode::Normal => {
                if self.board_full {
                    Self::draw_banner(frame, board_area);
                }
            }
            InputMode::EnteringTask { buffer } => Self::draw_entry_popup(frame, board_area, buffer),
            InputMode::Inspecting { id } => {
                Self::draw_inspect_popup(frame, board_area, &self.session.task_text(*id));
            }
        }
    }

    fn draw_banner(frame: &mut Frame<'_>, anchor: Rect) {
        let area = anchor.centered(Constraint::Length(BoardDisplay::width()), Constraint::Length(3));
        let block = Block::new().style(style::BANNER);
        let text = Text::styled("BOARD FULL", style::BANNER).centered();
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        frame.render_widget(text, inner.centered_vertically(Constraint::Length(1)));
    }

    fn draw_entry_popup(frame: &mut Frame<'_>, anchor: Rect, buffer: &str) {
        let area = anchor.centered(
            Constraint::Length(anchor.width.saturating_sub(2)),
            Constraint::Length(3),
        );
        let block = Block::bordered()
            .title(Line::from("Add Task").centered())
            .style(style::DEFAULT);
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(format!("{buffer}_")), inner);
    }

    fn draw_inspect_popup(frame: &mut Frame<'_>, anchor: Rect, task: &str) {
        let area = anchor.centered(
            Constraint::Length(anchor.width.saturating_sub(2)),
            Constraint::Length(6),
        );
        let block = Block::bordered()
            .title(Line::from("Task Details").centered())
            .style(style::DEFAULT);
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(task.to_owned()).wrap(Wrap { trim: false }),
            inner,
        );
    }
}

/// Translates a terminal position inside the drawn board to a grid cell.
fn cell_at(cells: Rect, x: u16, y: u16) -> Option<(i32, i32)> {
    if cells.is_empty() || !cells.contains(Position::new(x, y)) {
        return None;
    }
    let col = i32::from((x - cells.x) / CELL_WIDTH);
    let row = i32::from(y - cells.y);
    Some((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_translates_terminal_positions() {
        // inner board area at (5, 2), 20 columns x 18 rows
        let cells = Rect::new(5, 2, 20, 18);

        assert_eq!(cell_at(cells, 5, 2), Some((0, 0)));
        assert_eq!(cell_at(cells, 6, 2), Some((0, 0)));
        assert_eq!(cell_at(cells, 7, 2), Some((1, 0)));
        assert_eq!(cell_at(cells, 24, 19), Some((9, 17)));
    }

    #[test]
    fn test_cell_at_outside_the_board_is_none() {
        let cells = Rect::new(5, 2, 20, 18);

        assert_eq!(cell_at(cells, 4, 2), None);
        assert_eq!(cell_at(cells, 5, 1), None);
        assert_eq!(cell_at(cells, 25, 2), None);
        assert_eq!(cell_at(cells, 5, 20), None);
        assert_eq!(cell_at(Rect::ZERO, 0, 0), None);
    }
}
