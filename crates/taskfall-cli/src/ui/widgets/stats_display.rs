use ratatui::{
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use taskfall_engine::GameSession;

use crate::ui::widgets::style;

/// Side panel with the session counters.
#[derive(Debug)]
pub struct StatsDisplay<'a> {
    session: &'a GameSession,
    block: Option<Block<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    #[must_use]
    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[must_use]
    pub fn width() -> u16 {
        20
    }

    #[must_use]
    pub fn height() -> u16 {
        7
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let stats = self.session.stats();
        let lines = vec![
            Line::from(format!("Pending   {:>5}", self.session.pending_tasks())),
            Line::from(format!("Landed    {:>5}", stats.landed_pieces())),
            Line::from(format!("Rows      {:>5}", stats.cleared_rows())),
            Line::from(format!("Cleared   {:>5}", stats.cleared_shapes())),
            Line::from(format!("Deleted   {:>5}", stats.deleted_shapes())),
        ];
        let mut paragraph = Paragraph::new(lines).style(style::DEFAULT);
        if let Some(block) = self.block.clone() {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
