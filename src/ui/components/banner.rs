//! Transient success/error banners shown at the top of a page.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tokio::task::AbortHandle;

use crate::ui::core::BannerKind;

/// One banner slot.
///
/// Every change bumps `generation`. A pending clear timer only applies to the
/// generation it was armed for, and is aborted as soon as the slot changes.
#[derive(Debug, Default)]
pub struct BannerSlot {
    text: Option<String>,
    generation: u64,
    timer: Option<AbortHandle>,
}

impl BannerSlot {
    /// Replace the message, cancelling any pending clear. Returns the new generation.
    pub fn set(&mut self, text: String) -> u64 {
        self.cancel_timer();
        self.generation += 1;
        self.text = Some(text);
        self.generation
    }

    /// Attach the clear timer for the current generation
    pub fn arm(&mut self, timer: AbortHandle) {
        self.cancel_timer();
        self.timer = Some(timer);
    }

    /// Handle a fired timer; returns true if the banner was cleared
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.text.is_none() {
            return false;
        }
        self.timer = None;
        self.text = None;
        true
    }

    pub fn clear(&mut self) {
        self.cancel_timer();
        if self.text.take().is_some() {
            self.generation += 1;
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// The success and error banner of one page
#[derive(Debug, Default)]
pub struct Banners {
    pub success: BannerSlot,
    pub error: BannerSlot,
}

impl Banners {
    pub fn slot_mut(&mut self, kind: BannerKind) -> &mut BannerSlot {
        match kind {
            BannerKind::Success => &mut self.success,
            BannerKind::Error => &mut self.error,
        }
    }

    pub fn slot(&self, kind: BannerKind) -> &BannerSlot {
        match kind {
            BannerKind::Success => &self.success,
            BannerKind::Error => &self.error,
        }
    }

    pub fn clear_all(&mut self) {
        self.success.clear();
        self.error.clear();
    }

    /// Number of terminal rows the visible banners occupy
    pub fn height(&self) -> u16 {
        u16::from(self.error.text().is_some()) + u16::from(self.success.text().is_some())
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        if let Some(text) = self.error.text() {
            lines.push(Line::styled(
                text.to_string(),
                Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(text) = self.success.text() {
            lines.push(Line::styled(
                text.to_string(),
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        }
        if !lines.is_empty() {
            f.render_widget(Paragraph::new(lines), area);
        }
    }
}
