//! Support chat panel: transcript state and the floating overlay.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::model::{ChatMessage, ChatRole};

use super::theme::Theme;

/// State for the chat overlay: open flag, input buffer, loading gate, and
/// the append-only transcript.
#[derive(Debug, Default)]
pub struct ChatPanel {
    pub open: bool,
    pub input: String,
    pub loading: bool,
    pub messages: Vec<ChatMessage>,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the trimmed input, if there is anything to submit.
    ///
    /// Whitespace-only input yields `None` and the buffer is left alone, so
    /// an accidental Enter does nothing.
    pub fn take_input(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        Some(text.trim().to_string())
    }

    pub fn push_user(&mut self, text: String) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text,
        });
    }

    /// Records the assistant's reply and clears the loading gate.
    ///
    /// An empty reply is still appended: a failed gateway call shows as a
    /// blank assistant line rather than an error state.
    pub fn finish_reply(&mut self, text: String) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text,
        });
        self.loading = false;
    }

    /// The overlay rectangle: anchored bottom-right, clamped to the frame.
    pub fn overlay_area(frame_area: Rect) -> Rect {
        let width = frame_area.width.saturating_sub(2).min(44);
        let height = frame_area.height.saturating_sub(2).min(18);
        Rect {
            x: frame_area.right().saturating_sub(width + 1),
            y: frame_area.bottom().saturating_sub(height + 1),
            width,
            height,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);
        let block = Block::bordered()
            .title(" SUPPORT AI ")
            .border_style(Style::default().fg(theme.border))
            .title_style(Style::default().fg(theme.brand).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

        let mut lines: Vec<Line> = Vec::new();
        for message in &self.messages {
            let (prefix, style) = match message.role {
                ChatRole::User => ("you ", Style::default().fg(theme.accent)),
                ChatRole::Assistant => ("porta ", Style::default().fg(theme.text)),
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
                Span::styled("› ", Style::default().fg(theme.muted)),
                Span::styled(message.text.clone(), style),
            ]));
        }
        if self.loading {
            lines.push(Line::from(Span::styled(
                "consulting porta cloud...",
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            )));
        }

        // Bottom-anchor the transcript once it outgrows the panel.
        let visible = usize::from(chunks[0].height);
        let scroll = lines.len().saturating_sub(visible);
        let transcript = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
        frame.render_widget(transcript, chunks[0]);

        let input = Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(self.input.clone(), Style::default().fg(theme.brand)),
            Span::styled("▌", Style::default().fg(theme.accent)),
        ]));
        frame.render_widget(input, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_input_is_not_submittable() {
        let mut panel = ChatPanel::new();
        panel.input = "   ".to_string();
        assert!(panel.take_input().is_none());
        assert_eq!(panel.input, "   ");
    }

    #[test]
    fn take_input_trims_and_clears_the_buffer() {
        let mut panel = ChatPanel::new();
        panel.input = "  is it waterproof?  ".to_string();
        assert_eq!(panel.take_input().as_deref(), Some("is it waterproof?"));
        assert!(panel.input.is_empty());
    }

    #[test]
    fn finish_reply_appends_even_empty_text() {
        let mut panel = ChatPanel::new();
        panel.loading = true;
        panel.finish_reply(String::new());
        assert!(!panel.loading);
        assert_eq!(panel.messages.len(), 1);
        assert_eq!(panel.messages[0].role, ChatRole::Assistant);
        assert!(panel.messages[0].text.is_empty());
    }

    #[test]
    fn overlay_fits_inside_a_small_frame() {
        let area = ChatPanel::overlay_area(Rect::new(0, 0, 30, 10));
        assert!(area.right() <= 30);
        assert!(area.bottom() <= 10);
    }
}
