//! Home view: brand hero and product pitch.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::device;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let brand = Style::default().fg(theme.brand).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.muted);
    let text = Style::default().fg(theme.text);
    let accent = Style::default().fg(theme.accent);

    let mut lines = vec![
        Line::from(Span::styled("⚡ VALENCIA ENGINEERING", muted)),
        Line::default(),
        Line::from(Span::styled("P O R T A", brand)),
        Line::from(Span::styled("S Y S T E M S", muted.add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(Span::styled(
            "The definitive infrastructure for the smart home.",
            text,
        )),
        Line::from(Span::styled(
            "Military-grade security for the last mile of delivery,",
            text,
        )),
        Line::from(Span::styled(
            "engineered in the heart of Valencia.",
            text,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[3]", accent),
            Span::styled(" Try the demo    ", text),
            Span::styled("[2]", accent),
            Span::styled(" Hardware", text),
        ]),
        Line::default(),
    ];
    for art in device::key_fob() {
        lines.push(Line::from(Span::styled(*art, muted)));
    }

    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(Block::default().padding(Padding::new(4, 4, 1, 0)));
    frame.render_widget(hero, area);
}
