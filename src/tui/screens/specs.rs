//! Specs view: hardware specification cards.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::theme::Theme;

const CARDS: &[(&str, &str)] = &[
    (
        "ENCLAVE PROCESSOR",
        "Dual-core ARM Cortex-M4 with hardware-backed cryptographic security.",
    ),
    (
        "ULTRA-FAST NETWORK",
        "5G NR module with fallback to Wi-Fi 6E and Bluetooth 5.3 Low Energy.",
    ),
    (
        "MONOLITHIC CHASSIS",
        "3.5mm cold-forged carbon steel, rated for impacts up to 500kg.",
    ),
    (
        "NIGHT VISION",
        "4K Sony Starvis IR sensor with courier biometric recognition.",
    ),
    (
        "CLIMATE CONTROL",
        "Passive cooling system for temperature-sensitive packages.",
    ),
    (
        "WEIGHT SENSORS",
        "High-precision load cells (±0.1g) to confirm every deposit.",
    ),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let brand = Style::default().fg(theme.brand).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.muted);
    let text = Style::default().fg(theme.text);

    let mut lines = vec![
        Line::from(Span::styled("Specifications.", brand)),
        Line::from(Span::styled(
            "TECHNICAL BREAKDOWN v4.1 | VALENCIA R&D",
            muted,
        )),
        Line::default(),
    ];
    for (title, data) in CARDS {
        lines.push(Line::from(vec![
            Span::styled("▪ ", muted),
            Span::styled(*title, brand),
        ]));
        lines.push(Line::from(Span::styled(format!("  {data}"), text)));
        lines.push(Line::default());
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(Block::default().padding(Padding::new(4, 4, 1, 0)));
    frame.render_widget(body, area);
}
