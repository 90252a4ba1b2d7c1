//! Lab view: the protocol simulation terminal and the device panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::sim::Phase;
use crate::tui::app::App;
use crate::tui::device;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let brand = Style::default().fg(theme.brand).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.muted);

    let chunks = Layout::vertical([
        Constraint::Length(2), // heading
        Constraint::Min(0),    // terminal + devices
        Constraint::Length(1), // controls
    ])
    .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled("Laboratory.", brand)),
        Line::from(Span::styled("PROTOCOL SIMULATION SANDBOX", muted)),
    ])
    .block(Block::default().padding(Padding::new(4, 0, 0, 0)));
    frame.render_widget(heading, chunks[0]);

    let columns = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_terminal(frame, columns[0], app, theme);
    render_devices(frame, columns[1], app, theme);

    let controls = if app.sim.running() {
        Line::from(Span::styled(
            format!("  phase: {}  — run in progress", app.sim.phase().label()),
            muted,
        ))
    } else {
        Line::from(vec![
            Span::styled("  ⏎ ", Style::default().fg(theme.accent)),
            Span::styled("run protocol   ", muted),
            Span::styled("r ", Style::default().fg(theme.accent)),
            Span::styled("reset", muted),
        ])
    };
    frame.render_widget(Paragraph::new(controls), chunks[2]);
}

fn render_terminal(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let muted = Style::default().fg(theme.muted);

    let block = Block::bordered()
        .title(" PORTA_OS_CORE v4.2.0 ")
        .title_bottom(" TERMINAL_VAL_01 ")
        .border_style(Style::default().fg(theme.border))
        .title_style(muted);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .sim
        .log()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if entry.contains("SUCCESS") {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(format!("{:02} ", i + 1), muted),
                Span::styled(entry.clone(), style),
            ])
        })
        .collect();

    // Bottom-anchor once the log outgrows the panel.
    let visible = usize::from(inner.height);
    let scroll = lines.len().saturating_sub(visible);
    let terminal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(terminal, inner);
}

fn render_devices(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let phase = app.sim.phase();
    let fob_style = if phase == Phase::Scanning {
        Style::default().fg(theme.brand).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    let vault_style = match phase {
        Phase::Opening => Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        Phase::Delivered => Style::default().fg(theme.success),
        _ => Style::default().fg(theme.muted),
    };

    let mut lines: Vec<Line> = Vec::new();
    for art in device::key_fob() {
        lines.push(Line::from(Span::styled(*art, fob_style)));
    }
    lines.push(Line::default());
    for art in device::vault(app.sim.unlocked()) {
        lines.push(Line::from(Span::styled(*art, vault_style)));
    }

    let panel =
        Paragraph::new(lines).block(Block::default().padding(Padding::new(4, 0, 0, 0)));
    frame.render_widget(panel, area);
}
