//! Dashboard view: delivery history, remote controls, and telemetry.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Row, Table};

use crate::tui::app::App;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let brand = Style::default().fg(theme.brand).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.muted);

    let chunks = Layout::vertical([
        Constraint::Length(2), // heading
        Constraint::Min(0),    // table + side panel
    ])
    .split(area);

    let link = if app.system_link {
        Span::styled("● GLOBAL LINK ACTIVE", Style::default().fg(theme.success))
    } else {
        Span::styled("○ LINK OFFLINE", Style::default().fg(theme.warning))
    };
    let heading = Paragraph::new(vec![
        Line::from(Span::styled("Central Console.", brand)),
        Line::from(vec![
            Span::styled("REAL-TIME FLEET OPERATIONS | VALENCIA HUB   ", muted),
            link,
        ]),
    ])
    .block(Block::default().padding(Padding::new(4, 0, 0, 0)));
    frame.render_widget(heading, chunks[0]);

    let columns = Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);
    render_history(frame, columns[0], app, theme);
    render_controls(frame, columns[1], app, theme);
}

fn render_history(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let muted = Style::default().fg(theme.muted);

    let block = Block::bordered()
        .title(" DELIVERY LOGS ")
        .border_style(Style::default().fg(theme.border))
        .title_style(muted);

    let rows: Vec<Row> = app
        .history
        .list()
        .iter()
        .map(|record| {
            Row::new(vec![
                record.carrier.clone(),
                record.time.clone(),
                record.status.label().to_string(),
                record.package_id.clone(),
            ])
            .style(Style::default().fg(theme.text))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(22),
            Constraint::Percentage(23),
        ],
    )
    .header(
        Row::new(vec!["CARRIER", "TIME", "STATUS", "ID"])
            .style(muted.add_modifier(Modifier::BOLD)),
    )
    .block(block);
    frame.render_widget(table, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let muted = Style::default().fg(theme.muted);
    let text = Style::default().fg(theme.text);

    let lock = if app.master_lock {
        Span::styled("[ LOCKED ]", Style::default().fg(theme.brand))
    } else {
        Span::styled("[ OPEN ]", Style::default().fg(theme.warning))
    };
    let online = if app.system_link {
        Span::styled("[ ONLINE ]", Style::default().fg(theme.success))
    } else {
        Span::styled("[ OFFLINE ]", muted)
    };

    let lines = vec![
        Line::from(Span::styled("REMOTE CONTROLS", muted.add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(vec![
            Span::styled("m ", Style::default().fg(theme.accent)),
            Span::styled("Master Lock  ", text),
            lock,
        ]),
        Line::from(vec![
            Span::styled("l ", Style::default().fg(theme.accent)),
            Span::styled("System Link  ", text),
            online,
        ]),
        Line::default(),
        Line::from(Span::styled("TELEMETRY", muted.add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(vec![
            Span::styled("BOX TEMP  ", muted),
            Span::styled(
                format!("{:.1}°C", app.box_temp),
                Style::default().fg(theme.brand),
            ),
        ]),
        Line::from(vec![
            Span::styled("LATENCY   ", muted),
            Span::styled(
                format!("{:.0}ms", app.link_latency_ms),
                Style::default().fg(theme.brand),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::bordered()
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::new(1, 1, 0, 0)),
    );
    frame.render_widget(panel, area);
}
