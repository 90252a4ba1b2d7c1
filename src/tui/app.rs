//! Application shell: owned state, event loop, and frame layout.
//!
//! All mutable state lives here and is touched only on the UI thread. The
//! loop polls input with a short timeout, then runs one tick: fire a due
//! simulation transition, drain any finished chat reply, and wobble the
//! mock telemetry. The chat round trip is the only real async work; it
//! runs as a spawned task and reports back over a channel.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;
use ratatui::DefaultTerminal;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::gateway::SupportGateway;
use crate::history::DeliveryHistory;
use crate::model::View;
use crate::sim::{Phase, SimEvent, Simulation};

use super::chat::ChatPanel;
use super::screens;
use super::theme::Theme;

/// How often the telemetry readouts wobble.
const WOBBLE_INTERVAL: Duration = Duration::from_secs(1);

pub struct App {
    pub view: View,
    pub scroll: u16,
    pub sim: Simulation,
    pub history: DeliveryHistory,
    pub chat: ChatPanel,

    /// Dashboard toggles. The master lock mirrors the simulation's unlock
    /// flag while a run plays out.
    pub master_lock: bool,
    pub system_link: bool,

    /// Mock telemetry, nudged per tick for visual life.
    pub box_temp: f64,
    pub link_latency_ms: f64,

    gateway: Arc<dyn SupportGateway>,
    reply_tx: UnboundedSender<String>,
    reply_rx: UnboundedReceiver<String>,
    last_wobble: Instant,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(view: View, gateway: Arc<dyn SupportGateway>) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Self {
            view,
            scroll: 0,
            sim: Simulation::new(),
            history: DeliveryHistory::seeded(),
            chat: ChatPanel::new(),
            master_lock: true,
            system_link: true,
            box_temp: 18.4,
            link_latency_ms: 4.0,
            gateway,
            reply_tx,
            reply_rx,
            last_wobble: Instant::now(),
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// Runs the event loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.on_key(key);
                    }
                }
            }

            self.tick(Instant::now());

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// One update pass: simulation deadline, chat reply drain, telemetry.
    pub fn tick(&mut self, now: Instant) {
        match self.sim.tick(now) {
            Some(SimEvent::Advanced(Phase::Opening)) => self.master_lock = false,
            Some(SimEvent::Completed(record)) => {
                self.master_lock = true;
                self.history.prepend(record);
            }
            _ => {}
        }

        while let Ok(reply) = self.reply_rx.try_recv() {
            self.chat.finish_reply(reply);
        }

        if now.duration_since(self.last_wobble) >= WOBBLE_INTERVAL {
            let mut rng = rand::thread_rng();
            self.box_temp = (self.box_temp + rng.gen_range(-0.1..=0.1)).clamp(18.0, 18.8);
            self.link_latency_ms = rng.gen_range(3.0_f64..=6.0).round();
            self.last_wobble = now;
        }
    }

    /// Switches views. Side effect: content scrolls back to the top.
    pub fn navigate(&mut self, view: View) {
        self.view = view;
        self.scroll = 0;
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.chat.open {
            match key.code {
                KeyCode::Esc => self.chat.open = false,
                KeyCode::Enter => self.submit_chat(),
                KeyCode::Backspace => {
                    self.chat.input.pop();
                }
                KeyCode::Char(c) => self.chat.input.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') => self.chat.open = true,
            KeyCode::Tab => self.navigate(self.view.next()),
            KeyCode::BackTab => self.navigate(self.view.prev()),
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(view) = View::from_number_key(c) {
                    self.navigate(view);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Enter if self.view == View::Lab => {
                self.sim.start(Instant::now());
            }
            KeyCode::Char('r') if self.view == View::Lab => self.sim.reset(),
            KeyCode::Char('m') if self.view == View::Dashboard => {
                self.master_lock = !self.master_lock;
            }
            KeyCode::Char('l') if self.view == View::Dashboard => {
                self.system_link = !self.system_link;
            }
            _ => {}
        }
    }

    /// Sends the chat input to the gateway, if there is anything to send.
    ///
    /// The `loading` flag gates duplicate submits; an outstanding call is
    /// never cancelled. A gateway failure becomes an empty reply.
    pub fn submit_chat(&mut self) {
        if self.chat.loading {
            return;
        }
        let Some(question) = self.chat.take_input() else {
            return;
        };
        self.chat.push_user(question.clone());
        self.chat.loading = true;

        let gateway = Arc::clone(&self.gateway);
        let tx = self.reply_tx.clone();
        tokio::spawn(async move {
            let reply = match gateway.ask(&question).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(gateway = gateway.name(), error = %e, "support gateway call failed");
                    String::new()
                }
            };
            // The receiver only goes away on shutdown.
            let _ = tx.send(reply);
        });
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // navigation
            Constraint::Min(0),    // view body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

        self.render_nav(frame, chunks[0]);
        match self.view {
            View::Home => screens::home::render(frame, chunks[1], self, &self.theme),
            View::Specs => screens::specs::render(frame, chunks[1], self, &self.theme),
            View::Lab => screens::lab::render(frame, chunks[1], self, &self.theme),
            View::Dashboard => screens::dashboard::render(frame, chunks[1], self, &self.theme),
        }
        self.render_footer(frame, chunks[2]);

        if self.chat.open {
            let area = ChatPanel::overlay_area(frame.area());
            self.chat.render(frame, area, &self.theme);
        }
    }

    fn render_nav(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                " ◼ PORTA  ",
                Style::default()
                    .fg(self.theme.brand)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        for &view in View::all_ordered() {
            let style = if view == self.view {
                Style::default()
                    .fg(self.theme.brand)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted)
            };
            spans.push(Span::styled(
                format!("{} {}   ", view.number_key(), view.label()),
                style,
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Line::from(Span::styled(
            " ENGINEERED IN VALENCIA, SPAIN © 2026 PORTA SYSTEMS  ·  tab cycle  c chat  q quit",
            Style::default().fg(self.theme.muted),
        ));
        frame.render_widget(Paragraph::new(footer), area);
    }
}
