//! Terminal interface: shell, views, chat overlay, and snapshot rendering.

mod app;
mod chat;
mod device;
mod screens;
mod theme;

use std::io;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

pub use app::App;

/// Runs the TUI until the user quits, restoring the terminal afterwards.
pub fn run(mut app: App) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

/// Renders one frame into an off-screen buffer and returns it as plain
/// text. Backs the `--snapshot` flag and the view tests.
pub fn render_snapshot(app: &App, width: u16, height: u16) -> io::Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| app.render(frame))?;

    let buffer = terminal.backend().buffer();
    let mut output = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use crate::gateway::CannedGateway;
    use crate::model::View;

    fn snapshot_of(view: View) -> String {
        let app = App::new(view, Arc::new(CannedGateway::new()));
        render_snapshot(&app, 100, 32).unwrap()
    }

    #[test]
    fn every_view_renders_with_nav_and_footer() {
        for &view in View::all_ordered() {
            let frame = snapshot_of(view);
            assert!(frame.contains("PORTA"), "nav missing on {view:?}");
            assert!(
                frame.contains("VALENCIA, SPAIN"),
                "footer missing on {view:?}"
            );
        }
    }

    #[test]
    fn lab_snapshot_shows_the_ready_terminal() {
        let frame = snapshot_of(View::Lab);
        assert!(frame.contains("PORTA_OS_CORE"));
        assert!(frame.contains("Ready for connection"));
    }

    #[test]
    fn dashboard_snapshot_shows_the_seeded_history() {
        let frame = snapshot_of(View::Dashboard);
        assert!(frame.contains("Amazon Prime"));
        assert!(frame.contains("UPS-9901"));
        assert!(frame.contains("LOCKED"));
    }

    #[test]
    fn delivered_run_shows_in_the_lab_terminal() {
        let mut app = App::new(View::Lab, Arc::new(CannedGateway::new()));
        let t0 = Instant::now();
        app.sim.start(t0);
        for offset in [1500, 3000, 5000] {
            app.tick(t0 + Duration::from_millis(offset));
        }

        let frame = render_snapshot(&app, 100, 32).unwrap();
        assert!(frame.contains("[SUCCESS] Package deposited"));
    }

    #[test]
    fn chat_overlay_renders_on_top() {
        let mut app = App::new(View::Home, Arc::new(CannedGateway::new()));
        app.chat.open = true;
        app.chat.input = "hola".to_string();

        let frame = render_snapshot(&app, 100, 32).unwrap();
        assert!(frame.contains("SUPPORT AI"));
        assert!(frame.contains("hola"));
    }
}
