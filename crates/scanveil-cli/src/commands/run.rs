use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use scanveil_core::AppConfig;
use scanveil_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    load_theme,
    widgets::{ScanOverlayWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, paused: bool) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("scanveil"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, paused);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
    paused: bool,
) -> Result<()> {
    let theme = load_theme(&config.ui.theme);
    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.animation.tick_duration(),
    );
    let dim_backdrop = config.ui.dim_backdrop;

    let mut app = App::new(config, theme);

    // The preview opens like a scanner screen: already sweeping
    if !paused {
        app.begin_session();
    }

    loop {
        app.update();

        terminal.draw(|frame| {
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            app.resize(main_layout[0]);
            let overlay_frame = app.current_frame();
            frame.render_widget(
                ScanOverlayWidget::new(&overlay_frame, &app.theme).dim_backdrop(dim_backdrop),
                main_layout[0],
            );
            StatusBarWidget::render(frame, main_layout[1], &app);
        })?;

        if let Some(event) = event_handler.next(app.overlay.needs_frame())? {
            match event {
                AppEvent::Key(key) => app.apply(handle_key_event(key)),
                // Next draw picks up the new size
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.end_session();
    Ok(())
}
