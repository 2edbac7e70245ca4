use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use scanveil_core::Clock;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let theme = &app.theme;
        let overlay = &app.overlay;

        let (mode_str, mode_color) = if overlay.is_animating() {
            ("RUNNING", theme.accent)
        } else {
            ("IDLE", theme.muted)
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let position = overlay
                .line_position()
                .map(|p| format!("{:>3.0}%", p * 100.0))
                .unwrap_or_else(|| "  -".to_string());
            format!(
                " | {} | {:.1}s | line {}",
                overlay.config().waveform.label(),
                overlay.config().period.as_secs_f64(),
                position
            )
        };

        let help_hint = " q:quit space:scan w:wave +/-:speed ";
        let used = mode_str.len() + 1 + status_text.chars().count() + help_hint.len();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                format!(" {}", mode_str),
                Style::default()
                    .fg(mode_color)
                    .bg(theme.status_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                status_text,
                Style::default().fg(theme.status_fg).bg(theme.status_bg),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status_bg)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.muted).bg(theme.status_bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
