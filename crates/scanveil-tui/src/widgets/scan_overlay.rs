use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};

use scanveil_core::{OverlayFrame, ScanLine, ScanRect};

use crate::theme::{blend, Theme};

const LINE_GLYPH: &str = "━";

/// Draws an [`OverlayFrame`] whose coordinates are terminal cells relative to
/// the widget's area
pub struct ScanOverlayWidget<'a> {
    frame: &'a OverlayFrame,
    theme: &'a Theme,
    dim_backdrop: bool,
}

impl<'a> ScanOverlayWidget<'a> {
    pub fn new(frame: &'a OverlayFrame, theme: &'a Theme) -> Self {
        Self {
            frame,
            theme,
            dim_backdrop: true,
        }
    }

    pub fn dim_backdrop(mut self, dim: bool) -> Self {
        self.dim_backdrop = dim;
        self
    }

    fn render_backdrop(&self, area: Rect, scan: Option<Rect>, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.background));
        if !self.dim_backdrop {
            return;
        }
        // Without a scan area there is nothing to highlight
        let Some(scan) = scan else {
            return;
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let inside = x >= scan.left() && x < scan.right() && y >= scan.top() && y < scan.bottom();
                if !inside {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(self.theme.backdrop);
                    }
                }
            }
        }
    }

    fn render_line(&self, area: Rect, line: &ScanLine, buf: &mut Buffer) {
        if line.opacity <= 0.0 {
            return;
        }

        // Rows the line body may occupy, relative to `area`
        let track_top = line.track.y.round().max(0.0);
        let track_bottom = line.track.bottom().round().min(area.height as f64);
        if track_bottom <= track_top {
            return;
        }

        let rows = line.thickness.round().clamp(1.0, track_bottom - track_top);
        // y == track bottom belongs to the track's last row
        let top = line.y.floor().min(track_bottom - rows).max(track_top);
        let left = line.x.round().max(0.0);
        let right = (line.x + line.width).round().max(0.0);

        let color = blend(self.theme.line, self.theme.background, line.opacity);
        for row in 0..rows as u32 {
            let y = area.y as f64 + top + row as f64;
            let mut x = area.x as f64 + left;
            while x < (area.x as f64 + right).min(area.right() as f64) {
                if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                    cell.set_symbol(LINE_GLYPH).set_fg(color);
                }
                x += 1.0;
            }
        }
    }
}

impl Widget for ScanOverlayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scan = self.frame.scan_area.and_then(|rect| cell_rect(rect, area));
        self.render_backdrop(area, scan, buf);

        if let Some(scan) = scan {
            if scan.width >= 2 && scan.height >= 2 {
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.border))
                    .render(scan, buf);
            }
        }

        if let Some(line) = &self.frame.line {
            self.render_line(area, line, buf);
        }
    }
}

/// Snap a cell-unit rect onto the terminal grid, clipped to `area`
fn cell_rect(rect: ScanRect, area: Rect) -> Option<Rect> {
    let left = rect.x.round().max(0.0);
    let top = rect.y.round().max(0.0);
    let right = rect.right().round().min(area.width as f64);
    let bottom = rect.bottom().round().min(area.height as f64);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        area.x + left as u16,
        area.y + top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}
