mod scan_overlay;
mod status_bar;

pub use scan_overlay::ScanOverlayWidget;
pub use status_bar::StatusBarWidget;
