use crate::host::{HostEnvironment, Platform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarStyle {
    #[default]
    Default,
    LightContent,
    DarkContent,
}

impl StatusBarStyle {
    /// Style for dark text on a light background.
    ///
    /// Returns [`StatusBarStyle::DarkContent`] when the host supports a dark display
    /// mode and [`StatusBarStyle::Default`] otherwise.
    pub fn dark<H: HostEnvironment + ?Sized>(host: &H) -> Self {
        if host.supports_dark_display_mode() {
            StatusBarStyle::DarkContent
        } else {
            StatusBarStyle::Default
        }
    }

    /// Whether the platform has a status bar whose style an app controls.
    pub fn is_available_on(platform: Platform) -> bool {
        !matches!(
            platform,
            Platform::TvOs | Platform::WatchOs | Platform::MacOs
        )
    }
}
