//! Platform convenience helpers: OS version checks, status-bar style selection
//! and decimal rounding.
//!
//! The host-facing parts go through [`HostEnvironment`], so every helper can be
//! driven by a [`StaticHost`] (or a [`HostProfile`] file) instead of a real device.

pub mod host;
pub mod profile;
pub mod status_bar;
pub mod system_version;
pub mod utils;

pub use host::{
    dark_content_supported, HostEnvironment, NativeHost, Platform, StaticHost,
    DARK_CONTENT_MIN_VERSION,
};
pub use profile::{HostProfile, ProfileError, HOST_PROFILE_ENV};
pub use status_bar::StatusBarStyle;
pub use system_version::SystemVersion;
pub use utils::{round_to_places, RoundToPlaces};

pub use useful_version as version;
