use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First OS release whose status bar offers dark content.
pub const DARK_CONTENT_MIN_VERSION: &str = "13.0";

/// Reported when the running system's version cannot be determined.
pub const FALLBACK_VERSION: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    TvOs,
    WatchOs,
    MacOs,
    Linux,
    Windows,
    Unknown,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "ios" => Platform::Ios,
            "tvos" => Platform::TvOs,
            "watchos" => Platform::WatchOs,
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::Unknown,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Ios => "iOS",
            Platform::TvOs => "tvOS",
            Platform::WatchOs => "watchOS",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// What the helpers need to know about the environment they run in.
///
/// Implementations answer with plain values so that version checks and style
/// selection can be exercised without a real device.
pub trait HostEnvironment {
    fn platform(&self) -> Platform;

    /// Dotted-numeric OS version, e.g. `"16.4.1"`.
    fn current_version_string(&self) -> String;

    /// Whether the host advertises a dark-content display mode.
    ///
    /// Defaults to iOS at or above [`DARK_CONTENT_MIN_VERSION`].
    fn supports_dark_display_mode(&self) -> bool {
        dark_content_supported(self.platform(), &self.current_version_string())
    }
}

/// iOS at or above [`DARK_CONTENT_MIN_VERSION`].
pub fn dark_content_supported(platform: Platform, version: &str) -> bool {
    platform == Platform::Ios
        && useful_version::greater_or_equal(version, DARK_CONTENT_MIN_VERSION)
}

impl<H: HostEnvironment + ?Sized> HostEnvironment for &H {
    fn platform(&self) -> Platform {
        (**self).platform()
    }

    fn current_version_string(&self) -> String {
        (**self).current_version_string()
    }

    fn supports_dark_display_mode(&self) -> bool {
        (**self).supports_dark_display_mode()
    }
}

/// Host with fixed answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost {
    platform: Platform,
    version: String,
    dark_display_mode: Option<bool>,
}

impl StaticHost {
    pub fn new(platform: Platform, version: impl Into<String>) -> Self {
        Self {
            platform,
            version: version.into(),
            dark_display_mode: None,
        }
    }

    /// Overrides the version-derived dark-mode answer.
    pub fn with_dark_display_mode(mut self, supported: bool) -> Self {
        self.dark_display_mode = Some(supported);
        self
    }
}

impl HostEnvironment for StaticHost {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn current_version_string(&self) -> String {
        self.version.clone()
    }

    fn supports_dark_display_mode(&self) -> bool {
        self.dark_display_mode
            .unwrap_or_else(|| dark_content_supported(self.platform, &self.version))
    }
}

/// Host backed by the machine the process is running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl HostEnvironment for NativeHost {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn current_version_string(&self) -> String {
        match native_version() {
            Some(version) => {
                debug!("native {} version: {version}", Platform::current());
                version
            }
            None => {
                warn!(
                    "could not determine {} version, reporting {FALLBACK_VERSION}",
                    Platform::current()
                );
                FALLBACK_VERSION.to_string()
            }
        }
    }
}

/// Extracts `VERSION_ID` from the contents of an `os-release` file.
pub fn os_release_version_id(contents: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| line.trim().strip_prefix("VERSION_ID="))
        .map(|value| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .find(|value| !value.is_empty())
}

/// Leading run of digits and dots, e.g. `"6.8.0"` from `"6.8.0-31-generic"`.
pub fn numeric_prefix(text: &str) -> Option<&str> {
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let prefix = text[..end].trim_end_matches('.');
    (!prefix.is_empty()).then_some(prefix)
}

#[cfg(target_os = "macos")]
fn native_version() -> Option<String> {
    use std::process::Command;

    let output = Command::new("sw_vers").arg("-productVersion").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout);
    let version = text.trim();
    (!version.is_empty()).then(|| version.to_string())
}

#[cfg(target_os = "linux")]
fn native_version() -> Option<String> {
    const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

    OS_RELEASE_PATHS
        .iter()
        .filter_map(|path| std::fs::read_to_string(path).ok())
        .find_map(|contents| os_release_version_id(&contents))
        .or_else(kernel_release)
}

#[cfg(target_os = "linux")]
fn kernel_release() -> Option<String> {
    let mut name: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut name) } != 0 {
        return None;
    }
    let release = unsafe { std::ffi::CStr::from_ptr(name.release.as_ptr()) };
    numeric_prefix(&release.to_string_lossy()).map(str::to_string)
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn native_version() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_release_version_id_strips_quotes() {
        let contents = "NAME=\"Fedora Linux\"\nVERSION_ID=\"40\"\nID=fedora\n";
        assert_eq!(os_release_version_id(contents), Some("40".to_string()));
        assert_eq!(
            os_release_version_id("VERSION_ID=22.04\n"),
            Some("22.04".to_string())
        );
        assert_eq!(os_release_version_id("NAME=Arch\n"), None);
        assert_eq!(os_release_version_id("VERSION_ID=\"\"\n"), None);
    }

    #[test]
    fn numeric_prefix_stops_at_first_non_numeric() {
        assert_eq!(numeric_prefix("6.8.0-31-generic"), Some("6.8.0"));
        assert_eq!(numeric_prefix("6.18.44-fc-v130"), Some("6.18.44"));
        assert_eq!(numeric_prefix("13."), Some("13"));
        assert_eq!(numeric_prefix("rc1"), None);
    }

    #[test]
    fn dark_content_rule_is_shared_by_static_host_and_trait_default() {
        struct Plain(Platform, &'static str);

        impl HostEnvironment for Plain {
            fn platform(&self) -> Platform {
                self.0
            }

            fn current_version_string(&self) -> String {
                self.1.to_string()
            }
        }

        for (platform, version) in [
            (Platform::Ios, "12.9"),
            (Platform::Ios, "13"),
            (Platform::Ios, "16.4.1"),
            (Platform::TvOs, "17.0"),
            (Platform::Linux, "6.8"),
        ] {
            let expected = dark_content_supported(platform, version);
            assert_eq!(Plain(platform, version).supports_dark_display_mode(), expected);
            assert_eq!(StaticHost::new(platform, version).supports_dark_display_mode(), expected);
        }
        assert!(!dark_content_supported(Platform::Ios, "12.9"));
        assert!(dark_content_supported(Platform::Ios, "13"));
    }

    #[test]
    fn platform_display_uses_marketing_names() {
        assert_eq!(Platform::Ios.to_string(), "iOS");
        assert_eq!(Platform::TvOs.to_string(), "tvOS");
        assert_eq!(Platform::MacOs.to_string(), "macOS");
    }

    #[test]
    fn native_host_reports_some_version() {
        let version = NativeHost.current_version_string();
        assert!(!version.is_empty());
        assert_eq!(NativeHost.platform(), Platform::current());
    }
}
