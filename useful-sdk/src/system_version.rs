use crate::host::{HostEnvironment, NativeHost};
use std::cmp::Ordering;

/// OS version checks against a host, e.g. `SystemVersion::native().greater_or_equal_to("13.0")`.
///
/// The host is asked for its version on every call.
#[derive(Debug, Clone)]
pub struct SystemVersion<H> {
    host: H,
}

impl SystemVersion<NativeHost> {
    pub fn native() -> Self {
        Self::new(NativeHost)
    }
}

impl<H: HostEnvironment> SystemVersion<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn current(&self) -> String {
        self.host.current_version_string()
    }

    pub fn compare_to(&self, target: &str) -> Ordering {
        useful_version::compare(&self.current(), target)
    }

    pub fn equal_to(&self, target: &str) -> bool {
        useful_version::equal(&self.current(), target)
    }

    pub fn greater_than(&self, target: &str) -> bool {
        useful_version::greater(&self.current(), target)
    }

    pub fn greater_or_equal_to(&self, target: &str) -> bool {
        useful_version::greater_or_equal(&self.current(), target)
    }

    pub fn less_than(&self, target: &str) -> bool {
        useful_version::less(&self.current(), target)
    }

    pub fn less_or_equal_to(&self, target: &str) -> bool {
        useful_version::less_or_equal(&self.current(), target)
    }
}
