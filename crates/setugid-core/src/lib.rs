//! setugid-core: decide whether a process may trust its environment
//!
//! A setuid/setgid program, or one started with file capabilities, inherits
//! environment variables, a working directory and descriptors from a less
//! privileged parent. Code that reads configuration from the environment
//! must refuse to do so in that case. This crate provides:
//! - [`is_privilege_elevated`], the build-selected predicate
//! - The individual strategies, generic over injectable sources
//! - The optional `netcap-allow-env` narrowing for `CAP_NET_BIND_SERVICE`
//! - [`env::safe_var`] and a diagnostic [`report::PrivilegeReport`]

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod capabilities;
pub mod detector;
pub mod env;
pub mod error;
pub mod identity;
mod platform;
pub mod report;
pub mod sources;
pub mod strategy;

pub use detector::PrivilegeDivergenceDetector;
pub use error::{ProbeError, Result};
pub use platform::{ActiveDetector, active_detector};
pub use strategy::Strategy;

/// Returns `true` when the process's effective privilege differs from the
/// privilege it was started with and the environment must not be trusted.
///
/// Never fails and never blocks; live state is re-read on every call.
pub fn is_privilege_elevated() -> bool {
    let elevated = active_detector().is_privilege_elevated();
    log::debug!(
        "{}: privilege {}",
        Strategy::active().name(),
        if elevated { "elevated" } else { "unchanged" }
    );
    elevated
}
