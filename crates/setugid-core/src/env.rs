//! Environment lookups gated on the privilege check

use crate::detector::PrivilegeDivergenceDetector;
use crate::error::{ProbeError, Result};
use log::debug;
use std::ffi::{OsStr, OsString};

/// Read an environment variable unless the process runs with elevated
/// privilege, in which case the environment is treated as empty.
pub fn safe_var<K: AsRef<OsStr>>(key: K) -> Option<OsString> {
    safe_var_with(&crate::active_detector(), key)
}

/// [`safe_var`] with an explicit detector
pub fn safe_var_with<D, K>(detector: &D, key: K) -> Option<OsString>
where
    D: PrivilegeDivergenceDetector + ?Sized,
    K: AsRef<OsStr>,
{
    let key = key.as_ref();
    if detector.is_privilege_elevated() {
        debug!("Ignoring {:?}: privilege elevated", key);
        return None;
    }
    std::env::var_os(key)
}

/// Ensure the environment may be trusted
pub fn require_trusted_environment() -> Result<()> {
    require_trusted_with(&crate::active_detector())
}

/// [`require_trusted_environment`] with an explicit detector
pub fn require_trusted_with<D>(detector: &D) -> Result<()>
where
    D: PrivilegeDivergenceDetector + ?Sized,
{
    if detector.is_privilege_elevated() {
        Err(ProbeError::PermissionDenied(
            "Process runs with elevated privilege; environment is not trusted".to_string(),
        ))
    } else {
        Ok(())
    }
}
