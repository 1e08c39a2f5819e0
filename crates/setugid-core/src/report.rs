//! Diagnostic snapshot of every input behind the privilege decision

use crate::identity::Identity;
use crate::strategy::Strategy;
use serde::Serialize;

/// Live privilege state of the current process
#[derive(Debug, Clone, Serialize)]
pub struct PrivilegeReport {
    /// Strategy compiled into this build
    pub strategy: Strategy,
    /// `CAP_NET_BIND_SERVICE`-only processes are trusted
    pub narrowing: bool,
    /// Real/effective IDs (Unix only)
    pub identity: Option<Identity>,
    /// Raw `AT_SECURE` value (Linux/Android only)
    pub secure_flag: Option<u64>,
    /// Sorted effective capability names, `None` when not probed or the
    /// probe failed
    pub effective_capabilities: Option<Vec<String>>,
    /// Result of [`crate::is_privilege_elevated`]
    pub elevated: bool,
}

impl PrivilegeReport {
    /// Collect the current state of the calling process
    pub fn collect() -> Self {
        Self {
            strategy: Strategy::active(),
            narrowing: Strategy::active() == Strategy::SecureExecFlagNarrowed,
            identity: live_identity(),
            secure_flag: live_secure_flag(),
            effective_capabilities: live_capabilities(),
            elevated: crate::is_privilege_elevated(),
        }
    }

    pub fn is_trusted(&self) -> bool {
        !self.elevated
    }

    /// Get a human-readable summary of the report
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        let check = |ok: bool| if ok { "[ok]" } else { "[--]" };

        lines.push(format!(
            "Strategy: {} ({})",
            self.strategy.name(),
            self.strategy.description()
        ));

        if let Some(id) = &self.identity {
            lines.push(format!(
                "{} Real/effective UID ({}/{})",
                check(!id.uid_differs()),
                id.real_uid,
                id.effective_uid
            ));
            lines.push(format!(
                "{} Real/effective GID ({}/{})",
                check(!id.gid_differs()),
                id.real_gid,
                id.effective_gid
            ));
        }

        if let Some(flag) = self.secure_flag {
            lines.push(format!("{} AT_SECURE = {}", check(flag == 0), flag));
        }

        if let Some(caps) = &self.effective_capabilities {
            let held = if caps.is_empty() {
                "none".to_string()
            } else {
                caps.join(", ")
            };
            lines.push(format!("     Effective capabilities: {}", held));
        }

        if self.narrowing {
            lines.push("     CAP_NET_BIND_SERVICE-only processes are trusted".to_string());
        }

        lines.push(format!(
            "{} {}",
            check(self.is_trusted()),
            if self.is_trusted() {
                "Environment trusted"
            } else {
                "Privilege elevated: environment not trusted"
            }
        ));

        lines.join("\n")
    }
}

#[cfg(all(unix, not(target_os = "vxworks")))]
fn live_identity() -> Option<Identity> {
    use crate::identity::{IdentitySource, ProcessIdentity};

    Some(ProcessIdentity.identity())
}

#[cfg(not(all(unix, not(target_os = "vxworks"))))]
fn live_identity() -> Option<Identity> {
    None
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn live_secure_flag() -> Option<u64> {
    use crate::sources::{AuxvSource, ProcessAuxv};

    Some(ProcessAuxv.secure_flag())
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn live_secure_flag() -> Option<u64> {
    None
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn live_capabilities() -> Option<Vec<String>> {
    use crate::capabilities::{CapabilitySource, ProcessCapabilities};

    match ProcessCapabilities.effective() {
        Ok(set) => {
            let mut names: Vec<String> = set.iter().map(|cap| cap.to_string()).collect();
            names.sort_unstable();
            Some(names)
        }
        Err(e) => {
            log::debug!("{}", e);
            None
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn live_capabilities() -> Option<Vec<String>> {
    None
}
