//! Names for the detection strategies a build can select

use serde::Serialize;

/// Which detection branch was compiled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// No setuid or capability concept on this target; never elevated
    NoPrivilegeModel,
    /// The kernel's `issetugid(2)` answer, unmodified
    NativeSetugid,
    /// The kernel's `AT_SECURE` auxiliary vector flag
    SecureExecFlag,
    /// `AT_SECURE`, relaxed when only `CAP_NET_BIND_SERVICE` is held
    SecureExecFlagNarrowed,
    /// Real vs effective UID/GID comparison
    IdentityComparison,
}

impl Strategy {
    /// The strategy selected for this build
    pub const fn active() -> Self {
        crate::platform::STRATEGY
    }

    /// Get all strategies
    pub fn all() -> Vec<Self> {
        vec![
            Strategy::NoPrivilegeModel,
            Strategy::NativeSetugid,
            Strategy::SecureExecFlag,
            Strategy::SecureExecFlagNarrowed,
            Strategy::IdentityComparison,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::NoPrivilegeModel => "no-privilege-model",
            Strategy::NativeSetugid => "native-setugid",
            Strategy::SecureExecFlag => "secure-exec-flag",
            Strategy::SecureExecFlagNarrowed => "secure-exec-flag-narrowed",
            Strategy::IdentityComparison => "identity-comparison",
        }
    }

    /// Get description of strategy
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::NoPrivilegeModel => "Target has no privilege model (Windows, WASI, UEFI)",
            Strategy::NativeSetugid => "issetugid(2) (OpenBSD, FreeBSD, DragonFly)",
            Strategy::SecureExecFlag => "getauxval(AT_SECURE) (Linux, Android)",
            Strategy::SecureExecFlagNarrowed => {
                "getauxval(AT_SECURE), trusting CAP_NET_BIND_SERVICE-only processes"
            }
            Strategy::IdentityComparison => "Real vs effective UID/GID (other Unix)",
        }
    }
}
