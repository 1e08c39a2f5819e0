//! Build-time selection of the live detector

#[cfg(any(not(unix), target_os = "vxworks"))]
mod imp {
    use crate::detector::NoPrivilegeModel;
    use crate::strategy::Strategy;

    pub type ActiveDetector = NoPrivilegeModel;

    pub const STRATEGY: Strategy = Strategy::NoPrivilegeModel;

    pub const fn active_detector() -> ActiveDetector {
        NoPrivilegeModel
    }
}

#[cfg(any(target_os = "openbsd", target_os = "freebsd", target_os = "dragonfly"))]
mod imp {
    use crate::detector::NativeSetugid;
    use crate::sources::ProcessSetugid;
    use crate::strategy::Strategy;

    pub type ActiveDetector = NativeSetugid<ProcessSetugid>;

    pub const STRATEGY: Strategy = Strategy::NativeSetugid;

    pub const fn active_detector() -> ActiveDetector {
        NativeSetugid::new(ProcessSetugid)
    }
}

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    not(feature = "netcap-allow-env")
))]
mod imp {
    use crate::detector::SecureExecFlag;
    use crate::sources::ProcessAuxv;
    use crate::strategy::Strategy;

    pub type ActiveDetector = SecureExecFlag<ProcessAuxv>;

    pub const STRATEGY: Strategy = Strategy::SecureExecFlag;

    pub const fn active_detector() -> ActiveDetector {
        SecureExecFlag::new(ProcessAuxv)
    }
}

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    feature = "netcap-allow-env"
))]
mod imp {
    use crate::capabilities::{NARROW_CAPABILITY, OnlyCapability, ProcessCapabilities};
    use crate::detector::SecureExecFlag;
    use crate::sources::ProcessAuxv;
    use crate::strategy::Strategy;

    pub type ActiveDetector = OnlyCapability<SecureExecFlag<ProcessAuxv>, ProcessCapabilities>;

    pub const STRATEGY: Strategy = Strategy::SecureExecFlagNarrowed;

    pub const fn active_detector() -> ActiveDetector {
        OnlyCapability::new(
            SecureExecFlag::new(ProcessAuxv),
            ProcessCapabilities,
            NARROW_CAPABILITY,
        )
    }
}

#[cfg(all(
    unix,
    not(any(
        target_os = "vxworks",
        target_os = "openbsd",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "linux",
        target_os = "android"
    ))
))]
mod imp {
    use crate::detector::IdentityComparison;
    use crate::identity::ProcessIdentity;
    use crate::strategy::Strategy;

    pub type ActiveDetector = IdentityComparison<ProcessIdentity>;

    pub const STRATEGY: Strategy = Strategy::IdentityComparison;

    pub const fn active_detector() -> ActiveDetector {
        IdentityComparison::new(ProcessIdentity)
    }
}

pub use imp::{ActiveDetector, STRATEGY, active_detector};
