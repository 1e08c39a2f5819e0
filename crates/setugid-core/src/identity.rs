//! Real and effective process identity

use serde::Serialize;

/// Real and effective user/group IDs of a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub real_uid: u32,
    pub effective_uid: u32,
    pub real_gid: u32,
    pub effective_gid: u32,
}

impl Identity {
    /// Identity of a process whose real and effective IDs agree
    pub const fn unchanged(uid: u32, gid: u32) -> Self {
        Self {
            real_uid: uid,
            effective_uid: uid,
            real_gid: gid,
            effective_gid: gid,
        }
    }

    pub fn uid_differs(&self) -> bool {
        self.real_uid != self.effective_uid
    }

    pub fn gid_differs(&self) -> bool {
        self.real_gid != self.effective_gid
    }

    /// True when either the user or the group pair differs
    pub fn diverges(&self) -> bool {
        self.uid_differs() || self.gid_differs()
    }
}

/// Supplies the identity of the process being judged
pub trait IdentitySource {
    fn identity(&self) -> Identity;
}

impl<T: IdentitySource + ?Sized> IdentitySource for &T {
    fn identity(&self) -> Identity {
        (**self).identity()
    }
}

/// Reads the calling process's IDs on every call
#[cfg(all(unix, not(target_os = "vxworks")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIdentity;

#[cfg(all(unix, not(target_os = "vxworks")))]
impl IdentitySource for ProcessIdentity {
    fn identity(&self) -> Identity {
        use nix::unistd::{getegid, geteuid, getgid, getuid};

        Identity {
            real_uid: getuid().as_raw(),
            effective_uid: geteuid().as_raw(),
            real_gid: getgid().as_raw(),
            effective_gid: getegid().as_raw(),
        }
    }
}
