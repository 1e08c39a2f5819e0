//! Privilege divergence strategies
//!
//! Every strategy answers the same question: must this process distrust the
//! environment it inherited? They differ only in which kernel primitive they
//! consult. The strategies are generic over their sources so any of them can
//! be driven by fakes; [`crate::platform`] picks the one that fits the build
//! target and wires it to the live sources.

use crate::identity::IdentitySource;
use crate::sources::{AuxvSource, SetugidPrimitive};

/// Decides whether the effective privilege of a process has diverged from
/// the privilege of whoever started it
pub trait PrivilegeDivergenceDetector {
    /// Returns `true` when environment-derived trust must be suppressed
    fn is_privilege_elevated(&self) -> bool;
}

impl<T: PrivilegeDivergenceDetector + ?Sized> PrivilegeDivergenceDetector for &T {
    fn is_privilege_elevated(&self) -> bool {
        (**self).is_privilege_elevated()
    }
}

/// Targets without setuid or capabilities (Windows, WASI, UEFI, VxWorks)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrivilegeModel;

impl PrivilegeDivergenceDetector for NoPrivilegeModel {
    fn is_privilege_elevated(&self) -> bool {
        false
    }
}

/// Delegates to the kernel's own `issetugid` answer
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeSetugid<P> {
    primitive: P,
}

impl<P> NativeSetugid<P> {
    pub const fn new(primitive: P) -> Self {
        Self { primitive }
    }
}

impl<P: SetugidPrimitive> PrivilegeDivergenceDetector for NativeSetugid<P> {
    fn is_privilege_elevated(&self) -> bool {
        self.primitive.issetugid()
    }
}

/// Trusts the kernel's `AT_SECURE` flag.
///
/// The kernel sets it for setuid/setgid executions and for executables with
/// file capabilities, so it catches elevation that leaves the UID untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureExecFlag<A> {
    auxv: A,
}

impl<A> SecureExecFlag<A> {
    pub const fn new(auxv: A) -> Self {
        Self { auxv }
    }
}

impl<A: AuxvSource> PrivilegeDivergenceDetector for SecureExecFlag<A> {
    fn is_privilege_elevated(&self) -> bool {
        self.auxv.secure_flag() != 0
    }
}

/// Portable fallback: real and effective IDs must agree.
///
/// Misses capability-only elevation, but needs nothing from the kernel
/// beyond the four ID getters.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityComparison<I> {
    source: I,
}

impl<I> IdentityComparison<I> {
    pub const fn new(source: I) -> Self {
        Self { source }
    }
}

impl<I: IdentitySource> PrivilegeDivergenceDetector for IdentityComparison<I> {
    fn is_privilege_elevated(&self) -> bool {
        self.source.identity().diverges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;

    struct FakeSetugid(bool);

    impl SetugidPrimitive for FakeSetugid {
        fn issetugid(&self) -> bool {
            self.0
        }
    }

    struct FakeAuxv(u64);

    impl AuxvSource for FakeAuxv {
        fn secure_flag(&self) -> u64 {
            self.0
        }
    }

    struct FakeIdentity(Identity);

    impl IdentitySource for FakeIdentity {
        fn identity(&self) -> Identity {
            self.0
        }
    }

    #[test]
    fn no_privilege_model_is_never_elevated() {
        let detector = NoPrivilegeModel;
        for _ in 0..16 {
            assert!(!detector.is_privilege_elevated());
        }
    }

    #[test]
    fn native_setugid_passes_primitive_through() {
        assert!(NativeSetugid::new(FakeSetugid(true)).is_privilege_elevated());
        assert!(!NativeSetugid::new(FakeSetugid(false)).is_privilege_elevated());
    }

    #[test]
    fn secure_exec_flag_follows_flag() {
        assert!(!SecureExecFlag::new(FakeAuxv(0)).is_privilege_elevated());
        assert!(SecureExecFlag::new(FakeAuxv(1)).is_privilege_elevated());
        assert!(SecureExecFlag::new(FakeAuxv(u64::MAX)).is_privilege_elevated());
    }

    #[test]
    fn identity_comparison_covers_all_combinations() {
        let cases = [
            // (uid differs, gid differs, expected)
            (false, false, false),
            (true, false, true),
            (false, true, true),
            (true, true, true),
        ];

        for (uid_differs, gid_differs, expected) in cases {
            let identity = Identity {
                real_uid: 1000,
                effective_uid: if uid_differs { 0 } else { 1000 },
                real_gid: 1000,
                effective_gid: if gid_differs { 0 } else { 1000 },
            };
            let detector = IdentityComparison::new(FakeIdentity(identity));
            assert_eq!(
                detector.is_privilege_elevated(),
                expected,
                "uid_differs={} gid_differs={}",
                uid_differs,
                gid_differs
            );
        }
    }

    #[test]
    fn root_without_setuid_is_not_elevated() {
        let detector = IdentityComparison::new(FakeIdentity(Identity::unchanged(0, 0)));
        assert!(!detector.is_privilege_elevated());
    }

    #[test]
    fn detector_by_reference() {
        let detector = SecureExecFlag::new(FakeAuxv(1));
        let borrowed = &detector;
        assert!(borrowed.is_privilege_elevated());
        assert_eq!(
            borrowed.is_privilege_elevated(),
            detector.is_privilege_elevated()
        );
    }
}
