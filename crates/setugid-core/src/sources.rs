//! Kernel primitives that report a secure execution directly

/// A native "was this process started setuid/setgid" predicate
pub trait SetugidPrimitive {
    fn issetugid(&self) -> bool;
}

impl<T: SetugidPrimitive + ?Sized> SetugidPrimitive for &T {
    fn issetugid(&self) -> bool {
        (**self).issetugid()
    }
}

/// Reader for the kernel's `AT_SECURE` auxiliary vector entry
pub trait AuxvSource {
    /// Raw flag value; anything but zero means the kernel marked the
    /// execution as secure
    fn secure_flag(&self) -> u64;
}

impl<T: AuxvSource + ?Sized> AuxvSource for &T {
    fn secure_flag(&self) -> u64 {
        (**self).secure_flag()
    }
}

/// `issetugid(2)` of the calling process
#[cfg(any(target_os = "openbsd", target_os = "freebsd", target_os = "dragonfly"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSetugid;

#[cfg(any(target_os = "openbsd", target_os = "freebsd", target_os = "dragonfly"))]
impl SetugidPrimitive for ProcessSetugid {
    fn issetugid(&self) -> bool {
        unsafe { libc::issetugid() != 0 }
    }
}

/// `getauxval(AT_SECURE)` of the calling process
#[cfg(any(target_os = "linux", target_os = "android"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessAuxv;

#[cfg(any(target_os = "linux", target_os = "android"))]
impl AuxvSource for ProcessAuxv {
    fn secure_flag(&self) -> u64 {
        // Returns 0 when the entry is absent, which reads as "not secure".
        let value = unsafe { libc::getauxval(libc::AT_SECURE) };
        u64::from(value)
    }
}

#[cfg(test)]
mod tests {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    #[test]
    fn auxv_flag_is_clear_for_test_binary() {
        use super::*;

        // The test harness is never installed setuid or with file caps.
        assert_eq!(ProcessAuxv.secure_flag(), 0);
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    #[test]
    fn auxv_flag_is_stable() {
        use super::*;

        let first = ProcessAuxv.secure_flag();
        for _ in 0..8 {
            assert_eq!(ProcessAuxv.secure_flag(), first);
        }
    }
}
