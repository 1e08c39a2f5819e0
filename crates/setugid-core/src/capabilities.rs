//! Exact-match capability test for the narrowing extension
//!
//! An executable carrying file capabilities starts with `AT_SECURE` set even
//! though its UID never changes. Servers granted `CAP_NET_BIND_SERVICE`
//! alone fall in that bucket; with the `netcap-allow-env` feature they may
//! keep reading their environment. Anything beyond that single capability,
//! including a superset of it, is still treated as elevated.

use crate::detector::PrivilegeDivergenceDetector;
use crate::error::{ProbeError, Result};
use caps::{CapSet, Capability, CapsHashSet};
use log::debug;

/// The only capability a secure execution may hold and still be trusted
pub const NARROW_CAPABILITY: Capability = Capability::CAP_NET_BIND_SERVICE;

/// Supplies the effective capability set of the process being judged
pub trait CapabilitySource {
    fn effective(&self) -> Result<CapsHashSet>;
}

impl<T: CapabilitySource + ?Sized> CapabilitySource for &T {
    fn effective(&self) -> Result<CapsHashSet> {
        (**self).effective()
    }
}

/// Reads the calling thread's effective set via `capget(2)`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCapabilities;

impl CapabilitySource for ProcessCapabilities {
    fn effective(&self) -> Result<CapsHashSet> {
        let known = caps::read(None, CapSet::Effective)
            .map_err(|e| ProbeError::Capability(format!("Failed to read effective set: {}", e)))?;
        reconcile(known, raw_effective_mask())
    }
}

/// `caps::read` drops bits it has no name for. Reject a set whose raw
/// kernel mask carries any of them so the comparison stays bit-for-bit.
fn reconcile(known: CapsHashSet, raw: Option<u64>) -> Result<CapsHashSet> {
    let Some(raw) = raw else {
        return Ok(known);
    };

    let mask = known.iter().fold(0u64, |acc, cap| acc | cap.bitmask());
    let unknown = raw & !mask;
    if unknown != 0 {
        return Err(ProbeError::Capability(format!(
            "Effective set holds unknown capability bits {:#x}",
            unknown
        )));
    }
    Ok(known)
}

/// `CapEff` of the calling thread from procfs, `None` without procfs
fn raw_effective_mask() -> Option<u64> {
    ["/proc/thread-self/status", "/proc/self/status"]
        .iter()
        .find_map(|path| std::fs::read_to_string(path).ok())
        .and_then(|status| parse_cap_eff(&status))
}

fn parse_cap_eff(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("CapEff:"))
        .and_then(|hex| u64::from_str_radix(hex.trim(), 16).ok())
}

/// `Ok(true)` iff the effective set is exactly `{cap}`
pub fn only_capability<C>(source: &C, cap: Capability) -> Result<bool>
where
    C: CapabilitySource + ?Sized,
{
    let reference: CapsHashSet = [cap].into_iter().collect();
    let effective = source.effective()?;
    Ok(effective == reference)
}

/// Whether the calling process holds `cap` and nothing else.
///
/// A failed probe counts as "does not hold only `cap`".
pub fn has_only_capability(cap: Capability) -> bool {
    only_capability(&ProcessCapabilities, cap).unwrap_or_else(|e| {
        debug!("Capability probe failed: {}", e);
        false
    })
}

/// Relaxes an inner detector for processes holding exactly one capability.
///
/// The capability source is only read when the inner detector reports
/// elevation.
#[derive(Debug, Clone, Copy)]
pub struct OnlyCapability<D, C> {
    inner: D,
    source: C,
    allowed: Capability,
}

impl<D, C> OnlyCapability<D, C> {
    pub const fn new(inner: D, source: C, allowed: Capability) -> Self {
        Self {
            inner,
            source,
            allowed,
        }
    }

    pub fn allowed(&self) -> Capability {
        self.allowed
    }
}

impl<D: PrivilegeDivergenceDetector, C: CapabilitySource> PrivilegeDivergenceDetector
    for OnlyCapability<D, C>
{
    fn is_privilege_elevated(&self) -> bool {
        if !self.inner.is_privilege_elevated() {
            return false;
        }

        match only_capability(&self.source, self.allowed) {
            Ok(true) => {
                debug!(
                    "Secure execution holding only {}, environment trusted",
                    self.allowed
                );
                false
            }
            Ok(false) => true,
            Err(e) => {
                debug!("Treating process as elevated: {}", e);
                true
            }
        }
    }
}
