//! File descriptor limit detection for capping concurrent directory reads (Unix).

/// File descriptors held by one in-flight directory read (the directory handle).
pub const FDS_PER_READ: usize = 1;

/// Fraction of the process FD limit the gate may use (leave headroom for other code).
const FD_LIMIT_FRACTION: f64 = 0.8;

/// Returns the soft limit for max open file descriptors, or `None` if unavailable (e.g. Windows).
#[cfg(unix)]
pub fn max_open_fds() -> Option<u64> {
    use std::mem::MaybeUninit;
    let mut rlim = MaybeUninit::<libc::rlimit>::uninit();
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, rlim.as_mut_ptr()) } != 0 {
        return None;
    }
    let rlim = unsafe { rlim.assume_init() };
    let cur = rlim.rlim_cur;
    // RLIM_INFINITY is typically !0 or u64::MAX; treat as "no practical limit"
    if cur == libc::RLIM_INFINITY || cur > i64::MAX as u64 {
        return None;
    }
    Some(cur)
}

#[cfg(not(unix))]
pub fn max_open_fds() -> Option<u64> {
    None
}

/// Largest admission gate capacity that stays under ~80% of the FD limit.
/// Returns `None` if no limit is available (use caller's default).
pub fn max_reads_by_fd_limit() -> Option<usize> {
    let limit = max_open_fds()?;
    let usable = (limit as f64 * FD_LIMIT_FRACTION) as usize;
    Some((usable / FDS_PER_READ).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fd_cap_is_positive_when_present() {
        if let Some(cap) = max_reads_by_fd_limit() {
            assert!(cap >= 1);
        }
    }
}
