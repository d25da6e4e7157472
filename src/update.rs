//! The update decision: record golden files, or compare against them.
//!
//! An [`UpdatePolicy`] answers one question per test case name: should this
//! assertion overwrite the golden file instead of comparing against it? The
//! default policy ignores the name and returns a process-wide flag, enabling
//! record mode for an entire run (`GOLDEN_UPDATE=1 cargo test`). Callers can
//! override the policy per harness, e.g. with a per-name allow-list closure.

use std::env;

use once_cell::sync::OnceCell;

/// Decides whether an assertion for `name` runs in update (record) mode.
pub trait UpdatePolicy {
    fn is_update(&self, name: &str) -> bool;
}

/// Any `Fn(&str) -> bool` closure is an update policy.
impl<F> UpdatePolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_update(&self, name: &str) -> bool {
        self(name)
    }
}

/// The default policy: the process-wide update flag, independent of `name`.
pub struct FlagPolicy;

impl UpdatePolicy for FlagPolicy {
    fn is_update(&self, _name: &str) -> bool {
        update_mode()
    }
}

static UPDATE_MODE: OnceCell<bool> = OnceCell::new();

const UPDATE_ENV: &str = "GOLDEN_UPDATE";

/// Sets the process-wide update flag. First write wins; once the flag has
/// been set or read it never changes, so concurrent readers need no locking.
///
/// Returns `false` if the flag was already resolved (by an earlier call or an
/// earlier read of the environment default).
pub fn set_update_mode(on: bool) -> bool {
    UPDATE_MODE.set(on).is_ok()
}

/// The process-wide update flag. On first read, falls back to the
/// `GOLDEN_UPDATE` environment variable (`1`, `true`, or `yes` switch it on).
pub fn update_mode() -> bool {
    *UPDATE_MODE.get_or_init(|| {
        env::var(UPDATE_ENV)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    })
}
