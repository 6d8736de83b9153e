//! Once-per-session display
//!
//! [`OnceGate`] answers "show this now?" with `true` exactly once per flag
//! for the lifetime of its backing [`ExclusionStore`]. Backed by a
//! [`MemoryExclusionStore`](crate::MemoryExclusionStore), that lifetime is
//! the process, i.e. one session.

use crate::exclusion::ExclusionStore;
use faqih_core::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Flag used by [`pick_daily`]
pub const DAILY_LATIFA_FLAG: &str = "latifa_shown_session";

/// Grants each flag once
#[derive(Clone)]
pub struct OnceGate {
    shown: Arc<dyn ExclusionStore>,
}

impl OnceGate {
    /// Gate backed by `shown`
    pub fn new(shown: Arc<dyn ExclusionStore>) -> Self {
        OnceGate { shown }
    }

    /// `true` the first time `flag` is asked for, `false` afterwards
    pub fn should_show(&self, flag: &str) -> Result<bool> {
        self.shown.mark_excluded(flag)
    }

    /// Whether `flag` has already been granted
    pub fn was_shown(&self, flag: &str) -> bool {
        self.shown.is_excluded(flag)
    }
}

/// Pick a random record to show once per session
///
/// Returns `None` when `records` is empty (the flag is not consumed) or when
/// the daily pick was already shown.
pub fn pick_daily<'a, R, G>(
    records: &'a [R],
    gate: &OnceGate,
    rng: &mut G,
) -> Result<Option<&'a R>>
where
    G: Rng + ?Sized,
{
    if records.is_empty() {
        return Ok(None);
    }
    if !gate.should_show(DAILY_LATIFA_FLAG)? {
        return Ok(None);
    }
    let picked = records.choose(rng);
    debug!(candidates = records.len(), "daily pick shown");
    Ok(picked)
}
