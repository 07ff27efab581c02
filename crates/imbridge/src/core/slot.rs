use std::sync::atomic::{AtomicBool, Ordering};

/// Set while a bridge is live anywhere in the process.
static LIVE: AtomicBool = AtomicBool::new(false);

/// Exclusive claim on the process-wide bridge slot, released on drop.
#[derive(Debug)]
pub(crate) struct SlotGuard {
    _private: (),
}

impl SlotGuard {
    /// Claims the slot, or returns `None` when another bridge holds it.
    pub fn claim() -> Option<SlotGuard> {
        LIVE.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SlotGuard { _private: () })
    }
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        LIVE.store(false, Ordering::Release);
    }
}

/// True while some bridge holds the slot.
pub fn is_claimed() -> bool {
    LIVE.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::serial;

    #[test]
    fn slot_is_exclusive_until_dropped() {
        let _lock = serial();

        let first = SlotGuard::claim().expect("slot free");
        assert!(is_claimed());
        assert!(SlotGuard::claim().is_none());

        drop(first);
        assert!(!is_claimed());
        assert!(SlotGuard::claim().is_some());
        assert!(!is_claimed());
    }
}
