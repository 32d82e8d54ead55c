//! When to recompute scroll-derived state.
//!
//! At most one animation frame is requested per burst of scroll events. When
//! that frame fires a short debounce is armed, and the recompute runs once the
//! debounce elapses without being re-armed. The policy knows nothing about
//! timers; [`super::binding::ScrollBinding`] carries out each [`Step`].

/// What the caller has to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Idle,
    RequestFrame,
    /// Arm (or re-arm, cancelling the previous one) a timer of this many ms.
    ArmDebounce(u32),
    Recompute,
}

#[derive(Debug)]
pub struct ScrollScheduler {
    debounce_ms: u32,
    frame_pending: bool,
    debounce_armed: bool,
}

impl ScrollScheduler {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            frame_pending: false,
            debounce_armed: false,
        }
    }

    pub fn on_scroll(&mut self) -> Step {
        if self.frame_pending {
            return Step::Idle;
        }
        self.frame_pending = true;
        Step::RequestFrame
    }

    pub fn on_frame(&mut self) -> Step {
        self.frame_pending = false;
        self.debounce_armed = true;
        Step::ArmDebounce(self.debounce_ms)
    }

    pub fn on_debounce_elapsed(&mut self) -> Step {
        if !self.debounce_armed {
            return Step::Idle;
        }
        self.debounce_armed = false;
        Step::Recompute
    }

    /// Forget pending work, e.g. after the binding cancelled its frame and timer.
    pub fn reset(&mut self) {
        self.frame_pending = false;
        self.debounce_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_before_a_frame_requests_one_frame() {
        let mut scheduler = ScrollScheduler::new(10);
        assert_eq!(scheduler.on_scroll(), Step::RequestFrame);
        for _ in 0..50 {
            assert_eq!(scheduler.on_scroll(), Step::Idle);
        }
        assert_eq!(scheduler.on_frame(), Step::ArmDebounce(10));
        assert_eq!(scheduler.on_scroll(), Step::RequestFrame);
    }

    #[test]
    fn recompute_only_after_debounce() {
        let mut scheduler = ScrollScheduler::new(10);
        scheduler.on_scroll();
        assert_eq!(scheduler.on_scroll(), Step::Idle);
        scheduler.on_frame();
        assert_eq!(scheduler.on_debounce_elapsed(), Step::Recompute);
        assert_eq!(scheduler.on_debounce_elapsed(), Step::Idle);
    }

    #[test]
    fn frame_during_armed_debounce_rearms() {
        let mut scheduler = ScrollScheduler::new(10);
        scheduler.on_scroll();
        scheduler.on_frame();
        assert_eq!(scheduler.on_scroll(), Step::RequestFrame);
        assert_eq!(scheduler.on_frame(), Step::ArmDebounce(10));
        // Only the latest timer is alive; it fires once.
        assert_eq!(scheduler.on_debounce_elapsed(), Step::Recompute);
        assert_eq!(scheduler.on_debounce_elapsed(), Step::Idle);
    }

    #[test]
    fn reset_drops_pending_work() {
        let mut scheduler = ScrollScheduler::new(10);
        scheduler.on_scroll();
        scheduler.on_frame();
        scheduler.reset();
        assert_eq!(scheduler.on_debounce_elapsed(), Step::Idle);
        assert_eq!(scheduler.on_scroll(), Step::RequestFrame);
    }
}
