//! Optional timing instrumentation around dispatch and GC passes.
//!
//! Disabled by default. Enable the `profiler` feature to have
//! [`Profiler::global`] record wall-clock time per event label to stderr
//! on drop; with the feature off, [`start_event`](Profiler::start_event)
//! compiles down to a zero-sized no-op guard, so call sites never need a
//! `#[cfg]` of their own.

#[cfg(feature = "profiler")]
use once_cell::sync::OnceCell;
#[cfg(feature = "profiler")]
use std::time::Instant;

#[derive(Debug)]
pub struct Profiler {
    #[cfg(feature = "profiler")]
    _private: (),
}

#[cfg(feature = "profiler")]
static INSTANCE: OnceCell<Profiler> = OnceCell::new();

impl Profiler {
    pub fn global() -> &'static Self {
        #[cfg(feature = "profiler")]
        {
            INSTANCE.get_or_init(|| Profiler { _private: () })
        }
        #[cfg(not(feature = "profiler"))]
        {
            &Profiler {}
        }
    }

    #[cfg(feature = "profiler")]
    #[must_use]
    pub fn start_event(&self, label: &'static str, category: &'static str) -> TimingGuard {
        TimingGuard {
            label,
            category,
            start: Instant::now(),
        }
    }

    #[cfg(not(feature = "profiler"))]
    #[inline]
    #[must_use]
    pub fn start_event(&self, _label: &'static str, _category: &'static str) -> TimingGuard {
        TimingGuard
    }
}

#[cfg(feature = "profiler")]
pub struct TimingGuard {
    label: &'static str,
    category: &'static str,
    start: Instant,
}

#[cfg(feature = "profiler")]
impl Drop for TimingGuard {
    fn drop(&mut self) {
        eprintln!(
            "[jsrt profiler] {}/{}: {:?}",
            self.category,
            self.label,
            self.start.elapsed()
        );
    }
}

#[cfg(not(feature = "profiler"))]
pub struct TimingGuard;
