//! Periodic structure polling.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::config::POLL_INTERVAL_MS;
use crate::core::error::ViewerError;
use crate::core::repository::{Fetcher, StructureRepository};
use crate::models::FileNode;
use crate::utils::log;

/// Owns at most one running timer handle.
///
/// Dropping the handle is what cancels the timer, so `stop` just takes it.
#[derive(Debug)]
pub struct WatchHandle<H> {
    handle: Option<H>,
}

impl<H> Default for WatchHandle<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> WatchHandle<H> {
    /// Install a handle built by `make`. No-op returning `false` when one is
    /// already running.
    pub fn start(&mut self, make: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(make());
        true
    }

    /// Drop the running handle. No-op returning `false` when idle.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_watching(&self) -> bool {
        self.handle.is_some()
    }
}

/// Polls the manifest on an interval and reports structural changes.
pub struct StructureWatcher<F> {
    repository: Rc<StructureRepository<F>>,
    interval: Rc<RefCell<WatchHandle<Interval>>>,
    on_change: Rc<dyn Fn(FileNode)>,
}

impl<F> Clone for StructureWatcher<F> {
    fn clone(&self) -> Self {
        Self {
            repository: Rc::clone(&self.repository),
            interval: Rc::clone(&self.interval),
            on_change: Rc::clone(&self.on_change),
        }
    }
}

impl<F: Fetcher + 'static> StructureWatcher<F> {
    pub fn new(repository: Rc<StructureRepository<F>>, on_change: impl Fn(FileNode) + 'static) -> Self {
        Self {
            repository,
            interval: Rc::new(RefCell::new(WatchHandle::default())),
            on_change: Rc::new(on_change),
        }
    }

    /// Begin polling every [`POLL_INTERVAL_MS`].
    ///
    /// Runs one check right away so the first tick already has a baseline.
    /// Returns `false` if already watching.
    pub fn start_watching(&self) -> bool {
        let this = self.clone();
        let started = self.interval.borrow_mut().start(move || {
            Interval::new(POLL_INTERVAL_MS, move || this.spawn_check())
        });

        if started {
            log::info("Structure watching started");
            self.spawn_check();
        } else {
            log::info("Structure watching already active");
        }
        started
    }

    /// Cancel polling. Returns `false` if not watching.
    pub fn stop_watching(&self) -> bool {
        let stopped = self.interval.borrow_mut().stop();
        if stopped {
            log::info("Structure watching stopped");
        }
        stopped
    }

    pub fn is_watching(&self) -> bool {
        self.interval.borrow().is_watching()
    }

    pub fn repository(&self) -> &StructureRepository<F> {
        &self.repository
    }

    /// Manual check outside the timer. Returns whether the structure changed.
    pub async fn force_check(&self) -> bool {
        let on_change = Rc::clone(&self.on_change);
        self.repository
            .check_for_changes(move |root| on_change(root))
            .await
    }

    /// Manual check that reports a failed fetch instead of "unchanged".
    pub async fn try_force_check(&self) -> Result<bool, ViewerError> {
        let on_change = Rc::clone(&self.on_change);
        self.repository
            .try_check_for_changes(move |root| on_change(root))
            .await
    }

    fn spawn_check(&self) {
        let this = self.clone();
        spawn_local(async move {
            this.force_check().await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{MockFetcher, sample_root};

    #[test]
    fn test_start_is_idempotent() {
        let mut handle = WatchHandle::default();
        let mut built = 0;
        assert!(handle.start(|| {
            built += 1;
        }));
        assert!(!handle.start(|| {
            built += 1;
        }));
        assert_eq!(built, 1);
        assert!(handle.is_watching());
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut handle: WatchHandle<()> = WatchHandle::default();
        assert!(!handle.stop());
        assert!(!handle.is_watching());
    }

    #[test]
    fn test_stop_drops_handle() {
        struct Flag(Rc<RefCell<bool>>);
        impl Drop for Flag {
            fn drop(&mut self) {
                *self.0.borrow_mut() = true;
            }
        }

        let dropped = Rc::new(RefCell::new(false));
        let mut handle = WatchHandle::default();
        handle.start(|| Flag(Rc::clone(&dropped)));
        assert!(!*dropped.borrow());
        assert!(handle.stop());
        assert!(*dropped.borrow());
        assert!(handle.start(|| Flag(Rc::clone(&dropped))));
    }

    #[tokio::test]
    async fn test_manual_check_reports_fetch_failure() {
        let repo = Rc::new(StructureRepository::new(MockFetcher::default()));
        let watcher = StructureWatcher::new(repo, |_| panic!("no change expected"));
        assert!(matches!(watcher.try_force_check().await, Err(ViewerError::Network { .. })));
        assert!(!watcher.force_check().await);

        let manifest = serde_json::to_string(&sample_root()).unwrap();
        watcher
            .repository()
            .fetcher()
            .set_prefix("structure.json?", &manifest);
        assert!(matches!(watcher.try_force_check().await, Ok(false)));
    }
}
