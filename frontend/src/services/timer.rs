use std::time::Duration;
use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;

/// Deferred work on the UI thread.
#[async_trait(?Send)]
pub trait Timer {
    /// Runs `task` once after `delay`. Fire and forget.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);

    async fn sleep(&self, delay: Duration);
}

fn millis(delay: Duration) -> u32 {
    delay.as_millis().min(u32::MAX as u128) as u32
}

/// `setTimeout`-backed timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(millis(delay), task).forget();
    }

    async fn sleep(&self, delay: Duration) {
        TimeoutFuture::new(millis(delay)).await;
    }
}

#[cfg(test)]
pub mod manual {
    use super::*;
    use std::cell::RefCell;

    /// Test clock: scheduled tasks run only when `advance` passes their deadline,
    /// `sleep` records the request and returns immediately.
    #[derive(Default)]
    pub struct ManualTimer {
        now: RefCell<Duration>,
        pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
        slept: RefCell<Vec<Duration>>,
    }

    impl ManualTimer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn advance(&self, by: Duration) {
            let now = *self.now.borrow() + by;
            *self.now.borrow_mut() = now;
            let due: Vec<_> = {
                let mut pending = self.pending.borrow_mut();
                let (due, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(at, _)| *at <= now);
                *pending = rest;
                due
            };
            for (_, task) in due {
                task();
            }
        }

        pub fn pending(&self) -> usize {
            self.pending.borrow().len()
        }

        pub fn slept(&self) -> Vec<Duration> {
            self.slept.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Timer for ManualTimer {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            let at = *self.now.borrow() + delay;
            self.pending.borrow_mut().push((at, task));
        }

        async fn sleep(&self, delay: Duration) {
            self.slept.borrow_mut().push(delay);
        }
    }

    #[test]
    fn tasks_run_once_deadline_passes() {
        use std::rc::Rc;
        use std::cell::Cell;

        let timer = ManualTimer::new();
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        timer.schedule(Duration::from_secs(5), Box::new(move || f.set(f.get() + 1)));
        timer.advance(Duration::from_millis(4999));
        assert_eq!(fired.get(), 0);
        timer.advance(Duration::from_millis(1));
        assert_eq!(fired.get(), 1);
        assert_eq!(timer.pending(), 0);
    }
}
