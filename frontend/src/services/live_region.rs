use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use log::debug;
use yew::Callback;

use crate::services::timer::Timer;

struct Inner {
    message: RefCell<Option<String>>,
    generation: Cell<u64>,
    listener: RefCell<Option<Callback<()>>>,
    timer: Rc<dyn Timer>,
    clear_after: Duration,
}

/// The page-wide screen reader announcement channel.
///
/// Holds at most one message. Each announcement replaces the previous one and
/// is cleared again after `clear_after`; a clear scheduled for an older
/// announcement does not wipe a newer one.
#[derive(Clone)]
pub struct LiveRegion {
    inner: Rc<Inner>,
}

impl LiveRegion {
    pub fn new(timer: Rc<dyn Timer>, clear_after: Duration) -> Self {
        Self {
            inner: Rc::new(Inner {
                message: RefCell::new(None),
                generation: Cell::new(0),
                listener: RefCell::new(None),
                timer,
                clear_after,
            }),
        }
    }

    /// Registers the view that renders the region. Replaces any earlier one.
    pub fn subscribe(&self, listener: Callback<()>) {
        *self.inner.listener.borrow_mut() = Some(listener);
    }

    pub fn unsubscribe(&self) {
        self.inner.listener.borrow_mut().take();
    }

    pub fn current(&self) -> Option<String> {
        self.inner.message.borrow().clone()
    }

    pub fn announce(&self, text: impl Into<String>) {
        let text = text.into();
        debug!("live region: {}", text);
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        *self.inner.message.borrow_mut() = Some(text);
        self.notify();

        let region = self.clone();
        self.inner.timer.schedule(
            self.inner.clear_after,
            Box::new(move || {
                if region.inner.generation.get() == generation {
                    region.inner.message.borrow_mut().take();
                    region.notify();
                }
            }),
        );
    }

    fn notify(&self) {
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            listener.emit(());
        }
    }
}

impl PartialEq for LiveRegion {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
