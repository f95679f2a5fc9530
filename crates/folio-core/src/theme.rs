//! Process-wide dark/light flag with subscribe/notify.
//!
//! Exactly one writer (the host's theme toggle) calls [`ThemeFlag::set`];
//! any number of effects read it or subscribe to changes.

use crate::lifecycle::Subscription;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

type Listener = Rc<dyn Fn(Theme)>;

#[derive(Default)]
struct Inner {
    value: Cell<Theme>,
    listeners: RefCell<FnvHashMap<u64, Listener>>,
    next_id: Cell<u64>,
}

#[derive(Clone, Default)]
pub struct ThemeFlag {
    inner: Rc<Inner>,
}

impl ThemeFlag {
    pub fn new(initial: Theme) -> Self {
        let flag = Self::default();
        flag.inner.value.set(initial);
        flag
    }

    pub fn get(&self) -> Theme {
        self.inner.value.get()
    }

    /// Stores `theme` and notifies subscribers if it changed.
    pub fn set(&self, theme: Theme) {
        if self.inner.value.replace(theme) == theme {
            return;
        }
        log::debug!("theme changed to {:?}", theme);
        // Snapshot so listeners may subscribe or unsubscribe while notified.
        let listeners: Vec<Listener> = self.inner.listeners.borrow().values().cloned().collect();
        for listener in listeners {
            listener(theme);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .insert(id, Rc::new(listener));
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().remove(&id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}
