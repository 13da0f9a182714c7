//! In-memory reactive session store.
//!
//! Holds at most one logged-in [`UserProfile`] and notifies subscribers
//! synchronously on every change.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use crate::error::{BranchitError, Result};
use crate::user::UserProfile;

/// Callback invoked with the new session value after each change.
pub type Observer = dyn Fn(Option<&UserProfile>) + Send + Sync;

struct Inner {
    /// The current session value.
    value: RwLock<Option<UserProfile>>,
    /// Registered observers in registration order.
    observers: Mutex<Vec<(u64, Arc<Observer>)>>,
    next_id: AtomicU64,
    /// Serializes mutations, held across the write and the fan-out.
    writer: Mutex<()>,
}

impl Inner {
    // A panicking observer poisons the locks it held; the guarded data is
    // still consistent, so recover instead of propagating the poison.

    fn writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn observers(&self) -> MutexGuard<'_, Vec<(u64, Arc<Observer>)>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot(&self) -> Option<UserProfile> {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn is_present(&self) -> bool {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

/// Single source of truth for "who is logged in".
///
/// `SessionStore` is a handle: clones share the same session, so one store
/// is created at startup and handed to every consumer.
///
/// # Threading
///
/// Mutations are serialized and subscribers are notified on the mutating
/// thread before `login`/`logout`/`update` return. Observers may read the
/// store and (un)subscribe from inside a callback, but must not mutate it:
/// the writer lock is held for the whole fan-out.
///
/// # Example
///
/// ```
/// use branchit_core::session::SessionStore;
/// use branchit_core::user::UserProfile;
///
/// let store = SessionStore::new();
/// store.login(UserProfile::new("u1", "Asha"));
/// assert_eq!(store.current().map(|p| p.uid), Some("u1".to_string()));
///
/// store.logout();
/// assert!(store.current().is_none());
/// ```
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Creates a store with no active session.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(None),
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                writer: Mutex::new(()),
            }),
        }
    }

    /// Returns a snapshot of the current session.
    pub fn current(&self) -> Option<UserProfile> {
        self.inner.snapshot()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.is_present()
    }

    /// Registers an observer for every subsequent change.
    ///
    /// The observer is not called with the current value on registration.
    /// It stays registered until the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Option<&UserProfile>) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let observer: Arc<Observer> = Arc::new(observer);
        let mut observers = self.inner.observers();
        observers.push((id, observer));
        tracing::debug!(
            "[SessionStore] subscribe: id={}, subscribers={}",
            id,
            observers.len()
        );

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of currently registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.observers().len()
    }

    /// Starts a session with exactly this profile.
    ///
    /// No validation is performed; any previous session is replaced.
    pub fn login(&self, profile: UserProfile) {
        let _writer = self.inner.writer();
        tracing::info!("[SessionStore] login: uid={}", profile.uid);
        self.commit(Some(profile));
    }

    /// Ends the session.
    ///
    /// Logging out while already logged out is a silent no-op.
    pub fn logout(&self) {
        let _writer = self.inner.writer();
        if !self.inner.is_present() {
            tracing::debug!("[SessionStore] logout: no active session, nothing to do");
            return;
        }
        tracing::info!("[SessionStore] logout");
        self.commit(None);
    }

    /// Replaces the profile of the active session.
    ///
    /// # Errors
    ///
    /// Returns [`BranchitError::NoActiveSession`] when nobody is logged in.
    /// The session stays absent and no observer is notified.
    pub fn update(&self, profile: UserProfile) -> Result<()> {
        let _writer = self.inner.writer();
        if !self.inner.is_present() {
            tracing::warn!(
                "[SessionStore] update rejected: no active session (uid={})",
                profile.uid
            );
            return Err(BranchitError::NoActiveSession);
        }
        tracing::debug!("[SessionStore] update: uid={}", profile.uid);
        self.commit(Some(profile));
        Ok(())
    }

    /// Stores `next` and fans it out. Caller holds the writer lock.
    fn commit(&self, next: Option<UserProfile>) {
        {
            let mut value = self
                .inner
                .value
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *value = next.clone();
        }

        // Observers run without the list lock so they can (un)subscribe.
        let observers: Vec<Arc<Observer>> = self
            .inner
            .observers()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        tracing::trace!("[SessionStore] notifying {} observers", observers.len());
        for observer in &observers {
            (**observer)(next.as_ref());
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle to a registered observer.
///
/// Dropping it removes the observer. An observer removed while a
/// notification is being delivered may still receive that notification.
#[must_use = "dropping a Subscription unsubscribes its observer immediately"]
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
}

impl Subscription {
    /// Removes the observer now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.observers().retain(|(id, _)| *id != self.id);
            tracing::debug!("[SessionStore] unsubscribe: id={}", self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
