//! Extension methods for Dioxus signals.

use dioxus::prelude::*;

/// Closure-based mutation for signals.
///
/// Scopes the write lock to the closure, so a handler can update state and
/// use the closure's return value without holding the lock across later
/// side effects (navigation, spawning timers).
///
/// ```ignore
/// let response = session.mutate(|s| s.on_key(key));
/// ```
pub trait SignalExt<T> {
    fn mutate<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: 'static> SignalExt<T> for Signal<T> {
    fn mutate<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.write();
        f(&mut guard)
    }
}
