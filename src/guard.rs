use std::fmt;
use std::ops::{Deref, DerefMut};

use tracing::trace;


/// Runs a callback when it leaves the scope.
///
/// The guard owns a value and a callback taking that value. Dropping the
/// guard invokes the callback with the value, exactly once. [`consume`]
/// triggers the callback immediately, [`cancel`] destroys the guard without
/// triggering it. Both take the guard by value, so a released guard cannot
/// be released again.
///
/// While the guard is live it dereferences to the protected value.
///
/// [`consume`]: ScopeGuard::consume
/// [`cancel`]: ScopeGuard::cancel
pub struct ScopeGuard<T, F: FnOnce(T)> {
    // None only after cancel; drop is the sole other consumer
    state: Option<(T, F)>,
}

impl<T, F: FnOnce(T)> ScopeGuard<T, F> {
    pub fn new(value: T, callback: F) -> Self {
        ScopeGuard { state: Some((value, callback)) }
    }

    /// Trigger the callback now and destroy the guard.
    pub fn consume(this: Self) {
        drop(this)
    }

    /// Destroy the guard without triggering the callback, returning the
    /// protected value.
    pub fn cancel(mut this: Self) -> T {
        let (value, _callback) = this.state.take().unwrap();
        trace!("scoped callback cancelled");
        value
    }
}

impl<T, F: FnOnce(T)> Drop for ScopeGuard<T, F> {
    fn drop(&mut self) {
        if let Some((value, callback)) = self.state.take() {
            trace!("scoped callback fired");
            callback(value)
        }
    }
}

impl<T, F: FnOnce(T)> Deref for ScopeGuard<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.state.as_ref().unwrap().0
    }
}

impl<T, F: FnOnce(T)> DerefMut for ScopeGuard<T, F> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.state.as_mut().unwrap().0
    }
}

impl<T: fmt::Debug, F: FnOnce(T)> fmt::Debug for ScopeGuard<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("value", &**self)
            .finish()
    }
}


pub fn guard<T, F: FnOnce(T)>(value: T, callback: F) -> ScopeGuard<T, F> {
    ScopeGuard::new(value, callback)
}


/// Run a block of code when the current scope exits.
#[macro_export]
macro_rules! defer {
    ( $($body:tt)* ) => {
        let _guard = $crate::guard((), |()| { $($body)* });
    };
}
