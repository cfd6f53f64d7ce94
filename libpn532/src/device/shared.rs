// libpn532/src/device/shared.rs

use std::sync::{Arc, Mutex, PoisonError};

use crate::device::Pn532;

/// A `Pn532` shared between threads. Each `with` call holds the lock for
/// the whole closure, so exchanges from different threads never
/// interleave on the bus.
#[derive(Debug, Clone)]
pub struct SharedPn532 {
    inner: Arc<Mutex<Pn532>>,
}

impl SharedPn532 {
    pub fn new(device: Pn532) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Run `f` with exclusive access to the driver. A panic in another
    /// holder does not leave the driver in a half-finished exchange, so a
    /// poisoned lock is recovered.
    pub fn with<R>(&self, f: impl FnOnce(&mut Pn532) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl From<Pn532> for SharedPn532 {
    fn from(device: Pn532) -> Self {
        Self::new(device)
    }
}
