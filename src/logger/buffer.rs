//! Per-thread message buffer reused across `log` calls.
//!
//! The buffer is taken out of its slot for the duration of a call and put back
//! afterwards. A nested `log` on the same thread (an engine that logs) finds the
//! slot empty and allocates its own, so two calls never share one buffer.

use std::cell::RefCell;

/// Capacity a returned buffer is trimmed back to.
pub const MAX_RETAINED_CAPACITY: usize = 1024;

thread_local! {
    static BUFFER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Takes this thread's buffer, or a fresh one if it is absent or in use.
pub fn acquire() -> String {
    BUFFER
        .try_with(|slot| slot.borrow_mut().take())
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Clears `buf`, trims oversized capacity, and stores it for the next call.
pub fn release(mut buf: String) {
    buf.clear();
    if buf.capacity() > MAX_RETAINED_CAPACITY {
        buf.shrink_to(MAX_RETAINED_CAPACITY);
    }
    let _ = BUFFER.try_with(|slot| {
        *slot.borrow_mut() = Some(buf);
    });
}

/// Capacity of the buffer currently parked on this thread, if any.
#[must_use]
pub fn retained_capacity() -> Option<usize> {
    BUFFER
        .try_with(|slot| slot.borrow().as_ref().map(String::capacity))
        .ok()
        .flatten()
}
