//! State Cells
//!
//! Where the drivers keep the cache or form they operate on. A reactive
//! view wraps its signal; plain callers use a `RefCell`. A cell whose
//! owner is gone answers `None`, and the driver stops there.

use std::cell::RefCell;

/// Shared, possibly short-lived, slot holding state `S`
pub trait StateCell<S> {
    /// Read the state; `None` once the owner is gone
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;

    /// Mutate the state; `None` once the owner is gone
    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S> StateCell<S> for RefCell<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_borrow().ok().map(|state| f(&state))
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refcell_is_always_live() {
        let cell = RefCell::new(1);
        assert_eq!(cell.write(|n| {
            *n += 1;
            *n
        }), Some(2));
        assert_eq!(cell.read(|n| *n), Some(2));
    }

    #[test]
    fn test_refcell_busy_borrow_is_not_a_panic() {
        let cell = RefCell::new(1);
        let _guard = cell.borrow_mut();
        assert_eq!(cell.read(|n| *n), None);
    }
}
