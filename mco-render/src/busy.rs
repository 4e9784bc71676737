//! Scoped "busy" state for the trigger control.

use std::cell::Cell;
use std::rc::Rc;

/// Something that reflects whether a generation is in flight, typically by
/// disabling the generate button and showing a loading overlay.
pub trait BusyIndicator {
    fn set_busy(&self, busy: bool);
}

impl BusyIndicator for Cell<bool> {
    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

/// No indicator at all (headless harnesses).
impl BusyIndicator for () {
    fn set_busy(&self, _busy: bool) {}
}

impl<B: BusyIndicator + ?Sized> BusyIndicator for &B {
    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy);
    }
}

impl<B: BusyIndicator + ?Sized> BusyIndicator for Rc<B> {
    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy);
    }
}

/// Marks the indicator busy for as long as it lives.
///
/// Release happens in `Drop`, so early returns, `?` and unwinding panics all
/// leave the indicator idle again.
#[must_use = "the indicator is released as soon as the guard is dropped"]
pub struct BusyGuard<'a, B: BusyIndicator + ?Sized> {
    indicator: &'a B,
}

impl<'a, B: BusyIndicator + ?Sized> BusyGuard<'a, B> {
    pub fn acquire(indicator: &'a B) -> Self {
        indicator.set_busy(true);
        BusyGuard { indicator }
    }
}

impl<B: BusyIndicator + ?Sized> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.indicator.set_busy(false);
    }
}
