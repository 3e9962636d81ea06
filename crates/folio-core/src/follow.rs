//! Per-frame follow loop.
//!
//! The loop itself is host-agnostic: scheduling goes through
//! [`FrameDriver`] (the web frontend wraps `requestAnimationFrame`), and
//! the per-tick work goes through a replaceable callback held in a
//! [`TickSlot`]. Pointer and container state are passed in on every tick so
//! the loop never holds on to them.

use crate::frame::{FrameDriver, FrameScheduler, LoopState};
use crate::pointer::PositionTracker;
use crate::rect::ContainerRect;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Raw pointer offset from the container center.
///
/// Resolves to zero while the pointer is away or the container has not been
/// measured, so every part relaxes back to center.
#[inline]
pub fn raw_offset(tracker: &PositionTracker, rect: &ContainerRect) -> Vec2 {
    if !tracker.is_active() || !rect.has_area() {
        return Vec2::ZERO;
    }
    let offset = tracker.sample() - rect.center();
    if offset.is_finite() {
        offset
    } else {
        Vec2::ZERO
    }
}

type TickFn = Box<dyn FnMut(Vec2)>;

#[derive(Default)]
struct SlotCell {
    callback: Option<TickFn>,
    // bumped by every set/clear
    generation: u64,
}

/// Indirection cell for the per-tick callback.
///
/// Callers swap the callback at any time without restarting the loop; the
/// loop reads whatever is current on each tick.
#[derive(Clone, Default)]
pub struct TickSlot {
    inner: Rc<RefCell<SlotCell>>,
}

impl TickSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, callback: impl FnMut(Vec2) + 'static) {
        let mut cell = self.inner.borrow_mut();
        cell.callback = Some(Box::new(callback));
        cell.generation = cell.generation.wrapping_add(1);
    }

    pub fn clear(&self) {
        let mut cell = self.inner.borrow_mut();
        cell.callback = None;
        cell.generation = cell.generation.wrapping_add(1);
    }

    pub fn is_set(&self) -> bool {
        self.inner.borrow().callback.is_some()
    }

    /// Run the current callback. Returns `false` if none is set.
    ///
    /// The callback is taken out of the cell while it runs, so it may call
    /// [`TickSlot::set`] or [`TickSlot::clear`] on this slot; whatever it
    /// leaves behind is kept.
    pub fn invoke(&self, offset: Vec2) -> bool {
        let (taken, generation) = {
            let mut cell = self.inner.borrow_mut();
            (cell.callback.take(), cell.generation)
        };
        let Some(mut callback) = taken else {
            return false;
        };
        callback(offset);
        let mut cell = self.inner.borrow_mut();
        if cell.generation == generation {
            cell.callback = Some(callback);
        }
        true
    }
}

/// Pointer-follow loop: one raw offset per frame, handed to the callback in
/// the loop's [`TickSlot`].
pub struct FollowLoop<S: FrameScheduler> {
    driver: FrameDriver<S>,
    slot: TickSlot,
}

impl<S: FrameScheduler> FollowLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            driver: FrameDriver::new(scheduler),
            slot: TickSlot::new(),
        }
    }

    pub fn with_callback(scheduler: S, callback: impl FnMut(Vec2) + 'static) -> Self {
        let lp = Self::new(scheduler);
        lp.slot.set(callback);
        lp
    }

    /// Handle to the callback cell; cloning it lets callers replace the
    /// callback while the loop is running.
    pub fn tick_slot(&self) -> TickSlot {
        self.slot.clone()
    }

    pub fn state(&self) -> LoopState {
        self.driver.state()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn ticks(&self) -> u64 {
        self.driver.ticks()
    }

    pub fn scheduler(&self) -> &S {
        self.driver.scheduler()
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    /// One frame: sample the offset once, hand it to the callback, then
    /// reschedule. Returns the offset used, or `None` if the loop is not
    /// running.
    pub fn tick(&mut self, tracker: &PositionTracker, rect: &ContainerRect) -> Option<Vec2> {
        if !self.driver.begin_tick() {
            return None;
        }
        let offset = raw_offset(tracker, rect);
        self.slot.invoke(offset);
        self.driver.end_tick();
        Some(offset)
    }

    /// Stop the loop for good. Safe to call any number of times.
    pub fn cancel(&mut self) {
        self.driver.cancel();
    }
}
