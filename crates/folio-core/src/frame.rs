//! Frame-loop lifecycle shared by every animated component.

/// Opaque id of a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host frame-scheduling primitive (`requestAnimationFrame` on the web).
pub trait FrameScheduler {
    /// Schedule the next tick. `None` means the host could not schedule one.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Cancelled,
}

/// Start / reschedule / cancel bookkeeping around one frame subscription.
///
/// Each instance owns exactly one pending handle. Cancelling is idempotent
/// and final: a tick that still fires afterwards is ignored and schedules
/// nothing.
pub struct FrameDriver<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameHandle>,
    state: LoopState,
    ticks: u64,
}

impl<S: FrameScheduler> FrameDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            state: LoopState::Idle,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Schedule the first frame. Has no effect once running or cancelled.
    pub fn start(&mut self) {
        if self.state != LoopState::Idle {
            return;
        }
        self.state = LoopState::Running;
        self.schedule_next();
    }

    /// Called when a scheduled frame fires. Returns whether the tick's work
    /// should run.
    pub fn begin_tick(&mut self) -> bool {
        self.pending = None;
        self.state == LoopState::Running
    }

    /// Reschedule after a tick's work, unless the loop was cancelled.
    pub fn end_tick(&mut self) {
        self.ticks += 1;
        if self.state == LoopState::Running {
            self.schedule_next();
        }
    }

    /// Stop for good. Safe to call any number of times.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != LoopState::Cancelled {
            log::debug!("[frame] loop cancelled after {} ticks", self.ticks);
        }
        self.state = LoopState::Cancelled;
    }

    fn schedule_next(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[frame] frame scheduling unavailable; loop stopped");
            self.state = LoopState::Cancelled;
        }
    }
}
