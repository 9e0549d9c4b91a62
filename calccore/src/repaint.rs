//! Repaint controller
//!
//! egui redraws everything every frame. A calculator only changes when a key
//! or button is pressed, so `RepaintController` records why each frame runs
//! and never schedules timed repaints. The app calls
//! [`mark_needs_repaint`](RepaintController::mark_needs_repaint) when the
//! display changes from something other than direct input (a menu toggle,
//! a settings reload).

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame.
    Init,
    /// Pointer or keyboard activity.
    Input,
    /// State changed outside an input event.
    StateChange,
}

/// Call [`begin_frame`](Self::begin_frame) at the top of `update()` and
/// [`end_frame`](Self::end_frame) at the bottom.
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request one more frame after this one.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.reason = self.classify(had_input);
        self.needs_repaint = false;
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            ctx.request_repaint();
        }
        // Otherwise egui sleeps until the next input event.
    }

    fn classify(&self, had_input: bool) -> RepaintReason {
        if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            // Woken by something we did not track; treat as input.
            RepaintReason::Input
        }
    }
}
