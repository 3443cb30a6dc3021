//! Typed input queue between host event handlers and the frame driver.
//!
//! Handlers only enqueue; the driver drains everything at the start of a
//! tick, so input always lands between frames.

use std::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel movement in pixels; positive scrolls down.
    WheelDelta { delta_y: f32 },
    /// Pointer position in viewport pixels, origin top-left.
    PointerMoved { x: f32, y: f32 },
    /// New drawable size in physical pixels.
    ViewportResized { width: u32, height: u32 },
}

pub fn input_channel() -> (InputSender, InputReceiver) {
    let (tx, rx) = mpsc::channel();
    (InputSender(tx), InputReceiver(rx))
}

/// Cloneable handle given to event handlers. Sending never blocks.
#[derive(Clone, Debug)]
pub struct InputSender(mpsc::Sender<InputEvent>);

impl InputSender {
    pub fn send(&self, event: InputEvent) {
        if self.0.send(event).is_err() {
            log::debug!("[input] driver gone; dropped {:?}", event);
        }
    }

    #[inline]
    pub fn wheel(&self, delta_y: f32) {
        self.send(InputEvent::WheelDelta { delta_y });
    }

    #[inline]
    pub fn pointer_moved(&self, x: f32, y: f32) {
        self.send(InputEvent::PointerMoved { x, y });
    }

    #[inline]
    pub fn resized(&self, width: u32, height: u32) {
        self.send(InputEvent::ViewportResized { width, height });
    }
}

#[derive(Debug)]
pub struct InputReceiver(mpsc::Receiver<InputEvent>);

impl InputReceiver {
    /// Everything queued so far, in arrival order. Never waits.
    pub fn drain(&self) -> impl Iterator<Item = InputEvent> + '_ {
        self.0.try_iter()
    }
}
