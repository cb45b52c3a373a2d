//! Decision events emitted by the engine.
//!
//! The engine itself never prints. Callers inject an [`EventSink`]; use
//! [`NullSink`] to stay silent, [`LogSink`] to forward to the `log` facade, or
//! a `Vec<EngineEvent>` to capture events in tests.

use alloc::vec::Vec;

use crate::coord::Coordinate;
use crate::engine::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    ModeChanged { from: Mode, to: Mode },
    /// A fresh hit was pushed onto the target stack.
    AnchorPushed(Coordinate),
    /// Every neighbour of the anchor is resolved; it was popped.
    AnchorExhausted(Coordinate),
    TargetProbed { anchor: Coordinate, target: Coordinate },
    HuntSelected { target: Coordinate, score: u32 },
    /// Every unknown cell scored zero; the first unknown cell was taken.
    HuntFallback(Coordinate),
}

pub trait EventSink {
    fn record(&mut self, event: EngineEvent);
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: EngineEvent) {}
}

/// Forwards events to the `log` facade under the `targeting` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::ModeChanged { from, to } => {
                log::debug!(target: "targeting", "mode {:?} -> {:?}", from, to)
            }
            EngineEvent::AnchorPushed(c) => log::debug!(target: "targeting", "tracking hit at {}", c),
            EngineEvent::AnchorExhausted(c) => {
                log::debug!(target: "targeting", "hit at {} fully surrounded", c)
            }
            EngineEvent::TargetProbed { anchor, target } => {
                log::trace!(target: "targeting", "probing {} next to {}", target, anchor)
            }
            EngineEvent::HuntSelected { target, score } => {
                log::trace!(target: "targeting", "hunting {} (score {})", target, score)
            }
            EngineEvent::HuntFallback(c) => {
                log::debug!(target: "targeting", "no feasible placement left, falling back to {}", c)
            }
        }
    }
}

impl EventSink for Vec<EngineEvent> {
    fn record(&mut self, event: EngineEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: EngineEvent) {
        (**self).record(event);
    }
}
