use core::ops::ControlFlow;
use std::time::Duration;

use biglist::{BigList, ReclaimReport, Surface};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};

use crate::Clock;

/// A message for the engine's event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// The scroll container moved to `offset`.
    ///
    /// Queued scrolls report no [`EventDisposition`]; call [`Driver::on_scroll`] directly when
    /// the UI layer needs to know whether to suppress the default scroll handling.
    Scroll { offset: u64 },
    /// The data behind the render callback changed.
    Redraw,
    /// Tear the engine down and stop the loop.
    Destroy,
}

/// How a UI event should be treated after the engine saw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventDisposition {
    /// The engine handled it; suppress the platform's default scroll handling.
    Consumed,
    /// The engine is gone; let the event through.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    #[error("the list event loop has stopped")]
    Disconnected,
}

impl<T> From<crossbeam_channel::SendError<T>> for DriverError {
    fn from(_: crossbeam_channel::SendError<T>) -> Self {
        Self::Disconnected
    }
}

/// Sending side of a [`Driver`]. Cheap to clone and `Send`, so scroll notifications can come
/// from any thread.
#[derive(Clone, Debug)]
pub struct ListHandle {
    tx: Sender<Command>,
}

impl ListHandle {
    pub fn send(&self, command: Command) -> Result<(), DriverError> {
        self.tx.send(command)?;
        Ok(())
    }

    pub fn scroll(&self, offset: u64) -> Result<(), DriverError> {
        self.send(Command::Scroll { offset })
    }

    pub fn redraw(&self) -> Result<(), DriverError> {
        self.send(Command::Redraw)
    }

    pub fn destroy(&self) -> Result<(), DriverError> {
        self.send(Command::Destroy)
    }
}

/// Runs a [`BigList`] as a single-threaded actor.
///
/// Scroll notifications and redraw requests arrive over a channel; the reclamation timer is a
/// receive timeout aimed at the engine's next deadline. Each event runs to completion before
/// the next one is taken, so the engine needs no locking.
pub struct Driver<S: Surface, C: Clock> {
    engine: BigList<S>,
    clock: C,
    rx: Receiver<Command>,
}

impl<S: Surface, C: Clock> Driver<S, C> {
    pub fn new(engine: BigList<S>, clock: C) -> (Self, ListHandle) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { engine, clock, rx }, ListHandle { tx })
    }

    pub fn engine(&self) -> &BigList<S> {
        &self.engine
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_engine(self) -> BigList<S> {
        self.engine
    }

    /// Feeds a scroll notification straight into the engine.
    pub fn on_scroll(&mut self, offset: u64) -> EventDisposition {
        if self.engine.is_destroyed() {
            return EventDisposition::Ignored;
        }
        let now = self.clock.now_ms();
        let outcome = self.engine.on_scroll(offset, now);
        if outcome.repainted.is_some() {
            atrace!(offset, now, "scroll repaint");
        }
        EventDisposition::Consumed
    }

    /// Runs the reclamation timer if it is due.
    pub fn on_timer(&mut self) -> Option<ReclaimReport> {
        let now = self.clock.now_ms();
        self.engine.tick(now)
    }

    /// Applies one command. Breaks once the engine has been destroyed.
    pub fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Scroll { offset } => {
                self.on_scroll(offset);
            }
            Command::Redraw => {
                self.engine.redraw();
            }
            Command::Destroy => {
                self.engine.destroy();
            }
        }
        if self.engine.is_destroyed() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Applies every queued command without blocking, then gives the timer a chance to run.
    pub fn run_until_idle(&mut self) -> ControlFlow<()> {
        loop {
            match self.rx.try_recv() {
                Ok(command) => {
                    if self.handle_command(command).is_break() {
                        return ControlFlow::Break(());
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.engine.destroy();
                    return ControlFlow::Break(());
                }
            }
        }
        self.on_timer();
        ControlFlow::Continue(())
    }

    /// Blocks on the event loop until a [`Command::Destroy`] arrives or every [`ListHandle`]
    /// is dropped. The engine is destroyed on exit and handed back.
    pub fn run(mut self) -> BigList<S> {
        adebug!("list event loop started");
        loop {
            let received = match self.engine.next_reclaim_due_ms() {
                Some(due) => {
                    let wait = due.saturating_sub(self.clock.now_ms());
                    self.rx.recv_timeout(Duration::from_millis(wait))
                }
                None => self.rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok(command) => {
                    if self.handle_command(command).is_break() {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    self.on_timer();
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        self.engine.destroy();
        adebug!(stats = ?self.engine.stats(), "list event loop stopped");
        self.engine
    }
}
