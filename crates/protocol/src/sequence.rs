//! Latest-wins ordering for overlapping plot requests.
//!
//! Every slider movement issues a request and nothing is cancelled, so
//! responses can come back out of order. Each request carries a [`Ticket`];
//! only the most recently issued ticket may touch the chart.

use std::cell::Cell;

use crate::error::PlotError;
use crate::wire::PlotFigure;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// What to do with a finished request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Latest request: render it (or show its error)
    Apply,
    /// Superseded by a newer request: drop it
    Stale,
}

/// What the chart should do once a request has settled
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Re-render with exactly the received figure
    Render(PlotFigure),
    /// Log the error and show the fixed error text
    ShowError(PlotError),
    /// Superseded: leave the chart alone, success or not
    Drop,
}

impl Outcome {
    pub fn decide(settle: Settle, result: Result<PlotFigure, PlotError>) -> Self {
        match (settle, result) {
            (Settle::Stale, _) => Self::Drop,
            (Settle::Apply, Ok(figure)) => Self::Render(figure),
            (Settle::Apply, Err(err)) => Self::ShowError(err),
        }
    }
}

/// Single-threaded request counter, shared through `Rc` by the event handlers
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: Cell<u64>,
    in_flight: Cell<u32>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a request about to be sent
    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        self.in_flight.set(self.in_flight.get() + 1);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued.get()
    }

    /// Mark a request finished and decide whether its outcome is shown
    pub fn settle(&self, ticket: Ticket) -> Settle {
        self.in_flight.set(self.in_flight.get().saturating_sub(1));
        if self.is_current(ticket) {
            Settle::Apply
        } else {
            Settle::Stale
        }
    }

    /// Requests issued but not yet settled
    pub fn in_flight(&self) -> u32 {
        self.in_flight.get()
    }
}
