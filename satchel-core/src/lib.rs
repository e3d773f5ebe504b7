//! Core types for the satchel ecosystem.
//!
//! This crate maps event and task records to and from iCalendar
//! documents (RFC 5545) and builds the iTIP scheduling messages
//! (RFC 5546) layered on top of them:
//! - `Event`, `Task` and `Participant` records
//! - `ics` module for record encoding/decoding
//! - `itip` module for invitations, replies and cancellations
//!
//! Every operation is a pure transformation over in-memory data; the
//! crate performs no I/O and never logs, so callers decide how each
//! returned error is surfaced.

pub mod error;
pub mod event;
pub mod ics;
pub mod itip;
pub mod participant;
pub mod task;
pub mod uid;

// Re-export the main types at crate root for convenience
pub use error::{SatchelError, SatchelResult};
pub use event::Event;
pub use ics::{generate_event, generate_task, parse_event, parse_task};
pub use itip::{
    Invite, Method, Response, generate_cancellation, generate_invitation, generate_reply,
    parse_invite,
};
pub use participant::{Participant, ParticipationStatus};
pub use task::{Task, TaskStatus};
pub use uid::new_uid;
