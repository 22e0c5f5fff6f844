//! Activation events: classification and payload.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publisher**: [`Activation`](crate::Activation), when started with
//!   [`Task::activate_with`](crate::Task::activate_with).
//! - **Consumers**: [`SubscriberSet`](crate::SubscriberSet) workers, which fan out
//!   to user [`Subscribe`](crate::Subscribe) implementations.

mod event;

pub use event::{Event, EventKind};
