//! Operations grouped by API area.
//!
//! Every operation takes a [`crate::Params`] of caller-supplied extras. They are
//! merged after the fields the operation models explicitly, so API options
//! this crate does not know about can still be sent.

mod assets;
mod budgets;
mod categories;
mod tags;
mod transactions;
mod user;
