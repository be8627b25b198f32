//! tabroll_core - partition lifecycle engine for tabular models.
//!
//! Everything in this crate is pure: time windows are resolved into
//! partition names and queries, operations are rendered into TMSL
//! documents, and rollover policies compute ordered plans from a date.
//! Network I/O lives behind the [`service`] traits and is implemented by
//! the client crate.

pub mod partition;
pub mod rollover;
pub mod service;
pub mod tmsl;
