//! Riverwood Agent Service Library
//!
//! This library contains the worker-side logic for the Riverwood voice agent:
//! environment configuration, session assembly, session event observers, the
//! room client, and the entrypoint state machine. The `bin/agent.rs` binary is
//! a thin wrapper around this library.

pub mod config;
pub mod entry;
pub mod room;
pub mod session;
