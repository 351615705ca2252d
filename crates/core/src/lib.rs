//! Riverwood Core Library Crate
//!
//! This library contains the provider-independent pieces of the Riverwood
//! site-desk agent: the mock site-data backend, the lookup outcome type, the
//! tool service exposed to the language model, and the persona configuration.
//! The `riverwood-agent` service binary wires these into a live room session.

pub mod agent;
pub mod backend;
pub mod lookup;
pub mod persona;
