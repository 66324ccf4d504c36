//! HTTP handler modules.
//! Used by: server.

pub mod me;
pub mod status;
