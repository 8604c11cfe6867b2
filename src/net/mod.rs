//! Network layer for talking to the assistant endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the request/response contract, `assistant` performs the
//! single POST per user turn and interprets the response.

pub mod assistant;
pub mod types;
