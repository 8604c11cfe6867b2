//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns the conversation signal and the network call;
//! `chat_panel` renders it and reports user intent back through callbacks.

pub mod chat_panel;
pub mod chat_widget;
