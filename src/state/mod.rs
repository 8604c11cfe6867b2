//! Client-side state for the chat widget.
//!
//! DESIGN
//! ======
//! State is kept free of Leptos types so it can be exercised natively in
//! tests; the component owns the reactive wrapper.

pub mod chat;
