//! Controller layer: UI events, per-screen form state, and command dispatch.

pub mod events;
pub mod forms;
pub mod orchestration;
