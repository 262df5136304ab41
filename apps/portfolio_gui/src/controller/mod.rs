//! Controller layer: UI actions, the reducer that applies them, and the queue they travel on.

pub mod events;
pub mod orchestration;
pub mod reducer;
