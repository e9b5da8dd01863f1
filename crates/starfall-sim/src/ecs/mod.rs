//! Columnar entity store: generational ids, per-component storage
//! and a deferred command buffer.

pub mod commands;
pub mod entity;
pub mod world;

pub use commands::{CommandBuffer, FlushSummary};
pub use entity::{EntityAllocator, EntityId};
pub use world::{EntityBundle, World};
