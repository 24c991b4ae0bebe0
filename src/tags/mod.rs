//! Conversation tagging
//!
//! - [`TagStore`] owns user-created tags and their conversation membership
//! - [`generate_auto_tags`] suggests tag names from keyword rules without
//!   creating or assigning anything

pub mod auto;
pub mod store;

pub use auto::generate_auto_tags;
pub use store::TagStore;
