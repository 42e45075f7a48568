//! Render-side data
//!
//! Drawing is left to the host; this module packs frames into GPU-ready
//! instance records.

pub mod instance;

pub use instance::{PentagonInstance, instances};
