//! Capability traits at the pipeline's collaboration seams.
//!
//! Production implementations live in [`crate::fetch`], [`crate::transcript`],
//! and [`crate::model`]. Tests substitute the mocks in [`crate::testing`].

pub mod fetch;
pub mod model;
pub mod transcript;

pub use fetch::PageFetcher;
pub use model::ChatModel;
pub use transcript::TranscriptSource;
