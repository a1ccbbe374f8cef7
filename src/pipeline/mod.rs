pub mod classify;
pub mod extraction;
pub mod group;
pub mod orchestrator;
pub mod textsource;

pub use classify::*;
pub use extraction::extract_fields;
pub use group::*;
pub use orchestrator::*;
pub use textsource::*;
