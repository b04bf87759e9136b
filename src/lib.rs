// LogWise - lib.rs
//
// Library entry point. LogWise is a filtering core, not an application:
// the upload front end, the inference client, and report rendering are
// host-side collaborators consumed through `core::analysis`.

pub mod core;
pub mod util;
