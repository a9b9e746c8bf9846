pub mod artifacts;
pub mod cleanup;
pub mod setup;
