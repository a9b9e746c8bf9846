// Adapters layer: concrete implementations for external systems.

pub mod installer;

pub use installer::FhirCliInstaller;
