// Config layer - settings, environment access, logging
pub mod application_settings;
pub mod env_provider;
pub mod logging;

pub use application_settings::{ApplicationSettings, StorageSettings};
pub use env_provider::{EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use logging::init_logging;
