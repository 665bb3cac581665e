// Core business logic module

pub mod config;
pub mod monitor;
pub mod nightscout;
pub mod notify;
pub mod settings;

// Re-export commonly used items
pub use config::Config;
pub use monitor::{IngestOutcome, ReadingEngine, ThresholdPolicy};
pub use nightscout::NightscoutClient;
pub use settings::Settings;
