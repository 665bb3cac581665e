// Command handlers module
pub mod alerts;
mod common;
pub mod completions;
pub mod config;
pub mod open;
pub mod status;
pub mod version;
pub mod watch;

// Re-exports for cleaner imports
pub use alerts::execute as alerts;
pub use completions::execute as completions;
pub use config::execute as config;
pub use open::execute as open;
pub use status::execute as status;
pub use version::execute as version;
pub use watch::execute as watch;
