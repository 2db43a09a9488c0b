//! Command implementations.

pub mod assess;
pub mod classify;
pub mod config;
pub mod listings;
pub mod seed;
pub mod show;

pub use self::assess::execute_assess;
pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::listings::execute_listings;
pub use self::seed::execute_seed;
pub use self::show::execute_show;
