use log::Level;

/// Key the in-progress subscription form is persisted under.
pub const STORAGE_KEY: &str = "subscription-store-v1";

pub const INDIA_COUNTRY_CODE: &str = "+91";
pub const DEFAULT_COUNTRY_CODE: &str = INDIA_COUNTRY_CODE;

// Used when the content lists no billing cycles at all
pub const DEFAULT_CYCLE_KEY: &str = "yearly";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
