// Constants shared across the edu crates

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "edu.toml";

/// Prefix of environment variables overriding configuration, e.g. `EDU__WEB__PORT`.
pub const ENV_PREFIX: &str = "EDU";

pub const BEARER_TOKEN: &str = "Bearer";

pub const DATA_DIR: &str = "./data";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "edu.log";

/// Connection string used for throwaway in-memory databases.
pub const SQLITE_MEMORY_PATH: &str = ":memory:";
