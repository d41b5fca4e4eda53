/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Separator for list values passed through flags or env
pub const LIST_SEPARATOR: char = ',';
