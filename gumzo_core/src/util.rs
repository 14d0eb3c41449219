//! Shared defaults.

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// System instruction used when `SYSTEM_INSTRUCTION` is not set.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "Respond to customer queries in a helpful and friendly manner.";

/// SQLite file holding the thread records, relative to the working directory.
pub const DEFAULT_THREADS_DB: &str = "threads.db";
