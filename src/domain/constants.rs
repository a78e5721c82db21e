pub const CONFIG_EXTENSION: &str = "config";
pub const OUTPUT_EXTENSION: &str = "output";
pub const PROCESS_FILE_PREFIX: &str = "proc";

/// Printed on any property violation; scripts grep for it.
pub const VALIDATION_FAILED: &str = "Validation failed!";
