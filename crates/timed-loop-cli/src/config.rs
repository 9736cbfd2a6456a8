//! Configuration loading for timed-loop

use std::path::Path;

use eyre::{Result, WrapErr};
use timed_loop::LoopConfig;

/// Load the loop configuration from a JSON file, or use the defaults.
///
/// Missing fields keep their defaults. `continue_value` may be set to `true`
/// to wait for the opposite condition (e.g. a file going away).
pub fn load(path: Option<&Path>) -> Result<LoopConfig<bool>> {
    let Some(path) = path else {
        return Ok(LoopConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}
