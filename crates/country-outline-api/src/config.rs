//! Configuration loading and resolution.

/// Default listen address when neither a flag nor the env var is set.
const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Resolve the listen address: explicit flag > `OUTLINE_ADDR` env var >
/// default.
pub fn resolve_listen_addr(explicit: Option<&str>) -> String {
    if let Some(addr) = explicit {
        return addr.to_string();
    }

    if let Ok(env_addr) = std::env::var("OUTLINE_ADDR") {
        return env_addr;
    }

    DEFAULT_ADDR.to_string()
}
