//! Environment knobs for the diagnostic tools, read once per process.

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `QR_DEBUG` set to anything turns on debug logging in the tools
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

static RENDER_SCALE: OnceLock<usize> = OnceLock::new();

/// Image pixels per module (`QR_PLAN_SCALE`, default 8)
pub fn render_scale() -> usize {
    *RENDER_SCALE.get_or_init(|| parse_env_usize("QR_PLAN_SCALE", 8).clamp(1, 64))
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Light border in modules around a dumped symbol (`QR_PLAN_QUIET_ZONE`, default 4)
pub fn quiet_zone() -> usize {
    *QUIET_ZONE.get_or_init(|| parse_env_usize("QR_PLAN_QUIET_ZONE", 4).clamp(0, 16))
}
