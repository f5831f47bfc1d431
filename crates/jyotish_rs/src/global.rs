//! Process-wide engine.
//!
//! Installed once by [`init`] and read-only afterwards. Calls made before
//! any `init` use the analytic backend in IST.

use std::sync::OnceLock;

use chrono::FixedOffset;
use jyotish_core::{Engine, EngineConfig};
use jyotish_time::ist;
use tracing::info;

use crate::error::JyotishError;

pub(crate) struct Runtime {
    pub(crate) engine: Engine,
    pub(crate) zone: FixedOffset,
}

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Installs the engine with IST as the civil zone.
pub fn init(config: EngineConfig) -> Result<(), JyotishError> {
    init_with_zone(config, ist())
}

/// Installs the engine with an explicit civil zone for dates and reported
/// instants.
///
/// # Errors
///
/// Fails when the configuration is invalid, the kernel cannot be loaded, or
/// an engine is already installed.
pub fn init_with_zone(config: EngineConfig, zone: FixedOffset) -> Result<(), JyotishError> {
    let backend = config.backend;
    let engine = Engine::new(config)?;
    RUNTIME
        .set(Runtime { engine, zone })
        .map_err(|_| JyotishError::AlreadyInitialized)?;
    info!(?backend, %zone, "jyotish engine initialised");
    Ok(())
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

pub(crate) fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| Runtime {
        engine: Engine::analytic(),
        zone: ist(),
    })
}
