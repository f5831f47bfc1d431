//! Ephemeris adapter for the jyotish workspace.
//!
//! This crate provides the [`Ephemeris`] contract, two backends
//! ([`AnalyticEphemeris`], file-free and the default, and
//! [`KernelEphemeris`], backed by a JPL SPK file), the Lahiri ayanamsa, and
//! the shared [`Engine`] that the rest of the workspace queries.
//!
//! Positions are apparent tropical ecliptic coordinates of date. Sidereal
//! longitudes subtract the true Lahiri ayanamsa.

pub mod analytic;
pub mod ayanamsa;
pub mod body;
pub mod error;
pub mod kernel;

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use analytic::AnalyticEphemeris;
pub use body::{Body, GRAHA_BODIES};
pub use error::EphemerisError;
pub use kernel::KernelEphemeris;

/// Half-width of the central difference used for speeds, days.
const MOON_SPEED_STEP_DAYS: f64 = 0.5 / 24.0;
const SPEED_STEP_DAYS: f64 = 0.5;

/// Which ephemeris backend the engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Analytic,
    Kernel,
}

/// Lunar node model for Rahu (Ketu follows at +180°).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    #[default]
    Mean,
    True,
}

/// Engine configuration used at startup time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub backend: BackendKind,
    /// SPK file; required by [`BackendKind::Kernel`].
    pub kernel_path: Option<PathBuf>,
    pub node_mode: NodeMode,
}

impl EngineConfig {
    /// Kernel-backed configuration for a single SPK file.
    pub fn with_kernel(path: PathBuf) -> Self {
        Self {
            backend: BackendKind::Kernel,
            kernel_path: Some(path),
            node_mode: NodeMode::Mean,
        }
    }

    pub fn validate(&self) -> Result<(), EphemerisError> {
        match (&self.backend, &self.kernel_path) {
            (BackendKind::Kernel, None) => Err(EphemerisError::InvalidConfig(
                "kernel backend requires kernel_path",
            )),
            (_, Some(p)) if p.as_os_str().is_empty() => Err(EphemerisError::InvalidConfig(
                "kernel_path must not be empty",
            )),
            _ => Ok(()),
        }
    }
}

/// Apparent ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPoint {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_km: f64,
}

/// Tropical position plus longitudinal speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyState {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_km: f64,
    pub speed_deg_per_day: f64,
}

/// Sidereal position with the motion flag already decided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiderealState {
    pub body: Body,
    /// Sidereal longitude in [0, 360).
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_km: f64,
    pub speed_deg_per_day: f64,
    /// Always true for the nodes.
    pub retrograde: bool,
}

/// Signed shortest difference `a − b` in (−180, 180].
pub fn signed_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

fn finite(value: f64, body: Body, quantity: &'static str) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::NonFinite {
            body: body.name().into(),
            quantity,
        })
    }
}

/// Ephemeris backend contract.
///
/// Implementors answer [`Ephemeris::apparent`] for the Sun, Moon, the five
/// planets and Rahu. Ketu, speeds and the finiteness checks are layered on
/// top by the provided methods.
pub trait Ephemeris: Send + Sync {
    fn name(&self) -> &'static str;

    fn apparent(&self, jd_ut: f64, body: Body) -> Result<EclipticPoint, EphemerisError>;

    /// True Lahiri ayanamsa in degrees.
    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        let a = ayanamsa::lahiri_true_deg(jd_ut);
        if a.is_finite() {
            Ok(a)
        } else {
            Err(EphemerisError::NonFinite {
                body: "ayanamsa".into(),
                quantity: "ayanamsa",
            })
        }
    }

    /// Tropical state with speed from a central difference.
    fn position(&self, jd_ut: f64, body: Body) -> Result<BodyState, EphemerisError> {
        let source = match body {
            Body::Ascendant => return Err(EphemerisError::UnknownBody(body.name().into())),
            Body::Ketu => Body::Rahu,
            other => other,
        };
        let h = if source == Body::Moon {
            MOON_SPEED_STEP_DAYS
        } else {
            SPEED_STEP_DAYS
        };
        let here = self.apparent(jd_ut, source)?;
        let before = self.apparent(jd_ut - h, source)?;
        let after = self.apparent(jd_ut + h, source)?;
        let speed = signed_separation(after.longitude_deg, before.longitude_deg) / (2.0 * h);

        let (longitude_deg, latitude_deg) = if body == Body::Ketu {
            ((here.longitude_deg + 180.0).rem_euclid(360.0), -here.latitude_deg)
        } else {
            (here.longitude_deg, here.latitude_deg)
        };
        Ok(BodyState {
            longitude_deg: finite(longitude_deg, body, "longitude")?,
            latitude_deg,
            distance_km: here.distance_km,
            speed_deg_per_day: finite(speed, body, "speed")?,
        })
    }
}

/// Shared query engine.
///
/// `Engine` is cheap to clone and is [`Send`] + [`Sync`]; backends are
/// reentrant, so one instance serves every thread.
#[derive(Clone)]
pub struct Engine {
    config: EngineConfig,
    backend: Arc<dyn Ephemeris>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::analytic()
    }
}

impl Engine {
    /// Build the backend named by `config`, loading a kernel if needed.
    pub fn new(config: EngineConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        let backend: Arc<dyn Ephemeris> = match (&config.backend, &config.kernel_path) {
            (BackendKind::Kernel, Some(path)) => {
                Arc::new(KernelEphemeris::load(path, config.node_mode)?)
            }
            _ => Arc::new(AnalyticEphemeris::new(config.node_mode)),
        };
        info!(backend = backend.name(), node_mode = ?config.node_mode, "ephemeris engine ready");
        Ok(Self { config, backend })
    }

    /// Analytic backend with mean nodes.
    pub fn analytic() -> Self {
        Self {
            config: EngineConfig::default(),
            backend: Arc::new(AnalyticEphemeris::default()),
        }
    }

    /// Wrap a caller-supplied backend.
    pub fn with_backend(config: EngineConfig, backend: Arc<dyn Ephemeris>) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn position(&self, jd_ut: f64, body: Body) -> Result<BodyState, EphemerisError> {
        self.backend.position(jd_ut, body)
    }

    /// Apparent coordinates without the speed evaluation. Ketu is derived
    /// from Rahu.
    pub fn apparent(&self, jd_ut: f64, body: Body) -> Result<EclipticPoint, EphemerisError> {
        let point = match body {
            Body::Ketu => {
                let rahu = self.backend.apparent(jd_ut, Body::Rahu)?;
                EclipticPoint {
                    longitude_deg: (rahu.longitude_deg + 180.0).rem_euclid(360.0),
                    latitude_deg: -rahu.latitude_deg,
                    distance_km: rahu.distance_km,
                }
            }
            other => self.backend.apparent(jd_ut, other)?,
        };
        finite(point.longitude_deg, body, "longitude")?;
        finite(point.distance_km, body, "distance")?;
        Ok(point)
    }

    pub fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.backend.ayanamsa(jd_ut)
    }

    /// Sidereal longitude in [0, 360).
    pub fn sidereal_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        if body == Body::Ascendant {
            return Err(EphemerisError::UnknownBody(body.name().into()));
        }
        let point = self.apparent(jd_ut, body)?;
        Ok((point.longitude_deg - self.ayanamsa(jd_ut)?).rem_euclid(360.0))
    }

    pub fn sidereal_state(&self, jd_ut: f64, body: Body) -> Result<SiderealState, EphemerisError> {
        let state = self.position(jd_ut, body)?;
        let ayanamsa = self.ayanamsa(jd_ut)?;
        Ok(SiderealState {
            body,
            longitude_deg: (state.longitude_deg - ayanamsa).rem_euclid(360.0),
            latitude_deg: state.latitude_deg,
            distance_km: state.distance_km,
            speed_deg_per_day: state.speed_deg_per_day,
            retrograde: body.is_node() || state.speed_deg_per_day < 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Ephemeris for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn apparent(&self, _jd_ut: f64, _body: Body) -> Result<EclipticPoint, EphemerisError> {
            Ok(EclipticPoint {
                longitude_deg: f64::NAN,
                latitude_deg: 0.0,
                distance_km: 1.0,
            })
        }
    }

    #[test]
    fn kernel_backend_requires_path() {
        let config = EngineConfig {
            backend: BackendKind::Kernel,
            ..EngineConfig::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(EphemerisError::InvalidConfig(_))
        ));
        let empty = EngineConfig::with_kernel(PathBuf::new());
        assert!(matches!(
            empty.validate(),
            Err(EphemerisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_kernel_file_is_a_load_error() {
        let config = EngineConfig::with_kernel(PathBuf::from("/nonexistent/de440s.bsp"));
        assert!(matches!(
            Engine::new(config),
            Err(EphemerisError::KernelLoad(_))
        ));
    }

    #[test]
    fn default_config_is_analytic_mean_node() {
        let engine = Engine::new(EngineConfig::default()).expect("analytic engine");
        assert_eq!(engine.backend_name(), "analytic");
        assert_eq!(engine.config().node_mode, NodeMode::Mean);
    }

    #[test]
    fn ascendant_is_not_an_ephemeris_body() {
        let engine = Engine::analytic();
        assert!(matches!(
            engine.position(2_451_545.0, Body::Ascendant),
            Err(EphemerisError::UnknownBody(_))
        ));
    }

    #[test]
    fn ketu_opposes_rahu() {
        let engine = Engine::analytic();
        for k in 0..20 {
            let jd = 2_451_545.0 + k as f64 * 333.3;
            let rahu = engine.sidereal_state(jd, Body::Rahu).expect("rahu");
            let ketu = engine.sidereal_state(jd, Body::Ketu).expect("ketu");
            let diff = signed_separation(ketu.longitude_deg, (rahu.longitude_deg + 180.0) % 360.0);
            assert!(diff.abs() < 1e-6);
            assert!(rahu.retrograde && ketu.retrograde);
            assert!((rahu.speed_deg_per_day - ketu.speed_deg_per_day).abs() < 1e-12);
        }
    }

    #[test]
    fn non_finite_output_rejected() {
        let engine = Engine::with_backend(EngineConfig::default(), Arc::new(Broken));
        assert!(matches!(
            engine.position(2_451_545.0, Body::Sun),
            Err(EphemerisError::NonFinite { .. })
        ));
    }

    #[test]
    fn moon_speed_in_natural_range() {
        let engine = Engine::analytic();
        for k in 0..30 {
            let s = engine
                .position(2_460_000.0 + k as f64, Body::Moon)
                .expect("moon");
            assert!((11.5..15.5).contains(&s.speed_deg_per_day), "{}", s.speed_deg_per_day);
        }
    }

    #[test]
    fn signed_separation_wraps() {
        assert!((signed_separation(1.0, 359.0) - 2.0).abs() < 1e-12);
        assert!((signed_separation(359.0, 1.0) + 2.0).abs() < 1e-12);
    }

    // Compile-time assertion: Engine must be Send + Sync.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<Engine>();
        }
    };
}
