//! SPK-kernel backend.
//!
//! States come from a JPL planetary kernel (DE440s or similar). Bodies are
//! chained to the solar-system barycenter, the target is retarded by one
//! light-time iteration, and the geocentric vector is rotated from ICRF into
//! the J2000 ecliptic. Longitudes are then carried to the ecliptic of date by
//! general precession, and nutation plus annual aberration are applied.
//! Lunar nodes come from the same theory as the analytic backend.

use std::path::Path;

use jpl_kernel::SpkKernel;
use jyotish_frames::{
    OBLIQUITY_J2000_DEG, cartesian_to_spherical, general_precession_longitude_deg, nutation,
    rotate_equatorial_to_ecliptic,
};
use jyotish_time::{J2000_JD, SECONDS_PER_DAY, centuries_since_j2000, jd_ut_to_tt};
use tracing::debug;

use crate::analytic::{annual_aberration_deg, node_longitude_deg};
use crate::{Body, EclipticPoint, Ephemeris, EphemerisError, NodeMode};

const EARTH: i32 = 399;
const SUN: i32 = 10;
const LIGHT_KM_S: f64 = 299_792.458;

/// Kernel-backed ephemeris. The kernel is held in memory, so queries take
/// `&self` and need no locking.
pub struct KernelEphemeris {
    kernel: SpkKernel,
    node_mode: NodeMode,
}

impl std::fmt::Debug for KernelEphemeris {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KernelEphemeris")
            .field("segments", &self.kernel.segments().len())
            .field("node_mode", &self.node_mode)
            .finish()
    }
}

impl KernelEphemeris {
    pub fn load(path: &Path, node_mode: NodeMode) -> Result<Self, EphemerisError> {
        let kernel =
            SpkKernel::load(path).map_err(|e| EphemerisError::KernelLoad(e.to_string()))?;
        debug!(
            path = %path.display(),
            segments = kernel.segments().len(),
            "loaded SPK kernel"
        );
        Ok(Self::from_kernel(kernel, node_mode))
    }

    pub fn from_kernel(kernel: SpkKernel, node_mode: NodeMode) -> Self {
        Self { kernel, node_mode }
    }

    fn geocentric_icrf(&self, code: i32, epoch_s: f64) -> Result<[f64; 3], EphemerisError> {
        let earth = self.kernel.resolve_to_ssb(EARTH, epoch_s)?;
        let mut target = self.kernel.resolve_to_ssb(code, epoch_s)?;
        let mut rel = [0.0; 3];
        for k in 0..3 {
            rel[k] = target[k] - earth[k];
        }
        let light_s = (rel[0] * rel[0] + rel[1] * rel[1] + rel[2] * rel[2]).sqrt() / LIGHT_KM_S;
        target = self.kernel.resolve_to_ssb(code, epoch_s - light_s)?;
        for k in 0..3 {
            rel[k] = target[k] - earth[k];
        }
        Ok(rel)
    }

    /// Geometric (λ, β, distance) in the ecliptic of date, no nutation.
    fn of_date(&self, code: i32, epoch_s: f64, t: f64) -> Result<(f64, f64, f64), EphemerisError> {
        let icrf = self.geocentric_icrf(code, epoch_s)?;
        let ecl = cartesian_to_spherical(&rotate_equatorial_to_ecliptic(&icrf, OBLIQUITY_J2000_DEG));
        Ok((
            (ecl.lon_deg + general_precession_longitude_deg(t)).rem_euclid(360.0),
            ecl.lat_deg,
            ecl.distance,
        ))
    }
}

impl Ephemeris for KernelEphemeris {
    fn name(&self) -> &'static str {
        "kernel"
    }

    fn apparent(&self, jd_ut: f64, body: Body) -> Result<EclipticPoint, EphemerisError> {
        let jd_tt = jd_ut_to_tt(jd_ut);
        let t = centuries_since_j2000(jd_tt);
        let epoch_s = (jd_tt - J2000_JD) * SECONDS_PER_DAY;
        let dpsi = nutation(t).longitude_deg;

        let (lon, lat, distance_km) = match body {
            Body::Rahu => (node_longitude_deg(self.node_mode, t), 0.0, 0.0),
            Body::Ketu | Body::Ascendant => {
                return Err(EphemerisError::UnknownBody(body.name().into()));
            }
            Body::Moon => self.of_date(301, epoch_s, t)?,
            physical => {
                let code = physical
                    .naif_code()
                    .ok_or_else(|| EphemerisError::UnknownBody(physical.name().into()))?;
                let sun = self.of_date(SUN, epoch_s, t)?;
                let (lon, lat, dist) = if code == SUN {
                    sun
                } else {
                    self.of_date(code, epoch_s, t)?
                };
                (lon + annual_aberration_deg(lon, lat, sun.0), lat, dist)
            }
        };

        Ok(EclipticPoint {
            longitude_deg: (lon + dpsi).rem_euclid(360.0),
            latitude_deg: lat,
            distance_km,
        })
    }
}
