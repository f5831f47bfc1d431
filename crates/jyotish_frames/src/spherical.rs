//! Cartesian ↔ spherical conversion and ecliptic ↔ equatorial rotation.

/// Spherical coordinates: longitude and latitude in degrees, distance in the
/// units of the Cartesian input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in [0, 360).
    pub lon_deg: f64,
    /// Latitude in [−90, 90].
    pub lat_deg: f64,
    pub distance: f64,
}

/// Cartesian `[x, y, z]` to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let rho = x.hypot(y);
    let distance = rho.hypot(z);
    SphericalCoords {
        lon_deg: y.atan2(x).to_degrees().rem_euclid(360.0),
        lat_deg: z.atan2(rho).to_degrees(),
        distance,
    }
}

/// Spherical coordinates to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance * cos_lat * cos_lon,
        s.distance * cos_lat * sin_lon,
        s.distance * sin_lat,
    ]
}

/// Rotate an equatorial vector into the ecliptic frame of obliquity `eps_deg`.
pub fn rotate_equatorial_to_ecliptic(v: &[f64; 3], eps_deg: f64) -> [f64; 3] {
    let (s, c) = eps_deg.to_radians().sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}

/// Ecliptic (λ, β) to equatorial (α, δ), all in degrees.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, eps_deg: f64) -> (f64, f64) {
    let (sin_l, cos_l) = lon_deg.to_radians().sin_cos();
    let (sin_b, cos_b) = lat_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = eps_deg.to_radians().sin_cos();
    let ra = (sin_l * cos_e - (sin_b / cos_b) * sin_e).atan2(cos_l);
    let dec = (sin_b * cos_e + cos_b * sin_e * sin_l).clamp(-1.0, 1.0).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}

/// Equatorial (α, δ) to ecliptic (λ, β), all in degrees.
pub fn equatorial_to_ecliptic(ra_deg: f64, dec_deg: f64, eps_deg: f64) -> (f64, f64) {
    let (sin_a, cos_a) = ra_deg.to_radians().sin_cos();
    let (sin_d, cos_d) = dec_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = eps_deg.to_radians().sin_cos();
    let lon = (sin_a * cos_e + (sin_d / cos_d) * sin_e).atan2(cos_a);
    let lat = (sin_d * cos_e - cos_d * sin_e * sin_a).clamp(-1.0, 1.0).asin();
    (lon.to_degrees().rem_euclid(360.0), lat.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4392911;

    #[test]
    fn unit_axes() {
        let s = cartesian_to_spherical(&[0.0, 2.0, 0.0]);
        assert!((s.lon_deg - 90.0).abs() < 1e-12);
        assert!(s.lat_deg.abs() < 1e-12);
        assert!((s.distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn negative_y_wraps_to_positive_longitude() {
        let s = cartesian_to_spherical(&[1.0, -1.0, 0.0]);
        assert!((s.lon_deg - 315.0).abs() < 1e-12);
    }

    #[test]
    fn spherical_cartesian_inverse() {
        let s = SphericalCoords {
            lon_deg: 123.4,
            lat_deg: -5.6,
            distance: 384_400.0,
        };
        let back = cartesian_to_spherical(&spherical_to_cartesian(&s));
        assert!((back.lon_deg - s.lon_deg).abs() < 1e-9);
        assert!((back.lat_deg - s.lat_deg).abs() < 1e-9);
        assert!((back.distance - s.distance).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_13a_pollux() {
        // α = 116.328942°, δ = 28.026183° → λ = 113.215630°, β = 6.684170°
        let (lon, lat) = equatorial_to_ecliptic(116.328942, 28.026183, EPS);
        assert!((lon - 113.215630).abs() < 1e-4, "λ = {lon}");
        assert!((lat - 6.684170).abs() < 1e-4, "β = {lat}");
        let (ra, dec) = ecliptic_to_equatorial(lon, lat, EPS);
        assert!((ra - 116.328942).abs() < 1e-6);
        assert!((dec - 28.026183).abs() < 1e-6);
    }

    #[test]
    fn summer_solstice_declination() {
        let (_, dec) = ecliptic_to_equatorial(90.0, 0.0, EPS);
        assert!((dec - EPS).abs() < 1e-9);
    }

    #[test]
    fn vector_rotation_matches_angles() {
        let lon: f64 = 200.0;
        let lat: f64 = 1.5;
        let (ra, dec) = ecliptic_to_equatorial(lon, lat, EPS);
        let eq = spherical_to_cartesian(&SphericalCoords {
            lon_deg: ra,
            lat_deg: dec,
            distance: 1.0,
        });
        let ecl = cartesian_to_spherical(&rotate_equatorial_to_ecliptic(&eq, EPS));
        assert!((ecl.lon_deg - lon).abs() < 1e-9);
        assert!((ecl.lat_deg - lat).abs() < 1e-9);
    }
}
