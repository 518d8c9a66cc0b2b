use bevy::math::Vec3;

/// Convert geodetic coordinates to a world-space position on a sphere.
///
/// Latitude 0°/longitude 0° sits on +X, the north pole on +Y, and longitude
/// grows westward around -Z so the globe spins the familiar way under the
/// default camera.
pub fn geo_to_world(lat_deg: f64, lng_deg: f64, radius: f32) -> Vec3 {
    let lat = lat_deg.to_radians();
    let lng = lng_deg.to_radians();
    Vec3::new(
        (lat.cos() * lng.cos()) as f32,
        lat.sin() as f32,
        -(lat.cos() * lng.sin()) as f32,
    ) * radius
}

/// Outward unit normal of the sphere surface at the given coordinates.
pub fn surface_normal(lat_deg: f64, lng_deg: f64) -> Vec3 {
    geo_to_world(lat_deg, lng_deg, 1.0).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 100.0;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn prime_meridian_equator_lands_on_x() {
        assert!(close(geo_to_world(0.0, 0.0, R), Vec3::new(R, 0.0, 0.0)));
    }

    #[test]
    fn poles_land_on_y() {
        assert!(close(geo_to_world(90.0, 0.0, R), Vec3::new(0.0, R, 0.0)));
        assert!(close(geo_to_world(-90.0, 0.0, R), Vec3::new(0.0, -R, 0.0)));
        // Longitude is meaningless at a pole but must not move the point.
        assert!(close(geo_to_world(90.0, 135.0, R), Vec3::new(0.0, R, 0.0)));
    }

    #[test]
    fn east_longitude_wraps_around_negative_z() {
        assert!(close(geo_to_world(0.0, 90.0, R), Vec3::new(0.0, 0.0, -R)));
        assert!(close(geo_to_world(0.0, -90.0, R), Vec3::new(0.0, 0.0, R)));
    }

    #[test]
    fn every_point_sits_on_the_sphere() {
        for (lat, lng) in [(51.5, -0.1), (-33.9, 151.2), (35.7, 139.7), (0.0, 180.0)] {
            let p = geo_to_world(lat, lng, R);
            assert!((p.length() - R).abs() < 1e-3);
            // Normal points away from the centre through the surface point.
            let n = surface_normal(lat, lng);
            assert!(close(p + n * 5.0, p * ((R + 5.0) / R)));
        }
    }
}
