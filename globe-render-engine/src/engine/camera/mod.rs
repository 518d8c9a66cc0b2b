/// Orbit rig around the globe centre with policy-driven input handling.
pub mod orbit_camera;
