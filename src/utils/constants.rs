// Worker timing
pub const TICK_MILLIS: u64 = 10; // sleep between steps (ms), not delta-compensated
pub const FALLBACK_DT: f64 = 0.01; // s, substituted when the clock reads a zero/negative delta
pub const MIN_DT: f64 = 1e-4; // s, floor applied to dt before it is used as a divisor

// Numeric guards
pub const NORM_EPSILON: f64 = 1e-6; // length below which a direction is treated as degenerate

// Control gains
pub const RADIAL_STIFFNESS: f64 = 50.0; // N/m, spring pulling back toward the roam radius
pub const TANGENTIAL_DAMPING: f64 = 5.0; // 1/s, damping applied to tangential velocity
pub const CAPTURE_MARGIN: f64 = 0.5; // m, added to the sphere radius for the roam handover
pub const HEADING_RATE: f64 = 0.5; // rad/s, slow drift of the wander heading
pub const HEADING_JITTER: f64 = 3.14; // rad, random spread added to the wander heading
