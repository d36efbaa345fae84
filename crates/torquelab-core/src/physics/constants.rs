//! Physics and balance constants
//!
//! Everything empirical lives here: real physical constants, the simplified
//! vehicle model's fixed geometry, and the game-balance scalers applied to
//! parts and tuning. Balance values are tunables, not physical law.

// --- Environment and vehicle geometry ---

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY: f64 = 1.225;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Effective frontal area (m²)
pub const FRONTAL_AREA: f64 = 2.2;

/// Driven tire radius (m), approx a 26 inch tire
pub const TIRE_RADIUS: f64 = 0.33;

/// Fraction of crank torque lost through the drivetrain
pub const DRIVETRAIN_LOSS: f64 = 0.15;

/// Fraction of rated power reaching the wheels in the top-speed estimate
pub const POWER_EFFICIENCY: f64 = 0.85;

/// Drag coefficient of the bodywork before tuning penalties
pub const BASE_DRAG: f64 = 0.3;

/// Reference curb weight (lb) for braking and lateral-g scaling
pub const REFERENCE_WEIGHT: f64 = 1752.0;

/// Lateral-g of the reference car at neutral grip and handling
pub const LATERAL_G_BASE: f64 = 1.05;

// --- Engine model ---

/// Default redline (RPM) before any part moves it
pub const DEFAULT_RPM_LIMIT: f64 = 8000.0;

/// Default shift time (s) before any transmission part sets one
pub const DEFAULT_SHIFT_TIME: f64 = 0.3;

/// Below this RPM the engine makes a fraction of peak torque (launch/idle)
pub const TORQUE_LOW_RPM: f64 = 1000.0;

/// Fraction of peak torque available below [`TORQUE_LOW_RPM`]
pub const TORQUE_LOW_FACTOR: f64 = 0.6;

/// End of the flat torque plateau (RPM)
pub const TORQUE_PLATEAU_END: f64 = 5000.0;

/// RPM span over which torque falls from peak to zero past the plateau
pub const TORQUE_FALLOFF_WINDOW: f64 = 4000.0;

/// Denominator in `hp = torque * rpm / 5252`
pub const HP_RPM_CONST: f64 = 5252.0;

// --- Acceleration simulation ---

/// Simulation time step (s)
pub const SIM_TIME_STEP: f64 = 0.1;

/// Simulation wall-clock cap (s); a run that never reaches the target
/// reports exactly this
pub const SIM_TIME_CAP: f64 = 10.0;

/// 60 mph in m/s, the simulation target speed
pub const TARGET_SPEED: f64 = 26.8224;

/// RPM floor modeling clutch slip at launch
pub const LAUNCH_RPM: f64 = 1000.0;

/// Upshift point during the acceleration run (RPM)
pub const SHIFT_RPM: f64 = 8000.0;

// --- Dyno curve ---

/// Sample spacing on the dyno chart (RPM)
pub const DYNO_RPM_STEP: u32 = 500;

/// Redline above which the power peak moves up (race cams)
pub const RACE_CAM_REDLINE: u32 = 8500;

/// Peak-power RPM with race cams
pub const PEAK_POWER_RPM_RACE: f64 = 7500.0;

/// Peak-power RPM otherwise
pub const PEAK_POWER_RPM_STOCK: f64 = 6000.0;

// --- Gearing ---

/// Top gear ratio assumed when the gear list is empty
pub const FALLBACK_TOP_GEAR: f64 = 0.75;

// --- Part gain balance ---

/// Diminishing-returns tiers for multiplier gains, highest baseline first:
/// (baseline hp floor, gain factor)
pub const GAIN_TIERS: [(f64, f64); 3] = [(900.0, 0.4), (700.0, 0.55), (500.0, 0.7)];

/// Global scale on multiplier gains
pub const GAIN_SCALE: f64 = 0.4;

/// Category scale for ignition parts
pub const IGNITION_GAIN_SCALE: f64 = 0.4;

/// Torque pass-through on turbo multiplier gains
pub const TURBO_TORQUE_FACTOR: f64 = 0.9;

/// Torque pass-through on other multiplier gains
pub const BREATHING_TORQUE_FACTOR: f64 = 0.7;

// --- Tuning balance ---

/// Ideal tire pressure (psi)
pub const IDEAL_TIRE_PRESSURE: f64 = 30.0;

/// Grip lost per psi of deviation from ideal pressure
pub const PRESSURE_GRIP_LOSS: f64 = 0.005;

/// Handling gained per kg of total downforce
pub const DOWNFORCE_HANDLING_GAIN: f64 = 0.0005;

/// Drag added per kg of total downforce
pub const DOWNFORCE_DRAG_PENALTY: f64 = 0.0002;

/// Ideal camber (degrees)
pub const IDEAL_CAMBER: f64 = -1.5;

/// Handling lost per degree of camber away from ideal, per axle
pub const CAMBER_PENALTY: f64 = 0.01;

/// Drag added per degree of total toe (scrub)
pub const TOE_SCRUB_PENALTY: f64 = 0.002;

/// Baseline spring rate (lb/in)
pub const BASELINE_SPRING_RATE: f64 = 500.0;

/// Handling gained per lb/in of average spring rate over baseline
pub const SPRING_STIFFNESS_BONUS: f64 = 0.0001;

/// Baseline ride height (in)
pub const BASELINE_RIDE_HEIGHT: f64 = 10.0;

/// Handling lost per inch of average ride height over baseline
pub const RIDE_HEIGHT_PENALTY: f64 = 0.002;

/// Grip bonus per percent of average differential accel lock
pub const DIFF_TRACTION_BONUS: f64 = 0.001;

// --- Performance Index ---

/// PI blend weights for (hp ratio, weight ratio, grip)
pub const PI_WEIGHTS: (f64, f64, f64) = (0.35, 0.30, 0.35);

/// Fraction of the raw PI deviation from 1.0 that is kept
pub const PI_DAMPING: f64 = 0.7;

/// Lowest possible PI
pub const PI_MIN: u32 = 100;

/// Highest possible PI
pub const PI_MAX: u32 = 999;

/// Baseline PI assumed when a car record carries none
pub const PI_FALLBACK: f64 = 500.0;
