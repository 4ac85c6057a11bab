/// Spiral geometry, motion and page-behaviour tuning constants.
///
/// These keep magic numbers out of the generator, the frame loop and the DOM
/// wiring. `SpiralConfig::default()` and `LoaderTimings::default()` are built
/// from them.
// Curve shape
pub const CURVE_SEGMENTS: usize = 500;
pub const CURVE_TURNS: f32 = 5.0;
pub const BASE_RADIUS: f32 = 0.3; // flower centre
pub const MAX_RADIUS: f32 = 2.5; // fully opened petals
pub const SPIRAL_HEIGHT: f32 = 6.0;
pub const FLOWER_OPEN_EXPONENT: f32 = 0.7;

// Organic noise amplitudes
pub const PETAL_NOISE_AMP: f32 = 0.15;
pub const PETAL_WAVINESS_AMP: f32 = 0.12;
pub const VERTICAL_NOISE_AMP: f32 = 0.08;
pub const PETAL_VARIATION_AMP: f32 = 0.2;
pub const EDGE_DISTORTION_AMP: f32 = 0.25;
pub const VERTICAL_CURVE_AMP: f32 = 0.3;

// Strand layout
pub const STRAND_COUNT: usize = 15;
pub const STRAND_OFFSET_STEP: f32 = 0.04;
pub const STRAND_NOISE_STEP: f32 = 0.6;
pub const STRAND_DIVISIONS: usize = 500; // interpolated samples per strand (+1)
pub const STRAND_COLOR: [f32; 3] = [0x4A as f32 / 255.0, 0x90 as f32 / 255.0, 0xE2 as f32 / 255.0];
pub const BASE_OPACITY: f32 = 0.5;
pub const OPACITY_LAYERS: usize = 3;
pub const OPACITY_LAYER_STEP: f32 = 0.08;
pub const INITIAL_TILT: f32 = std::f32::consts::FRAC_PI_4;

// Motion (per frame)
pub const AUTO_SPIN_PER_FRAME: f32 = 0.003;
pub const ROTATION_LERP: f32 = 0.05;
pub const POINTER_ROTATION_SCALE: f32 = 0.08;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MSAA_SAMPLES: u32 = 4;

// Loader timings (milliseconds)
pub const LOADER_BREAK_DELAY_MS: u32 = 5000;
pub const LOADER_HIDE_DELAY_MS: u32 = 1200;

// DOM contract: element ids and selectors
pub const LOADER_ID: &str = "loader";
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const SPIRAL_CONTAINER_ID: &str = "spiral-container";
pub const THEME_BUTTON_ID: &str = "theme-toggle-btn";
pub const NAME_SELECTOR: &str = ".main-name";
pub const MENU_ITEM_SELECTOR: &str = ".menu-item";

// DOM contract: class names other stylesheets depend on
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_BREAKING: &str = "breaking";
pub const CLASS_HINDI_ACTIVE: &str = "hindi-active";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_DARK_THEME: &str = "dark-theme";

// Persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";
