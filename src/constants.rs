/// Markup contract between the page and the animation engine.
///
/// Attribute and class names live here so the page templates and the
/// wiring code agree on one spelling.
// Effect roots
pub const SEL_REVEAL: &str = "[data-reveal]";
pub const SEL_PARALLAX: &str = "[data-parallax]";
pub const SEL_PARALLAX_LAYER: &str = "[data-parallax-layer]";
pub const SEL_POINTER_CONTAINER: &str = "[data-pointer-parallax]";
pub const SEL_POINTER_CHILD: &str = "[data-sensitivity]";
pub const SEL_PARTICLES: &str = "[data-particles]";
pub const SEL_SHAPES: &str = "[data-shapes]";
pub const SEL_CODE: &str = "[data-code]";
pub const SEL_GRID: &str = "[data-grid]";
pub const SEL_ORBS: &str = "[data-orbs]";
pub const SEL_CANVAS_FX: &str = "canvas[data-fx]";
pub const SEL_TYPEWRITER: &str = "[data-typewriter]";
pub const SEL_NAV: &str = "[data-nav]";
pub const SEL_NAV_LINK: &str = "a[href^=\"#\"]";
pub const SEL_STAGGER: &str = "[data-reveal-stagger]";

// Per-element options
pub const ATTR_REVEAL: &str = "data-reveal";
pub const ATTR_SPEED: &str = "data-speed";
pub const ATTR_DIRECTION: &str = "data-direction";
pub const ATTR_FADE: &str = "data-fade";
pub const ATTR_SCALE: &str = "data-scale";
pub const ATTR_POINTER_LEAVE: &str = "data-pointer-parallax";
pub const ATTR_SENSITIVITY: &str = "data-sensitivity";
pub const ATTR_COUNT: &str = "data-count";
pub const ATTR_COLOR: &str = "data-color";
pub const ATTR_FX: &str = "data-fx";
pub const ATTR_TYPEWRITER: &str = "data-typewriter";
pub const ATTR_AUTO_MOUNT: &str = "data-fx-auto";

// Classes toggled by the engine
pub const CLASS_REVEALED: &str = "revealed";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_DARK: &str = "dark";
pub const CLASS_PARTICLE: &str = "fx-particle";
pub const CLASS_SHAPE: &str = "fx-shape";
pub const CLASS_CODE: &str = "fx-code";
pub const CLASS_GRID: &str = "fx-grid";
pub const CLASS_ORB: &str = "fx-orb";

// Sensitivity used when a pointer-parallax child gives none (px at the edge is half this)
pub const POINTER_SENSITIVITY_DEFAULT: f32 = 30.0;
