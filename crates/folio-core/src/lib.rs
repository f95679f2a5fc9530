//! Viewport-reactive animation engine for the folio portfolio site.
//!
//! Every primitive here is host-independent: it consumes scroll offsets,
//! pointer positions, element rectangles and elapsed time, and produces
//! numbers (offsets, opacity, scale) or draw calls on a [`Surface`]. The
//! `folio-web` crate wires them to the browser.

pub mod color;
pub mod constants;
pub mod error;
pub mod field;
pub mod geometry;
pub mod layouts;
pub mod lifecycle;
pub mod network;
pub mod parallax;
pub mod pointer;
pub mod rain;
pub mod scroll;
pub mod surface;
pub mod theme;
pub mod typewriter;
pub mod visibility;

pub use color::{Hue, Palette, Rgba};
pub use constants::*;
pub use error::{FxError, FxResult};
pub use field::{FieldRanges, ParticleDescriptor, ParticleField};
pub use geometry::{Rect, Viewport};
pub use layouts::{
    floating_shapes, floating_snippets, gradient_orbs, AnimatedGrid, FloatingShape, FloatingSnippet,
    GradientOrb, Inset, ShapeKind,
};
pub use lifecycle::{AliveFlag, Disposer, Lifecycle, RepeatingTask, Subscription};
pub use network::{NetworkConfig, NetworkSim, Node};
pub use parallax::{Direction, ParallaxConfig, ParallaxLayer, ParallaxValues, ScrollParallax};
pub use pointer::{LeaveBehavior, PointerParallax, PointerState};
pub use rain::{RainColumn, RainConfig, RainSim};
pub use scroll::{is_scrolled, ScrollSpy, ScrollState, Section};
pub use surface::Surface;
pub use theme::{Theme, ThemeFlag};
pub use typewriter::Typewriter;
pub use visibility::{IntersectionSample, VisibilityTrigger};
