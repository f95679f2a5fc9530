// Fixed decorative layouts: floating shapes, floating code snippets, the
// drifting background grid and the blurred gradient orbs.

use crate::color::{Hue, Rgba};
use crate::constants::{
    GRID_CELL_PX, GRID_DRIFT_SEC, GRID_LINE_PX, ORB_BLUR_PX, ORB_DELAY_STEP_SEC,
};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub size: f32,
    pub hue: Hue,
    pub left: f32,
    pub top: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl FloatingShape {
    pub fn color(&self, theme: Theme) -> Rgba {
        self.hue.shape(theme)
    }

    /// CSS property that carries [`FloatingShape::color`]. Circles and
    /// squares are filled; the triangle is drawn with its bottom border.
    pub fn paint_property(&self) -> &'static str {
        match self.kind {
            ShapeKind::Circle | ShapeKind::Square => "background-color",
            ShapeKind::Triangle => "border-bottom-color",
        }
    }

    /// Geometry and timing, without colour.
    pub fn style_css(&self) -> String {
        let body = match self.kind {
            ShapeKind::Circle => format!(
                "width:{0}px;height:{0}px;border-radius:50%",
                self.size
            ),
            ShapeKind::Square => format!("width:{0}px;height:{0}px", self.size),
            ShapeKind::Triangle => format!(
                "width:0;height:0;border-left:{0}px solid transparent;\
                 border-right:{0}px solid transparent;border-bottom:{1}px solid",
                self.size / 2.0,
                self.size
            ),
        };
        format!(
            "{body};left:{}%;top:{}%;filter:blur(1px);animation-delay:{:.1}s;animation-duration:{:.1}s",
            self.left, self.top, self.delay_sec, self.duration_sec
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingSnippet {
    pub text: &'static str,
    pub left: f32,
    pub top: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

const SHAPES: [(ShapeKind, f32, Hue, f32, f32); 6] = [
    (ShapeKind::Circle, 60.0, Hue::Accent, 10.0, 20.0),
    (ShapeKind::Square, 40.0, Hue::Purple, 85.0, 15.0),
    (ShapeKind::Triangle, 50.0, Hue::Pink, 75.0, 70.0),
    (ShapeKind::Circle, 30.0, Hue::Blue, 15.0, 75.0),
    (ShapeKind::Square, 50.0, Hue::Accent, 50.0, 10.0),
    (ShapeKind::Circle, 45.0, Hue::Purple, 60.0, 85.0),
];

const SNIPPETS: [(&str, f32, f32); 10] = [
    ("const dev = 'Patrick';", 5.0, 15.0),
    ("npm run build", 80.0, 10.0),
    ("git push origin main", 70.0, 80.0),
    ("<Component />", 10.0, 70.0),
    ("async/await", 90.0, 45.0),
    ("{ ...props }", 3.0, 45.0),
    ("export default", 45.0, 5.0),
    ("useState()", 55.0, 90.0),
    ("interface Props", 25.0, 85.0),
    ("return <>...</>;", 85.0, 25.0),
];

/// Shapes with staggered timing: delay `i * 0.8` s, duration `8 + 2i` s.
pub fn floating_shapes() -> Vec<FloatingShape> {
    SHAPES
        .iter()
        .enumerate()
        .map(|(i, &(kind, size, hue, left, top))| FloatingShape {
            kind,
            size,
            hue,
            left,
            top,
            delay_sec: i as f32 * 0.8,
            duration_sec: 8.0 + i as f32 * 2.0,
        })
        .collect()
}

/// Snippets with staggered timing: delay `i * 0.7` s, duration `12 + 1.5i` s.
pub fn floating_snippets() -> Vec<FloatingSnippet> {
    SNIPPETS
        .iter()
        .enumerate()
        .map(|(i, &(text, left, top))| FloatingSnippet {
            text,
            left,
            top,
            delay_sec: i as f32 * 0.7,
            duration_sec: 12.0 + i as f32 * 1.5,
        })
        .collect()
}

/// Faint square grid that drifts slowly behind a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedGrid {
    pub cell_px: f32,
    pub line_px: f32,
    pub drift_sec: f32,
}

impl Default for AnimatedGrid {
    fn default() -> Self {
        Self {
            cell_px: GRID_CELL_PX,
            line_px: GRID_LINE_PX,
            drift_sec: GRID_DRIFT_SEC,
        }
    }
}

impl AnimatedGrid {
    pub fn color(&self, theme: Theme) -> Rgba {
        Hue::Accent.grid(theme)
    }

    /// `background-image` value: one horizontal and one vertical line set.
    pub fn background_image(&self, theme: Theme) -> String {
        let c = self.color(theme).to_css();
        let w = self.line_px;
        format!(
            "linear-gradient({c} {w}px, transparent {w}px), \
             linear-gradient(90deg, {c} {w}px, transparent {w}px)"
        )
    }

    pub fn style_css(&self) -> String {
        format!(
            "background-size:{0}px {0}px;animation-duration:{1}s",
            self.cell_px, self.drift_sec
        )
    }
}

/// Horizontal or vertical placement measured from one edge, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inset {
    Start(f32),
    End(f32),
}

/// One large blurred circle pulsing behind the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientOrb {
    pub size: f32,
    pub hue: Hue,
    pub x: Inset,
    pub y: Inset,
    pub delay_sec: f32,
}

impl GradientOrb {
    pub fn color(&self, theme: Theme) -> Rgba {
        self.hue.orb(theme)
    }

    pub fn style_css(&self) -> String {
        let x = match self.x {
            Inset::Start(p) => format!("left:{p}%"),
            Inset::End(p) => format!("right:{p}%"),
        };
        let y = match self.y {
            Inset::Start(p) => format!("top:{p}%"),
            Inset::End(p) => format!("bottom:{p}%"),
        };
        format!(
            "width:{0}px;height:{0}px;{x};{y};border-radius:50%;filter:blur({1}px);animation-delay:{2}s",
            self.size, ORB_BLUR_PX, self.delay_sec
        )
    }
}

const ORBS: [(f32, Hue, Inset, Inset); 3] = [
    (384.0, Hue::Accent, Inset::Start(25.0), Inset::Start(25.0)),
    (320.0, Hue::Purple, Inset::End(25.0), Inset::End(25.0)),
    (288.0, Hue::Pink, Inset::End(33.333), Inset::Start(50.0)),
];

/// Three orbs pulsing out of phase: delay `i * 1.5` s.
pub fn gradient_orbs() -> Vec<GradientOrb> {
    ORBS.iter()
        .enumerate()
        .map(|(i, &(size, hue, x, y))| GradientOrb {
            size,
            hue,
            x,
            y,
            delay_sec: i as f32 * ORB_DELAY_STEP_SEC,
        })
        .collect()
}
