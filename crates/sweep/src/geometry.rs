use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Default, Display)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle of the surface the rings are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Display)]
#[display("{width}x{height}+{x}+{y}")]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Largest radius of a circle centered in the bounds that still fits.
    pub fn inscribed_radius(&self) -> f64 {
        inscribed_radius(self.width, self.height)
    }
}

pub fn inscribed_radius(width: f64, height: f64) -> f64 {
    let side = width.min(height);
    if side.is_finite() && side > 0.0 {
        side / 2.0
    } else {
        0.0
    }
}
