use serde::{Deserialize, Serialize};

/// A single point of a bounding polygon. The OCR service omits zero-valued
/// coordinates from its JSON, so both fields default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which coordinate system a polygon is expressed in: raw page pixels, or
/// the same points divided by page width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordSpace {
    Pixel,
    Normalized,
}

/// Page dimensions in pixels, known to be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDims {
    pub width: f64,
    pub height: f64,
}

/// A four-corner polygon with the service's fixed corner order made
/// explicit: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub top_left: Vertex,
    pub top_right: Vertex,
    pub bottom_right: Vertex,
    pub bottom_left: Vertex,
}

impl Quad {
    /// Reads a quad from a TL/TR/BR/BL vertex array. Returns `None` unless
    /// the slice holds exactly four points.
    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        match vertices {
            [tl, tr, br, bl] => Some(Self {
                top_left: *tl,
                top_right: *tr,
                bottom_right: *br,
                bottom_left: *bl,
            }),
            _ => None,
        }
    }

    /// An axis-aligned rectangle from its edge coordinates.
    pub fn from_bounds(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top_left: Vertex::new(left, top),
            top_right: Vertex::new(right, top),
            bottom_right: Vertex::new(right, bottom),
            bottom_left: Vertex::new(left, bottom),
        }
    }

    pub fn to_vertices(self) -> Vec<Vertex> {
        vec![
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        let scale = |v: Vertex| Vertex::new(v.x * sx, v.y * sy);
        Self {
            top_left: scale(self.top_left),
            top_right: scale(self.top_right),
            bottom_right: scale(self.bottom_right),
            bottom_left: scale(self.bottom_left),
        }
    }

    /// Divides every coordinate. Kept distinct from multiplying by a
    /// reciprocal so normalized boxes match the service's own rounding.
    pub fn unscaled(self, sx: f64, sy: f64) -> Self {
        let scale = |v: Vertex| Vertex::new(v.x / sx, v.y / sy);
        Self {
            top_left: scale(self.top_left),
            top_right: scale(self.top_right),
            bottom_right: scale(self.bottom_right),
            bottom_left: scale(self.bottom_left),
        }
    }
}

/// A finalized rectangle carried in both coordinate systems at once. The
/// missing system is derived from page dimensions exactly once, here, so
/// the two representations cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualQuad {
    pub pixel: Quad,
    pub normalized: Quad,
}

impl DualQuad {
    pub fn from_quad(quad: Quad, space: CoordSpace, dims: PageDims) -> Self {
        match space {
            CoordSpace::Pixel => Self {
                pixel: quad,
                normalized: quad.unscaled(dims.width, dims.height),
            },
            CoordSpace::Normalized => Self {
                pixel: quad.scaled(dims.width, dims.height),
                normalized: quad,
            },
        }
    }

    pub fn to_bounding_box(self) -> BoundingBox {
        BoundingBox {
            vertices: self.pixel.to_vertices(),
            normalized_vertices: self.normalized.to_vertices(),
        }
    }
}

/// Bounding polygon as it appears on the wire: an empty array marks an
/// absent coordinate system, never a null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub normalized_vertices: Vec<Vertex>,
}
