//! Drawable primitives and the geometry group that owns them.
//!
//! A [`GeometryGroup`] is the unit of output of every shape builder: an
//! ownership container for filled regions, line segments, and point-sampled
//! curves, plus a position/scale transform the window assembler may set.
//! Consumers enumerate the primitives and rasterize them; the group is never
//! mutated internally after the builder returns it.

use crate::float_types::Real;
use crate::style::Color;
use geo::{BoundingRect, Polygon};
use nalgebra::{Point2, Vector2};

/// Material reference carried by each primitive: color, fill vs. line, and
/// dash pattern. The renderer maps these onto its own material system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Fill { color: Color },
    Line { color: Color },
    DashedLine { color: Color, dash: Real, gap: Real },
}

impl Material {
    pub const fn fill(color: Color) -> Self {
        Material::Fill { color }
    }

    pub const fn line(color: Color) -> Self {
        Material::Line { color }
    }

    pub const fn dashed(color: Color, dash: Real, gap: Real) -> Self {
        Material::DashedLine { color, dash, gap }
    }

    pub const fn is_dashed(&self) -> bool {
        matches!(self, Material::DashedLine { .. })
    }

    pub const fn color(&self) -> Color {
        match self {
            Material::Fill { color }
            | Material::Line { color }
            | Material::DashedLine { color, .. } => *color,
        }
    }
}

/// A filled area of the frame: frame material, sash ring piece, or glazing
/// pane. Ring-shaped areas are polygons with interior holes.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledRegion {
    pub polygon: Polygon<Real>,
    pub material: Material,
    pub layer: Real,
}

/// A straight stroke: glazing bar, structural bar, or indicator line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Point2<Real>,
    pub end: Point2<Real>,
    pub material: Material,
    pub layer: Real,
}

/// A stroked polyline following a sampled curve, e.g. the sash ring of a
/// curved silhouette. `width` is the full stroke width.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    pub points: Vec<Point2<Real>>,
    pub width: Real,
    pub material: Material,
    pub layer: Real,
}

/// One drawable child of a [`GeometryGroup`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Region(FilledRegion),
    Segment(LineSegment),
    Curve(SampledCurve),
}

impl Primitive {
    pub const fn material(&self) -> &Material {
        match self {
            Primitive::Region(region) => &region.material,
            Primitive::Segment(segment) => &segment.material,
            Primitive::Curve(curve) => &curve.material,
        }
    }

    /// Render-order offset of the primitive. Higher layers draw on top;
    /// the value is never true depth.
    pub const fn layer(&self) -> Real {
        match self {
            Primitive::Region(region) => region.layer,
            Primitive::Segment(segment) => segment.layer,
            Primitive::Curve(curve) => curve.layer,
        }
    }
}

/// Axis-aligned bounds of a group or layout, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2<Real>,
    pub max: Point2<Real>,
}

impl Bounds {
    fn point(p: Point2<Real>) -> Self {
        Self { min: p, max: p }
    }

    fn include(&mut self, p: Point2<Real>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn merge(&mut self, other: &Bounds) {
        self.include(other.min);
        self.include(other.max);
    }

    pub fn center(&self) -> Point2<Real> {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    pub fn size(&self) -> Vector2<Real> {
        self.max - self.min
    }
}

/// Assembled output of one builder call: the owned primitives plus the
/// position/scale transform applied by the window assembler. The assembler
/// re-parents groups read-only: position and scale only, no internal
/// mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryGroup {
    pub position: Vector2<Real>,
    pub scale: Vector2<Real>,
    primitives: Vec<Primitive>,
}

impl Default for GeometryGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryGroup {
    pub fn new() -> Self {
        Self {
            position: Vector2::zeros(),
            scale: Vector2::new(1.0, 1.0),
            primitives: Vec::new(),
        }
    }

    pub fn push_region(&mut self, polygon: Polygon<Real>, material: Material, layer: Real) {
        self.primitives
            .push(Primitive::Region(FilledRegion { polygon, material, layer }));
    }

    pub fn push_segment(
        &mut self,
        start: Point2<Real>,
        end: Point2<Real>,
        material: Material,
        layer: Real,
    ) {
        self.primitives
            .push(Primitive::Segment(LineSegment { start, end, material, layer }));
    }

    pub fn push_curve(
        &mut self,
        points: Vec<Point2<Real>>,
        width: Real,
        material: Material,
        layer: Real,
    ) {
        self.primitives
            .push(Primitive::Curve(SampledCurve { points, width, material, layer }));
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn regions(&self) -> impl Iterator<Item = &FilledRegion> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Region(region) => Some(region),
            _ => None,
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = &LineSegment> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Segment(segment) => Some(segment),
            _ => None,
        })
    }

    pub fn curves(&self) -> impl Iterator<Item = &SampledCurve> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Curve(curve) => Some(curve),
            _ => None,
        })
    }

    /// Mirror the group horizontally about its own origin.
    pub fn mirror_x(&mut self) {
        self.scale.x = -self.scale.x;
    }

    /// Maps a group-local point into world coordinates.
    pub fn to_world(&self, p: Point2<Real>) -> Point2<Real> {
        Point2::new(
            self.position.x + self.scale.x * p.x,
            self.position.y + self.scale.y * p.y,
        )
    }

    /// World-space bounds over all primitives, `None` for an empty group.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut acc: Option<Bounds> = None;
        let include = |bounds: &mut Option<Bounds>, p: Point2<Real>| {
            let world = self.to_world(p);
            match bounds {
                Some(b) => b.include(world),
                None => *bounds = Some(Bounds::point(world)),
            }
        };
        for primitive in &self.primitives {
            match primitive {
                Primitive::Region(region) => {
                    if let Some(rect) = region.polygon.bounding_rect() {
                        include(&mut acc, Point2::new(rect.min().x, rect.min().y));
                        include(&mut acc, Point2::new(rect.max().x, rect.max().y));
                    }
                },
                Primitive::Segment(segment) => {
                    include(&mut acc, segment.start);
                    include(&mut acc, segment.end);
                },
                Primitive::Curve(curve) => {
                    for &p in &curve.points {
                        include(&mut acc, p);
                    }
                },
            }
        }
        acc
    }
}
