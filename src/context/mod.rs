//! Provides the [`crate::context::Context`] struct which gives us a canvas-style drawing
//! context which produces plotter-ready SVG files. See `Context` for more details.
use crate::errors::ContextError;
use crate::geo_types::svg::{Arrangement, ToSvg};
use geo::BoundingRect;
use geo_types::{coord, LineString, MultiLineString, Point, Rect};
use svg::node::element::Rectangle;
use svg::Document;

pub mod operation;

use operation::Operation;

/// # Context
///
/// A Context is a _drawing_ context, used to perform operations against a
/// pseudo-canvas. Every drawn geometry captures the stroke state that was
/// active at the time, and the whole stack is later turned into an SVG
/// with one path per operation, in drawing order.
///
/// # Example
///
/// ```rust
/// use radial_motif_rs::context::Context;
///
/// let mut ctx = Context::new();
/// ctx.background("black")
///    .stroke("#ff0000")
///    .pen(3.0)
///    .line(0.0, 0.0, 25.0, 25.0)
///    .stroke("#00ff00")
///    .line(25.0, 25.0, 50.0, 0.0);
/// ```
#[derive(Clone)]
pub struct Context {
    operations: Vec<Operation>,
    background: Option<String>,
    stroke_color: String,
    pen_width: f64,
    line_join: String,
    line_cap: String,
}

impl Context {
    /// I can haz a new default drawing context?
    pub fn new() -> Context {
        Context {
            operations: vec![],
            background: None,
            stroke_color: "black".to_string(),
            pen_width: 0.5,
            line_join: "round".to_string(),
            line_cap: "round".to_string(),
        }
    }

    /// Sets the page background color, rendered as a rect under everything.
    pub fn background(&mut self, color: &str) -> &mut Self {
        self.background = Some(color.to_string());
        self
    }

    /// Sets the stroke color for subsequent operations.
    pub fn stroke(&mut self, color: &str) -> &mut Self {
        self.stroke_color = color.to_string();
        self
    }

    /// Sets the pen width
    pub fn pen(&mut self, width: f64) -> &mut Self {
        self.pen_width = width;
        self
    }

    fn add_operation(&mut self, lines: MultiLineString<f64>) {
        self.operations.push(Operation {
            lines,
            stroke_color: self.stroke_color.clone(),
            pen_width: self.pen_width,
            line_join: self.line_join.clone(),
            line_cap: self.line_cap.clone(),
        });
    }

    /// Adds a MultiLineString under the current stroke state.
    pub fn multiline(&mut self, lines: &MultiLineString<f64>) -> &mut Self {
        self.add_operation(lines.clone());
        self
    }

    /// Draws a simple line from x0,y0 to x1,y1
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> &mut Self {
        self.add_operation(MultiLineString::new(vec![LineString::new(vec![
            coord! {x: x0, y: y0},
            coord! {x: x1, y: y1},
        ])]));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.operations.iter().all(|op| op.lines.0.is_empty())
    }

    /// Bounds returns a Rect defining the bounds of all operations drawn
    /// on the context.
    pub fn bounds(&self) -> Result<Rect<f64>, ContextError> {
        let mut pmin = Point::new(f64::MAX, f64::MAX);
        let mut pmax = Point::new(f64::MIN, f64::MIN);
        for operation in &self.operations {
            if let Some(bounds) = operation.lines.bounding_rect() {
                pmin = Point::new(pmin.x().min(bounds.min().x), pmin.y().min(bounds.min().y));
                pmax = Point::new(pmax.x().max(bounds.max().x), pmax.y().max(bounds.max().y));
            }
        }
        if pmin == Point::new(f64::MAX, f64::MAX) || pmax == Point::new(f64::MIN, f64::MIN) {
            Err(ContextError::EmptyContext)
        } else {
            Ok(Rect::new(pmin.0, pmax.0))
        }
    }

    /// Resolve a fit/center arrangement against this context's bounds so
    /// that every operation lands on the page with the same transform.
    pub fn finalize_arrangement(&self, arrangement: &Arrangement) -> Arrangement {
        if let Ok(bounds) = self.bounds() {
            arrangement.finalize(&bounds)
        } else {
            Arrangement::unit(&arrangement.viewbox())
        }
    }

    /// Take this whole stack and generate an SVG Document, or an error.
    pub fn to_svg(&self, arrangement: &Arrangement) -> Result<Document, ContextError> {
        let arrangement = self.finalize_arrangement(arrangement);
        let mut svg = arrangement.create_svg_document().or(Err(
            ContextError::SvgGenerationError("Failed to create raw svg doc".into()),
        ))?;

        if let Some(color) = &self.background {
            let viewbox = arrangement.viewbox();
            svg = svg.add(
                Rectangle::new()
                    .set("x", viewbox.min().x)
                    .set("y", viewbox.min().y)
                    .set("width", viewbox.width())
                    .set("height", viewbox.height())
                    .set("fill", color.clone()),
            );
        }

        for (id, op) in self.operations.iter().enumerate() {
            if op.lines.0.is_empty() {
                continue;
            }
            svg = svg.add(
                op.lines
                    .to_path(&arrangement)
                    .set("id", format!("outline-{}", id))
                    .set("fill", "none")
                    .set("stroke", op.stroke_color.clone())
                    .set("stroke-width", op.pen_width)
                    .set("stroke-linejoin", op.line_join.clone())
                    .set("stroke-linecap", op.line_cap.clone()),
            );
        }
        Ok(svg)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
