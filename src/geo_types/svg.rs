use geo::BoundingRect;
use geo_types::{Coord, LineString, MultiLineString, Rect};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

/// Generic error
#[derive(Debug)]
pub enum SvgCreationError {
    UndefinedViewBox,
}

/// An arrangement is a plan for transformation of an SVG: where the
/// geometry lands on the page, and whether the Y axis gets flipped to
/// match SVG's top-left origin.
pub enum Arrangement {
    Center(Rect<f64>, bool),
    FitCenter(Rect<f64>, bool),
    FitCenterMargin(f64, Rect<f64>, bool),
    Transform(Rect<f64>, Affine2<f64>),
}

impl Arrangement {
    pub fn unit(window: &Rect<f64>) -> Arrangement {
        Arrangement::Transform(
            window.clone(),
            Affine2::from_matrix_unchecked(Matrix3::identity()),
        )
    }

    pub fn viewbox(&self) -> Rect<f64> {
        match self {
            Arrangement::Center(viewbox, _) => *viewbox,
            Arrangement::FitCenter(viewbox, _) => *viewbox,
            Arrangement::FitCenterMargin(_, viewbox, _) => *viewbox,
            Arrangement::Transform(viewbox, _) => *viewbox,
        }
    }

    /// Resolve this arrangement into a concrete affine for content with
    /// the given bounds. The fit/center variants need to know what they
    /// are fitting; a Transform is passed through untouched.
    pub fn affine_for(&self, gbox: &Rect<f64>) -> Affine2<f64> {
        let (scale, bounds, invert) = match self {
            Arrangement::Transform(_viewbox, affine) => return affine.clone(),
            Arrangement::Center(bounds, invert) => (1.0, bounds, invert),
            Arrangement::FitCenter(bounds, invert) => (
                (bounds.width() / gbox.width()).min(bounds.height() / gbox.height()),
                bounds,
                invert,
            ),
            Arrangement::FitCenterMargin(margin, bounds, invert) => (
                ((bounds.width() - 2.0 * margin) / gbox.width())
                    .min((bounds.height() - 2.0 * margin) / gbox.height()),
                bounds,
                invert,
            ),
        };
        let bcenter = bounds.min() + (bounds.max() - bounds.min()) / 2.0;
        let gcenter = gbox.center() * scale;
        let delta = bcenter - gcenter;
        let tx = Affine2::from_matrix_unchecked(Matrix3::new(
            scale, 0.0, delta.x, 0.0, scale, delta.y, 0.0, 0.0, 1.0,
        ));
        if *invert {
            Affine2::from_matrix_unchecked(Matrix3::new(
                1.0,
                0.0,
                0.0,
                0.0,
                -1.0,
                bounds.height(),
                0.0,
                0.0,
                1.0,
            )) * tx
        } else {
            tx
        }
    }

    /// Turn a fit/center arrangement into a fixed Transform for the given
    /// content bounds. Use this when a drawing has several layers that all
    /// need to land on the page the same way.
    pub fn finalize(&self, gbox: &Rect<f64>) -> Arrangement {
        Arrangement::Transform(self.viewbox(), self.affine_for(gbox))
    }

    pub fn create_svg_document(&self) -> Result<Document, SvgCreationError> {
        let viewbox = self.viewbox();
        Ok(Document::new()
            .set(
                "viewBox",
                (
                    viewbox.min().x,
                    viewbox.min().y,
                    viewbox.max().x,
                    viewbox.max().y,
                ),
            )
            .set("width", format!("{}mm", viewbox.width()))
            .set("height", format!("{}mm", viewbox.height())))
    }
}

pub trait ToSvg {
    /// Given an [Arrangement] as a transformation strategy, transform the
    /// geometry to fit the bounds.
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError>
    where
        Self: Sized;

    /// Convert the Geometry into an SVG PathData item
    fn to_path_data(&self) -> Data;

    /// Convert the Geometry into an SVG Path, using the arrangement to
    /// Center/Fit/Transform it
    fn to_path(&self, arrangement: &Arrangement) -> Path;
}

impl ToSvg for MultiLineString<f64> {
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError> {
        let gbox = match self.bounding_rect() {
            Some(gbox) => gbox,
            None => return Err(SvgCreationError::UndefinedViewBox),
        };
        let transformation = arrangement.affine_for(&gbox);
        let linestrings: Vec<LineString<f64>> = self
            .iter()
            .map(|linestring| {
                linestring
                    .coords()
                    .map(|coord| {
                        let pt = transformation * NPoint2::new(coord.x, coord.y);
                        Coord::from((pt.x, pt.y))
                    })
                    .collect()
            })
            .collect();
        Ok(MultiLineString::new(linestrings))
    }

    fn to_path_data(&self) -> Data {
        let mut svg_data = Data::new();
        for tline in self {
            for point in tline.points().take(1) {
                svg_data = svg_data.move_to((point.x(), point.y()));
            }
            for point in tline.points().skip(1) {
                svg_data = svg_data.line_to((point.x(), point.y()));
            }
        }
        svg_data
    }

    fn to_path(&self, arrangement: &Arrangement) -> Path {
        match self.arrange(arrangement) {
            Ok(arranged) => Path::new().set("d", arranged.to_path_data()),
            Err(_) => Path::new().set("d", ""),
        }
    }
}
