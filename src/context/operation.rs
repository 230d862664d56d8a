use geo_types::MultiLineString;

/// Operations are private items used to store the operation stack
/// consisting of a combination of geometry and Context stroke state.
#[derive(Clone, Debug)]
pub struct Operation {
    pub(crate) lines: MultiLineString<f64>,
    pub(crate) stroke_color: String,
    pub(crate) pen_width: f64,
    pub(crate) line_join: String,
    pub(crate) line_cap: String,
}
