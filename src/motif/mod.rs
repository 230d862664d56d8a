//! The radial motif generator.
//!
//! One turtle walks the whole drawing: each outer iteration draws a pair
//! of looping circle arcs (twice), then turns 89 degrees so the motif
//! slowly precesses around the page over the 60 iterations. The stroke
//! color advances around the hue wheel one step per iteration, which is
//! where the rainbow comes from.

use crate::color::{stroke_color, CssColor, JitterRange};
use crate::context::Context;
use crate::turtle::{degrees, Turtle, TurtleTrait};
use geo_types::MultiLineString;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable parameters for the motif. The defaults reproduce the classic
/// 60-iteration rainbow; the jittered constructors reproduce the two
/// noisy variants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MotifConfig {
    pub outer_iterations: usize,
    pub inner_repetitions: usize,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Arc sweep per circle, degrees.
    pub arc_extent: f64,
    /// In-place turn between the two circles of a pair, degrees.
    pub pivot: f64,
    /// Turn after each outer iteration, degrees. One degree short of a
    /// right angle is what smears the motif around the page.
    pub precession: f64,
    /// Hue advance per outer iteration, on the [0,1) wheel.
    pub hue_step: f64,
    pub pen_width: f64,
    pub jitter: Option<JitterRange>,
}

impl Default for MotifConfig {
    fn default() -> Self {
        MotifConfig {
            outer_iterations: 60,
            inner_repetitions: 2,
            outer_radius: 140.0,
            inner_radius: 80.0,
            arc_extent: 90.0,
            pivot: 180.0,
            precession: 89.0,
            hue_step: 0.01,
            pen_width: 3.0,
            jitter: None,
        }
    }
}

impl MotifConfig {
    /// The variant with the wide 0.7..1.3 channel tweak.
    pub fn wide_jitter() -> Self {
        MotifConfig {
            jitter: Some(JitterRange::wide()),
            ..Default::default()
        }
    }

    /// The variant with the gentle 0.8..1.0 tweak and a faster hue cycle.
    pub fn gentle_jitter() -> Self {
        MotifConfig {
            hue_step: 0.02,
            jitter: Some(JitterRange::gentle()),
            ..Default::default()
        }
    }

    /// Circle arcs drawn per outer iteration.
    pub fn arcs_per_band(&self) -> usize {
        self.inner_repetitions * 2
    }

    /// Circle arcs drawn over the whole motif.
    pub fn arcs_total(&self) -> usize {
        self.outer_iterations * self.arcs_per_band()
    }

    /// Accumulated (unwrapped) hue after the full run.
    pub fn final_hue(&self) -> f64 {
        self.outer_iterations as f64 * self.hue_step
    }
}

/// One outer iteration's worth of drawing: the stroke color that was
/// active, and the path the turtle traced under it.
#[derive(Debug, Clone)]
pub struct Band {
    pub color: CssColor,
    pub lines: MultiLineString<f64>,
}

/// Walk one band: the inner circle-pair repetitions followed by the
/// precession turn. Split out so the walk itself is testable without
/// colors or randomness.
pub fn walk_band(mut turtle: Turtle, config: &MotifConfig) -> Turtle {
    for _ in 0..config.inner_repetitions {
        turtle = turtle
            .arc(config.outer_radius, degrees(config.arc_extent))
            .left(degrees(config.pivot))
            .arc(config.inner_radius, degrees(config.arc_extent))
            .left(degrees(config.pivot));
    }
    turtle.right(degrees(config.precession))
}

/// Run the full motif and return one [`Band`] per outer iteration, in
/// drawing order. The cursor pose carries across iterations; only the
/// captured lines are sliced per band.
pub fn render<R: Rng>(config: &MotifConfig, rng: &mut R) -> Vec<Band> {
    let mut turtle = Turtle::new().pen_down();
    let mut hue = 0.0f64;
    let mut bands = Vec::with_capacity(config.outer_iterations);
    for _ in 0..config.outer_iterations {
        let color = stroke_color(hue, config.jitter.as_ref(), rng);
        hue += config.hue_step;
        turtle = walk_band(turtle, config);
        bands.push(Band {
            color,
            lines: turtle.take_multiline(),
        });
    }
    log::debug!(
        "rendered {} bands, final hue {:.3}",
        bands.len(),
        hue
    );
    bands
}

/// Render the motif straight onto a drawing context, one stroke-colored
/// operation per band. Bands land in iteration order, which is the order
/// a plotter (or any sequential renderer) will stroke them.
pub fn paint<R: Rng>(config: &MotifConfig, ctx: &mut Context, rng: &mut R) {
    ctx.pen(config.pen_width);
    for band in render(config, rng) {
        ctx.stroke(&band.color.to_css_hex()).multiline(&band.lines);
    }
}
