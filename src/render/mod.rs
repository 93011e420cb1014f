//! Consumers of a finished [`Trajectory`] that produce a file, rendering only borrows
//! the trajectory so a failure here leaves the computed data untouched.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};
use crate::error::RenderError;
use crate::kinetics::GatingVariable;
use crate::trajectory::Trajectory;


/// Produces an artifact from a completed trajectory
pub trait Renderer {
    /// Renders the trajectory
    fn render(&self, trajectory: &Trajectory) -> Result<(), RenderError>;
}

/// Line plot of membrane potential over time written as an SVG image
#[derive(Debug, Clone)]
pub struct SvgPlot {
    /// Output file
    pub path: PathBuf,
    /// Image width (px)
    pub width: f64,
    /// Image height (px)
    pub height: f64,
    /// Title drawn above the plot area
    pub title: String,
    /// Horizontal axis label
    pub x_label: String,
    /// Vertical axis label
    pub y_label: String,
    /// Legend entry for the voltage trace
    pub legend: String,
    /// Number of grid divisions along each axis
    pub grid_divisions: usize,
}

impl Default for SvgPlot {
    fn default() -> Self {
        SvgPlot {
            path: PathBuf::from("hodgkin_huxley.svg"),
            width: 1000.,
            height: 600.,
            title: String::from("Hodgkin-Huxley membrane potential"),
            x_label: String::from("Time (ms)"),
            y_label: String::from("Membrane potential (mV)"),
            legend: String::from("V (mV)"),
            grid_divisions: 10,
        }
    }
}

const MARGIN_LEFT: f64 = 80.;
const MARGIN_RIGHT: f64 = 30.;
const MARGIN_TOP: f64 = 50.;
const MARGIN_BOTTOM: f64 = 60.;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn finite_bounds<'a>(values: impl Iterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values.filter(|i| i.is_finite())
        .fold(None, |acc, &i| match acc {
            None => Some((i, i)),
            Some((min, max)) => Some((min.min(i), max.max(i))),
        })
        .map(|(min, max)| if min == max { (min - 1., max + 1.) } else { (min, max) })
}

impl SvgPlot {
    /// Plot with default styling written to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SvgPlot { path: path.into(), ..SvgPlot::default() }
    }

    /// Builds the SVG document for the voltage trace of the trajectory, non-finite
    /// voltages break the line instead of being drawn
    pub fn to_svg(&self, trajectory: &Trajectory) -> Result<String, RenderError> {
        if trajectory.is_empty() {
            return Err(RenderError::EmptyTrajectory);
        }

        let time = trajectory.time();
        let voltage = trajectory.voltage();

        let (t_min, t_max) = finite_bounds(time.iter()).unwrap_or((0., 1.));
        let (v_min, v_max) = finite_bounds(voltage.iter()).unwrap_or((-1., 1.));

        let plot_width = self.width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = self.height - MARGIN_TOP - MARGIN_BOTTOM;
        let to_x = |t: f64| MARGIN_LEFT + (t - t_min) / (t_max - t_min) * plot_width;
        let to_y = |v: f64| MARGIN_TOP + (v_max - v) / (v_max - v_min) * plot_height;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            self.width, self.height, self.width, self.height,
        ));
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

        let divisions = self.grid_divisions.max(1);
        svg.push_str("<g class=\"grid\" stroke=\"#dddddd\" stroke-width=\"1\">\n");
        for i in 0..=divisions {
            let fraction = i as f64 / divisions as f64;
            let x = MARGIN_LEFT + fraction * plot_width;
            let y = MARGIN_TOP + fraction * plot_height;
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
                x, MARGIN_TOP, x, MARGIN_TOP + plot_height,
            ));
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
                MARGIN_LEFT, y, MARGIN_LEFT + plot_width, y,
            ));
        }
        svg.push_str("</g>\n");

        svg.push_str("<g class=\"ticks\" font-family=\"sans-serif\" font-size=\"11\" fill=\"black\">\n");
        for i in 0..=divisions {
            let fraction = i as f64 / divisions as f64;
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{:.1}</text>\n",
                MARGIN_LEFT + fraction * plot_width,
                MARGIN_TOP + plot_height + 16.,
                t_min + fraction * (t_max - t_min),
            ));
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\">{:.1}</text>\n",
                MARGIN_LEFT - 6.,
                MARGIN_TOP + fraction * plot_height + 4.,
                v_max - fraction * (v_max - v_min),
            ));
        }
        svg.push_str("</g>\n");

        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"black\"/>\n",
            MARGIN_LEFT, MARGIN_TOP, plot_width, plot_height,
        ));

        let mut segments: Vec<Vec<String>> = vec![Vec::new()];
        for (t, v) in time.iter().zip(voltage.iter()) {
            if t.is_finite() && v.is_finite() {
                if let Some(segment) = segments.last_mut() {
                    segment.push(format!("{:.2},{:.2}", to_x(*t), to_y(*v)));
                }
            } else if segments.last().map_or(false, |segment| !segment.is_empty()) {
                segments.push(Vec::new());
            }
        }
        for segment in segments.iter().filter(|segment| !segment.is_empty()) {
            svg.push_str(&format!(
                "<polyline class=\"voltage\" fill=\"none\" stroke=\"#1f77b4\" stroke-width=\"1.5\" points=\"{}\"/>\n",
                segment.join(" "),
            ));
        }

        svg.push_str(&format!(
            "<text class=\"title\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"18\">{}</text>\n",
            self.width / 2., MARGIN_TOP / 2. + 6., escape(&self.title),
        ));
        svg.push_str(&format!(
            "<text class=\"x-label\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"14\">{}</text>\n",
            MARGIN_LEFT + plot_width / 2., self.height - 15., escape(&self.x_label),
        ));
        svg.push_str(&format!(
            "<text class=\"y-label\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"14\" transform=\"rotate(-90 {:.2} {:.2})\">{}</text>\n",
            20., MARGIN_TOP + plot_height / 2., 20., MARGIN_TOP + plot_height / 2., escape(&self.y_label),
        ));

        let legend_x = MARGIN_LEFT + plot_width - 130.;
        let legend_y = MARGIN_TOP + 10.;
        svg.push_str(&format!(
            "<g class=\"legend\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"120\" height=\"26\" fill=\"white\" stroke=\"#999999\"/>\
<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"#1f77b4\" stroke-width=\"1.5\"/>\
<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"12\">{}</text></g>\n",
            legend_x, legend_y,
            legend_x + 8., legend_y + 13., legend_x + 32., legend_y + 13.,
            legend_x + 38., legend_y + 17., escape(&self.legend),
        ));

        svg.push_str("</svg>\n");

        Ok(svg)
    }
}

impl Renderer for SvgPlot {
    fn render(&self, trajectory: &Trajectory) -> Result<(), RenderError> {
        let svg = self.to_svg(trajectory)?;

        let mut file = BufWriter::new(File::create(&self.path)?);
        file.write_all(svg.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

/// Writes every sample as a `t,V,m,h,n` row for external plotting tools
#[derive(Debug, Clone)]
pub struct CsvExport {
    /// Output file
    pub path: PathBuf,
}

impl Default for CsvExport {
    fn default() -> Self {
        CsvExport { path: PathBuf::from("hodgkin_huxley.csv") }
    }
}

impl CsvExport {
    /// Export written to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvExport { path: path.into() }
    }
}

impl Renderer for CsvExport {
    fn render(&self, trajectory: &Trajectory) -> Result<(), RenderError> {
        if trajectory.is_empty() {
            return Err(RenderError::EmptyTrajectory);
        }

        let mut file = BufWriter::new(File::create(&self.path)?);

        writeln!(
            file, "t,V,{},{},{}",
            GatingVariable::M.name(), GatingVariable::H.name(), GatingVariable::N.name(),
        )?;
        for (t, state) in trajectory.iter() {
            writeln!(file, "{},{},{},{},{}", t, state.v, state.m, state.h, state.n)?;
        }
        file.flush()?;

        Ok(())
    }
}
