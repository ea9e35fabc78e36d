//! Radar chart geometry: data polygon, axis rays and grid rings.

use serde::{Deserialize, Serialize};

use super::LifeSphereMatrix;
use crate::domain::analysis::{
    polar_to_cartesian, Point, ProjectionError, RadarPoint, RadarProjector,
};

/// Where and how large the chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub center: Point,
    pub max_radius: f64,
    pub grid_rings: usize,
}

impl Default for ChartLayout {
    /// A 300x300 viewbox with four rings.
    fn default() -> Self {
        Self {
            center: Point::new(150.0, 150.0),
            max_radius: 120.0,
            grid_rings: 4,
        }
    }
}

/// An axis ray from the center to the outer ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAxis {
    pub label: String,
    pub angle_degrees: f64,
    pub end: Point,
}

/// Everything a renderer needs to draw the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub layout: ChartLayout,
    pub polygon: Vec<RadarPoint>,
    pub axes: Vec<ChartAxis>,
    /// Outermost first.
    pub grid_radii: Vec<f64>,
}

impl RadarChart {
    /// Builds the chart for a matrix.
    pub fn build(
        matrix: &LifeSphereMatrix,
        projector: &RadarProjector,
        layout: ChartLayout,
    ) -> Result<Self, ProjectionError> {
        let inputs = matrix.radar_inputs();
        let polygon = projector.project(&inputs, layout.center, layout.max_radius)?;

        let axes = inputs
            .iter()
            .map(|input| ChartAxis {
                label: input.label.clone(),
                angle_degrees: input.angle_degrees,
                end: polar_to_cartesian(layout.center, layout.max_radius, input.angle_degrees),
            })
            .collect();

        Ok(Self {
            layout,
            polygon,
            axes,
            grid_radii: grid_radii(layout.max_radius, layout.grid_rings),
        })
    }

    /// SVG `points` attribute for the data polygon, e.g. `"150.00,54.00 ..."`.
    pub fn svg_points(&self) -> String {
        self.polygon
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Evenly spaced ring radii from `max_radius` down, e.g. 120, 90, 60, 30.
pub fn grid_radii(max_radius: f64, rings: usize) -> Vec<f64> {
    (1..=rings)
        .rev()
        .map(|k| max_radius * k as f64 / rings as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ValuePolicy;

    fn default_matrix() -> LifeSphereMatrix {
        LifeSphereMatrix::from_default_values(&[8.0, 6.0, 7.0, 9.0, 5.0, 7.0, 6.0, 8.0, 7.0, 8.0, 6.0, 5.0])
            .unwrap()
    }

    #[test]
    fn grid_radii_match_default_rings() {
        assert_eq!(grid_radii(120.0, 4), vec![120.0, 90.0, 60.0, 30.0]);
        assert!(grid_radii(120.0, 0).is_empty());
    }

    #[test]
    fn builds_polygon_and_axes_for_each_sphere() {
        let chart = RadarChart::build(
            &default_matrix(),
            &RadarProjector::default(),
            ChartLayout::default(),
        )
        .unwrap();

        assert_eq!(chart.polygon.len(), 12);
        assert_eq!(chart.axes.len(), 12);

        // identity: value 8 at 0°, radius 96
        assert!((chart.polygon[0].x - 150.0).abs() < 1e-9);
        assert!((chart.polygon[0].y - 54.0).abs() < 1e-9);

        // roots axis at 90° ends at the right edge
        assert!((chart.axes[3].end.x - 270.0).abs() < 1e-9);
        assert!((chart.axes[3].end.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn svg_points_formats_vertices() {
        let chart = RadarChart::build(
            &default_matrix(),
            &RadarProjector::default(),
            ChartLayout::default(),
        )
        .unwrap();
        let points = chart.svg_points();
        assert!(points.starts_with("150.00,54.00 "));
        assert_eq!(points.split(' ').count(), 12);
    }

    #[test]
    fn propagates_projection_errors() {
        let mut values = [5.0; 12];
        values[4] = 12.0;
        let matrix = LifeSphereMatrix::from_default_values(&values).unwrap();

        assert!(RadarChart::build(
            &matrix,
            &RadarProjector::new(ValuePolicy::Reject),
            ChartLayout::default()
        )
        .is_err());
        assert!(RadarChart::build(
            &matrix,
            &RadarProjector::new(ValuePolicy::Clamp),
            ChartLayout::default()
        )
        .is_ok());
    }
}
