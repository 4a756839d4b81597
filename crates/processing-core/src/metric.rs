//! Nose-to-mouth distance in pixel and frame-relative units.

use posemetric_common::config::FrameGeometry;
use posemetric_label_model::detection::{DetectionRecord, Keypoint};

/// A position in frame pixels. May lie outside the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Scale a normalized keypoint to pixels. No clamping, no rounding.
    pub fn from_normalized(keypoint: &Keypoint, geometry: &FrameGeometry) -> Self {
        Self {
            x: keypoint.x * f64::from(geometry.width),
            y: keypoint.y * f64::from(geometry.height),
        }
    }

    pub fn distance_to(&self, other: &PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Landmark positions and distances for one detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoseMouthMetric {
    pub nose: PixelPoint,
    pub mouth: PixelPoint,
    /// Euclidean nose-mouth distance in pixels.
    pub distance_px: f64,
    /// `distance_px` over the frame diagonal.
    pub distance_norm: f64,
}

impl NoseMouthMetric {
    /// Measure a detection. `None` when it has fewer than two keypoints.
    pub fn compute(record: &DetectionRecord, geometry: &FrameGeometry) -> Option<Self> {
        let nose = PixelPoint::from_normalized(record.nose()?, geometry);
        let mouth = PixelPoint::from_normalized(record.mouth()?, geometry);
        let distance_px = nose.distance_to(&mouth);

        Some(Self {
            nose,
            mouth,
            distance_px,
            distance_norm: distance_px / geometry.diagonal(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posemetric_label_model::detection::parse_line;

    fn record(line: &str) -> DetectionRecord {
        parse_line(line).into_record().unwrap()
    }

    #[test]
    fn test_portrait_1080p_distance() {
        let geometry = FrameGeometry::new(1080, 1920, 30.0);
        let metric =
            NoseMouthMetric::compute(&record("0 0.5 0.5 0.3 0.3 0.5 0.5 0.9 0.5 0.6 0.9"), &geometry)
                .unwrap();

        assert!((metric.nose.x - 540.0).abs() < 1e-9);
        assert!((metric.nose.y - 960.0).abs() < 1e-9);
        assert!((metric.mouth.x - 540.0).abs() < 1e-9);
        assert!((metric.mouth.y - 1152.0).abs() < 1e-9);
        assert!((metric.distance_px - 192.0).abs() < 1e-9);

        let expected_norm = 192.0 / 1080f64.hypot(1920.0);
        assert!((metric.distance_norm - expected_norm).abs() < 1e-12);
        assert!((metric.distance_norm - 0.0868).abs() < 1e-4);
    }

    #[test]
    fn test_fewer_than_two_keypoints() {
        let geometry = FrameGeometry::default();
        assert!(NoseMouthMetric::compute(&record("0 0.5 0.5 0.3 0.3"), &geometry).is_none());
        assert!(
            NoseMouthMetric::compute(&record("0 0.5 0.5 0.3 0.3 0.5 0.5 0.9"), &geometry)
                .is_none()
        );
    }

    #[test]
    fn test_extra_keypoints_ignored() {
        let geometry = FrameGeometry::new(100, 100, 30.0);
        let metric = NoseMouthMetric::compute(
            &record("0 0.5 0.5 0.3 0.3 0.0 0.0 0.3 0.4 0.9 0.9 0.1 0.1"),
            &geometry,
        )
        .unwrap();
        assert!((metric.distance_px - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_frame_coordinates_not_clamped() {
        let geometry = FrameGeometry::new(100, 200, 30.0);
        let metric =
            NoseMouthMetric::compute(&record("0 0.5 0.5 0.3 0.3 1.5 -0.5 0.5 0.5"), &geometry)
                .unwrap();
        assert_eq!(metric.nose, PixelPoint { x: 150.0, y: -100.0 });
        assert_eq!(metric.mouth, PixelPoint { x: 50.0, y: 100.0 });
        assert!((metric.distance_px - 100.0f64.hypot(200.0)).abs() < 1e-9);
    }
}
