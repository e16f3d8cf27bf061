//! Reine Geometrie-Funktionen für Catmull-Rom-Splines.
//!
//! Layer-neutral: wird von `app::render_scene`, Tests und Benchmarks genutzt,
//! ohne einen Grafik-Kontext zu benötigen.

use crate::core::Point;

/// Anzahl der Abtastpunkte pro Segment (t = 0.1, 0.2, …, 1.0).
pub const SAMPLES_PER_SEGMENT: usize = 10;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 (t = 0) nach p2 (t = 1).
pub fn catmull_rom_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Baut die Polyline der glatten Kurve durch `points`.
///
/// Startet bei `points[0]` und hängt pro Segment [`SAMPLES_PER_SEGMENT`]
/// Punkte an (t = 0 entfällt, das ist der Endpunkt des Vorgängers).
/// An den Rändern wird der nächste gültige Nachbar dupliziert statt
/// Phantom-Punkte zu spiegeln, die Kurve läuft also nicht in einer Schleife.
///
/// Weniger als zwei Punkte ergeben eine leere Polyline.
pub fn build_path(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity((n - 1) * SAMPLES_PER_SEGMENT + 1);
    result.push(points[0]);

    for seg in 0..(n - 1) {
        let p0 = points[seg.saturating_sub(1)];
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = points[(seg + 2).min(n - 1)];

        for i in 1..=SAMPLES_PER_SEGMENT {
            let t = i as f64 / SAMPLES_PER_SEGMENT as f64;
            result.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }

    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn catmull_rom_hits_inner_control_points() {
        let p0 = Point::new(-3.0, 7.0);
        let p1 = Point::new(1.5, 2.0);
        let p2 = Point::new(10.0, -4.0);
        let p3 = Point::new(12.0, 9.0);

        assert_eq!(catmull_rom_point(p0, p1, p2, p3, 0.0), p1);
        let end = catmull_rom_point(p0, p1, p2, p3, 1.0);
        assert_relative_eq!(end.x, p2.x, epsilon = 1e-12);
        assert_relative_eq!(end.y, p2.y, epsilon = 1e-12);
    }

    #[test]
    fn catmull_rom_on_collinear_evenly_spaced_points_is_linear() {
        let pts = [0.0, 1.0, 2.0, 3.0].map(|x| Point::new(x, 0.0));
        let mid = catmull_rom_point(pts[0], pts[1], pts[2], pts[3], 0.5);
        assert_relative_eq!(mid.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn build_path_is_empty_below_two_points() {
        assert!(build_path(&[]).is_empty());
        assert!(build_path(&[Point::new(4.0, 2.0)]).is_empty());
    }

    #[test]
    fn build_path_two_points_yields_ten_segments() {
        let pts = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let path = build_path(&pts);
        assert_eq!(path.len(), 11);
        assert_eq!(path[0], pts[0]);
        assert_relative_eq!(path[10].x, 100.0, epsilon = 1e-9);
        // Randsegment mit duplizierten Nachbarn bleibt auf der Geraden
        assert!(path.iter().all(|p| p.y.abs() < 1e-12));
    }

    #[test]
    fn build_path_passes_through_every_control_point() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(40.0, 30.0),
            Point::new(80.0, -10.0),
            Point::new(120.0, 25.0),
        ];
        let path = build_path(&pts);
        assert_eq!(path.len(), 1 + 3 * SAMPLES_PER_SEGMENT);

        for (k, expected) in pts.iter().enumerate() {
            let sample = path[k * SAMPLES_PER_SEGMENT];
            assert_relative_eq!(sample.x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(sample.y, expected.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn build_path_is_deterministic() {
        let pts = [
            Point::new(3.0, 1.0),
            Point::new(7.5, 9.25),
            Point::new(-2.0, 4.0),
        ];
        assert_eq!(build_path(&pts), build_path(&pts));
    }

    #[test]
    fn polyline_length_sums_segments() {
        let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 10.0)];
        assert_relative_eq!(polyline_length(&pts), 11.0);
        assert_eq!(polyline_length(&pts[..1]), 0.0);
    }
}
