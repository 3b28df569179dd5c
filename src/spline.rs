//! Kubischer Spline-Fit durch Stützpunkte mit Umwandlung in Bezier-Segmente.
//!
//! Parametrisierung über den Stützpunkt-Index (Knotenabstand im Fit-Parameter
//! immer 1, keine Bogenlängen-Parametrisierung). Das ist bewusst keine
//! allgemeine Spline-Bibliothek, sondern genau die Variante, die der Editor
//! zum Nachzeichnen von Flügelkanten braucht.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::tridiagonal::solve_tridiagonal;

/// Ein kubisches Bezier-Stück zwischen zwei Stützpunkten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub p1: DVec2,
    pub cp1: DVec2,
    pub cp2: DVec2,
    pub p2: DVec2,
}

impl BezierSegment {
    /// B(t) = (1-t)³·P1 + 3(1-t)²t·CP1 + 3(1-t)t²·CP2 + t³·P2
    pub fn point_at(&self, t: f64) -> DVec2 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.p1
            + 3.0 * inv2 * t * self.cp1
            + 3.0 * inv * t2 * self.cp2
            + t2 * t * self.p2
    }
}

/// Fittet einen C1-stetigen kubischen Spline durch die Stützpunkte und gibt
/// pro Knotenabschnitt ein Bezier-Stück zurück.
///
/// Die Kurve läuft exakt durch jeden Stützpunkt. Die Rand-Gleichungen sind
/// Tangenten-Gleichungen (`2·D_0 + D_1 = 3·(P_1 - P_0)` bzw. gespiegelt am
/// Ende); das Ergebnis ist C1, nicht krümmungsstetig, auch wenn solche Fits
/// oft "natural spline" genannt werden.
///
/// Weniger als 2 Stützpunkte ergeben eine leere Liste, keinen Fehler. Die
/// Mindestpunkt-Prüfung der Pipeline passiert zentral beim Abtasten der
/// Kanten ([`crate::SampledProfile::from_edge`]).
pub fn fit_spline_through_knots(knots: &[DVec2]) -> Vec<BezierSegment> {
    if knots.len() < 2 {
        return Vec::new();
    }

    let tangents_x = solve_tangents(knots, |p| p.x);
    let tangents_y = solve_tangents(knots, |p| p.y);

    let mut segments = Vec::with_capacity(knots.len() - 1);
    for i in 0..knots.len() - 1 {
        let d_i = DVec2::new(tangents_x[i], tangents_y[i]);
        let d_next = DVec2::new(tangents_x[i + 1], tangents_y[i + 1]);
        segments.push(BezierSegment {
            p1: knots[i],
            cp1: knots[i] + d_i / 3.0,
            cp2: knots[i + 1] - d_next / 3.0,
            p2: knots[i + 1],
        });
    }
    segments
}

/// Stellt das tridiagonale Tangenten-System für eine Koordinaten-Achse auf
/// und löst es.
///
/// Zeilen: `2·D_0 + D_1 = 3·(P_1 - P_0)`,
/// `D_{i-1} + 4·D_i + D_{i+1} = 3·(P_{i+1} - P_{i-1})` im Inneren,
/// `D_{n-1} + 2·D_n = 3·(P_n - P_{n-1})`. Immer diagonal dominant.
fn solve_tangents(knots: &[DVec2], axis: impl Fn(&DVec2) -> f64) -> Vec<f64> {
    let n = knots.len();
    let lower = vec![1.0; n];
    let upper = vec![1.0; n];
    let mut main = vec![4.0; n];
    let mut rhs = vec![0.0; n];

    main[0] = 2.0;
    main[n - 1] = 2.0;
    rhs[0] = 3.0 * (axis(&knots[1]) - axis(&knots[0]));
    rhs[n - 1] = 3.0 * (axis(&knots[n - 1]) - axis(&knots[n - 2]));
    for i in 1..n - 1 {
        rhs[i] = 3.0 * (axis(&knots[i + 1]) - axis(&knots[i - 1]));
    }

    solve_tridiagonal(&lower, &main, &upper, &rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_degenerate_input_yields_empty_list() {
        assert!(fit_spline_through_knots(&[]).is_empty());
        assert!(fit_spline_through_knots(&[DVec2::new(3.0, 4.0)]).is_empty());
    }

    #[test]
    fn test_curve_passes_exactly_through_knots() {
        let knots = [
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 7.0),
            DVec2::new(9.0, 3.0),
            DVec2::new(12.0, 10.0),
        ];
        let segments = fit_spline_through_knots(&knots);
        assert_eq!(segments.len(), 3);
        for (i, seg) in segments.iter().enumerate() {
            // Endpunkte der Stücke sind die Stützpunkte selbst, exakt
            assert_eq!(seg.p1, knots[i]);
            assert_eq!(seg.p2, knots[i + 1]);
            assert_eq!(seg.point_at(0.0), seg.p1);
            assert_eq!(seg.point_at(1.0), seg.p2);
        }
    }

    #[test]
    fn test_two_knots_give_straight_segment() {
        let knots = [DVec2::new(1.0, 1.0), DVec2::new(7.0, 4.0)];
        let segments = fit_spline_through_knots(&knots);
        assert_eq!(segments.len(), 1);
        let mid = segments[0].point_at(0.5);
        assert_abs_diff_eq!(mid.x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mid.y, 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_c1_continuity_across_knots() {
        let knots = [
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 5.0),
            DVec2::new(8.0, 4.0),
            DVec2::new(10.0, -2.0),
        ];
        let segments = fit_spline_through_knots(&knots);
        for pair in segments.windows(2) {
            // Austritts-Tangente = Eintritts-Tangente: beide sind D_{i+1}/3
            let out_dir = pair[0].p2 - pair[0].cp2;
            let in_dir = pair[1].cp1 - pair[1].p1;
            assert_abs_diff_eq!(out_dir.x, in_dir.x, epsilon = 1e-12);
            assert_abs_diff_eq!(out_dir.y, in_dir.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_collinear_equidistant_knots_stay_on_line() {
        // Tangenten-System liefert für äquidistante Punkte auf einer Geraden
        // überall dieselbe Tangente; die Kurve bleibt die Gerade.
        let knots = [
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(4.0, 2.0),
            DVec2::new(6.0, 3.0),
        ];
        for seg in fit_spline_through_knots(&knots) {
            for i in 0..=10 {
                let p = seg.point_at(i as f64 / 10.0);
                assert_abs_diff_eq!(p.y, p.x / 2.0, epsilon = 1e-9);
            }
        }
    }
}
