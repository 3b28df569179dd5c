//! Kantenzüge, wie sie im Editor gezeichnet werden: Polylinien- und
//! Spline-Segmente samt Abtastung in das ausgerichtete Bezugssystem.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::frame::AxisFrame;
use crate::spline::{BezierSegment, fit_spline_through_knots};

/// Parameter-Unterteilungen pro Bezier-Stück (ergibt 11 Auswertungen
/// bei t = 0, 0.1, …, 1.0).
const BEZIER_STEPS_PER_PIECE: usize = 10;

/// Spline-Segment: die gesetzten Stützpunkte plus die daraus gefitteten
/// Bezier-Stücke.
///
/// Die Bezier-Stücke werden bei der Konstruktion abgeleitet und bleiben
/// dadurch immer konsistent zu den Stützpunkten, auch nach einer
/// Deserialisierung (serialisiert werden nur die Stützpunkte).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DVec2>", into = "Vec<DVec2>")]
pub struct SplineSegment {
    knots: Vec<DVec2>,
    beziers: Vec<BezierSegment>,
}

impl SplineSegment {
    /// Baut das Segment und fittet die Bezier-Stücke durch die Stützpunkte.
    /// Weniger als 2 Stützpunkte ergeben ein leeres Segment.
    pub fn new(knots: Vec<DVec2>) -> Self {
        let beziers = fit_spline_through_knots(&knots);
        Self { knots, beziers }
    }

    pub fn knots(&self) -> &[DVec2] {
        &self.knots
    }

    pub fn beziers(&self) -> &[BezierSegment] {
        &self.beziers
    }
}

impl From<Vec<DVec2>> for SplineSegment {
    fn from(knots: Vec<DVec2>) -> Self {
        Self::new(knots)
    }
}

impl From<SplineSegment> for Vec<DVec2> {
    fn from(segment: SplineSegment) -> Self {
        segment.knots
    }
}

/// Ein Segment einer Flügelkante.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveSegment {
    /// Polygonzug aus Klick-Punkten, wird unverändert übernommen.
    Polyline(Vec<DVec2>),
    /// Spline durch Stützpunkte, wird über die Bezier-Stücke abgetastet.
    Spline(SplineSegment),
}

impl CurveSegment {
    /// Komfort-Konstruktor: Spline-Segment direkt aus Stützpunkten.
    pub fn spline(knots: Vec<DVec2>) -> Self {
        Self::Spline(SplineSegment::new(knots))
    }

    /// Trägt die transformierten Abtastpunkte des Segments in `out` zusammen.
    ///
    /// Polylinien liefern ihre Eckpunkte in Zeichenreihenfolge, Splines
    /// 11 gleichverteilte Parameter-Auswertungen pro Bezier-Stück.
    /// Degenerierte Segmente (< 2 Punkte bzw. Stützpunkte) liefern nichts.
    pub fn sample_into(&self, frame: &AxisFrame, out: &mut Vec<DVec2>) {
        match self {
            Self::Polyline(points) => {
                if points.len() < 2 {
                    return;
                }
                out.extend(points.iter().map(|&p| frame.to_frame(p)));
            }
            Self::Spline(spline) => {
                for bezier in spline.beziers() {
                    for i in 0..=BEZIER_STEPS_PER_PIECE {
                        let t = i as f64 / BEZIER_STEPS_PER_PIECE as f64;
                        out.push(frame.to_frame(bezier.point_at(t)));
                    }
                }
            }
        }
    }
}

/// Eine vollständige Vorder- oder Hinterkante aus aneinandergereihten
/// Segmenten.
///
/// Die Segmente gelten als zusammenhängend gezeichnet (Ende des einen ≈
/// Anfang des nächsten); exaktes Zusammenfügen wird nicht erzwungen.
/// Doppelte Punkte an Segmentgrenzen bleiben erhalten und werden von der
/// Profil-Interpolation toleriert, nicht entfernt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeCurve {
    pub segments: Vec<CurveSegment>,
}

impl EdgeCurve {
    pub fn new(segments: Vec<CurveSegment>) -> Self {
        Self { segments }
    }

    /// Kante aus einem einzelnen Polygonzug.
    pub fn polyline(points: Vec<DVec2>) -> Self {
        Self::new(vec![CurveSegment::Polyline(points)])
    }

    /// Kante aus einem einzelnen Spline.
    pub fn spline(knots: Vec<DVec2>) -> Self {
        Self::new(vec![CurveSegment::spline(knots)])
    }
}
