//! Abgetastetes Kantenprofil: Flügeltiefe als Funktion der Spannweiten-Position.

use glam::DVec2;

use crate::curve::EdgeCurve;
use crate::error::MacError;
use crate::frame::AxisFrame;

/// Toleranz für Abfragen knapp außerhalb des Profil-Rands.
const EDGE_EPSILON: f64 = 1e-9;

/// Profil einer Kante im ausgerichteten System: Punkte mit `x` = Tiefe und
/// `y` = Spannweite, aufsteigend nach Spannweite sortiert. Enthält immer
/// mindestens 2 Punkte.
#[derive(Debug, Clone)]
pub struct SampledProfile {
    samples: Vec<DVec2>,
}

impl SampledProfile {
    /// Flacht eine Kante ab und sortiert alle Abtastpunkte nach Spannweite.
    ///
    /// Stabile Sortierung ohne Deduplizieren. Nicht-monotone
    /// Spannweiten-Verläufe (stark gepfeilte oder S-förmige Kanten) bleiben
    /// dadurch deterministisch, können aber ein gefaltetes Profil ergeben;
    /// bekannte Einschränkung, siehe DESIGN.md.
    pub fn from_edge(edge: &EdgeCurve, frame: &AxisFrame) -> Result<Self, MacError> {
        let mut samples = Vec::new();
        for segment in &edge.segments {
            segment.sample_into(frame, &mut samples);
        }
        if samples.len() < 2 {
            return Err(MacError::InsufficientPoints {
                samples: samples.len(),
            });
        }
        samples.sort_by(|a, b| a.y.total_cmp(&b.y));
        Ok(Self { samples })
    }

    /// Kleinste Spannweiten-Position des Profils.
    pub fn span_min(&self) -> f64 {
        self.samples[0].y
    }

    /// Größte Spannweiten-Position des Profils.
    pub fn span_max(&self) -> f64 {
        self.samples[self.samples.len() - 1].y
    }

    /// Maximaler absoluter Spannweiten-Abstand von der Symmetrieachse.
    pub fn max_span_distance(&self) -> f64 {
        self.samples.iter().map(|p| p.y.abs()).fold(0.0, f64::max)
    }

    /// Tiefen-Koordinate an der Spannweiten-Position `span`, linear
    /// interpoliert zwischen den umschließenden Nachbar-Samples.
    ///
    /// Hat das umschließende Paar keinen Spannweiten-Abstand (doppelte
    /// Punkte an Segmentgrenzen), gilt der linke Wert. Außerhalb des
    /// Profils: Randwert bei Abweichung ≤ 1e-9, sonst 0.0 als
    /// Außerhalb-Sentinel. Integration und MAC-Suche fragen nur innerhalb
    /// des Überlappungs-Intervalls ab.
    pub fn chord_at(&self, span: f64) -> f64 {
        let first = self.samples[0];
        let last = self.samples[self.samples.len() - 1];
        if span < first.y {
            return if first.y - span <= EDGE_EPSILON {
                first.x
            } else {
                0.0
            };
        }
        if span > last.y {
            return if span - last.y <= EDGE_EPSILON {
                last.x
            } else {
                0.0
            };
        }

        let idx = self
            .samples
            .partition_point(|p| p.y < span)
            .clamp(1, self.samples.len() - 1);
        let a = self.samples[idx - 1];
        let b = self.samples[idx];
        let dy = b.y - a.y;
        if dy == 0.0 {
            return a.x;
        }
        a.x + (span - a.y) / dy * (b.x - a.x)
    }

    pub fn samples(&self) -> &[DVec2] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
