//! Symmetrieachse und Transformation in das achsen-ausgerichtete Bezugssystem.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Symmetrieachse des Flugzeugs (Rumpf-Mittellinie), definiert durch zwei
/// vom Nutzer gesetzte Punkte. Die Richtung `p1 → p2` bestimmt den
/// Rotationswinkel `atan2(dy, dx)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryLine {
    pub p1: DVec2,
    pub p2: DVec2,
}

impl SymmetryLine {
    pub fn new(p1: DVec2, p2: DVec2) -> Self {
        Self { p1, p2 }
    }

    /// Richtungswinkel der Achse in Radiant.
    pub fn angle(&self) -> f64 {
        let d = self.p2 - self.p1;
        d.y.atan2(d.x)
    }
}

/// Bezugssystem entlang der Symmetrieachse.
///
/// Vorwärts-Transformation ([`Self::to_frame`]): `y` ist die
/// Spannweiten-Koordinate (signierter Abstand entlang der Achse ab dem
/// Ursprung), `x` die Tiefen-Koordinate (senkrecht zur Achse).
/// [`Self::from_frame`] bildet exakt zurück in den Bild-Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    origin: DVec2,
    /// Einheitsvektor in Achsrichtung (Spannweite).
    span_dir: DVec2,
    /// Einheitsvektor senkrecht zur Achse (Flügeltiefe).
    chord_dir: DVec2,
    angle: f64,
}

impl AxisFrame {
    /// Baut das Bezugssystem aus der Symmetrieachse.
    pub fn from_symmetry_line(line: &SymmetryLine) -> Self {
        Self::from_angle(line.angle(), line.p1)
    }

    /// Baut das Bezugssystem aus Rotationswinkel und Ursprung
    /// (z.B. aus einem gespeicherten Ergebnis rekonstruiert).
    pub fn from_angle(angle: f64, origin: DVec2) -> Self {
        let span_dir = DVec2::new(angle.cos(), angle.sin());
        let chord_dir = DVec2::new(span_dir.y, -span_dir.x);
        Self {
            origin,
            span_dir,
            chord_dir,
            angle,
        }
    }

    /// Bild-Raum → ausgerichtetes System: `(x = Tiefe, y = Spannweite)`.
    pub fn to_frame(&self, p: DVec2) -> DVec2 {
        let d = p - self.origin;
        DVec2::new(d.dot(self.chord_dir), d.dot(self.span_dir))
    }

    /// Ausgerichtetes System → Bild-Raum, Umkehrung von [`Self::to_frame`]
    /// bis auf Fließkomma-Toleranz.
    pub fn from_frame(&self, p: DVec2) -> DVec2 {
        self.origin + p.x * self.chord_dir + p.y * self.span_dir
    }

    pub fn rotation_angle(&self) -> f64 {
        self.angle
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }
}
