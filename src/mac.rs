//! MAC-Berechnung: Integration von Fläche und Momenten über das
//! Überlappungs-Intervall beider Kanten, Suche der MAC-Position und
//! Auflösung des Maßstabs in reale Einheiten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::curve::EdgeCurve;
use crate::error::MacError;
use crate::frame::{AxisFrame, SymmetryLine};
use crate::profile::SampledProfile;

/// Anzahl der Integrationsschritte über das Überlappungs-Intervall.
const INTEGRATION_STEPS: usize = 1000;

/// Ergebnis einer MAC-Berechnung.
///
/// Alle Längen sind Pixel-Werte des Zeichenraums; reale Einheiten liefern
/// [`Self::mac_world`] und [`Self::area_world`] über den Maßstab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacResult {
    /// Mittlere aerodynamische Flügeltiefe, `∫c²dy / ∫c dy`.
    pub mac: f64,
    /// Integrierte Flügelfläche (so wie gezeichnet, ohne Spiegelung).
    pub area: f64,
    /// Spannweiten-Position, deren lokale Tiefe dem MAC am nächsten kommt;
    /// hier zeichnet die Oberfläche die MAC-Linie ein.
    pub span_of_mac: f64,
    /// Analytischer Spannweiten-Schwerpunkt `∫|y|·c dy / ∫c dy` (beide
    /// Flügelhälften zählen positiv).
    pub span_centroid: f64,
    /// Tiefen-Koordinate der Vorderkante an `span_of_mac`.
    pub leading_edge_x_at_mac: f64,
    /// Pixel → reale Einheiten: `(Spannweite/2) / max. gezeichneter Achsabstand`.
    pub scale_factor: f64,
    /// Richtungswinkel der Symmetrieachse, `atan2(dy, dx)`.
    pub rotation_angle: f64,
    /// Ursprung des Bezugssystems (p1 der Symmetrieachse) im Bild-Raum.
    pub origin: DVec2,
    /// Untere Grenze des integrierten Spannweiten-Intervalls.
    pub span_min: f64,
    /// Obere Grenze des integrierten Spannweiten-Intervalls.
    pub span_max: f64,
}

impl MacResult {
    /// MAC in realen Einheiten.
    pub fn mac_world(&self) -> f64 {
        self.mac * self.scale_factor
    }

    /// Gesamt-Flügelfläche in realen Einheiten².
    ///
    /// Liegt das integrierte Intervall komplett auf einer Seite der Achse
    /// (nur eine Flügelhälfte gezeichnet), wird die Fläche für das ganze
    /// Flugzeug gespiegelt, also verdoppelt.
    pub fn area_world(&self) -> f64 {
        let mirror = if self.span_min * self.span_max >= 0.0 {
            2.0
        } else {
            1.0
        };
        self.area * self.scale_factor * self.scale_factor * mirror
    }

    /// Endpunkte der MAC-Linie im Bild-Raum, zum Einzeichnen über dem
    /// Referenzbild: von der Vorderkante aus eine MAC-Länge in
    /// Tiefenrichtung.
    pub fn mac_line_endpoints(&self) -> (DVec2, DVec2) {
        let frame = AxisFrame::from_angle(self.rotation_angle, self.origin);
        let start = DVec2::new(self.leading_edge_x_at_mac, self.span_of_mac);
        let end = DVec2::new(self.leading_edge_x_at_mac + self.mac, self.span_of_mac);
        (frame.from_frame(start), frame.from_frame(end))
    }
}

/// Berechnet MAC, Fläche und MAC-Position aus Vorder- und Hinterkante.
///
/// `wingspan` ist die reale Gesamtspannweite; der Aufrufer validiert sie
/// vor dem Aufruf als positiv. Reine Funktion über unveränderlichen
/// Eingaben: feste 1000 Integrationsschritte, kein Zustand zwischen
/// Aufrufen, beliebig wiederholbar.
pub fn compute_mac(
    leading: &EdgeCurve,
    trailing: &EdgeCurve,
    symmetry: &SymmetryLine,
    wingspan: f64,
) -> Result<MacResult, MacError> {
    debug_assert!(wingspan > 0.0, "Spannweite muss positiv sein");

    let frame = AxisFrame::from_symmetry_line(symmetry);
    let le = SampledProfile::from_edge(leading, &frame)?;
    let te = SampledProfile::from_edge(trailing, &frame)?;
    log::debug!(
        "Kanten abgetastet: Vorderkante {} Punkte, Hinterkante {} Punkte",
        le.len(),
        te.len()
    );

    let span_min = le.span_min().max(te.span_min());
    let span_max = le.span_max().min(te.span_max());
    if span_max - span_min <= 0.0 {
        return Err(MacError::ZeroSpan);
    }
    log::debug!("Überlappungs-Intervall: [{span_min:.3}, {span_max:.3}]");

    let integration = integrate_chord(&le, &te, span_min, span_max)?;
    let span_of_mac = locate_mac_span(&le, &te, span_min, span_max, integration.mac);

    let max_dist = le.max_span_distance().max(te.max_span_distance());
    let scale_factor = (wingspan / 2.0) / max_dist;

    let result = MacResult {
        mac: integration.mac,
        area: integration.area,
        span_of_mac,
        span_centroid: integration.span_centroid,
        leading_edge_x_at_mac: le.chord_at(span_of_mac),
        scale_factor,
        rotation_angle: frame.rotation_angle(),
        origin: frame.origin(),
        span_min,
        span_max,
    };
    log::info!(
        "MAC = {:.3} px ({:.3} real), Fläche = {:.3} px² ({:.3} real), Maßstab = {:.6}",
        result.mac,
        result.mac_world(),
        result.area,
        result.area_world(),
        result.scale_factor
    );
    Ok(result)
}

/// Zwischenergebnis des Integrations-Durchlaufs.
struct ChordIntegration {
    area: f64,
    mac: f64,
    span_centroid: f64,
}

/// Linksseitige Rechteck-Summe über 1000 Schritte, Endpunkt einschließlich.
fn integrate_chord(
    le: &SampledProfile,
    te: &SampledProfile,
    span_min: f64,
    span_max: f64,
) -> Result<ChordIntegration, MacError> {
    let dy = (span_max - span_min) / INTEGRATION_STEPS as f64;
    let mut area = 0.0;
    let mut moment = 0.0;
    let mut chord_sq = 0.0;
    for i in 0..=INTEGRATION_STEPS {
        let y = span_min + i as f64 * dy;
        let chord = (te.chord_at(y) - le.chord_at(y)).abs();
        area += chord * dy;
        moment += y.abs() * chord * dy;
        chord_sq += chord * chord * dy;
    }
    if area == 0.0 {
        return Err(MacError::ZeroArea);
    }
    Ok(ChordIntegration {
        area,
        mac: chord_sq / area,
        span_centroid: moment / area,
    })
}

/// Zweiter Durchlauf über dieselbe Schrittfolge: sucht die
/// Spannweiten-Position, deren lokale Tiefe dem MAC am nächsten kommt.
///
/// Bei Gleichstand gewinnt der zuerst gefundene Schritt (aufsteigende
/// Spannweite); nur strikt kleinere Abweichungen ersetzen den Treffer.
fn locate_mac_span(
    le: &SampledProfile,
    te: &SampledProfile,
    span_min: f64,
    span_max: f64,
    mac: f64,
) -> f64 {
    let dy = (span_max - span_min) / INTEGRATION_STEPS as f64;
    let mut best_span = span_min;
    let mut best_diff = f64::INFINITY;
    for i in 0..=INTEGRATION_STEPS {
        let y = span_min + i as f64 * dy;
        let chord = (te.chord_at(y) - le.chord_at(y)).abs();
        let diff = (chord - mac).abs();
        if diff < best_diff {
            best_diff = diff;
            best_span = y;
        }
    }
    best_span
}
