//! Fehler-Taxonomie der MAC-Berechnung.

use thiserror::Error;

/// Fehler, die [`crate::compute_mac`] synchron melden kann.
///
/// Alle Varianten sind an der Aufrufer-Grenze vollständig behandelbar
/// (Nutzer-Meldung anzeigen, neu zeichnen lassen); es wird nie ein
/// Teilergebnis geliefert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MacError {
    /// Eine Kante liefert nach dem Abflachen weniger als 2 Abtastpunkte.
    #[error("Kante liefert zu wenige Punkte ({samples}), mindestens 2 nötig")]
    InsufficientPoints { samples: usize },
    /// Vorder- und Hinterkante überlappen sich nicht in Spannweitenrichtung.
    #[error("Kanten überlappen sich nicht in Spannweitenrichtung")]
    ZeroSpan,
    /// Die Geometrie integriert zu einer Fläche von null.
    #[error("Degenerierte Geometrie, Fläche ist null")]
    ZeroArea,
}
