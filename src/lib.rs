//! Wing-MAC-Engine: Geometrie- und Numerik-Kern zur Berechnung der mittleren
//! aerodynamischen Flügeltiefe (MAC) und der Flügelfläche aus Flügelkanten,
//! die über einem Referenzbild nachgezeichnet wurden.
//!
//! Die Zeichen-/Interaktionsschicht liefert zwei Kantenzüge (Vorder- und
//! Hinterkante), eine Symmetrieachse und die reale Spannweite; die Engine
//! liefert ein fertiges [`MacResult`] zurück. Jede Berechnung ist eine reine
//! Funktion ihrer Eingaben, es wird kein Zustand über Aufrufe hinweg gehalten.

pub mod curve;
pub mod error;
pub mod frame;
pub mod mac;
pub mod profile;
pub mod spline;
pub mod tridiagonal;

pub use curve::{CurveSegment, EdgeCurve, SplineSegment};
pub use error::MacError;
pub use frame::{AxisFrame, SymmetryLine};
pub use mac::{MacResult, compute_mac};
pub use profile::SampledProfile;
pub use spline::{BezierSegment, fit_spline_through_knots};
pub use tridiagonal::solve_tridiagonal;
