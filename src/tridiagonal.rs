//! Thomas-Algorithmus für tridiagonale Gleichungssysteme.

/// Löst ein tridiagonales System mit dem Thomas-Algorithmus
/// (Vorwärts-Elimination, dann Rücksubstitution).
///
/// `lower`, `main`, `upper` und `rhs` haben alle die Länge `n`;
/// `lower[0]` und `upper[n-1]` werden ignoriert. Kein Pivoting: der
/// Aufrufer muss ein diagonal gut konditioniertes System garantieren
/// (die Tangenten-Systeme des Spline-Fitters sind es immer). Ein Pivot
/// von exakt null ist eine Vorbedingungs-Verletzung, kein behandelbarer
/// Fehler.
pub fn solve_tridiagonal(lower: &[f64], main: &[f64], upper: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = main.len();
    debug_assert_eq!(lower.len(), n);
    debug_assert_eq!(upper.len(), n);
    debug_assert_eq!(rhs.len(), n);
    if n == 0 {
        return Vec::new();
    }

    let mut upper_norm = vec![0.0; n];
    let mut rhs_norm = vec![0.0; n];
    upper_norm[0] = upper[0] / main[0];
    rhs_norm[0] = rhs[0] / main[0];
    for i in 1..n {
        let pivot = main[i] - lower[i] * upper_norm[i - 1];
        debug_assert!(pivot != 0.0, "Pivot null, System nicht diagonal dominant");
        upper_norm[i] = upper[i] / pivot;
        rhs_norm[i] = (rhs[i] - lower[i] * rhs_norm[i - 1]) / pivot;
    }

    let mut solution = rhs_norm;
    for i in (0..n - 1).rev() {
        solution[i] -= upper_norm[i] * solution[i + 1];
    }
    solution
}
