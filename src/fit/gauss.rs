//! Gauß-Elimination mit Spalten-Pivotsuche für kleine dichte Systeme.

/// Pivot-Betrag, unter dem die Matrix als singulär gilt.
pub const SINGULAR_EPSILON: f64 = 1e-10;

/// Ergebnis von `solve_linear_system`.
///
/// Singularität ist kein Fehler, sondern ein regulärer Ausgang:
/// der Aufrufer wählt seinen Fallback selbst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinearSolve<const N: usize> {
    /// Eindeutige Lösung `x` mit `A·x = b`
    Solution([f64; N]),
    /// Pivot in dieser Spalte war betragsmäßig kleiner als `SINGULAR_EPSILON`
    Singular { column: usize },
}

/// Löst `A·x = b` per Vorwärts-Elimination und Rückwärts-Einsetzen.
///
/// In jedem Schritt wird die Zeile mit dem betragsgrößten Wert in der
/// Pivot-Spalte nach oben getauscht.
pub fn solve_linear_system<const N: usize>(
    matrix: [[f64; N]; N],
    rhs: [f64; N],
) -> LinearSolve<N> {
    let mut a = matrix;
    let mut b = rhs;

    for col in 0..N {
        let mut pivot = col;
        for row in col + 1..N {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        if a[col][col].abs() < SINGULAR_EPSILON {
            return LinearSolve::Singular { column: col };
        }

        for row in col + 1..N {
            let factor = a[row][col] / a[col][col];
            for k in col..N {
                let delta = factor * a[col][k];
                a[row][k] -= delta;
            }
            let delta = factor * b[col];
            b[row] -= delta;
        }
    }

    let mut x = [0.0; N];
    for i in (0..N).rev() {
        let mut sum = b[i];
        for j in i + 1..N {
            sum -= a[i][j] * x[j];
        }
        x[i] = sum / a[i][i];
    }
    LinearSolve::Solution(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solves_system_requiring_pivot_swap() {
        // erste Zeile hat 0 in der Pivot-Spalte
        let matrix = [[0.0, 2.0, 1.0], [1.0, 1.0, 1.0], [4.0, 2.0, 1.0]];
        let expected = [1.0, -2.0, 3.0];
        let rhs = [
            2.0 * expected[1] + expected[2],
            expected[0] + expected[1] + expected[2],
            4.0 * expected[0] + 2.0 * expected[1] + expected[2],
        ];

        match solve_linear_system(matrix, rhs) {
            LinearSolve::Solution(x) => {
                for (got, want) in x.iter().zip(expected) {
                    assert_relative_eq!(*got, want, epsilon = 1e-12);
                }
            }
            LinearSolve::Singular { .. } => panic!("System ist regulär"),
        }
    }

    #[test]
    fn test_duplicate_rows_are_singular() {
        let matrix = [[4.0, 2.0, 1.0], [4.0, 2.0, 1.0], [9.0, 3.0, 1.0]];
        let result = solve_linear_system(matrix, [1.0, 1.0, 2.0]);
        assert!(matches!(result, LinearSolve::Singular { .. }));
    }
}
