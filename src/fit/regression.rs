//! Lineare Regression (kleinste Quadrate) über N Punkte.

use super::{FitError, LinearModel, SINGULAR_EPSILON};
use glam::DVec2;

/// Mindestanzahl Punkte für eine Regressionsgerade.
pub const REGRESSION_MIN_POINTS: usize = 2;

/// Ausgleichsgerade in geschlossener Form.
///
/// Liegen alle Punkte (nahezu) auf einer Senkrechten, ist der Nenner ~0;
/// dann gilt Steigung 0 und die Gerade läuft waagerecht durch den
/// Y-Mittelwert.
pub fn fit_regression(points: &[DVec2]) -> Result<LinearModel, FitError> {
    if points.len() < REGRESSION_MIN_POINTS {
        return Err(FitError::InsufficientPoints {
            required: REGRESSION_MIN_POINTS,
            actual: points.len(),
        });
    }

    let n = points.len() as f64;
    let (mut sx, mut sy, mut sxy, mut sxx) = (0.0, 0.0, 0.0, 0.0);
    for p in points {
        sx += p.x;
        sy += p.y;
        sxy += p.x * p.y;
        sxx += p.x * p.x;
    }

    let denom = n * sxx - sx * sx;
    let slope = if denom.abs() < SINGULAR_EPSILON {
        0.0
    } else {
        (n * sxy - sx * sy) / denom
    };

    Ok(LinearModel {
        slope,
        intercept: (sy - slope * sx) / n,
    })
}
