//! Zwei-Punkt-Gerade aus Start und Ende einer Geste.

use super::LinearModel;
use glam::DVec2;

/// Gerade durch `start` und `end`.
///
/// Senkrechte Geste (`start.x == end.x`): Steigung 0, Achsenabschnitt
/// `start.y`; eine Senkrechte ist in Steigungsform nicht darstellbar.
pub fn fit_linear(start: DVec2, end: DVec2) -> LinearModel {
    if start.x == end.x {
        return LinearModel {
            slope: 0.0,
            intercept: start.y,
        };
    }
    let slope = (end.y - start.y) / (end.x - start.x);
    LinearModel {
        slope,
        intercept: start.y - slope * start.x,
    }
}
