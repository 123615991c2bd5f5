//! Clipping einer Geraden auf die Viewport-Bounds.

use crate::core::ViewportBounds;
use crate::fit::LinearModel;
use glam::DVec2;

/// Ab diesem Steigungsbetrag wird die Gerade als Senkrechte gezeichnet.
pub const VERTICAL_SLOPE_LIMIT: f64 = 1000.0;

/// Sichtbares Teilstück einer Geraden (0 oder 2 Endpunkte).
///
/// Kandidaten in fester Reihenfolge: Schnitt mit `min_y`, `max_y`,
/// `min_x`, `max_x`. Gültig ist ein Kandidat, wenn seine andere
/// Koordinate im Bereich liegt; die ersten zwei gültigen bilden das
/// Segment. Fast senkrechte Geraden werden als Senkrechte bei
/// `anchor_x` gezeichnet.
pub fn clip_line(model: &LinearModel, bounds: &ViewportBounds, anchor_x: f64) -> Vec<DVec2> {
    let LinearModel { slope, intercept } = *model;

    if !slope.is_finite() || slope.abs() > VERTICAL_SLOPE_LIMIT {
        return vec![
            DVec2::new(anchor_x, bounds.min_y),
            DVec2::new(anchor_x, bounds.max_y),
        ];
    }

    let x_at = |y: f64| (y - intercept) / slope;
    let y_at = |x: f64| slope * x + intercept;

    let candidates = [
        DVec2::new(x_at(bounds.min_y), bounds.min_y),
        DVec2::new(x_at(bounds.max_y), bounds.max_y),
        DVec2::new(bounds.min_x, y_at(bounds.min_x)),
        DVec2::new(bounds.max_x, y_at(bounds.max_x)),
    ];

    // Index 0/1: horizontale Ränder → X prüfen; 2/3: vertikale → Y prüfen
    let segment: Vec<DVec2> = candidates
        .iter()
        .enumerate()
        .filter(|(i, p)| {
            if *i < 2 {
                bounds.contains_x(p.x)
            } else {
                bounds.contains_y(p.y)
            }
        })
        .map(|(_, p)| *p)
        .take(2)
        .collect();

    if segment.len() < 2 {
        log::debug!("Gerade schneidet den Zeichenbereich nicht: {model:?}");
        return Vec::new();
    }
    segment
}
