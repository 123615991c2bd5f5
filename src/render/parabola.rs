//! Abtastung einer Parabel innerhalb der Viewport-Bounds.

use crate::core::ViewportBounds;
use crate::fit::QuadraticModel;
use glam::DVec2;

/// Standard-Schrittweite der Abtastung in logischen Einheiten.
pub const PARABOLA_SAMPLE_STEP: f64 = 0.1;

/// Toleranz für das Erreichen von `x_end` bei der Abtastung.
const SAMPLE_END_EPSILON: f64 = 1e-9;

/// X-Bereich, in dem die Parabel abgetastet wird.
///
/// Startet mit `[min_x, max_x]`. Liegt der Scheitel außerhalb der
/// maßgeblichen Grenze (unter `min_y` bei `a > 0`, über `max_y` bei
/// `a < 0`), wird der Bereich auf die Nullstellen von
/// `a·x² + b·x + (c - grenze)` eingeengt, soweit diese strikt innerhalb
/// von `(min_x, max_x)` liegen. Zwischen diesen Nullstellen verläuft die
/// Kurve jenseits der Grenze. Bei `a > 0` liefert die Abtastung dann
/// höchstens den Randpunkt. Bei `a < 0` ist `x1` die größere Nullstelle,
/// der Bereich ist vertauscht (`x_start > x_end`) und die Polylinie leer.
pub fn visible_x_range(model: &QuadraticModel, bounds: &ViewportBounds) -> (f64, f64) {
    let mut x_start = bounds.min_x;
    let mut x_end = bounds.max_x;

    let Some(vertex_x) = model.vertex_x() else {
        return (x_start, x_end);
    };
    let vertex_y = model.eval(vertex_x);

    let limit = if model.a > 0.0 && vertex_y < bounds.min_y {
        bounds.min_y
    } else if model.a < 0.0 && vertex_y > bounds.max_y {
        bounds.max_y
    } else {
        return (x_start, x_end);
    };

    let QuadraticModel { a, b, c } = *model;
    let discriminant = b * b - 4.0 * a * (c - limit);
    if discriminant >= 0.0 {
        let root = discriminant.sqrt();
        let x1 = (-b - root) / (2.0 * a);
        let x2 = (-b + root) / (2.0 * a);
        let strictly_inside = |x: f64| x > bounds.min_x && x < bounds.max_x;
        if strictly_inside(x1) {
            x_start = x_start.max(x1);
        }
        if strictly_inside(x2) {
            x_end = x_end.min(x2);
        }
    }

    (x_start, x_end)
}

/// Tastet die Parabel mit fester Schrittweite ab.
///
/// Es wird genau ein zusammenhängender Bogen geliefert: verlässt ein
/// Sample die Y-Grenzen nachdem bereits ein gültiges Sample ausgegeben
/// wurde, endet die Polylinie dort.
pub fn sample_parabola(model: &QuadraticModel, bounds: &ViewportBounds, step: f64) -> Vec<DVec2> {
    if !(step > 0.0 && step.is_finite()) {
        log::warn!("Ungültige Abtast-Schrittweite {step}, Parabel wird nicht gezeichnet");
        return Vec::new();
    }

    let (x_start, x_end) = visible_x_range(model, bounds);
    let mut polyline = Vec::new();

    for i in 0_usize.. {
        let x = x_start + i as f64 * step;
        if x > x_end + SAMPLE_END_EPSILON {
            break;
        }
        let y = model.eval(x);
        if bounds.contains_y(y) {
            polyline.push(DVec2::new(x, y));
        } else if !polyline.is_empty() {
            break;
        }
    }

    polyline
}
