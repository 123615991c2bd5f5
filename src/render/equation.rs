//! Text-Darstellung der erkannten Gleichung.

use crate::fit::{round2, CurveModel, LinearModel, QuadraticModel};

/// Formatiert eine Zahl auf zwei Nachkommastellen gerundet.
///
/// Kürzeste Dezimaldarstellung ohne Nachkomma-Nullen (`1`, `0.5`),
/// negative Null wird zu `0`.
pub fn format_number(value: f64) -> String {
    let rounded = round2(value);
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Vorzeichen für den nächsten Term; `-0` zählt als positiv.
fn sign(value: f64) -> &'static str {
    if value >= 0.0 {
        "+"
    } else {
        "-"
    }
}

/// `y = {slope}x ± {|intercept|}`
pub fn format_linear(model: &LinearModel) -> String {
    let m = model.rounded();
    format!(
        "y = {}x {} {}",
        format_number(m.slope),
        sign(m.intercept),
        format_number(m.intercept.abs())
    )
}

/// `y = {a}x² ± {|b|}x ± {|c|}`
pub fn format_quadratic(model: &QuadraticModel) -> String {
    let m = model.rounded();
    format!(
        "y = {}x² {} {}x {} {}",
        format_number(m.a),
        sign(m.b),
        format_number(m.b.abs()),
        sign(m.c),
        format_number(m.c.abs())
    )
}

/// Gleichung passend zum Modell-Typ.
pub fn format_equation(model: &CurveModel) -> String {
    match model {
        CurveModel::Linear(m) => format_linear(m),
        CurveModel::Quadratic(m) => format_quadratic(m),
    }
}
