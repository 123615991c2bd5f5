//! Modell-Koeffizienten der erkannten Kurven.

/// Rundet auf zwei Nachkommastellen (Anzeige-Genauigkeit).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Gerade `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    /// Steigung
    pub slope: f64,
    /// Y-Achsenabschnitt
    pub intercept: f64,
}

impl LinearModel {
    /// Wertet die Gerade an `x` aus.
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Koeffizienten auf zwei Nachkommastellen gerundet.
    pub fn rounded(&self) -> Self {
        Self {
            slope: round2(self.slope),
            intercept: round2(self.intercept),
        }
    }
}

/// Parabel `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticModel {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticModel {
    /// Wertet die Parabel an `x` aus.
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Koeffizienten auf zwei Nachkommastellen gerundet.
    pub fn rounded(&self) -> Self {
        Self {
            a: round2(self.a),
            b: round2(self.b),
            c: round2(self.c),
        }
    }

    /// Scheitel-X `-b / 2a` (`None` für `a == 0`).
    pub fn vertex_x(&self) -> Option<f64> {
        (self.a != 0.0).then(|| -self.b / (2.0 * self.a))
    }
}

/// Erkanntes Modell, unabhängig vom Modus der es erzeugt hat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveModel {
    /// Gerade (Zwei-Punkt-Fit oder Regression)
    Linear(LinearModel),
    /// Parabel (Drei-Punkt-Interpolation)
    Quadratic(QuadraticModel),
}

impl CurveModel {
    /// Wertet das Modell an `x` aus.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            CurveModel::Linear(m) => m.eval(x),
            CurveModel::Quadratic(m) => m.eval(x),
        }
    }

    /// Anzeige-Variante mit gerundeten Koeffizienten.
    pub fn rounded(&self) -> Self {
        match self {
            CurveModel::Linear(m) => CurveModel::Linear(m.rounded()),
            CurveModel::Quadratic(m) => CurveModel::Quadratic(m.rounded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(-2.456), -2.46);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn test_vertex_x() {
        let m = QuadraticModel { a: 2.0, b: -8.0, c: 1.0 };
        assert_eq!(m.vertex_x(), Some(2.0));
        let flat = QuadraticModel { a: 0.0, b: 1.0, c: 0.0 };
        assert_eq!(flat.vertex_x(), None);
    }
}
