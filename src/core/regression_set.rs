//! Sammlung einzeln getippter Punkte für die Regressionsgerade.

use super::ViewportBounds;
use glam::DVec2;

/// Punkt liegt außerhalb des logischen Zeichenbereichs.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Punkt ({x:.2}, {y:.2}) liegt außerhalb des Zeichenbereichs")]
pub struct PointRejected {
    /// X des abgewiesenen Punkts
    pub x: f64,
    /// Y des abgewiesenen Punkts
    pub y: f64,
}

/// Punkte in Einfügereihenfolge; bleibt über mehrere Tipps hinweg bestehen.
#[derive(Debug, Clone, Default)]
pub struct RegressionSet {
    points: Vec<DVec2>,
    /// Nach einem Fit startet der nächste Punkt eine neue Sammlung.
    fitted: bool,
}

impl RegressionSet {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Punkt hinzu, sofern er innerhalb der Bounds liegt.
    pub fn insert(&mut self, p: DVec2, bounds: &ViewportBounds) -> Result<(), PointRejected> {
        if !bounds.contains(p) {
            return Err(PointRejected { x: p.x, y: p.y });
        }
        if self.fitted {
            self.clear();
        }
        self.points.push(p);
        Ok(())
    }

    /// Markiert die aktuelle Sammlung als gefittet.
    pub fn mark_fitted(&mut self) {
        self.fitted = true;
    }

    /// Ob seit dem letzten Fit kein Punkt hinzugekommen ist.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
        self.fitted = false;
    }

    /// Alle Punkte in Einfügereihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mittelwert der X-Koordinaten (0.0 bei leerer Sammlung).
    pub fn mean_x(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(|p| p.x).sum::<f64>() / self.points.len() as f64
    }
}
