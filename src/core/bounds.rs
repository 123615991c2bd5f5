//! Logischer Zeichenbereich und Bildschirm-Rechteck der Zeichenfläche.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Konstantes Rechteck im logischen Koordinatensystem (Ursprung in der Mitte).
///
/// Alle Kurven werden auf diesen Bereich geclippt; Regressions-Punkte
/// außerhalb werden abgewiesen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    /// Linker Rand
    pub min_x: f64,
    /// Rechter Rand
    pub max_x: f64,
    /// Unterer Rand
    pub min_y: f64,
    /// Oberer Rand
    pub max_y: f64,
}

impl ViewportBounds {
    /// Erstellt symmetrische Bounds `[-half, half]²`.
    pub fn symmetric(half: f64) -> Self {
        Self {
            min_x: -half,
            max_x: half,
            min_y: -half,
            max_y: half,
        }
    }

    /// Logische Breite (Spanne in X).
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Logische Höhe (Spanne in Y).
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Mittelpunkt des Bereichs.
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Prüft, ob ein Punkt innerhalb liegt (Ränder inklusive).
    pub fn contains(&self, p: DVec2) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }

    /// `min_x <= x <= max_x`
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.min_x && x <= self.max_x
    }

    /// `min_y <= y <= max_y`
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.min_y && y <= self.max_y
    }
}

impl Default for ViewportBounds {
    fn default() -> Self {
        Self::symmetric(10.0)
    }
}

/// Bildschirm-Rechteck der Zeichenfläche in Pixeln (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Obere linke Ecke
    pub min: DVec2,
    /// Breite und Höhe
    pub size: DVec2,
}

impl ScreenRect {
    /// Erstellt ein Rechteck aus linker oberer Ecke und Größe.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            min: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }

    /// Mittelpunkt in Pixeln.
    pub fn center(&self) -> DVec2 {
        self.min + self.size * 0.5
    }
}
