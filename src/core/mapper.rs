//! Umrechnung zwischen Geräte-Pixeln und logischen Koordinaten.

use super::{ScreenRect, ViewportBounds};
use glam::DVec2;

/// Rohe Eingabeposition aus dem Event-Layer.
///
/// Der Mapper kennt die Eingabeart nicht, nur das resultierende Pixel-Paar.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Maus/Stift: eine einzelne Position
    Pointer(DVec2),
    /// Touch: alle aktiven Kontakte, der erste zählt
    Touches(Vec<DVec2>),
}

impl RawInput {
    /// Liefert die maßgebliche Pixel-Position (`None` bei Touch ohne Kontakt).
    pub fn position(&self) -> Option<DVec2> {
        match self {
            RawInput::Pointer(pos) => Some(*pos),
            RawInput::Touches(contacts) => contacts.first().copied(),
        }
    }
}

/// Bildet Pixel-Positionen relativ zu einem Rechteck in den logischen Raum ab.
///
/// Die Y-Achse wird gespiegelt: Bildschirm-Y wächst nach unten,
/// logisches Y nach oben.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    bounds: ViewportBounds,
}

impl CoordinateMapper {
    /// Erstellt einen Mapper für die gegebenen logischen Bounds.
    pub fn new(bounds: ViewportBounds) -> Self {
        Self { bounds }
    }

    /// Logische Spanne `(spanX, spanY)`.
    pub fn span(&self) -> DVec2 {
        DVec2::new(self.bounds.width(), self.bounds.height())
    }

    /// Konvertiert eine Pixel-Position in logische Koordinaten.
    ///
    /// Ein Rechteck mit Breite oder Höhe 0 ist eine Vorbedingungsverletzung
    /// des Aufrufers.
    pub fn map_event(&self, raw: DVec2, rect: ScreenRect) -> DVec2 {
        let span = self.span();
        let normalized = (raw - rect.min) / rect.size;
        DVec2::new(
            (normalized.x - 0.5) * span.x,
            -(normalized.y - 0.5) * span.y,
        ) + self.bounds.center()
    }

    /// Wie `map_event`, aber direkt aus einer Roh-Eingabe.
    pub fn map_input(&self, input: &RawInput, rect: ScreenRect) -> Option<DVec2> {
        input.position().map(|raw| self.map_event(raw, rect))
    }

    /// Inverse von `map_event`: logische Koordinaten → Pixel.
    pub fn logical_to_screen(&self, logical: DVec2, rect: ScreenRect) -> DVec2 {
        let span = self.span();
        let local = logical - self.bounds.center();
        DVec2::new(
            rect.min.x + (local.x / span.x + 0.5) * rect.size.x,
            rect.min.y + (0.5 - local.y / span.y) * rect.size.y,
        )
    }

    /// Pixel pro logischer Einheit in X (für Linienstärken).
    pub fn pixels_per_unit(&self, rect: ScreenRect) -> f64 {
        rect.size.x / self.span().x
    }
}

/// Layout der Zeichenfläche innerhalb des verfügbaren Bereichs.
pub struct CanvasLayout;

impl CanvasLayout {
    /// Zentriertes Quadrat mit Kantenlänge `min(w, h) * fill_ratio`.
    pub fn fit_square(available: ScreenRect, fill_ratio: f64) -> ScreenRect {
        let side = available.size.x.min(available.size.y) * fill_ratio;
        let offset = (available.size - DVec2::splat(side)) * 0.5;
        ScreenRect {
            min: available.min + offset,
            size: DVec2::splat(side),
        }
    }
}
