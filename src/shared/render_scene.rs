//! Render-Szene als expliziter Übergabevertrag zwischen App und Zeichenfläche.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::SketchOptions;
use crate::core::{Mode, ViewportBounds};
use glam::DVec2;

/// Read-only Daten für einen Frame der Zeichenfläche.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktiver Modus
    pub mode: Mode,
    /// Punkte der laufenden Geste (leer, wenn keine Geste aktiv ist)
    pub sketch: Vec<DVec2>,
    /// Polyline der erkannten Kurve, bereits auf die Bounds geclippt
    pub curve: Vec<DVec2>,
    /// Getippte Regressions-Punkte
    pub points: Vec<DVec2>,
    /// Zuletzt angezeigte Gleichung
    pub equation: Option<String>,
    /// Laufzeit-Optionen für Farben und Breiten
    pub options: SketchOptions,
}

impl RenderScene {
    /// Logischer Zeichenbereich dieses Frames.
    pub fn bounds(&self) -> ViewportBounds {
        self.options.bounds
    }

    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_content(&self) -> bool {
        !self.sketch.is_empty() || !self.curve.is_empty() || !self.points.is_empty()
    }
}
