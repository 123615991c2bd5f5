//! Zentrale Konfiguration für Sketch-Fit.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::ViewportBounds;
use crate::render::PARABOLA_SAMPLE_STEP;
use serde::{Deserialize, Serialize};

// ── Zeichenfläche ──────────────────────────────────────────────────

/// Halbe logische Kantenlänge des Zeichenbereichs (20 × 20 Einheiten).
pub const LOGICAL_HALF_EXTENT: f64 = 10.0;
/// Anteil der kleineren Fensterkante, den die quadratische Fläche einnimmt.
pub const CANVAS_FILL_RATIO: f64 = 0.8;

// ── Striche ─────────────────────────────────────────────────────────

/// Strichstärke der Freihand-Skizze in logischen Einheiten.
pub const SKETCH_WIDTH_LOGICAL: f64 = 0.25;
/// Strichstärke der erkannten Kurve in logischen Einheiten.
pub const CURVE_WIDTH_LOGICAL: f64 = 0.25;
/// Farbe der Freihand-Skizze (RGBA: Schwarz).
pub const SKETCH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der erkannten Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.1, 0.35, 0.9, 1.0];

// ── Regressions-Punkte ──────────────────────────────────────────────

/// Radius getippter Punkte in Pixeln.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Farbe getippter Punkte (RGBA: Rot).
pub const POINT_COLOR: [f32; 4] = [0.85, 0.1, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `sketch_fit.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Koordinaten ─────────────────────────────────────────────
    /// Anteil der kleineren Fensterkante für die Zeichenfläche
    pub canvas_fill_ratio: f64,

    // ── Rendering ───────────────────────────────────────────────
    /// Abtast-Schrittweite für Parabeln in logischen Einheiten
    pub parabola_sample_step: f64,
    /// Strichstärke der Skizze (logisch)
    pub sketch_width_logical: f64,
    /// Strichstärke der erkannten Kurve (logisch)
    pub curve_width_logical: f64,
    /// Farbe der Skizze
    pub sketch_color: [f32; 4],
    /// Farbe der erkannten Kurve
    pub curve_color: [f32; 4],
    /// Radius getippter Punkte (px)
    pub point_radius_px: f32,
    /// Farbe getippter Punkte
    pub point_color: [f32; 4],
    /// Koordinatengitter im Hintergrund zeichnen
    #[serde(default = "default_grid_visible")]
    pub grid_visible: bool,

    // TOML: Tabellen müssen nach allen einfachen Werten stehen
    /// Logischer Zeichenbereich (Clipping und Punkt-Validierung)
    pub bounds: ViewportBounds,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            canvas_fill_ratio: CANVAS_FILL_RATIO,

            parabola_sample_step: PARABOLA_SAMPLE_STEP,
            sketch_width_logical: SKETCH_WIDTH_LOGICAL,
            curve_width_logical: CURVE_WIDTH_LOGICAL,
            sketch_color: SKETCH_COLOR,
            curve_color: CURVE_COLOR,
            point_radius_px: POINT_RADIUS_PX,
            point_color: POINT_COLOR,
            grid_visible: true,
            bounds: ViewportBounds::symmetric(LOGICAL_HALF_EXTENT),
        }
    }
}

/// Serde-Default für `grid_visible` (Abwärtskompatibilität).
fn default_grid_visible() -> bool {
    true
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) if opts.is_valid() => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Ok(_) => {
                    log::warn!("Optionen-Datei enthält ungültige Werte, verwende Standardwerte");
                    Self::default()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("sketch_fit"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("sketch_fit.toml")
    }

    /// Endliche Bounds mit positiver Ausdehnung und endliche, positive Schrittweite.
    pub fn is_valid(&self) -> bool {
        let b = &self.bounds;
        [b.min_x, b.max_x, b.min_y, b.max_y, self.parabola_sample_step]
            .iter()
            .all(|v| v.is_finite())
            && b.max_x > b.min_x
            && b.max_y > b.min_y
            && self.parabola_sample_step > 0.0
            && self.canvas_fill_ratio > 0.0
            && self.canvas_fill_ratio <= 1.0
    }
}
