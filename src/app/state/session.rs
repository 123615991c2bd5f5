use crate::core::{Gesture, Mode, RegressionSet};
use crate::fit::CurveModel;
use crate::render::RenderedCurve;
use glam::DVec2;

/// Aktuell angezeigte Kurve und Gleichung.
///
/// Kurve und Gleichung haben unterschiedliche Lebensdauern: ein neuer
/// Gesten-Start löscht die Kurve, die Gleichung bleibt bis zum nächsten
/// Fit oder Moduswechsel stehen.
#[derive(Debug, Clone, Default)]
pub struct CurveDisplay {
    /// Zuletzt gefittetes Modell (volle Genauigkeit)
    pub model: Option<CurveModel>,
    /// Sichtbare Polylinie in logischen Koordinaten
    pub polyline: Vec<DVec2>,
    /// Gleichungstext mit gerundeten Koeffizienten
    pub equation: Option<String>,
}

impl CurveDisplay {
    /// Übernimmt ein neues Fit-Ergebnis.
    pub fn show(&mut self, curve: RenderedCurve) {
        self.model = Some(curve.model);
        self.polyline = curve.polyline;
        self.equation = Some(curve.equation);
    }

    /// Entfernt nur die gezeichnete Kurve.
    pub fn clear_curve(&mut self) {
        self.model = None;
        self.polyline.clear();
    }

    /// Entfernt Kurve und Gleichung.
    pub fn clear(&mut self) {
        self.clear_curve();
        self.equation = None;
    }
}

/// Zustand der Zeichen-Sitzung
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Aktiver Modus
    pub mode: Mode,
    /// Laufende Geste (`Some` genau dann, wenn gezeichnet wird)
    pub gesture: Option<Gesture>,
    /// Getippte Punkte für den Regressions-Modus
    pub regression: RegressionSet,
    /// Angezeigtes Ergebnis
    pub display: CurveDisplay,
}

impl SessionState {
    /// Erstellt eine leere Sitzung im Standardmodus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob gerade eine Geste läuft.
    pub fn is_painting(&self) -> bool {
        self.gesture.is_some()
    }

    /// Verwirft Geste, Punkte und Anzeige und wechselt den Modus.
    pub fn reset(&mut self, mode: Mode) {
        self.mode = mode;
        self.gesture = None;
        self.regression.clear();
        self.display.clear();
    }
}
