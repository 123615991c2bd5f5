use crate::core::Mode;
use crate::shared::SketchOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Positionen sind bereits in logischen Koordinaten.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neue Geste an logischer Position beginnen
    BeginGesture { pos: DVec2 },
    /// Laufende Geste um einen Punkt erweitern
    ExtendGesture { pos: DVec2 },
    /// Laufende Geste abschließen und fitten
    FinishGesture,
    /// Regressions-Punkt tippen
    AddRegressionPoint { pos: DVec2 },
    /// Regressionsgerade fitten
    FitRegression,
    /// Regressions-Punkte verwerfen
    ClearRegressionPoints,
    /// Modus wechseln (verwirft die gesamte Anzeige)
    SetMode { mode: Mode },
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: SketchOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
