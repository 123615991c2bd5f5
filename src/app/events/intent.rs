use crate::core::{Mode, RawInput, ScreenRect};
use crate::shared::SketchOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Kontakt auf der Zeichenfläche begonnen (Maus gedrückt / Finger aufgesetzt)
    GestureStarted { input: RawInput, canvas: ScreenRect },
    /// Kontakt bewegt
    GestureMoved { input: RawInput, canvas: ScreenRect },
    /// Kontakt beendet (Loslassen, Fenster verlassen, Touch-Ende)
    GestureEnded,
    /// Modus über die Toolbar gewechselt
    ModeChanged { mode: Mode },
    /// Regressionsgerade aus den getippten Punkten erzeugen
    RegressionGenerateRequested,
    /// Getippte Punkte verwerfen
    RegressionClearRequested,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: SketchOptions },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsResetRequested,
    /// Anwendung beenden
    ExitRequested,
}
