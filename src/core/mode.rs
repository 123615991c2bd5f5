//! Aktiver Erkennungsmodus der Sitzung.

use serde::{Deserialize, Serialize};

/// Welches Modell aus der Eingabe bestimmt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Gerade durch Start- und Endpunkt einer Geste
    #[default]
    Linear,
    /// Parabel durch Start, Scheitel und Ende einer Geste
    Quadratic,
    /// Ausgleichsgerade über getippte Einzelpunkte
    Regression,
}

impl Mode {
    /// Alle Modi in Anzeige-Reihenfolge.
    pub const ALL: [Mode; 3] = [Mode::Linear, Mode::Quadratic, Mode::Regression];

    /// Beschriftung für die Toolbar.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Linear => "Linear",
            Mode::Quadratic => "Quadratisch",
            Mode::Regression => "Regression",
        }
    }

    /// Hinweistext für die Statuszeile.
    pub fn hint(self) -> &'static str {
        match self {
            Mode::Linear => "Gerade zeichnen",
            Mode::Quadratic => "Bogen zeichnen",
            Mode::Regression => "Punkte tippen, dann \"Erzeugen\"",
        }
    }

    /// Ob der Modus mit durchgehenden Gesten arbeitet.
    pub fn uses_gestures(self) -> bool {
        !matches!(self, Mode::Regression)
    }
}
