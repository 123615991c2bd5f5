/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Meldung für die Statuszeile (z.B. abgewiesene Eingabe)
    pub status_message: Option<String>,
    /// Ob der Optionen-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
