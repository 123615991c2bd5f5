use crate::app::CommandLog;
use crate::shared::SketchOptions;
use std::path::PathBuf;

use super::{SessionState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichen-Sitzung (Modus, Geste, Punkte, Anzeige)
    pub session: SessionState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Bounds, Farben, Breiten)
    pub options: SketchOptions,
    /// Zieldatei für geänderte Optionen (`None` = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State ohne Optionen-Datei.
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: SketchOptions::default(),
            options_path: None,
            should_exit: false,
        }
    }

    /// Erstellt einen App-State mit geladenen Optionen und Speicherpfad.
    pub fn with_options(options: SketchOptions, options_path: PathBuf) -> Self {
        Self {
            options,
            options_path: Some(options_path),
            ..Self::new()
        }
    }
}
