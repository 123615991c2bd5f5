//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::SketchOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Persistiert neue Optionen in der Konfigurationsdatei und übernimmt sie.
///
/// Ungültige Optionen werden abgewiesen. Schlägt das Speichern fehl,
/// bleiben die bisherigen Optionen und die Sitzung unverändert. Ändern
/// sich die Bounds, passen Kurve und Punkte nicht mehr zum Zeichenbereich
/// und werden verworfen.
pub fn apply_options(state: &mut AppState, options: SketchOptions) -> anyhow::Result<()> {
    if !options.is_valid() {
        anyhow::bail!("Ungültige Optionen: Bounds und Schrittweite müssen endlich und positiv sein");
    }
    if let Some(path) = &state.options_path {
        options.save_to_file(path)?;
    }
    if options.bounds != state.options.bounds {
        let mode = state.session.mode;
        state.session.reset(mode);
    }
    state.options = options;
    Ok(())
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, SketchOptions::default())
}
