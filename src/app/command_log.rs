//! Minimales Command-Log für Diagnose und spätere Wiederholung.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        // Gesten-Samples fluten das Log, nur Start/Ende sind interessant
        if matches!(command, AppCommand::ExtendGesture { .. }) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_skips_gesture_samples() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::BeginGesture {
            pos: DVec2::new(0.0, 0.0),
        });
        log.record(&AppCommand::ExtendGesture {
            pos: DVec2::new(1.0, 1.0),
        });
        log.record(&AppCommand::FinishGesture);
        assert_eq!(log.len(), 2);
        assert!(matches!(log.entries()[1], AppCommand::FinishGesture));
    }

    #[test]
    fn test_drains_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::FitRegression);
        }
        log.record(&AppCommand::ClearRegressionPoints);
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(matches!(
            log.entries().last(),
            Some(AppCommand::ClearRegressionPoints)
        ));
    }
}
