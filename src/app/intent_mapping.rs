//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::CoordinateMapper;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Pixel-Positionen werden hier über die aktuellen Bounds in logische
/// Koordinaten umgerechnet; Handler sehen nur noch logische Werte.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let mode = state.session.mode;
    match intent {
        AppIntent::GestureStarted { input, canvas } => {
            let mapper = CoordinateMapper::new(state.options.bounds);
            let Some(pos) = mapper.map_input(&input, canvas) else {
                log::debug!("Gesten-Start ohne Kontaktposition ignoriert");
                return vec![];
            };
            if mode.uses_gestures() {
                vec![AppCommand::BeginGesture { pos }]
            } else {
                vec![AppCommand::AddRegressionPoint { pos }]
            }
        }
        AppIntent::GestureMoved { input, canvas } => {
            if !mode.uses_gestures() || !state.session.is_painting() {
                return vec![];
            }
            let mapper = CoordinateMapper::new(state.options.bounds);
            mapper
                .map_input(&input, canvas)
                .map(|pos| AppCommand::ExtendGesture { pos })
                .into_iter()
                .collect()
        }
        AppIntent::GestureEnded => {
            if mode.uses_gestures() && state.session.is_painting() {
                vec![AppCommand::FinishGesture]
            } else {
                vec![]
            }
        }
        AppIntent::ModeChanged { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::RegressionGenerateRequested => vec![AppCommand::FitRegression],
        AppIntent::RegressionClearRequested => vec![AppCommand::ClearRegressionPoints],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsResetRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
