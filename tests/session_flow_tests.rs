use approx::assert_relative_eq;
use glam::DVec2;
use sketch_fit::{
    AppCommand, AppController, AppIntent, AppState, FitError, Mode, RawInput, ScreenRect,
};

/// 400 × 400 px Fläche: 20 px pro logischer Einheit.
fn canvas() -> ScreenRect {
    ScreenRect::new(0.0, 0.0, 400.0, 400.0)
}

fn pixel(x: f64, y: f64) -> RawInput {
    RawInput::Pointer(DVec2::new((x + 10.0) * 20.0, (10.0 - y) * 20.0))
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Spielt eine komplette Geste durch (Start, Bewegungen, Ende).
fn draw(controller: &mut AppController, state: &mut AppState, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().expect("mindestens ein Punkt");
    send(
        controller,
        state,
        AppIntent::GestureStarted {
            input: pixel(first.0, first.1),
            canvas: canvas(),
        },
    );
    for &(x, y) in rest {
        send(
            controller,
            state,
            AppIntent::GestureMoved {
                input: pixel(x, y),
                canvas: canvas(),
            },
        );
    }
    send(controller, state, AppIntent::GestureEnded);
}

fn tap(controller: &mut AppController, state: &mut AppState, x: f64, y: f64) {
    send(
        controller,
        state,
        AppIntent::GestureStarted {
            input: pixel(x, y),
            canvas: canvas(),
        },
    );
    send(controller, state, AppIntent::GestureEnded);
}

fn select_mode(controller: &mut AppController, state: &mut AppState, mode: Mode) {
    send(controller, state, AppIntent::ModeChanged { mode });
}

#[test]
fn test_linear_gesture_shows_diagonal_through_corners() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw(&mut controller, &mut state, &[(-5.0, -5.0), (0.0, 3.0), (5.0, 5.0)]);

    assert!(state.session.gesture.is_none());
    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = 1x + 0")
    );
    let polyline = &state.session.display.polyline;
    assert_eq!(polyline.len(), 2);
    assert_relative_eq!(polyline[0].x, -10.0, epsilon = 1e-9);
    assert_relative_eq!(polyline[0].y, -10.0, epsilon = 1e-9);
    assert_relative_eq!(polyline[1].x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(polyline[1].y, 10.0, epsilon = 1e-9);
}

#[test]
fn test_quadratic_gesture_shows_parabola_equation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, Mode::Quadratic);

    // y = -x² + 2x + 3
    draw(&mut controller, &mut state, &[(-2.0, -5.0), (1.0, 4.0), (4.0, -5.0)]);

    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = -1x² + 2x + 3")
    );
    let polyline = &state.session.display.polyline;
    assert!(polyline.len() > 2);
    assert!(polyline
        .iter()
        .all(|p| state.options.bounds.contains(*p)));
}

#[test]
fn test_quadratic_with_two_points_reports_error_and_keeps_equation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, Mode::Quadratic);
    draw(&mut controller, &mut state, &[(-2.0, -5.0), (1.0, 4.0), (4.0, -5.0)]);

    draw(&mut controller, &mut state, &[(0.0, 0.0), (1.0, 1.0)]);

    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = -1x² + 2x + 3")
    );
    let message = state
        .ui
        .status_message
        .as_deref()
        .expect("Statusmeldung erwartet");
    assert!(message.contains('3'));
}

#[test]
fn test_new_gesture_clears_curve_but_keeps_equation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw(&mut controller, &mut state, &[(-5.0, -5.0), (5.0, 5.0)]);

    send(
        &mut controller,
        &mut state,
        AppIntent::GestureStarted {
            input: pixel(1.0, 1.0),
            canvas: canvas(),
        },
    );

    assert!(state.session.display.polyline.is_empty());
    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = 1x + 0")
    );
    assert_eq!(
        state.session.gesture.as_ref().map(|g| g.len()),
        Some(1)
    );
}

#[test]
fn test_second_start_discards_running_gesture() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::GestureStarted {
            input: pixel(-8.0, 0.0),
            canvas: canvas(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::GestureMoved {
            input: pixel(-6.0, 1.0),
            canvas: canvas(),
        },
    );
    // zweiter Start ohne Ende dazwischen
    draw(&mut controller, &mut state, &[(0.0, 2.0), (4.0, 2.0)]);

    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = 0x + 2")
    );
}

#[test]
fn test_mode_change_mid_gesture_clears_everything() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw(&mut controller, &mut state, &[(-5.0, -5.0), (5.0, 5.0)]);
    send(
        &mut controller,
        &mut state,
        AppIntent::GestureStarted {
            input: pixel(0.0, 0.0),
            canvas: canvas(),
        },
    );

    select_mode(&mut controller, &mut state, Mode::Quadratic);
    send(&mut controller, &mut state, AppIntent::GestureEnded);

    assert_eq!(state.session.mode, Mode::Quadratic);
    assert!(state.session.gesture.is_none());
    assert!(state.session.display.equation.is_none());
    assert!(state.session.display.polyline.is_empty());
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::SetMode {
            mode: Mode::Quadratic
        })
    ));
}

#[test]
fn test_regression_taps_then_generate() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, Mode::Regression);

    tap(&mut controller, &mut state, -5.0, -5.0);
    tap(&mut controller, &mut state, 0.0, 0.0);
    tap(&mut controller, &mut state, 5.0, 5.0);
    assert_eq!(state.session.regression.len(), 3);
    assert!(state.session.display.equation.is_none());

    send(
        &mut controller,
        &mut state,
        AppIntent::RegressionGenerateRequested,
    );

    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = 1x + 0")
    );
    assert_eq!(state.session.display.polyline.len(), 2);
}

#[test]
fn test_regression_with_single_point_reports_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, Mode::Regression);
    tap(&mut controller, &mut state, 3.0, 3.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::RegressionGenerateRequested,
    );

    assert!(state.session.display.equation.is_none());
    assert!(state.ui.status_message.is_some());
    assert_eq!(state.session.regression.len(), 1);
}

#[test]
fn test_tap_outside_bounds_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, Mode::Regression);

    // Pixel außerhalb der 400 × 400 Fläche → logisch x = 12.5
    send(
        &mut controller,
        &mut state,
        AppIntent::GestureStarted {
            input: RawInput::Pointer(DVec2::new(450.0, 200.0)),
            canvas: canvas(),
        },
    );

    assert!(state.session.regression.is_empty());
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_tap_after_generate_starts_new_point_set() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, Mode::Regression);
    tap(&mut controller, &mut state, -4.0, 1.0);
    tap(&mut controller, &mut state, 4.0, 1.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::RegressionGenerateRequested,
    );
    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = 0x + 1")
    );

    tap(&mut controller, &mut state, 5.0, -5.0);

    assert_eq!(state.session.regression.points(), &[DVec2::new(5.0, -5.0)]);
    assert!(state.session.display.polyline.is_empty());
    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = 0x + 1")
    );
}

#[test]
fn test_regression_clear_removes_points_and_equation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, Mode::Regression);
    tap(&mut controller, &mut state, -4.0, 1.0);
    tap(&mut controller, &mut state, 4.0, 3.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::RegressionGenerateRequested,
    );

    send(&mut controller, &mut state, AppIntent::RegressionClearRequested);

    assert!(state.session.regression.is_empty());
    assert!(state.session.display.equation.is_none());
    assert!(state.session.display.polyline.is_empty());
}

#[test]
fn test_invalid_options_are_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut options = state.options.clone();
    options.parabola_sample_step = 0.0;

    let result = controller.handle_intent(&mut state, AppIntent::OptionsChanged { options });

    assert!(result.is_err());
    assert_eq!(state.options.parabola_sample_step, 0.1);
}

#[test]
fn test_changed_bounds_reset_session() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw(&mut controller, &mut state, &[(-5.0, -5.0), (5.0, 5.0)]);

    let mut options = state.options.clone();
    options.bounds = sketch_fit::ViewportBounds::symmetric(5.0);
    send(&mut controller, &mut state, AppIntent::OptionsChanged { options });

    assert!(state.session.display.equation.is_none());
    assert_eq!(state.options.bounds.width(), 10.0);
}

#[test]
fn test_mode_round_trip_discards_old_regression_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, Mode::Regression);
    tap(&mut controller, &mut state, -5.0, -5.0);
    tap(&mut controller, &mut state, 5.0, 5.0);
    assert_eq!(state.session.regression.len(), 2);

    select_mode(&mut controller, &mut state, Mode::Linear);
    select_mode(&mut controller, &mut state, Mode::Regression);
    tap(&mut controller, &mut state, 0.0, 0.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::RegressionGenerateRequested,
    );

    assert_eq!(state.session.regression.len(), 1);
    assert!(state.session.display.equation.is_none());
    let expected = FitError::InsufficientPoints {
        required: 2,
        actual: 1,
    }
    .to_string();
    assert_eq!(state.ui.status_message.as_deref(), Some(expected.as_str()));
}

#[test]
fn test_failed_save_keeps_previous_options_and_session() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options_path = Some(
        std::env::temp_dir()
            .join("sketch_fit_missing_dir_for_save")
            .join("nested")
            .join("sketch_fit.toml"),
    );
    draw(&mut controller, &mut state, &[(-5.0, -5.0), (5.0, 5.0)]);

    let mut options = state.options.clone();
    options.bounds = sketch_fit::ViewportBounds::symmetric(5.0);
    let result = controller.handle_intent(&mut state, AppIntent::OptionsChanged { options });

    assert!(result.is_err());
    assert_eq!(state.options.bounds, sketch_fit::ViewportBounds::symmetric(10.0));
    assert_eq!(
        state.session.display.equation.as_deref(),
        Some("y = 1x + 0")
    );
}
