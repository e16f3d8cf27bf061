use spline_curve_editor::{AppCommand, AppController, AppIntent, AppState, PointerButton};
use spline_curve_editor::{CurveColor, CurveDocument, EditorOptions, Point};

fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("spline_curve_editor_{}_{}", std::process::id(), name))
}

fn press(controller: &mut AppController, state: &mut AppState, x: f64, y: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                pos: Point::new(x, y),
                button: PointerButton::Primary,
            },
        )
        .expect("Press sollte ohne Fehler durchlaufen");
}

fn state_with_points(points: &[(f64, f64)]) -> AppState {
    let mut state = AppState::new();
    state.document = CurveDocument::from_parts(
        points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        CurveColor::BLUE,
        2,
        true,
    );
    state
}

#[test]
fn test_press_drag_release_on_empty_canvas() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    press(&mut controller, &mut state, 100.0, 100.0);
    assert_eq!(state.document.points(), &[Point::new(100.0, 100.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Point::new(120.0, 130.0),
                primary_held: true,
            },
        )
        .expect("Move sollte ohne Fehler durchlaufen");
    assert_eq!(state.document.points(), &[Point::new(120.0, 130.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerReleased {
                button: PointerButton::Primary,
            },
        )
        .expect("Release sollte ohne Fehler durchlaufen");

    assert_eq!(state.document.selected_index(), None);
    assert_eq!(state.document.points(), &[Point::new(120.0, 130.0)]);
}

#[test]
fn test_press_near_point_selects_instead_of_inserting() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);

    press(&mut controller, &mut state, 51.0, 1.0);

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.document.selected_index(), Some(1));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::PressAt { pos } => assert_eq!(*pos, Point::new(51.0, 1.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_move_after_release_does_not_drag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    press(&mut controller, &mut state, 10.0, 10.0);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerReleased {
                button: PointerButton::Primary,
            },
        )
        .expect("Release sollte ohne Fehler durchlaufen");
    let logged = state.command_log.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Point::new(300.0, 300.0),
                primary_held: true,
            },
        )
        .expect("Move sollte ohne Fehler durchlaufen");

    assert_eq!(state.document.points(), &[Point::new(10.0, 10.0)]);
    assert_eq!(state.command_log.len(), logged);
}

#[test]
fn test_secondary_press_removes_hit_point() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Point::new(49.0, 2.0),
                button: PointerButton::Secondary,
            },
        )
        .expect("Rechtsklick sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.document.points(),
        &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]
    );
}

#[test]
fn test_clear_keeps_style() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::StrokeColorChanged {
                color: CurveColor::RED,
            },
        )
        .expect("Farbwechsel sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .expect("ClearRequested sollte ohne Fehler durchlaufen");

    assert!(state.document.is_empty());
    assert_eq!(state.document.stroke_color(), CurveColor::RED);
    assert!(state.document.show_points());
}

#[test]
fn test_width_slider_value_is_clamped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::StrokeWidthChanged { width: 25 })
        .expect("Breitenwechsel sollte ohne Fehler durchlaufen");

    assert_eq!(state.document.stroke_width(), 10);
}

#[test]
fn test_toggle_points_twice_restores_visibility() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::TogglePointsRequested)
        .expect("Toggle sollte ohne Fehler durchlaufen");
    assert!(!state.document.show_points());
    assert!(!controller.build_render_scene(&state).show_points);

    controller
        .handle_intent(&mut state, AppIntent::TogglePointsRequested)
        .expect("Toggle sollte ohne Fehler durchlaufen");
    assert!(state.document.show_points());
}

#[test]
fn test_save_and_load_requests_open_dialogs() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::LoadRequested)
        .expect("LoadRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_save_dialog);
    assert!(state.ui.show_load_dialog);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
    assert_eq!(
        state.command_log.last().map(AppCommand::label),
        Some("Beenden")
    );
    assert_eq!(state.command_log.total(), 1);
}

#[test]
fn test_load_fixture_replaces_document() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = fixture_path("three_points.json");

    controller
        .handle_intent(
            &mut state,
            AppIntent::LoadFilePathSelected {
                path: path.display().to_string(),
            },
        )
        .expect("Laden sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.document.stroke_color(), CurveColor::rgb(0xff, 0x80, 0x00));
    assert_eq!(state.document.stroke_width(), 4);
    assert_eq!(
        state.ui.current_file_path.as_deref(),
        Some(path.display().to_string().as_str())
    );
}

#[test]
fn test_load_missing_width_keeps_current_document() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&[(1.0, 1.0), (50.0, 50.0), (90.0, 10.0)]);
    let before = state.document.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LoadFilePathSelected {
                path: fixture_path("missing_width.json").display().to_string(),
            },
        )
        .expect("Fehler wird im Use-Case abgefangen");

    assert_eq!(state.document, before);
    let status = state.ui.status_message.as_deref().unwrap_or_default();
    assert!(status.contains("Laden fehlgeschlagen"), "Status: {status}");
}

#[test]
fn test_load_missing_file_reports_status() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&[(5.0, 5.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::LoadFilePathSelected {
                path: temp_path("does_not_exist.json").display().to_string(),
            },
        )
        .expect("Fehler wird im Use-Case abgefangen");

    assert_eq!(state.point_count(), 1);
    assert!(state.ui.current_file_path.is_none());
}

#[test]
fn test_save_then_load_restores_document() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&[(0.1, 0.2), (33.333, 66.666), (100.0, 0.0)]);
    state.document.set_stroke_color(CurveColor::rgb(10, 20, 30));
    state.document.set_stroke_width(7);
    state.document.toggle_visibility();
    let saved = state.document.clone();
    let path = temp_path("roundtrip.json");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected {
                path: path.display().to_string(),
            },
        )
        .expect("Speichern sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .expect("ClearRequested sollte ohne Fehler durchlaufen");
    assert!(state.document.is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::LoadFilePathSelected {
                path: path.display().to_string(),
            },
        )
        .expect("Laden sollte ohne Fehler durchlaufen");

    assert_eq!(state.document, saved);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_exit_saves_current_style_into_options_file() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = temp_path("exit_options.toml");
    state.options_path = Some(path.clone());

    controller
        .handle_intent(
            &mut state,
            AppIntent::StrokeColorChanged {
                color: CurveColor::rgb(0x12, 0x34, 0x56),
            },
        )
        .expect("Farbwechsel sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::StrokeWidthChanged { width: 5 })
        .expect("Breitenwechsel sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    let reloaded = EditorOptions::load_from_file(&path);
    assert_eq!(reloaded.default_stroke_color, CurveColor::rgb(0x12, 0x34, 0x56));
    assert_eq!(reloaded.default_stroke_width, 5);

    let restarted = AppState::with_options(reloaded);
    assert_eq!(restarted.document.stroke_color(), CurveColor::rgb(0x12, 0x34, 0x56));
    let _ = std::fs::remove_file(&path);
}
