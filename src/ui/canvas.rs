//! Zeichnet die Render-Szene mit dem egui-Painter.

use crate::core::{CoordinateMapper, ScreenRect};
use crate::shared::RenderScene;
use glam::DVec2;

const BACKGROUND: egui::Color32 = egui::Color32::WHITE;
const BORDER: egui::Color32 = egui::Color32::from_gray(120);
const GRID_LINE: egui::Color32 = egui::Color32::from_gray(225);
const AXIS_LINE: egui::Color32 = egui::Color32::from_gray(170);

/// Konvertiert ein egui-Rechteck in ein `ScreenRect`.
pub fn screen_rect_from(rect: egui::Rect) -> ScreenRect {
    ScreenRect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.width() as f64,
        rect.height() as f64,
    )
}

fn to_pos2(p: DVec2) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Zeichnet Gitter, Skizze, erkannte Kurve und Punkte in `rect`.
pub fn paint_canvas(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let canvas = screen_rect_from(rect);
    let mapper = CoordinateMapper::new(scene.bounds());
    let to_screen = |p: DVec2| to_pos2(mapper.logical_to_screen(p, canvas));
    let px_per_unit = mapper.pixels_per_unit(canvas) as f32;

    painter.rect_filled(rect, 0.0, BACKGROUND);

    if scene.options.grid_visible {
        paint_grid(painter, scene, &to_screen);
    }

    let opts = &scene.options;
    paint_polyline(
        painter,
        scene.sketch.iter().map(|&p| to_screen(p)).collect(),
        egui::Stroke::new(
            opts.sketch_width_logical as f32 * px_per_unit,
            color32(opts.sketch_color),
        ),
    );
    paint_polyline(
        painter,
        scene.curve.iter().map(|&p| to_screen(p)).collect(),
        egui::Stroke::new(
            opts.curve_width_logical as f32 * px_per_unit,
            color32(opts.curve_color),
        ),
    );

    let point_color = color32(opts.point_color);
    for &p in &scene.points {
        painter.circle_filled(to_screen(p), opts.point_radius_px, point_color);
    }

    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, BORDER),
        egui::StrokeKind::Inside,
    );
}

fn paint_polyline(painter: &egui::Painter, points: Vec<egui::Pos2>, stroke: egui::Stroke) {
    match points.len() {
        0 => {}
        // Einzelpunkt (Tipp ohne Bewegung) als Klecks sichtbar machen
        1 => {
            painter.circle_filled(points[0], stroke.width * 0.5, stroke.color);
        }
        _ => {
            painter.add(egui::Shape::line(points, stroke));
        }
    }
}

/// Ganzzahliges Gitter über die Bounds, Achsen hervorgehoben.
fn paint_grid(painter: &egui::Painter, scene: &RenderScene, to_screen: &dyn Fn(DVec2) -> egui::Pos2) {
    let b = scene.bounds();

    let mut x = b.min_x.ceil();
    while x <= b.max_x {
        let color = if x == 0.0 { AXIS_LINE } else { GRID_LINE };
        painter.line_segment(
            [
                to_screen(DVec2::new(x, b.min_y)),
                to_screen(DVec2::new(x, b.max_y)),
            ],
            egui::Stroke::new(1.0, color),
        );
        x += 1.0;
    }

    let mut y = b.min_y.ceil();
    while y <= b.max_y {
        let color = if y == 0.0 { AXIS_LINE } else { GRID_LINE };
        painter.line_segment(
            [
                to_screen(DVec2::new(b.min_x, y)),
                to_screen(DVec2::new(b.max_x, y)),
            ],
            egui::Stroke::new(1.0, color),
        );
        y += 1.0;
    }
}
