//! Zeichenflächen-Input: Maus-, Stift- und Touch-Events → AppIntent.
//!
//! Ein Kontakt beginnt mit dem Drücken innerhalb der Fläche und endet
//! beim Loslassen, beim Touch-Ende oder sobald der Zeiger die Fläche
//! verlässt.

use crate::app::AppIntent;
use crate::core::{RawInput, ScreenRect};
use glam::DVec2;

/// Verwaltet den Kontakt-Zustand der Zeichenfläche über Frames hinweg.
#[derive(Debug, Default)]
pub struct InputState {
    contact_active: bool,
}

/// Touch-Kontakte eines Frames, aufgeteilt nach Phase.
#[derive(Default)]
struct TouchFrame {
    active: Vec<DVec2>,
    ended: bool,
}

fn to_dvec2(pos: egui::Pos2) -> DVec2 {
    DVec2::new(pos.x as f64, pos.y as f64)
}

fn collect_touches(ui: &egui::Ui) -> TouchFrame {
    ui.input(|i| {
        let mut frame = TouchFrame::default();
        for event in &i.events {
            if let egui::Event::Touch { pos, phase, .. } = event {
                match phase {
                    egui::TouchPhase::Start | egui::TouchPhase::Move => {
                        frame.active.push(to_dvec2(*pos));
                    }
                    egui::TouchPhase::End | egui::TouchPhase::Cancel => frame.ended = true,
                }
            }
        }
        frame
    })
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob gerade ein Kontakt auf der Zeichenfläche läuft.
    pub fn contact_active(&self) -> bool {
        self.contact_active
    }

    /// Sammelt Zeichenflächen-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Touch-Kontakte haben Vorrang vor der (von egui simulierten)
    /// Zeigerposition desselben Frames.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        rect: egui::Rect,
        canvas: ScreenRect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let touches = collect_touches(ui);
        let (pressed, released, down, press_origin, latest, moved) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.delta() != egui::Vec2::ZERO,
            )
        });

        let raw = |pointer: egui::Pos2| {
            if touches.active.is_empty() {
                RawInput::Pointer(to_dvec2(pointer))
            } else {
                RawInput::Touches(touches.active.clone())
            }
        };

        if pressed {
            if let Some(origin) = press_origin.filter(|p| rect.contains(*p)) {
                self.contact_active = true;
                events.push(AppIntent::GestureStarted {
                    input: raw(origin),
                    canvas,
                });
            }
        } else if self.contact_active && down && moved {
            if let Some(pos) = latest {
                events.push(AppIntent::GestureMoved {
                    input: raw(pos),
                    canvas,
                });
            }
        }

        let left_canvas = latest.is_some_and(|p| !rect.contains(p));
        if self.contact_active && (released || touches.ended || left_canvas) {
            self.contact_active = false;
            events.push(AppIntent::GestureEnded);
        }

        events
    }
}
