//! egui presentation of the touch controls: stick visuals, settings button,
//! the settings window and a camera readout.

use egui::{Align2, Color32, FontId, Pos2};
use glam::Vec2;

use crate::core::controls::MobileControls;
use crate::core::joystick::JoystickId;
use crate::core::sensitivity::SensitivityParam;
use crate::layout::ControlsLayout;
use crate::traits::CameraRig;

// Premultiplied white/black at 30%, 70%, 50% and 80% opacity
const STICK_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(77, 77, 77, 77);
const STICK_HANDLE: Color32 = Color32::from_rgba_premultiplied(179, 179, 179, 179);
const BUTTON_FILL: Color32 = Color32::from_rgba_premultiplied(128, 128, 128, 128);
const SETTINGS_SCRIM: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 204);

/// Handle diameter as a fraction of the stick diameter
const HANDLE_FRACTION: f32 = 0.5;

fn pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

/// Paint both sticks and the settings button on the foreground layer
pub fn draw_controls<C: CameraRig>(ctx: &egui::Context, layout: &ControlsLayout, controls: &MobileControls<C>) {
    if !controls.is_enabled() {
        return;
    }
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("touch_controls"),
    ));

    for id in [JoystickId::Move, JoystickId::Look] {
        let rect = layout.stick(id);
        let radius = rect.width / 2.0;
        let center = rect.center();
        let handle = center + controls.joystick(id).handle_offset();

        painter.circle_filled(pos(center), radius, STICK_BACKGROUND);
        painter.circle_filled(pos(handle), radius * HANDLE_FRACTION, STICK_HANDLE);
    }

    let button = layout.settings_button;
    painter.circle_filled(pos(button.center()), button.width / 2.0, BUTTON_FILL);
    painter.text(
        pos(button.center()),
        Align2::CENTER_CENTER,
        "⚙",
        FontId::proportional(20.0),
        Color32::WHITE,
    );
}

/// Settings window with one slider per sensitivity; writes go through the controls' setter
pub fn draw_settings<C: CameraRig>(ctx: &egui::Context, controls: &mut MobileControls<C>) {
    if !controls.settings_open() {
        return;
    }

    let screen = ctx.screen_rect();
    ctx.layer_painter(egui::LayerId::new(egui::Order::Background, egui::Id::new("settings_scrim")))
        .rect_filled(screen, 0.0, SETTINGS_SCRIM);

    let mut close = false;
    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            for param in SensitivityParam::ALL {
                ui.horizontal(|ui| {
                    ui.label(param.label());
                    let mut value = controls.sensitivity().get(param);
                    let slider = egui::Slider::new(&mut value, param.range())
                        .step_by(param.step() as f64)
                        .show_value(false);
                    if ui.add(slider).changed() {
                        controls.on_slider_change(param, value);
                    }
                    ui.label(SensitivityParam::display(value));
                });
            }
            ui.add_space(20.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });

    if close {
        controls.on_settings_close();
    }
}

/// Top-left camera readout
pub fn draw_hud<C: CameraRig>(ctx: &egui::Context, controls: &MobileControls<C>, fps: f32) {
    egui::Window::new("Camera")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0} FPS", fps))
                    .size(12.0)
                    .color(Color32::GRAY),
            );
            match controls.camera() {
                Some(camera) => {
                    let p = camera.position();
                    ui.label(
                        egui::RichText::new(format!("pos {:.2} {:.2} {:.2}", p.x, p.y, p.z))
                            .color(Color32::from_rgb(74, 158, 255)),
                    );
                    ui.label(format!(
                        "yaw {:.1}°  pitch {:.1}°",
                        camera.yaw().to_degrees(),
                        camera.pitch().to_degrees()
                    ));
                }
                None => {
                    ui.label("no camera");
                }
            }
            let m = controls.movement();
            ui.label(
                egui::RichText::new(format!("move {:.2} {:.2}", m.x, m.z))
                    .size(12.0)
                    .color(Color32::GRAY),
            );
        });
}
