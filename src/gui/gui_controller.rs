//! GUI controller
//!
//! Wires the Slint `MainWindow` to the application controller. Every window
//! callback is forwarded to one `AppController` method; when the method
//! reports a change, the window's models are refreshed from the controller's
//! current canvas frame, table and prompt state.
//!
//! Playback continuations run on Slint single-shot timers, so the whole
//! application stays on the UI thread. Label widths are measured by a hidden
//! Slint `Text` that uses the canvas label font.

use crate::{CanvasShape, MainWindow, PinRow};
use pinmap::config::AppConfig;
use pinmap::controller::AppController;
use pinmap::error::{PinMapError, Result};
use pinmap::input::{OffsetChain, PointerEvent};
use pinmap::model::Point;
use pinmap::playback::{PlaybackStep, Scheduler};
use pinmap::render::{Color, DisplayList, DrawCommand, GlyphAdvance, TextMetrics};
use pinmap::view::{LabelModal, ModalKey, TableView};
use slint::{ComponentHandle, Model, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::{debug, info};

/// Controller type used by the desktop application
type PinMapController = AppController<DisplayList<SlintMetrics>, TimerScheduler>;

const SHAPE_CIRCLE: i32 = 0;
const SHAPE_LINE: i32 = 1;
const SHAPE_RECT: i32 = 2;
const SHAPE_TEXT: i32 = 3;

/// Window models kept in sync with the controller
struct WindowView {
    window: slint::Weak<MainWindow>,
    shapes: Rc<VecModel<CanvasShape>>,
    rows: Rc<VecModel<PinRow>>,
}

impl WindowView {
    fn new(window: &MainWindow) -> Self {
        let shapes = Rc::new(VecModel::default());
        let rows = Rc::new(VecModel::default());
        window.set_shapes(ModelRc::from(Rc::clone(&shapes)));
        window.set_rows(ModelRc::from(Rc::clone(&rows)));

        Self {
            window: window.as_weak(),
            shapes,
            rows,
        }
    }

    /// Copy the controller's state into the window
    fn sync(&self, controller: &PinMapController) {
        let Some(window) = self.window.upgrade() else {
            return;
        };

        let mode = controller.mode();
        window.set_recording(mode.is_recording());
        window.set_playing(mode.is_playing());
        window.set_modal_open(controller.modal().is_some());

        let shapes: Vec<CanvasShape> = controller
            .surface()
            .commands()
            .iter()
            .map(to_shape)
            .collect();
        self.shapes.set_vec(shapes);

        self.sync_rows(controller.table());
    }

    /// Replace the table rows
    ///
    /// Rows whose content is unchanged are left alone so a label field being
    /// typed into keeps its focus and cursor.
    fn sync_rows(&self, table: &TableView) {
        let rows: Vec<PinRow> = table
            .rows()
            .iter()
            .map(|row| PinRow {
                label: SharedString::from(row.label.as_str()),
                x: SharedString::from(row.x.to_string()),
                y: SharedString::from(row.y.to_string()),
                can_move_up: row.can_move_up,
                can_move_down: row.can_move_down,
            })
            .collect();

        if self.rows.row_count() != rows.len() {
            self.rows.set_vec(rows);
            return;
        }
        for (i, row) in rows.into_iter().enumerate() {
            if self.rows.row_data(i).as_ref() != Some(&row) {
                self.rows.set_row_data(i, row);
            }
        }
    }
}

fn slint_color(color: Color) -> slint::Color {
    slint::Color::from_rgb_u8(color.r, color.g, color.b)
}

fn to_shape(command: &DrawCommand) -> CanvasShape {
    match command {
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => CanvasShape {
            kind: SHAPE_CIRCLE,
            x: center.x - radius,
            y: center.y - radius,
            width: radius * 2.0,
            height: radius * 2.0,
            fill: slint_color(*color),
            ..Default::default()
        },
        DrawCommand::Line { from, to, color } => CanvasShape {
            kind: SHAPE_LINE,
            path: SharedString::from(format!("M {} {} L {} {}", from.x, from.y, to.x, to.y)),
            fill: slint_color(*color),
            ..Default::default()
        },
        DrawCommand::Rect { rect, color } => CanvasShape {
            kind: SHAPE_RECT,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            fill: slint_color(*color),
            ..Default::default()
        },
        DrawCommand::Text {
            text,
            origin,
            font_size,
            color,
        } => CanvasShape {
            kind: SHAPE_TEXT,
            x: origin.x,
            y: origin.y,
            text: SharedString::from(text.as_str()),
            font_size: *font_size,
            fill: slint_color(*color),
            ..Default::default()
        },
    }
}

/// Text widths from the window's hidden measuring `Text`
///
/// Falls back to the glyph-advance estimate once the window is gone.
#[derive(Clone)]
pub struct SlintMetrics {
    window: slint::Weak<MainWindow>,
    fallback: GlyphAdvance,
}

impl std::fmt::Debug for SlintMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlintMetrics")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl TextMetrics for SlintMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let Some(window) = self.window.upgrade() else {
            return self.fallback.text_width(text, font_size);
        };
        window.set_measure_font_size(font_size);
        window.set_measure_text(SharedString::from(text));
        window.get_measured_width()
    }
}

/// `Scheduler` backed by Slint single-shot timers
///
/// When a timer fires the step is handed back to the controller and the
/// window is refreshed.
pub struct TimerScheduler {
    controller: Weak<RefCell<PinMapController>>,
    view: Rc<WindowView>,
}

impl Scheduler for TimerScheduler {
    fn schedule(&mut self, delay: Duration, step: PlaybackStep) {
        let controller = Weak::clone(&self.controller);
        let view = Rc::clone(&self.view);

        slint::Timer::single_shot(delay, move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            let handled = controller.borrow_mut().on_playback_step(step);
            if handled {
                view.sync(&controller.borrow());
            }
        });
    }
}

/// Forwards a window callback to the controller and refreshes the window
#[derive(Clone)]
struct Dispatcher {
    controller: Weak<RefCell<PinMapController>>,
    view: Rc<WindowView>,
}

impl Dispatcher {
    fn run(&self, action: impl FnOnce(&mut PinMapController) -> bool) {
        let Some(controller) = self.controller.upgrade() else {
            return;
        };
        let changed = {
            let mut guard = controller.borrow_mut();
            action(&mut *guard)
        };
        if changed {
            self.view.sync(&controller.borrow());
        }
    }
}

fn pointer_event(page_x: f32, page_y: f32, offset_x: f32, offset_y: f32) -> PointerEvent {
    PointerEvent::new(
        Point::new(page_x, page_y),
        OffsetChain::absolute(Point::new(offset_x, offset_y)),
    )
}

/// Table row indices arrive as Slint `int`s
fn row_index(index: i32) -> Option<usize> {
    usize::try_from(index).ok()
}

/// GUI controller
pub struct GuiController {
    window: MainWindow,
    /// Keeps the application controller alive for the window's lifetime
    _controller: Rc<RefCell<PinMapController>>,
}

impl GuiController {
    /// Create the main window and the application controller behind it
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Creating main window");
        let window = MainWindow::new().map_err(|e| PinMapError::GuiError(Box::new(e)))?;
        window.set_canvas_width(config.canvas.width);
        window.set_canvas_height(config.canvas.height);
        window.set_modal_title(SharedString::from(LabelModal::TITLE));

        let metrics = SlintMetrics {
            window: window.as_weak(),
            fallback: GlyphAdvance(config.label.glyph_advance_ratio),
        };

        let view = Rc::new(WindowView::new(&window));
        let controller = Rc::new_cyclic(|weak: &Weak<RefCell<PinMapController>>| {
            let surface = DisplayList::with_metrics(config.canvas.size(), metrics);
            let scheduler = TimerScheduler {
                controller: Weak::clone(weak),
                view: Rc::clone(&view),
            };
            RefCell::new(AppController::new(config, surface, scheduler))
        });

        let dispatcher = Dispatcher {
            controller: Rc::downgrade(&controller),
            view: Rc::clone(&view),
        };
        Self::register_callbacks(&window, &dispatcher);
        view.sync(&controller.borrow());

        Ok(Self {
            window,
            _controller: controller,
        })
    }

    fn register_callbacks(window: &MainWindow, dispatcher: &Dispatcher) {
        let d = dispatcher.clone();
        window.on_record_clicked(move || d.run(PinMapController::start_recording));

        let d = dispatcher.clone();
        window.on_play_clicked(move || d.run(PinMapController::start_playing));

        let d = dispatcher.clone();
        window.on_canvas_moved(move |page_x, page_y, offset_x, offset_y| {
            let event = pointer_event(page_x, page_y, offset_x, offset_y);
            d.run(|c| c.pointer_moved(&event));
        });

        let d = dispatcher.clone();
        window.on_canvas_clicked(move |page_x, page_y, offset_x, offset_y| {
            let event = pointer_event(page_x, page_y, offset_x, offset_y);
            debug!("Canvas clicked at page ({}, {})", page_x, page_y);
            d.run(|c| c.pointer_clicked(&event));
        });

        let d = dispatcher.clone();
        window.on_move_up(move |index| {
            if let Some(index) = row_index(index) {
                d.run(|c| c.move_up(index));
            }
        });

        let d = dispatcher.clone();
        window.on_move_down(move |index| {
            if let Some(index) = row_index(index) {
                d.run(|c| c.move_down(index));
            }
        });

        let d = dispatcher.clone();
        window.on_label_edited(move |index, text| {
            if let Some(index) = row_index(index) {
                d.run(|c| c.set_label(index, text.as_str()));
            }
        });

        let d = dispatcher.clone();
        window.on_delete_pin(move |index| {
            if let Some(index) = row_index(index) {
                d.run(|c| c.remove(index));
            }
        });

        let d = dispatcher.clone();
        window.on_label_saved(move |text| d.run(|c| c.commit_label(text.as_str())));

        let d = dispatcher.clone();
        window.on_label_accepted(move |text| {
            d.run(|c| c.modal_key(ModalKey::Enter, text.as_str()));
        });
    }

    /// Show the window and run the event loop until it is closed
    pub fn run(&self) -> Result<()> {
        info!("Showing main window");
        self.window
            .run()
            .map_err(|e| PinMapError::GuiError(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinmap::render::Rect;

    #[test]
    fn test_circle_becomes_bounding_box() {
        let shape = to_shape(&DrawCommand::Circle {
            center: Point::new(50.0, 40.0),
            radius: 10.0,
            color: Color::RED,
        });
        assert_eq!(shape.kind, SHAPE_CIRCLE);
        assert_eq!((shape.x, shape.y, shape.width, shape.height), (40.0, 30.0, 20.0, 20.0));
        assert_eq!(shape.fill, slint::Color::from_rgb_u8(255, 0, 0));
    }

    #[test]
    fn test_line_becomes_path_commands() {
        let shape = to_shape(&DrawCommand::Line {
            from: Point::new(1.0, 2.0),
            to: Point::new(3.5, 4.0),
            color: Color::BLACK,
        });
        assert_eq!(shape.kind, SHAPE_LINE);
        assert_eq!(shape.path.as_str(), "M 1 2 L 3.5 4");
    }

    #[test]
    fn test_rect_and_text_keep_position() {
        let rect = to_shape(&DrawCommand::Rect {
            rect: Rect {
                x: 5.0,
                y: 6.0,
                width: 7.0,
                height: 8.0,
            },
            color: Color::WHITE,
        });
        assert_eq!(rect.kind, SHAPE_RECT);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (5.0, 6.0, 7.0, 8.0));

        let text = to_shape(&DrawCommand::Text {
            text: "Pier".to_string(),
            origin: Point::new(9.0, 10.0),
            font_size: 25.0,
            color: Color::BLACK,
        });
        assert_eq!(text.kind, SHAPE_TEXT);
        assert_eq!(text.text.as_str(), "Pier");
        assert_eq!(text.font_size, 25.0);
    }

    #[test]
    fn test_row_index_rejects_negative() {
        assert_eq!(row_index(-1), None);
        assert_eq!(row_index(3), Some(3));
    }
}
