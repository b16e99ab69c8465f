// ui.rs - egui front-end: controls, board painter and the frame-driven timers

use conway::{Action, Board, LifeState, PATTERNS, Theme};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};
use std::time::{Duration, Instant};

/// Cell colors for one theme.
struct Palette {
    live: Color32,
    dead: Color32,
    border: Color32,
    glow: Color32,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                live: Color32::from_rgb(0, 200, 0),
                dead: Color32::from_rgb(40, 40, 40),
                border: Color32::from_gray(60),
                glow: Color32::from_rgba_unmultiplied(80, 255, 80, 70),
            },
            Theme::Light => Self {
                live: Color32::from_rgb(30, 30, 30),
                dead: Color32::from_rgb(235, 235, 235),
                border: Color32::from_gray(200),
                glow: Color32::from_rgba_unmultiplied(255, 170, 0, 90),
            },
        }
    }
}

pub struct LifeApp {
    state: LifeState,
    selected_pattern: usize,
    viewport: Option<Vec2>,
}

impl LifeApp {
    pub fn new(state: LifeState) -> Self {
        Self { state, selected_pattern: 0, viewport: None }
    }

    /// Rebuilds the board when the window size maps to new dimensions.
    fn track_viewport(&mut self, ctx: &egui::Context, now: Instant) {
        let size = ctx.screen_rect().size();
        if self.viewport == Some(size) {
            return;
        }
        self.viewport = Some(size);
        let dims = self.state.config().dimensions_for_viewport(size.x, size.y);
        self.state.apply(Action::Resize(dims), now);
    }

    fn controls(&mut self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let state = &self.state;
        ui.horizontal(|ui| {
            let run_text = if state.running() { "⏸ Stop" } else { "▶ Start" };
            if ui.button(run_text).clicked() {
                actions.push(Action::ToggleRunning);
            }
            if ui.button("⏹ Reset").clicked() {
                actions.push(Action::Reset);
            }
            let idle_text = if state.idle_running() { "Stop Idle" } else { "Start Idle" };
            if ui.button(idle_text).clicked() {
                actions.push(Action::ToggleIdle);
            }
            let glow_text = if state.glow() { "Disable Glow" } else { "Enable Glow" };
            if ui.button(glow_text).clicked() {
                actions.push(Action::ToggleGlow);
            }
            if ui.button(state.theme().label()).clicked() {
                actions.push(Action::ToggleTheme);
            }

            ui.separator();

            if ui.button("⏭ Step").clicked() {
                actions.push(Action::Step);
            }
            if ui.button("🎲 Random").clicked() {
                actions.push(Action::Randomize);
            }

            ui.separator();

            // Pattern dropdown
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply Pattern").clicked() {
                actions.push(Action::ApplyPattern(self.selected_pattern));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / state.step_interval().as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec")).changed() {
                actions.push(Action::SetStepInterval(Duration::from_secs_f32(1.0 / speed)));
            }

            ui.separator();

            let board = state.board();
            let total = board.dims().len();
            let live = board.live_count();
            ui.label(format!("Generation: {}", state.generation()));
            ui.label(format!("Grid: {}", board.dims()));
            ui.label(format!("Live cells: {live}"));
            ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            if state.cycle_detected() {
                ui.colored_label(Color32::YELLOW, "cycle detected");
            }
        });
    }

    fn board_view(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let board = self.state.board();
        let dims = board.dims();
        let cell = self.state.config().cell_size;
        let spacing = 1.0;

        let total_size = Vec2::new(cell * dims.cols() as f32, cell * dims.rows() as f32);
        let (response, painter) = ui.allocate_painter(total_size, Sense::click());
        let origin = response.rect.min;
        let palette = Palette::for_theme(self.state.theme());

        paint_board(&painter, board, origin, cell, spacing, &palette, self.state.glow());

        // One click event per cell, carrying its (row, col)
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                if offset.x >= 0.0 && offset.y >= 0.0 {
                    let row = (offset.y / cell) as usize;
                    let col = (offset.x / cell) as usize;
                    if row < dims.rows() && col < dims.cols() {
                        actions.push(Action::ToggleCell { row, col });
                    }
                }
            }
        }
    }
}

fn paint_board(
    painter: &egui::Painter,
    board: &Board,
    origin: Pos2,
    cell: f32,
    spacing: f32,
    palette: &Palette,
    glow: bool,
) {
    let cols = board.dims().cols();
    let cell_rect = |index: usize| {
        let (row, col) = (index / cols, index % cols);
        let min = origin + Vec2::new(col as f32 * cell, row as f32 * cell);
        Rect::from_min_size(min, Vec2::splat(cell - spacing))
    };

    for (i, &alive) in board.cells().iter().enumerate() {
        if !alive {
            painter.rect_filled(cell_rect(i), 2.0, palette.dead);
        }
    }

    // Halos sit above dead cells and below live ones
    if glow {
        for (i, _) in board.cells().iter().enumerate().filter(|&(_, &alive)| alive) {
            painter.rect_filled(cell_rect(i).expand(cell * 0.2), cell * 0.3, palette.glow);
        }
    }

    for (i, &alive) in board.cells().iter().enumerate() {
        let rect = cell_rect(i);
        if alive {
            painter.rect_filled(rect, 2.0, palette.live);
        }
        painter.rect_stroke(rect, 2.0, Stroke::new(0.5, palette.border));
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.track_viewport(ctx, now);
        self.state.tick(now);

        ctx.set_visuals(match self.state.theme() {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        });

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui, &mut actions);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.board_view(ui, &mut actions);
            });
        });

        let now = Instant::now();
        for action in actions {
            self.state.apply(action, now);
        }

        // Wake up for the next tick even without input
        if let Some(deadline) = self.state.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
