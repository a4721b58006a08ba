// src/gui/view.rs
//
// Interactive scatter-plus-lines rendering of the teammate graph:
// drag to pan, scroll to zoom at the pointer, hover for the player
// label and degree. Node radius and color both follow degree.

use std::collections::HashMap;

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::display;
use crate::graph::TeamGraph;
use crate::layout::ForceLayout;

const SETTLE_TICKS: usize = 150;
const MIN_RADIUS: f32 = 6.0;
const MAX_RADIUS: f32 = 20.0;

pub struct GraphView {
    layout: ForceLayout,
    labels: Vec<String>,
    degrees: Vec<usize>,
    radii: Vec<f32>,
    pan: Vec2,
    zoom: f32,
    pub live_physics: bool,
}

impl GraphView {
    pub fn from_graph(graph: &TeamGraph) -> Self {
        let keys: Vec<String> = graph.nodes().map(|p| p.profile_id.clone()).collect();
        let index_of: HashMap<&str, usize> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.as_str(), i))
            .collect();
        let edges: Vec<(usize, usize)> = graph
            .edges()
            .filter_map(|(a, b)| Some((*index_of.get(a)?, *index_of.get(b)?)))
            .collect();

        let degrees: Vec<usize> = keys.iter().map(|k| graph.degree(k)).collect();
        let max_degree = degrees.iter().copied().max().unwrap_or(0).max(1);
        let radii: Vec<f32> = degrees
            .iter()
            .map(|&d| {
                MIN_RADIUS + (d as f32 / max_degree as f32) * (MAX_RADIUS - MIN_RADIUS)
            })
            .collect();
        let labels: Vec<String> = keys.iter().map(|k| display::display_name(k)).collect();

        let mut layout = ForceLayout::seeded(&keys, edges);
        layout.run(SETTLE_TICKS);

        Self {
            layout,
            labels,
            degrees,
            radii,
            pan: Vec2::ZERO,
            zoom: 1.0,
            live_physics: true,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        if self.live_physics {
            self.layout.step();
            ui.ctx().request_repaint();
        }

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

        if response.hovered() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll.abs() > f32::EPSILON {
                let pointer = ui
                    .input(|input| input.pointer.hover_pos())
                    .unwrap_or_else(|| rect.center());
                let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);

                let factor = (1.0 + scroll * 0.0018).clamp(0.85, 1.15);
                self.zoom = (self.zoom * factor).clamp(0.1, 6.0);
                self.pan = pointer - rect.center() - (world_before * self.zoom);
            }
        }
        if response.dragged() {
            self.pan += response.drag_delta();
        }

        let n = self.layout.len();
        let mut screen = Vec::with_capacity(n);
        let mut screen_radii = Vec::with_capacity(n);
        for i in 0..n {
            let [x, y] = self.layout.position(i);
            screen.push(world_to_screen(rect, self.pan, self.zoom, Vec2::new(x, y)));
            screen_radii.push((self.radii[i] * self.zoom.powf(0.4)).clamp(2.5, 40.0));
        }

        let edge_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(130, 150, 170, 110));
        for &(a, b) in self.layout.edges() {
            painter.line_segment([screen[a], screen[b]], edge_stroke);
        }

        let pointer = response.hover_pos();
        let mut hovered: Option<(usize, f32)> = None;
        for i in 0..n {
            if let Some(p) = pointer {
                let d = screen[i].distance(p);
                if d <= screen_radii[i] && hovered.is_none_or(|(_, best)| d < best) {
                    hovered = Some((i, d));
                }
            }
        }

        let max_degree = self.degrees.iter().copied().max().unwrap_or(0).max(1);
        for i in 0..n {
            painter.circle_filled(screen[i], screen_radii[i], degree_color(self.degrees[i], max_degree));
        }

        if let Some((i, _)) = hovered {
            painter.circle_stroke(
                screen[i],
                screen_radii[i] + 2.0,
                Stroke::new(1.5, Color32::WHITE),
            );
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                egui::Id::new("node_tooltip"),
                |ui| {
                    ui.strong(self.labels[i].as_str());
                    ui.label(format!("{} teammate edge(s)", self.degrees[i]));
                },
            );
        }
    }
}

fn degree_color(degree: usize, max_degree: usize) -> Color32 {
    let t = degree as f32 / max_degree as f32;
    let r = (70.0 + 170.0 * t) as u8;
    let g = (140.0 - 50.0 * t) as u8;
    let b = (220.0 - 150.0 * t) as u8;
    Color32::from_rgb(r, g, b)
}

fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.center() + pan + world * zoom
}

fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    (screen - rect.center() - pan) / zoom
}
