// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    core::net::Session,
    export,
    graph::TeamGraph,
    runner,
};

use super::{progress::StatusProgress, view::GraphView};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Teammate Graph",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

pub struct App {
    options: AppOptions,

    // status/progress (the worker writes here)
    status: Arc<Mutex<String>>,
    running: bool,
    rx: Option<mpsc::Receiver<TeamGraph>>,

    // finished run
    graph: Option<TeamGraph>,
    view: Option<GraphView>,
}

impl App {
    pub fn new() -> Self {
        Self {
            options: AppOptions::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            rx: None,
            graph: None,
            view: None,
        }
    }

    fn set_status(&self, msg: String) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg;
        }
    }

    /// Kick off the pipeline on a worker thread. The session is created
    /// there and lives for the whole run; the UI thread only polls.
    fn start_scrape(&mut self, ctx: egui::Context) {
        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);
        self.running = true;
        self.set_status(s!("Starting scrape…"));

        let scrape_opts = self.options.scrape.clone();
        let status = Arc::clone(&self.status);
        thread::spawn(move || {
            let mut session = Session::new();
            let mut progress = StatusProgress::new(status);
            let graph = runner::build_graph(&mut session, &scrape_opts, Some(&mut progress));
            let _ = tx.send(graph);
            ctx.request_repaint();
        });
    }

    fn poll_scrape(&mut self) {
        let Some(rx) = &self.rx else { return };
        match rx.try_recv() {
            Ok(graph) => {
                self.set_status(format!(
                    "Graph ready: {} players, {} edges",
                    graph.node_count(),
                    graph.edge_count()
                ));
                self.view = Some(GraphView::from_graph(&graph));
                self.graph = Some(graph);
                self.rx = None;
                self.running = false;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                // worker died without a result; surface it and move on
                loge!("GUI: scrape worker disconnected without a graph");
                self.set_status(s!("Scrape failed, see log"));
                self.rx = None;
                self.running = false;
            }
        }
    }

    fn export_current(&mut self) {
        let Some(graph) = &self.graph else { return };
        match export::export_graph(&self.options.export, graph) {
            Ok(paths) => self.set_status(format!("Exported {} file(s)", paths.len())),
            Err(e) => {
                loge!("Export failed: {e}");
                self.set_status(format!("Export failed: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_scrape();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Players:");
                ui.add(egui::DragValue::new(&mut self.options.scrape.player_count).range(1..=200));
                ui.label("Teammates each:");
                ui.add(
                    egui::DragValue::new(&mut self.options.scrape.teammates_per_player)
                        .range(1..=100),
                );

                if ui
                    .add_enabled(!self.running, egui::Button::new("Scrape"))
                    .clicked()
                {
                    self.start_scrape(ctx.clone());
                }
                if ui
                    .add_enabled(
                        self.graph.is_some() && !self.running,
                        egui::Button::new("Export"),
                    )
                    .clicked()
                {
                    self.export_current();
                }
                if let Some(view) = &mut self.view {
                    ui.checkbox(&mut view.live_physics, "Physics");
                }
            });

            let status = self
                .status
                .lock()
                .map(|s| s.clone())
                .unwrap_or_default();
            ui.label(status);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.view {
            Some(view) => view.ui(ui),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("No graph yet. Set the counts and hit Scrape.");
                });
            }
        });

        if self.running {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}
