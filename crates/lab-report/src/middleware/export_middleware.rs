//! Export Middleware
//!
//! Renders the report to PDF off the UI thread. The document is built from a
//! snapshot of the state at request time; the result comes back through the
//! dispatcher. A failed export is not recovered: it stops the application.

use crate::actions::{Action, GlobalAction, ReportAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::export::build_document;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Context;
use lab_report_document::{write_document, DocumentRenderer};
use std::sync::Arc;
use tokio::runtime::Runtime;

pub struct ExportMiddleware {
    /// Runtime for blocking render jobs
    runtime: Runtime,
    renderer: Arc<dyn DocumentRenderer>,
}

impl ExportMiddleware {
    pub fn new(renderer: Arc<dyn DocumentRenderer>) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime for exports")?;
        Ok(Self { runtime, renderer })
    }

    fn export(&self, state: &AppState, dispatcher: &Dispatcher) {
        let document = build_document(&state.report, &state.app_config.lab_name);
        let path = state.app_config.export_path();
        let renderer = Arc::clone(&self.renderer);
        let dispatcher = dispatcher.clone();

        log::info!("Exporting report to {}", path.display());

        self.runtime.spawn_blocking(move || {
            match write_document(renderer.as_ref(), &document, &path) {
                Ok(written) => {
                    log::info!("Export finished: {}", written.display());
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        format!("PDF guardado en {}", written.display()),
                        "export",
                    )));
                }
                Err(err) => {
                    log::error!("Export failed: {}", err);
                    dispatcher.dispatch(Action::Global(GlobalAction::Fatal(format!(
                        "PDF export failed: {}",
                        err
                    ))));
                }
            }
        });
    }
}

impl Middleware for ExportMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Report(ReportAction::ExportPdf) = action {
            self.export(state, dispatcher);
            return false;
        }

        true
    }
}
