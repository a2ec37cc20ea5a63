//! Main application entry point

use anyhow::{Context as _, Result};
use eframe::egui::{self, Context};
use tracing::{debug, info};

use dash_core::{handler_from_fn, DashboardController, DashboardSettings};
use dash_data::{Dataset, FieldCatalog};
use dash_ui::{AppShell, ShellConfig, Theme};

/// Main application state
struct DashboardApp {
    /// Dashboard model and drag interaction
    controller: DashboardController,

    /// Sample data every chart reads from
    dataset: Dataset,

    /// Sidebar, toolbar and chart grid
    shell: AppShell,
}

impl DashboardApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        dataset: Dataset,
        settings: DashboardSettings,
    ) -> Self {
        let controller = DashboardController::new(settings);
        controller.subscribe(handler_from_fn(|event| debug!("Dashboard event: {:?}", event)));

        // Setup custom theme
        let settings = controller.settings();
        dash_ui::apply_theme(&cc.egui_ctx, &Theme::from_settings(settings));

        let shell = AppShell::new(ShellConfig::from_settings(settings), FieldCatalog::sample());

        Self {
            controller,
            dataset,
            shell,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.shell.show(ctx, &mut self.controller, &self.dataset);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let settings = DashboardSettings::default();
    let dataset = Dataset::sample().context("Failed to build the sample dataset")?;

    info!("Starting dashboard builder with {} sample rows", dataset.num_rows());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: if settings.dark_mode { eframe::Theme::Dark } else { eframe::Theme::Light },
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Dashboard Builder",
        options,
        Box::new(move |cc| Box::new(DashboardApp::new(cc, dataset, settings))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
