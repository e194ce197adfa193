//! SEO workbench operator dashboard.

mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;

#[derive(Debug, Parser)]
#[command(name = "dashboard_gui", about = "Operator dashboard for the SEO workbench API")]
struct CliArgs {
    /// Base URL of the workbench API service.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = CliArgs::parse();
    let startup = config::load_startup_config(args.api_url);
    tracing::info!(api_base_url = %startup.api_base_url, "starting dashboard");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::start_backend_bridge(startup.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SEO Workbench Dashboard")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SEO Workbench Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::DashboardApp::new(cmd_tx, ui_rx, startup)))),
    )
}
