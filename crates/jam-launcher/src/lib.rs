mod app;
mod panel;
mod panels;
mod tab;
mod widgets;

use std::path::Path;

use anyhow::Result;
use jam_config::Config;

/// Launch the settings GUI. Blocks until the window is closed.
pub fn run_launcher(config_path: &Path) -> Result<()> {
    let config = Config::read(config_path).unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_title("JamLink"),
        ..Default::default()
    };

    let path = config_path.to_path_buf();
    eframe::run_native(
        "JamLink",
        options,
        Box::new(move |_cc| Ok(Box::new(app::LauncherApp::new(config, path)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
