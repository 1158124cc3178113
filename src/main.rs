use anyhow::Context;
use odrviewer::{init_logging, NativeFilePicker, PanelConfig, PanelDriver, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::info;

/// Usage: odrviewer [--config <panel.toml>] [map.xodr]
fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("odrviewer {} ({})", VERSION, BUILD_DATE);

    let mut config_path = None;
    let mut map_path = None;
    let mut args = std::env::args_os().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a path")?;
            config_path = Some(PathBuf::from(path));
        } else {
            map_path = Some(PathBuf::from(arg));
        }
    }

    let config_path = match config_path {
        Some(path) => path,
        None => PanelConfig::default_path()?,
    };
    let config = PanelConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let mut driver =
        PanelDriver::new(config, Box::new(NativeFilePicker::new())).with_config_path(config_path);
    if let Some(map) = map_path {
        driver.open_map(map);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    driver.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
