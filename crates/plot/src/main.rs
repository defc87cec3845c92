// File: crates/plot/src/main.rs
// Summary: Fetches PM10 history for Tromsø from NILU and plots one line per station to plot.pdf.

use std::process::ExitCode;

use chart_core::Chart;
use luft_provider::NiluClient;
use luftplot::{run, HappyPalette, PlotConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("logging disabled: {err:#}");
    }

    let config = PlotConfig::default();
    let provider = match NiluClient::new(&config.base_url) {
        Ok(provider) => provider,
        Err(err) => {
            error!("{:#}", anyhow::Error::from(err));
            return ExitCode::from(1);
        }
    };

    let mut chart = Chart::new();
    match run(&config, &provider, &HappyPalette, &mut chart) {
        Ok(summary) => {
            info!(
                stations = summary.stations,
                lines = summary.lines,
                missing_colors = summary.missing_colors,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.exit_code();
            error!("{:#}", anyhow::Error::from(err));
            ExitCode::from(code)
        }
    }
}

/// Log filter from `RUST_LOG`, defaulting to `info`.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
