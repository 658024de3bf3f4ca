use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info, warn};

use netpulse::args::Args;
use netpulse::config::{self, ConfigSource};
use netpulse::runtime::{RuntimeConfig, shutdown_signal};
use netpulse::{
    CaptureError, Config, Engine, LineSource, OscUdpSink, PacedSource, TsharkSource, run_pipeline,
};

fn main() -> Result<()> {
    netpulse::logging::init_dual_logging();

    let args = Args::parse();
    let runtime = RuntimeConfig::from_args(args.threads).build_runtime()?;
    runtime.block_on(run(args))
}

async fn run(args: Args) -> Result<()> {
    let config_path = args.config.as_str();
    let (mut config, source) = config::load_config_with_fallback(config_path)?;
    if source == ConfigSource::Defaults {
        warn!(
            "Config file '{}' not found, creating default config",
            config_path
        );
        config::write_default_config(config_path)?;
        info!("Created default config file: {}", config_path);
    }
    args.apply_overrides(&mut config);
    config.validate()?;

    log_config(&config, source);

    let mut engine = Engine::new(&config.engine);
    let mut sink = OscUdpSink::connect(&config.transport).await?;
    let tick_interval = config.engine.tick_interval;

    if let Some(path) = &args.replay {
        info!("Replaying capture records from {}", path.display());
        let file = tokio::fs::File::open(path).await?;
        let mut source = PacedSource::new(LineSource::new(BufReader::new(file)));
        let result = run_pipeline(
            &mut engine,
            &mut source,
            &mut sink,
            tick_interval,
            shutdown_signal(),
        )
        .await;

        return match result {
            Ok(stats) => {
                info!("Replay stopped early: {:?}", stats);
                Ok(())
            }
            Err(CaptureError::Terminated { reason }) => {
                info!("Replay finished: {}", reason);
                Ok(())
            }
            Err(e) => Err(e.into()),
        };
    }

    let mut source = TsharkSource::spawn(&config.capture)?;
    let result = run_pipeline(
        &mut engine,
        &mut source,
        &mut sink,
        tick_interval,
        shutdown_signal(),
    )
    .await;
    source.stop().await;

    match result {
        Ok(stats) => {
            info!(
                "netpulse stopped: {} records, {} dropped, {} snapshots sent",
                stats.records, stats.dropped, stats.ticks
            );
            Ok(())
        }
        Err(e) => {
            error!("Capture failed: {}", e);
            Err(e.into())
        }
    }
}

fn log_config(config: &Config, source: ConfigSource) {
    info!("Loaded configuration from {}", source.description());
    info!(
        "Capture interface {} via {}",
        config.capture.interface, config.capture.tshark_path
    );
    info!(
        "Tick every {:?}; windows: size/time {}, interval {}; spike: {} queries in {:?}",
        config.engine.tick_interval,
        config.engine.size_window_capacity,
        config.engine.interval_window_capacity,
        config.engine.spike_threshold,
        config.engine.spike_window
    );
    let categories: Vec<&str> = config.engine.categories.iter().map(|c| c.as_str()).collect();
    info!("Tracking DNS categories: {}", categories.join(", "));
}
