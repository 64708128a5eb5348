use anyhow::Context;
use clap::Parser;

use uptime_board::cli::Cli;
use uptime_board::config::Config;
use uptime_board::dashboard::{Dashboard, PipelineOptions};
use uptime_board::logging::{default_log_path, init_tracing, LogTarget};
use uptime_board::shutdown::ShutdownHandle;
use uptime_board::transport::HttpTransport;
use uptime_board::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    let target = if cli.headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.logging.file.clone().unwrap_or_else(default_log_path))
    };
    init_tracing(&config.logging.level, target).context("failed to initialise logging")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(run(cli.headless, config))
}

async fn run(headless: bool, config: Config) -> anyhow::Result<()> {
    let shutdown = ShutdownHandle::new();
    let signal_handle = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_handle.signal();
        }
    });

    let transport = HttpTransport::new(&config.api).context("failed to build HTTP transport")?;
    tracing::info!(base_url = %transport.base_url(), headless, "starting uptime dashboard");

    let dashboard = Dashboard::start(transport, PipelineOptions::from(&config), shutdown.clone());

    let result = if headless {
        ui::run_headless(&dashboard, &shutdown).await;
        Ok(())
    } else {
        ui::run(&config.ui, &dashboard, &shutdown).await
    };

    dashboard.stop();
    result.context("terminal front-end failed")
}
