mod app;
mod config;
mod controls;
mod figure;

use std::process::ExitCode;

use puppet_engine::device::GpuInit;
use puppet_engine::logging::{init_logging, LoggingConfig};
use puppet_engine::window::Runtime;

use crate::app::CanvasApp;
use crate::config::DemoConfig;

fn run(config: &DemoConfig) -> anyhow::Result<()> {
    let mut app = CanvasApp::new(config);
    log::info!("starting puppet ({}x{})", config.width, config.height);
    Runtime::run(config.runtime(), GpuInit::default(), &mut app, config.idle)
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run(&DemoConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("puppet: {e:#}");
            ExitCode::FAILURE
        }
    }
}
