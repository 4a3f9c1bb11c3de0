use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use neighbor_report::config::{self, Config, PartialConfig};
use neighbor_report::{blocking, report};

/// Print the neighbors of a GoBGP daemon, one block per peer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Opt {
    /// Host running the daemon's gRPC API
    host: Option<String>,

    #[arg(short, long, help = "gRPC port [default: 50051]")]
    port: Option<u16>,

    #[arg(short, long, help = "Seconds to wait for the connection and for the reply [default: 10]")]
    timeout: Option<u64>,

    /// Only report the neighbor with this address
    #[arg(short, long)]
    address: Option<String>,

    /// TOML file with host, port, timeout and address defaults
    #[arg(short, long, value_parser)]
    config: Option<PathBuf>,
}

impl From<Opt> for PartialConfig {
    fn from(opt: Opt) -> Self {
        PartialConfig {
            host: opt.host,
            port: opt.port,
            timeout: opt.timeout,
            address: opt.address,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut opt = Opt::parse();

    let file = match opt.config.take() {
        Some(path) => config::read_config(&path)?,
        None => PartialConfig::default(),
    };
    let config = Config::resolve(opt.into(), file)?;
    log::debug!("config: {:?}", config);

    let peers = blocking::fetch_neighbors(&config)
        .with_context(|| format!("cannot list neighbors of {}", config.endpoint()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &peers).context("cannot write report")?;

    Ok(())
}
