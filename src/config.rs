use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

use crate::{BatchError, item::fake::PhoneMode};

pub const DEFAULT_COUNT: usize = 100;
pub const DEFAULT_OUTPUT: &str = "fake_pii_data.json";
pub const DEFAULT_PORT: &str = "8080";

/// Generate fake person records as JSON
#[derive(Parser, Debug)]
#[command(name = "fake-pii-json", version, about)]
pub struct Cli {
    /// Number of fake records to generate
    #[arg(short = 'n', default_value_t = DEFAULT_COUNT)]
    pub number: usize,

    /// Output filename for the JSON data
    #[arg(short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Serve records over HTTP instead of writing a file
    #[arg(long)]
    pub server: bool,

    /// Port to listen on in server mode, e.g. `8080` or `:8080`
    #[arg(long, default_value = DEFAULT_PORT)]
    pub port: String,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Phone shape: `single` or `by-category`
    #[arg(long, default_value_t = PhoneMode::Single)]
    pub phones: PhoneMode,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub count: usize,
    pub output_path: PathBuf,
    pub server_mode: bool,
    pub port: u16,
    pub seed: Option<u64>,
    pub phone_mode: PhoneMode,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl TryFrom<Cli> for Config {
    type Error = BatchError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.output.as_os_str().is_empty() {
            return Err(BatchError::Validation(
                "output filename must not be empty".to_string(),
            ));
        }

        Ok(Config {
            count: cli.number,
            output_path: cli.output,
            server_mode: cli.server,
            port: parse_port(&cli.port)?,
            seed: cli.seed,
            phone_mode: cli.phones,
        })
    }
}

/// Accepts `8080` as well as the `:8080` listen form.
fn parse_port(raw: &str) -> Result<u16, BatchError> {
    let digits = raw.strip_prefix(':').unwrap_or(raw);
    digits
        .parse::<u16>()
        .map_err(|_| BatchError::Validation(format!("invalid port '{}'", raw)))
}
