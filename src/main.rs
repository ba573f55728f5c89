use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use fake_pii_json::{
    config::{Cli, Config},
    generate::generate_json_file,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::try_from(Cli::parse())?;

    if config.server_mode {
        return run_server(&config);
    }

    println!(
        "Generating {} fake records into {}...",
        config.count,
        config.output_path.display()
    );

    let result = generate_json_file(&config).with_context(|| {
        format!(
            "unable to write records to {}",
            config.output_path.display()
        )
    })?;

    println!(
        "Successfully generated {} records and saved to {}",
        result.write_count,
        config.output_path.display()
    );
    Ok(())
}

#[cfg(feature = "server")]
fn run_server(config: &Config) -> anyhow::Result<()> {
    let addr = config.listen_addr();
    info!("Starting server on {}", addr);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(fake_pii_json::server::serve(addr))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
fn run_server(_config: &Config) -> anyhow::Result<()> {
    info!("Server mode requested");
    anyhow::bail!("this binary was built without the `server` feature")
}
