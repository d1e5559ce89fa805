use anyhow::Context;
use clap::Parser;
use contracts_publisher::{run, Args, Settings};
use env_logger::{Env, Target};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let args = Args::parse();
    let settings = Settings::new(&args).context("failed to read config")?;

    let summary = run(&settings).await?;
    if settings.fail_on_remote_error && summary.has_failures() {
        return Err(anyhow::anyhow!(
            "{} registry calls failed",
            summary.total_failures()
        ));
    }

    Ok(())
}
