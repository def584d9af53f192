use anyhow::Context;

fn main() -> anyhow::Result<()> {
    entityforge_observability::init();

    let config = entityforge_cli::Config::from_env().context("invalid ENTITYFORGE_KINDS")?;
    tracing::info!(kinds = config.kinds.len(), "starting entity demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    entityforge_cli::demo::run(&config, &mut out)
}
