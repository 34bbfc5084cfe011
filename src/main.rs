use anyhow::Context;
use spirogen::GeneratorConfig;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::default();
    spirogen::run(&config).with_context(|| {
        format!(
            "Failed to generate synthetic data at {}",
            config.output_path.display()
        )
    })?;

    Ok(())
}
