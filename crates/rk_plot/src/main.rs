use anyhow::Result;
use rk_core::ProblemConfig;
use rk_plot::{run, ChartSpec, PngChart};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    run(&PngChart, &ProblemConfig::default(), &ChartSpec::default())
}
