use clap::Parser;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jdot=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    jdot_run::Cli::parse().run()
}
