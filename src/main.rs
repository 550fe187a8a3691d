use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use npm_depgraph::config::{forwarded_args, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "npm_depgraph=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Every argument, `--` included, belongs to `npm ls`.
    let npm_args = forwarded_args(std::env::args_os());
    let config = Config::from_env();

    // Failures are reported but do not change the exit code.
    match npm_depgraph::run(&config, &npm_args).await {
        Ok(path) => println!("Dependency visualization created at: {}", path.display()),
        Err(err) => error!("{:#}", err),
    }
}
