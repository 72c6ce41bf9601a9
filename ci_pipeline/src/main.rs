mod containers;
mod stages;

use clap::{Parser, Subcommand};
use dagger_sdk::{Directory, HostDirectoryOpts, Query};

#[derive(Parser)]
#[command(name = "car-service-ci", about = "Car service CI pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fast compile check
    Check {
        #[arg(long, default_value = ".")]
        source: String,
    },
    /// rustfmt and clippy gates
    Lint {
        #[arg(long, default_value = ".")]
        source: String,
    },
    /// Unit and router tests
    Test {
        #[arg(long, default_value = ".")]
        source: String,
    },
    /// PostgreSQL repository tests and HTTP smoke test
    #[command(name = "integration-test")]
    IntegrationTest {
        #[arg(long, default_value = ".")]
        source: String,
    },
    /// Security audit
    #[command(name = "security-audit")]
    SecurityAudit {
        #[arg(long, default_value = ".")]
        source: String,
    },
    /// Full pipeline (check + lint + test + integration)
    All {
        #[arg(long, default_value = ".")]
        source: String,
    },
}

fn host_directory(client: &Query, source: &str) -> Directory {
    client.host().directory_opts(
        source,
        HostDirectoryOpts {
            exclude: Some(vec!["target/", ".git/", "examples/"]),
            include: None,
            gitignore: None,
            no_cache: None,
        },
    )
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let Cli { command } = Cli::parse();

    dagger_sdk::connect(|client| async move {
        match command {
            Command::Check { source } => {
                let src = host_directory(&client, &source);
                println!("{}", stages::check::run(&client, src).await?);
            }
            Command::Lint { source } => {
                let src = host_directory(&client, &source);
                println!("{}", stages::lint::run(&client, src).await?);
            }
            Command::Test { source } => {
                let src = host_directory(&client, &source);
                println!("{}", stages::test::run(&client, src).await?);
            }
            Command::IntegrationTest { source } => {
                let src = host_directory(&client, &source);
                println!("{}", stages::integration::run(&client, src).await?);
            }
            Command::SecurityAudit { source } => {
                let src = host_directory(&client, &source);
                println!("{}", stages::security::run(&client, src).await?);
            }
            Command::All { source } => {
                let src = host_directory(&client, &source);

                println!("=== Phase 1: Fast Gates ===");
                let (check_out, lint_out) = tokio::try_join!(
                    stages::check::run(&client, src.clone()),
                    stages::lint::run(&client, src.clone()),
                )?;
                println!("{check_out}\n{lint_out}");

                println!("=== Phase 2: Tests ===");
                let test_out = stages::test::run(&client, src.clone()).await?;
                println!("{test_out}");

                println!("=== Phase 3: Integration ===");
                let int_out = stages::integration::run(&client, src).await?;
                println!("{int_out}");

                println!("\n=== Car Service CI Pipeline Complete ===");
            }
        }
        Ok(())
    })
    .await?;

    Ok(())
}
