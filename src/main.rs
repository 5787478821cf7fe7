mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use iotlog::{
    DeleteOutcome, DestroyReport, Engine, IotLoggingOptions, ManagedResource, config, output,
    providers,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.provider_settings();

    let client = providers::build_client(&settings).await?;
    let region = client.region().to_string();
    let resource = IotLoggingOptions::new(client, region);
    let engine = Engine::new(resource, cli.state.clone());
    let type_name = engine.resource().type_name();

    match cli.command {
        Command::Plan(args) => {
            let desired = config::load_desired(&args.config)?;
            let action = engine.plan(&desired).await?;
            println!("{}", output::render_plan(type_name, &action));
        }
        Command::Apply(args) => {
            let desired = config::load_desired(&args.config)?;
            let report = engine.apply(&desired).await?;
            println!("{}", output::render_plan(type_name, &report.action));
            println!("{}", output::render_record(&report.record));
        }
        Command::Refresh => match engine.refresh().await? {
            Some(record) => println!("{}", output::render_record(&record)),
            None => println!("{}: not tracked", type_name),
        },
        Command::Import(args) => {
            let record = engine.import(&args.id).await?;
            println!("{}", output::render_record(&record));
        }
        Command::Destroy => match engine.destroy().await? {
            DestroyReport::NotTracked => println!("{}: not tracked", type_name),
            DestroyReport::Destroyed { record, outcome } => {
                tracing::info!(id = %record.id, ?outcome, "destroy complete");
                match outcome {
                    DeleteOutcome::Detached => println!(
                        "{} '{}' removed from state; remote settings were left unchanged",
                        type_name, record.id
                    ),
                    DeleteOutcome::Deleted => println!("{} '{}' destroyed", type_name, record.id),
                }
            }
        },
        Command::Show => match engine.show().await? {
            Some(record) => println!("{}", output::render_record(&record)),
            None => println!("{}: not tracked", type_name),
        },
        Command::Schema => {
            let schema = engine.resource().schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}
