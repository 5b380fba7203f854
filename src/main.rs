use content_crew::pipeline::Pipeline;
use content_crew::settings::Settings;

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

const EXAMPLE_TOPIC: &str = "The impact of AI on healthcare";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;
    let pipeline = Pipeline::from_settings(&settings)?;

    let result = pipeline.run(EXAMPLE_TOPIC).await?;

    println!("{}", result.process_logs);
    println!("Final Output:");
    println!("{}", result.final_output);

    Ok(())
}
