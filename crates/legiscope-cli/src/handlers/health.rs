use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_health;
use crate::presentation::views::HealthView;

pub async fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let health = client.health().await?;
    let vm = present_health(client.base_url(), &health);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", HealthView(&vm)),
    }

    Ok(())
}
