use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_activity;
use crate::presentation::views::ActivityView;

pub async fn handle(
    client: &Client,
    group: &str,
    status: &str,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let items = client.activity(group, status, query).await?;
    let vm = present_activity(items);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", ActivityView(&vm)),
    }

    Ok(())
}
