use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_news;
use crate::presentation::views::NewsView;

pub async fn handle(
    client: &Client,
    source: &str,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let items = client.news(source, query).await?;
    let vm = present_news(source, items);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", NewsView(&vm)),
    }

    Ok(())
}
