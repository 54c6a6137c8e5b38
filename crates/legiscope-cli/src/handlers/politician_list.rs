use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_politician_list;
use crate::presentation::views::PoliticianListView;

pub async fn handle(client: &Client, query: &str, format: OutputFormat) -> Result<()> {
    let politicians = client.politicians(query).await?;
    let vm = present_politician_list(query, politicians);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", PoliticianListView(&vm)),
    }

    Ok(())
}
