use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_sessions;
use crate::presentation::views::SessionsView;

pub async fn handle(
    client: &Client,
    group: &str,
    name: &str,
    year: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let sessions = client.commission_sessions(group, name).await?;
    let vm = present_sessions(sessions, year);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", SessionsView(&vm)),
    }

    Ok(())
}
