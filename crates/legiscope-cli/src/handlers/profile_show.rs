use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_profile;
use crate::presentation::views::ProfileView;

pub async fn handle(
    client: &Client,
    chamber: &str,
    id: &str,
    format: OutputFormat,
) -> Result<()> {
    let profile = client.kom_profile(chamber, id).await?;
    let vm = present_profile(chamber, id, profile);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", ProfileView(&vm)),
    }

    Ok(())
}
