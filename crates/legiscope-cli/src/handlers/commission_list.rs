use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_commission_list;
use crate::presentation::views::CommissionListView;

pub async fn handle(
    client: &Client,
    group: &str,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let commissions = client.commissions(group, query).await?;
    let vm = present_commission_list(group, query, commissions);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", CommissionListView(&vm)),
    }

    Ok(())
}
