use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::view_models::TranscriptViewModel;
use crate::presentation::views::TranscriptView;

pub async fn handle(
    client: &Client,
    group: &str,
    name: &str,
    session_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let text = client.transcript(group, name, session_id).await?;
    let vm = TranscriptViewModel {
        group: group.to_string(),
        commission_name: name.to_string(),
        session_id: session_id.to_string(),
        text,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", TranscriptView(&vm)),
    }

    Ok(())
}
