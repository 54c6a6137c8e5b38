use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::view_models::ChatViewModel;
use crate::presentation::views::ChatView;

pub async fn handle(client: &Client, message: &str, format: OutputFormat) -> Result<()> {
    let answer = client.chat(message).await?;
    let vm = ChatViewModel {
        question: message.to_string(),
        answer,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", ChatView(&vm)),
    }

    Ok(())
}
