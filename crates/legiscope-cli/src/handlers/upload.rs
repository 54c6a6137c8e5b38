use std::path::Path;

use anyhow::Result;
use legiscope_api::Client;

use crate::args::OutputFormat;
use crate::presentation::view_models::UploadViewModel;
use crate::presentation::views::UploadView;

pub async fn handle(client: &Client, path: &Path, format: OutputFormat) -> Result<()> {
    let saved_as = client.upload(path).await?;
    let vm = UploadViewModel {
        file: path.display().to_string(),
        saved_as,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", UploadView(&vm)),
    }

    Ok(())
}
