use anyhow::Result;
use legiscope_api::Client;
use legiscope_editor::EditorSession;
use legiscope_types::KomProfile;
use tokio::runtime::Runtime;

use crate::tui::{self, ProfileStore};

struct ApiStore<'a> {
    rt: &'a Runtime,
    client: &'a Client,
}

impl ProfileStore for ApiStore<'_> {
    fn save(&mut self, chamber: &str, id: &str, profile: &KomProfile) -> Result<(), String> {
        self.rt
            .block_on(self.client.save_kom_profile(chamber, id, profile))
            .map_err(|e| e.to_string())
    }
}

/// Fetch the profile, run the editor loop, persist on demand.
///
/// The fetch happens before the terminal switches to the alternate screen,
/// so connection errors print normally instead of corrupting the TUI.
pub fn handle(
    rt: &Runtime,
    client: &Client,
    chamber: &str,
    id: &str,
    name: &str,
    role: &str,
) -> Result<()> {
    let profile = rt.block_on(client.kom_profile(chamber, id))?;
    let session = EditorSession::open(chamber, id, name, role, profile);

    let mut store = ApiStore { rt, client };
    tui::run_editor(session, &mut store)
}
