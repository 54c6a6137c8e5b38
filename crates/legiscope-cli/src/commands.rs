use anyhow::Result;
use legiscope_api::Client;
use tokio::runtime::Runtime;

use crate::args::{Cli, Commands, CommissionCommand, PoliticianCommand, ProfileCommand};
use crate::config::Config;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());
    let client = Client::new(&api_url);
    let rt = Runtime::new()?;

    let Some(command) = cli.command else {
        show_guidance(&api_url);
        return Ok(());
    };

    let format = cli.format;

    match command {
        Commands::Health => rt.block_on(handlers::health::handle(&client, format)),

        Commands::Commission { command } => match command {
            CommissionCommand::List { group, query } => {
                let group = group.unwrap_or_else(|| config.default_group.clone());
                rt.block_on(handlers::commission_list::handle(
                    &client, &group, &query, format,
                ))
            }
            CommissionCommand::Sessions { group, name, year } => {
                rt.block_on(handlers::commission_sessions::handle(
                    &client,
                    &group,
                    &name,
                    year.as_deref(),
                    format,
                ))
            }
            CommissionCommand::Transcript {
                group,
                name,
                session_id,
            } => rt.block_on(handlers::commission_transcript::handle(
                &client,
                &group,
                &name,
                &session_id,
                format,
            )),
        },

        Commands::Politician { command } => match command {
            PoliticianCommand::List { query } => {
                rt.block_on(handlers::politician_list::handle(&client, &query, format))
            }
        },

        Commands::Profile { command } => match command {
            ProfileCommand::Show { chamber, id } => rt.block_on(handlers::profile_show::handle(
                &client, &chamber, &id, format,
            )),
            ProfileCommand::Edit {
                chamber,
                id,
                name,
                role,
            } => handlers::profile_edit::handle(&rt, &client, &chamber, &id, &name, &role),
        },

        Commands::Activity {
            group,
            status,
            query,
        } => rt.block_on(handlers::activity::handle(
            &client, &group, &status, &query, format,
        )),

        Commands::News { source, query } => {
            let source = source.unwrap_or_else(|| config.news_source.clone());
            rt.block_on(handlers::news::handle(&client, &source, &query, format))
        }

        Commands::Chat { message } => {
            rt.block_on(handlers::chat::handle(&client, &message, format))
        }

        Commands::Upload { path } => {
            rt.block_on(handlers::upload::handle(&client, &path, format))
        }
    }
}

fn show_guidance(api_url: &str) {
    println!("legiscope - Legislative monitoring client\n");
    println!("Backend: {}\n", api_url);
    println!("Quick commands:");
    println!("  legiscope health                          # Check the backend");
    println!("  legiscope commission list                 # Browse commissions");
    println!("  legiscope commission sessions <g> <name>  # Session history");
    println!("  legiscope politician list                 # Browse politicians");
    println!("  legiscope profile edit <chamber> <id>     # Edit a KOM profile");
    println!("  legiscope activity                        # Recent activity");
    println!("\nSee 'legiscope --help' for the full command tree.");
}
