use clap::{Parser, Subcommand};
use reackathon::core::logging;
use reackathon::dtos::HackathonQuery;
use reackathon::entities::User;
use reackathon::services::{fetch_invite_feed, list_hackathons, pending_count};
use reackathon::{AppState, Config, Session};

#[derive(Parser)]
#[command(name = "reackathon", about = "Hackathon client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lista degli hackathon
    Hackathons {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Feed degli inviti ricevuti dall'utente
    Invites {
        #[arg(long)]
        user_id: String,
        #[arg(long, default_value = "me")]
        username: String,
        #[arg(long, env = "SESSION_TOKEN")]
        token: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    config.print_info();

    match cli.command {
        Command::Hackathons { search, location } => {
            let state = AppState::new(&config, None)?;
            let filters = HackathonQuery {
                search,
                location,
                ..Default::default()
            };
            for hackathon in list_hackathons(&state, &filters).await? {
                println!(
                    "{}  {}  ({} - {})",
                    hackathon.hackathon_id,
                    hackathon.name,
                    hackathon.start_date.format("%Y-%m-%d"),
                    hackathon.end_date.format("%Y-%m-%d")
                );
            }
        }
        Command::Invites {
            user_id,
            username,
            token,
        } => {
            let user = User {
                user_id: user_id.clone(),
                username,
                avatar: None,
                skills: Vec::new(),
                badge: None,
                role: None,
            };
            let state = AppState::new(&config, Some(Session::new(user, token)))?;
            let feed = fetch_invite_feed(&state, &user_id).await?;
            println!("{} pending", pending_count(&feed));
            for invite in &feed {
                println!(
                    "[{}] {} invited you to {} ({:?})",
                    invite.date.format("%Y-%m-%d %H:%M"),
                    invite.from,
                    invite.hackathon,
                    invite.status
                );
            }
        }
    }

    Ok(())
}
