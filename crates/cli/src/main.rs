//! Debate platform CLI - terminal front-end for the debate platform API.
//!
//! # Usage
//!
//! ```bash
//! # Start a login: open the printed URL in a browser
//! dp-cli login-url
//!
//! # Finish it with the address the provider redirected to
//! dp-cli login "http://localhost:8000/pages/login.html?token=...&user_id=1&nickname=alice"
//!
//! # Browse
//! dp-cli topics list
//! dp-cli debates show 3
//!
//! # Take part
//! dp-cli rounds submit 7 cons_questions --question "Why?" --question "Source?"
//! dp-cli votes cast 7 pros
//! ```
//!
//! Results are printed as JSON. The session is kept in `DEBATE_SESSION_FILE`.
//! Log verbosity follows `RUST_LOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use debate_platform_client::{ApiClient, ClientConfig, Session};
use debate_platform_core::{
    DebateId, DebateStatus, NewDebate, RoundId, RoundStep, Side, TopicApplication, TopicId,
    TopicStatus, UserId,
};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{CliError, print_json};

const DEFAULT_LOG_FILTER: &str = "dp_cli=info,debate_platform_client=info";

#[derive(Parser)]
#[command(name = "dp-cli")]
#[command(author, version, about = "Debate platform command-line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the identity provider login URL
    LoginUrl,
    /// Store the session from a login callback URL
    Login {
        /// Address the provider redirected to
        callback_url: String,
    },
    /// Verify the stored token and show the current user
    Whoami,
    /// Clear the stored session
    Logout,
    /// User profiles and match history
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Debate topics
    Topics {
        #[command(subcommand)]
        action: TopicAction,
    },
    /// Debates
    Debates {
        #[command(subcommand)]
        action: DebateAction,
    },
    /// Debate rounds
    Rounds {
        #[command(subcommand)]
        action: RoundAction,
    },
    /// Round voting
    Votes {
        #[command(subcommand)]
        action: VoteAction,
    },
    /// Show the leaderboard
    Ranking,
    /// Moderation (admin only)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Profile of the logged-in user
    Me,
    /// Profile of any user
    Show { user_id: UserId },
    /// Finished debates of a user
    Matches { user_id: UserId },
}

#[derive(Subcommand)]
enum TopicAction {
    /// List topics (default status from `DEBATE_DEFAULT_TOPIC_STATUS`)
    List {
        /// `pending`, `approved` or `rejected`
        #[arg(short, long)]
        status: Option<TopicStatus>,
    },
    /// Show one topic
    Show { topic_id: TopicId },
    /// Propose a new topic for moderation
    Apply {
        #[arg(short, long)]
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Position of the pros side
        #[arg(long)]
        pros: String,

        /// Position of the cons side
        #[arg(long)]
        cons: String,

        /// Extra rules as a JSON object
        #[arg(long)]
        rules: Option<String>,
    },
}

#[derive(Subcommand)]
enum DebateAction {
    /// List debates (default status from `DEBATE_DEFAULT_DEBATE_STATUS`)
    List {
        /// `NEW`, `ONGOING` or `FINISHED`
        #[arg(short, long)]
        status: Option<DebateStatus>,
    },
    /// Show a debate with its rounds
    Show { debate_id: DebateId },
    /// Open a debate on an approved topic (admin only)
    Create {
        #[arg(long)]
        topic: TopicId,

        /// User arguing the pros side
        #[arg(long)]
        pros: UserId,

        /// User arguing the cons side
        #[arg(long)]
        cons: UserId,
    },
}

#[derive(Subcommand)]
enum RoundAction {
    /// Show one round
    Show { round_id: RoundId },
    /// Submit content for a round step
    Submit {
        round_id: RoundId,

        /// `pros_statement`, `cons_questions`, `pros_reply`,
        /// `cons_statement`, `pros_questions` or `cons_reply`
        step: RoundStep,

        /// Statement or reply text
        #[arg(long)]
        text: Option<String>,

        /// A question (repeat for several)
        #[arg(long = "question")]
        questions: Vec<String>,
    },
}

#[derive(Subcommand)]
enum VoteAction {
    /// Vote for a side
    Cast { round_id: RoundId, side: Side },
    /// Show weighted results of a closed round
    Results { round_id: RoundId },
    /// Close voting and decide the round
    Close { round_id: RoundId },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Topics awaiting moderation
    Pending,
    Approve { topic_id: TopicId },
    Reject { topic_id: TopicId },
    /// End a debate immediately
    ForceEnd {
        debate_id: DebateId,

        /// Winner; omit for a draw
        #[arg(long)]
        winner: Option<UserId>,
    },
    /// Grant or revoke admin rights
    SetAdmin {
        user_id: UserId,

        #[arg(long)]
        revoke: bool,
    },
    /// Make a user a judge of a debate
    AssignJudge {
        debate_id: DebateId,
        user_id: UserId,
    },
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let session = Session::file(&config.session_file);
    let client = ApiClient::new(config, session);

    match cli.command {
        Commands::LoginUrl => commands::auth::login_url(&client).await?,
        Commands::Login { callback_url } => commands::auth::login(&client, &callback_url).await?,
        Commands::Whoami => commands::auth::whoami(&client).await?,
        Commands::Logout => commands::auth::logout(&client)?,
        Commands::Users { action } => match action {
            UserAction::Me => print_json(&client.users().me().await?)?,
            UserAction::Show { user_id } => print_json(&client.users().get(user_id).await?)?,
            UserAction::Matches { user_id } => {
                print_json(&client.users().matches(user_id).await?)?;
            }
        },
        Commands::Topics { action } => match action {
            TopicAction::List { status } => print_json(&client.topics().list(status).await?)?,
            TopicAction::Show { topic_id } => print_json(&client.topics().get(topic_id).await?)?,
            TopicAction::Apply {
                title,
                description,
                pros,
                cons,
                rules,
            } => {
                let rules = rules
                    .map(|raw| serde_json::from_str(&raw).map_err(CliError::InvalidRules))
                    .transpose()?
                    .unwrap_or_default();
                let application = TopicApplication {
                    title,
                    description,
                    side_pros: pros,
                    side_cons: cons,
                    rules,
                };
                print_json(&client.topics().apply(&application).await?)?;
            }
        },
        Commands::Debates { action } => match action {
            DebateAction::List { status } => print_json(&client.debates().list(status).await?)?,
            DebateAction::Show { debate_id } => {
                print_json(&client.debates().get(debate_id).await?)?;
            }
            DebateAction::Create { topic, pros, cons } => {
                let debate = NewDebate {
                    topic_id: topic,
                    pros_user_id: pros,
                    cons_user_id: cons,
                };
                print_json(&client.debates().create(&debate).await?)?;
            }
        },
        Commands::Rounds { action } => match action {
            RoundAction::Show { round_id } => print_json(&client.rounds().get(round_id).await?)?,
            RoundAction::Submit {
                round_id,
                step,
                text,
                questions,
            } => commands::rounds::submit(&client, round_id, step, text, questions).await?,
        },
        Commands::Votes { action } => match action {
            VoteAction::Cast { round_id, side } => {
                print_json(&client.votes().submit(round_id, side).await?)?;
            }
            VoteAction::Results { round_id } => {
                print_json(&client.votes().results(round_id).await?)?;
            }
            VoteAction::Close { round_id } => {
                print_json(&client.votes().close_voting(round_id).await?)?;
            }
        },
        Commands::Ranking => print_json(&client.ranking().get().await?)?,
        Commands::Admin { action } => {
            let admin = client.admin();
            match action {
                AdminAction::Pending => print_json(&admin.pending_topics().await?)?,
                AdminAction::Approve { topic_id } => {
                    print_json(&admin.approve_topic(topic_id).await?)?;
                }
                AdminAction::Reject { topic_id } => {
                    print_json(&admin.reject_topic(topic_id).await?)?;
                }
                AdminAction::ForceEnd { debate_id, winner } => {
                    print_json(&admin.force_end_debate(debate_id, winner).await?)?;
                }
                AdminAction::SetAdmin { user_id, revoke } => {
                    print_json(&admin.set_admin(user_id, !revoke).await?)?;
                }
                AdminAction::AssignJudge { debate_id, user_id } => {
                    print_json(&admin.assign_judge(debate_id, user_id).await?)?;
                }
            }
        }
    }
    Ok(())
}
