// interrogate: ask questions on the terminal or through a remote prompt peer.
//
// `ask` reads static question definitions from a JSON file and prints the
// answers as JSON on stdout. `message` sends a one-shot notice to the peer.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use interrogate::transport::socket::config::{DEFAULT_HOST, DEFAULT_PORT};
use interrogate::{PromptOptions, load_questions, prompt, socket_message};

#[derive(Parser)]
#[command(name = "interrogate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask the questions in a JSON file
    Ask {
        /// File holding a question object or an array of them
        file: PathBuf,

        /// Forward questions to the remote peer instead of the terminal
        #[arg(long)]
        socket: bool,

        /// Send questions in bundles (socket mode only)
        #[arg(long)]
        bundle: bool,

        #[command(flatten)]
        peer: Peer,
    },
    /// Send a one-shot message to the remote peer
    Message {
        /// Message type
        #[arg(long = "type", default_value = "message")]
        kind: String,

        /// Message code
        #[arg(long, default_value = "")]
        code: String,

        /// Message text
        #[arg(long)]
        message: String,

        #[command(flatten)]
        peer: Peer,
    },
}

#[derive(Args)]
struct Peer {
    /// Peer host
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Peer port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Ask {
            file,
            socket,
            bundle,
            peer,
        } => {
            let questions = load_questions(&file)?;
            let options = PromptOptions::builder()
                .socket(socket)
                .bundle(bundle)
                .host(peer.host)
                .port(peer.port)
                .build();

            let answers = prompt(questions, Some(options)).await?;
            println!("{}", serde_json::to_string_pretty(&answers)?);
        }
        Command::Message {
            kind,
            code,
            message,
            peer,
        } => {
            let options = PromptOptions::builder()
                .host(peer.host)
                .port(peer.port)
                .kind(kind)
                .code(code)
                .message(message)
                .build();
            socket_message(&options.session).await?;
            log::info!("Message sent");
        }
    }

    Ok(())
}
