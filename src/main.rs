use clap::Parser;
use dom::{Replay, Session, SessionError};
use platform::PlatformConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "textfield-replay")]
#[command(about = "Replay a scripted text-input session and print what listeners observe")]
struct Cli {
    /// Session file (TOML)
    session: PathBuf,

    /// Platform file (TOML) replacing the session's `[platform]` table
    #[arg(short, long)]
    platform: Option<PathBuf>,

    /// Print the notifications as JSON instead of the transcript
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<Replay, SessionError> {
    let mut session = Session::load(&cli.session)?;
    if let Some(path) = &cli.platform {
        session.platform = PlatformConfig::load(path)?;
    }
    Ok(session.replay())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let replay = match run(&cli) {
        Ok(replay) => replay,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&replay.notifications) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("failed to encode notifications: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for line in &replay.transcript {
            println!("{line}");
        }
        println!("# final-value: {:?}", replay.final_value);
    }
    ExitCode::SUCCESS
}
