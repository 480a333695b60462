use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tracing::error;
use tutordesk::cli::{self, Cli};
use tutordesk::state::init_app_state;
use tutordesk::ui::{DialoguerPrompter, NonInteractive, Prompter, run_with_boundary};
use tutordesk_observability::{LoggingOptions, init_tracing};

fn prompter(interactive: bool) -> Box<dyn Prompter> {
    if interactive {
        Box::new(DialoguerPrompter)
    } else {
        Box::new(NonInteractive)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&LoggingOptions::from_env().with_verbosity(cli.verbose));

    let state = match init_app_state(cli.api_url.as_deref()) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to initialize client");
            eprintln!("❌ {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let interactive = !cli.no_input && std::io::stdin().is_terminal();
    let mut retry_prompter = DialoguerPrompter;
    let boundary: Option<&mut dyn Prompter> = if interactive {
        Some(&mut retry_prompter)
    } else {
        None
    };

    let command = &cli.command;
    let state = &state;
    let code = run_with_boundary(boundary, || async move {
        let mut prompter = prompter(interactive);
        cli::run(command, state, prompter.as_mut()).await
    })
    .await;

    ExitCode::from(code)
}
