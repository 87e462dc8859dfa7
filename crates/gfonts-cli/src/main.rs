use gfonts_core::logging;

mod cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = cli::run_from_args().await {
        eprintln!("gfonts error: {:#}", err);
        if let Some(hint) = cli::hint_for(&err) {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}
