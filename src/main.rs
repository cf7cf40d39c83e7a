use clap::Parser;
use mpguide::AppError;

#[derive(Parser)]
#[command(name = "mpguide")]
#[command(version)]
#[command(
    about = "Write the bundled Multipass + Podman setup guide to the current directory",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let result: Result<(), AppError> = mpguide::emit().map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
