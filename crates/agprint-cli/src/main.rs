use agprint::{Cli, logging, run};
use clap::Parser;

fn main() {
    // Exit quietly when the reader (`head`, `less`) closes the pipe early
    #[cfg(unix)]
    reset_sigpipe();

    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
