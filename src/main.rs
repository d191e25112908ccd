use std::env;
use std::process::ExitCode;

mod cli;
mod settings;
mod terminal;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    // Keep generated passwords out of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();
    ExitCode::from(cli::run(args))
}
