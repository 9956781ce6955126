use crate::cli::Cli;
use amfproxy::{config, engine};
use std::ffi::OsString;
use std::process;
use tracing::{debug, warn};

/// Translate, log and launch. Returns the exit code to hand back to our caller.
pub fn run(cli: Cli) -> i32 {
    let config = config::Config::load_or_default();
    let program = config.ffmpeg_path();

    if let Err(e) = engine::launch::ensure_executable(&program) {
        eprintln!("Proxy ERROR: {}", e);
        return e.exit_code();
    }

    let invoked_as = invoked_as(std::env::args_os().next());
    let args = cli.ffmpeg_args();
    let invocation = engine::Invocation::prepare(&invoked_as, &args, &program, &config.translate);

    if invocation.rewrite.truncated {
        warn!(
            max = engine::MAX_ARGS,
            given = args.len(),
            "argument list truncated"
        );
    }
    debug!(original_cmd = %invocation.original_cmd, "original command");
    debug!(final_cmd = %invocation.final_cmd, "final command");

    if config.launcher.write_run_log {
        let log_dir = config.launcher.resolved_log_dir();
        // Logging is diagnostic only; never block the launch on it
        match engine::write_run_log(&log_dir, &invocation.original_cmd, &invocation.final_cmd) {
            Ok(path) => debug!(path = %path.display(), "wrote run log"),
            Err(e) => warn!("Could not write run log: {:#}", e),
        }
    }

    match engine::launch::run(&invocation.program, invocation.args()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Proxy ERROR: {}", e);
            e.exit_code()
        }
    }
}

pub fn run_and_exit(cli: Cli) -> ! {
    process::exit(run(cli))
}

/// Name we were started under, for the original command line
fn invoked_as(arg0: Option<OsString>) -> String {
    arg0.map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ffmpeg".to_string())
}
