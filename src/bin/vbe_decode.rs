//! vbe-decode
//!
//! Decodes VBE / JSE scripts given on the command line or standard input
//! and prints them or writes them next to a chosen output path.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use vbe_decoder::app::{self, CliArgs, Config, OutputTarget, WriteOutcome};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        },
    };

    app::init_logging(&config.log_filter);
    tracing::debug!("Config: {:?}", config);

    let mut ok = true;

    if args.stdin {
        tracing::info!("Decoding standard input");
        let result = vbe_decoder::decode_reader(io::stdin().lock());
        ok &= emit(&config, app::STDIN_NAME, result);
    }

    for path in &args.inputs {
        tracing::info!("Decoding {}", path.display());
        let result = vbe_decoder::decode_file(path);
        ok &= emit(&config, &display_name(path), result);
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Send one decode result to its destination. Returns false on failure.
fn emit(config: &Config, name: &str, result: vbe_decoder::Result<String>) -> bool {
    let script = match result {
        Ok(script) => script,
        Err(e) => {
            tracing::error!("{}: {} ({:?})", name, e, e.kind());
            eprintln!("{}: {}", name, e);
            return false;
        },
    };

    let written = match app::output_target(config.output_dir.as_deref(), name) {
        OutputTarget::Console => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            app::write_console(&mut out, name, &script, config.banner).and_then(|_| out.flush())
        },
        OutputTarget::File(path) => {
            tracing::debug!("Output path: {}", path.display());
            app::write_result(
                &script,
                &path,
                config.overwrite,
                io::stdin().lock(),
                io::stdout(),
            )
            .map(|outcome| {
                if outcome == WriteOutcome::Written {
                    tracing::info!("Wrote {}", path.display());
                }
            })
        },
    };

    match written {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to write output for {}: {}", name, e);
            eprintln!("{}: {}", name, e);
            false
        },
    }
}
