//! Sumire CLI - コマンドラインインターフェース
//!
//! ptraceで子プロセスを起動・制御する対話型デバッガのREPLインターフェース

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sumire_core::errors::ERR_UNKNOWN_COMMAND;
use sumire_core::{Command, Debugger, StopReason};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Sumire - Minimal ptrace debugger
#[derive(Parser)]
#[command(name = "sumire")]
#[command(version = "0.1.0")]
#[command(about = "Interactive ptrace-based debugger", long_about = None)]
struct Cli {
    /// Path to the executable binary to debug
    program: String,

    /// Arguments to pass to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    debug!(program = %cli.program, "launching debuggee");

    // 子プロセスはexecv直後の停止状態でセッションに束縛される
    let debugger = Debugger::launch(&cli.program, &cli.args)?;
    println!("Started debugging process {}", debugger.pid());

    run_repl(&debugger)?;

    Ok(())
}

/// REPLループを実行する
fn run_repl(debugger: &Debugger) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("(sumire) ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // 認識されなかった行も含めて履歴に残す
                rl.add_history_entry(line)?;

                if let Err(e) = handle_command(debugger, line) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn handle_command(debugger: &Debugger, line: &str) -> Result<()> {
    match Command::parse(line) {
        Some(Command::Continue) => handle_continue(debugger)?,
        None => eprintln!("{}", ERR_UNKNOWN_COMMAND),
    }

    Ok(())
}

/// Continueコマンドを処理する
fn handle_continue(debugger: &Debugger) -> Result<()> {
    let stop_reason = debugger.continue_and_wait()?;

    match stop_reason {
        StopReason::Exited(code) => println!("Process exited with code {}", code),
        StopReason::Signaled(signal) => println!("Process terminated by signal: {:?}", signal),
        StopReason::Stopped(signal) => println!("Process stopped (signal: {:?})", signal),
        StopReason::Other => println!("Process stopped (unknown reason)"),
    }

    Ok(())
}
