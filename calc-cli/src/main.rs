//! Programmer calculator
//! Command-line interface for running keystroke scripts and key sessions

use anyhow::{bail, Context, Result};
use calc_display::Panel;
use calc_engine::Calculator;
use calc_input::{map_key, parse_script};
use calc_spec::{Base, BitWidth, CalcConfig, DivisionPolicy, Mode};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "calc")]
#[command(version)]
#[command(about = "Multi-base programmer calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    settings: Settings,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct Settings {
    /// Start-up mode (standard, programmer)
    #[arg(long, global = true, value_name = "MODE")]
    mode: Option<Mode>,

    /// Start-up base (hex, dec, oct, bin)
    #[arg(long, global = true, value_name = "BASE")]
    base: Option<Base>,

    /// Word size in bits (8, 16, 32, 64)
    #[arg(long, global = true, value_name = "BITS", value_parser = parse_width)]
    bits: Option<BitWidth>,

    /// Maximum digits in a Standard-mode entry
    #[arg(long, global = true, value_name = "N")]
    max_digits: Option<u8>,

    /// Number of history entries kept
    #[arg(long, global = true, value_name = "N")]
    history_limit: Option<usize>,

    /// Division by zero result (zero, error)
    #[arg(long, global = true, value_name = "POLICY")]
    div_zero: Option<DivisionPolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a keystroke script and print the final panel
    Eval {
        /// Script tokens, e.g. `:base hex FF XOR 0F =`
        #[arg(value_name = "SCRIPT")]
        script: Vec<String>,

        /// Read the script from a file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print the panel as JSON
        #[arg(long)]
        json: bool,

        /// Include the computation history
        #[arg(long)]
        history: bool,
    },

    /// Read script lines from stdin, printing the panel after each
    Repl,

    /// Read one key name per line from stdin, printing the display after each
    Keys,
}

fn parse_width(text: &str) -> std::result::Result<BitWidth, String> {
    let bits: u32 = text.parse().map_err(|_| format!("not a number: {}", text))?;
    BitWidth::try_from(bits).map_err(|e| e.to_string())
}

impl Settings {
    /// Overlay the flags on the default configuration
    fn config(&self) -> Result<CalcConfig> {
        let defaults = CalcConfig::DEFAULT;
        let config = CalcConfig::new(
            self.mode.unwrap_or(defaults.mode),
            self.base.unwrap_or(defaults.base),
            self.bits.unwrap_or(defaults.bit_width),
            self.max_digits.unwrap_or(defaults.max_digits),
            self.history_limit.unwrap_or(defaults.history_limit),
            self.div_zero.unwrap_or(defaults.division_policy),
        )
        .context("invalid calculator settings")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.settings.config()?;
    info!(%config, "starting calculator");
    let calc = Calculator::with_config(config)?;

    match cli.command {
        Commands::Eval {
            script,
            file,
            json,
            history,
        } => eval_command(calc, &script, file, json, history),
        Commands::Repl => repl_command(calc),
        Commands::Keys => keys_command(calc, io::stdin().lock(), &mut io::stdout()),
    }
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` refines the level selected by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr)
        .init();
}

fn eval_command(
    mut calc: Calculator,
    script: &[String],
    file: Option<PathBuf>,
    json: bool,
    history: bool,
) -> Result<()> {
    let mut source = script.join(" ");
    if let Some(path) = file {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        source.push('\n');
        source.push_str(&text);
    }
    if source.trim().is_empty() {
        bail!("no script given (pass tokens or --file)");
    }

    let inputs = parse_script(&source).context("failed to parse script")?;
    let applied = calc.handle_all(inputs.iter().copied());
    debug!(total = inputs.len(), applied, "script finished");

    let mut panel = calc.panel();
    if !history {
        panel.history.clear();
    }
    print_panel(&panel, json)
}

fn print_panel(panel: &Panel, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(panel)?);
    } else {
        print!("{}", panel.render());
    }
    Ok(())
}

fn repl_command(mut calc: Calculator) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", calc.panel().render());
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        match parse_script(line) {
            Ok(inputs) => {
                calc.handle_all(inputs);
                print!("{}", calc.panel().render());
            }
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}

fn keys_command<R: BufRead, W: Write>(
    mut calc: Calculator,
    input: R,
    out: &mut W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let key = line.trim_end_matches(['\r', '\n']);
        let state = calc.state();
        match map_key(key, state.mode, state.base) {
            Some(input) => {
                calc.handle(input);
            }
            None => debug!(key, "unmapped key"),
        }
        writeln!(out, "{}", calc.display())?;
    }
    Ok(())
}
