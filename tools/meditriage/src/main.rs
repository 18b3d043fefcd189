use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use medi_triage::config::{generate_config, CONFIG_FILE};
use medi_triage::form::FIELD_IDS;
use medi_triage::speech::speaker_from_config;
use medi_triage::{
    announce, Assistant, Prediction, PredictForm, PredictionView, RiskScorer, TriageConfig,
};

#[derive(Debug, Parser)]
#[command(
    name = "meditriage",
    version,
    author = "MediLang Team",
    about = "Symptom risk triage demo built on a weighted heuristic",
    long_about = "meditriage scores six symptom values into a Low/Moderate/High risk label.\n\n\
        The weights are illustrative only and are not a validated clinical model.\n\n\
        EXAMPLES:\n\
        \n  meditriage predict --age 64 --fever 1 --cough 1 --preexist 1\n\
        \n  meditriage predict --age 50 --fatigue 3 --preexist 1 --json\n\
        \n  meditriage chat\n\
        \n  meditriage config --init",
    after_help = "For more information, visit: https://github.com/MediLang/medi"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file (defaults to meditriage.toml in the current directory)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score symptom values and print the risk and advice
    Predict(PredictArgs),

    /// Talk to the keyword assistant
    #[command(
        about = "Start an interactive assistant session",
        long_about = "Start an interactive session with the keyword assistant.\n\n\
            Commands:\n\
            \n  :help   Show available session commands\n\
            \n  :quit   Exit the session (also :q, :exit)"
    )]
    Chat,

    /// Show the effective configuration or write a starter file
    Config(ConfigArgs),
}

/// Values are read as text, like form inputs: blank or unparseable means 0.
#[derive(Debug, Args, Clone, Default)]
struct PredictArgs {
    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// Fever present (0 or 1)
    #[arg(long)]
    fever: Option<String>,

    /// Cough present (0 or 1)
    #[arg(long)]
    cough: Option<String>,

    /// Fatigue level (0-5)
    #[arg(long)]
    fatigue: Option<String>,

    /// Shortness-of-breath severity
    #[arg(long)]
    breath: Option<String>,

    /// Pre-existing condition multiplier (0 suppresses the whole score)
    #[arg(long)]
    preexist: Option<String>,

    /// JSON weights file overriding the configured scoring weights
    #[arg(long, value_name = "FILE")]
    model: Option<PathBuf>,

    /// Print the full prediction as JSON
    #[arg(long)]
    json: bool,

    /// Announce the result through the configured text-to-speech program
    #[arg(long)]
    speak: bool,
}

impl PredictArgs {
    fn values(&self) -> [(&'static str, Option<&str>); 6] {
        [
            (FIELD_IDS[0], self.age.as_deref()),
            (FIELD_IDS[1], self.fever.as_deref()),
            (FIELD_IDS[2], self.cough.as_deref()),
            (FIELD_IDS[3], self.fatigue.as_deref()),
            (FIELD_IDS[4], self.breath.as_deref()),
            (FIELD_IDS[5], self.preexist.as_deref()),
        ]
    }
}

#[derive(Debug, Args, Clone, Default)]
struct ConfigArgs {
    /// Write a commented meditriage.toml into the current directory
    #[arg(long)]
    init: bool,
}

struct Context {
    quiet: bool,
    config: TriageConfig,
}

impl Context {
    fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn load_config(explicit: Option<&Path>) -> Result<TriageConfig, i32> {
    TriageConfig::discover(explicit, &current_dir()).map_err(|e| {
        eprintln!("error: {e}");
        2
    })
}

fn build_form(args: &PredictArgs) -> medi_triage::Result<PredictForm> {
    let mut form = PredictForm::new();
    for (id, value) in args.values() {
        if let Some(v) = value {
            form.set(id, v)?;
        }
    }
    Ok(form)
}

fn scorer_for(ctx: &Context, args: &PredictArgs) -> medi_triage::Result<RiskScorer> {
    match &args.model {
        Some(path) => {
            let scorer = RiskScorer::load_model(path)?;
            log::info!("loaded weights from '{}'", path.display());
            Ok(scorer)
        }
        None => Ok(RiskScorer::new(ctx.config.scoring)),
    }
}

/// Result lines for one prediction. `-q` does not apply: these are the command's output.
fn predict_lines(ctx: &Context, args: &PredictArgs) -> Result<Vec<String>, i32> {
    let built = build_form(args).and_then(|form| scorer_for(ctx, args).map(|scorer| (form, scorer)));
    let (form, scorer) = match built {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return Err(2);
        }
    };
    let prediction = Prediction::from_input(&scorer, form.to_input());
    for note in &prediction.notes {
        log::warn!("{note}");
    }

    let lines = if args.json {
        match serde_json::to_string_pretty(&prediction) {
            Ok(s) => vec![s],
            Err(e) => {
                eprintln!("error: failed to serialize prediction: {e}");
                return Err(2);
            }
        }
    } else {
        let mut view = PredictionView::default();
        view.show(&prediction.result);
        vec![view.risk_text, view.advice_text]
    };

    if args.speak || ctx.config.speech.enabled {
        let speaker = speaker_from_config(&medi_triage::SpeechConfig {
            enabled: true,
            ..ctx.config.speech.clone()
        });
        announce(speaker.as_ref(), &prediction.result);
    }
    Ok(lines)
}

fn run_predict(ctx: &Context, args: &PredictArgs) -> i32 {
    match predict_lines(ctx, args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            0
        }
        Err(rc) => rc,
    }
}

struct ChatSession {
    assistant: Assistant,
}

impl ChatSession {
    fn new() -> Self {
        Self {
            assistant: Assistant::new(),
        }
    }

    /// Lines to print, and whether the session should end.
    fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        match trimmed {
            ":q" | ":quit" | ":exit" => return (Vec::new(), true),
            ":help" => {
                return (
                    vec![
                        "commands: :help, :quit".to_string(),
                        "try: 'predict', 'how it works', or 'about'".to_string(),
                    ],
                    false,
                )
            }
            _ => {}
        }
        let out = match self.assistant.send(line) {
            Some(reply) => vec![reply.to_string()],
            None => Vec::new(),
        };
        (out, false)
    }
}

fn run_chat() -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    let mut rl = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize chat: {e}");
            return 2;
        }
    };

    let mut session = ChatSession::new();
    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: chat failed: {e}");
                return 2;
            }
        }
    }
}

fn init_config(ctx: &Context, dir: &Path) -> i32 {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        eprintln!("error: '{}' already exists", path.display());
        return 2;
    }
    if let Err(e) = fs::write(&path, generate_config()) {
        eprintln!("error: failed to write '{}': {e}", path.display());
        return 2;
    }
    ctx.info(&format!("✓ Created {CONFIG_FILE}"));
    0
}

fn run_config(ctx: &Context, args: &ConfigArgs, dir: &Path) -> i32 {
    if args.init {
        return init_config(ctx, dir);
    }

    match ctx.config.to_toml() {
        Ok(text) => {
            print!("{text}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_cli(cli: Cli) -> i32 {
    init_logging(cli.verbose);
    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(rc) => return rc,
    };
    log::info!("config: {config}");
    let ctx = Context {
        quiet: cli.quiet,
        config,
    };
    match cli.command {
        Command::Predict(args) => run_predict(&ctx, &args),
        Command::Chat => run_chat(),
        Command::Config(args) => run_config(&ctx, &args, &current_dir()),
    }
}

fn main() {
    std::process::exit(run_cli(Cli::parse()));
}
