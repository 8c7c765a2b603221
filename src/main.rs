// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tessellate::demo::write_demo;
use tessellate::syntax::DEFAULT_MAX_DEPTH;
use tessellate::{build_manifest, build_program, parse_expr_with_limit, to_type_expr, Ast};

#[derive(Parser)]
#[command(name = "tessellate")]
#[command(about = "Arithmetic evaluated by the Rust trait solver")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deepest parenthesis nesting accepted
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print its value
    Eval {
        /// Infix expression, e.g. "7 * (2 + 3)"
        expr: String,
    },

    /// Emit a Rust program that evaluates the expression at compile time
    Emit {
        /// Infix expression, e.g. "7 * (2 + 3)"
        expr: String,

        /// Write the program here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile the emitted program with cargo and run it
    Run {
        /// Infix expression, e.g. "7 * (2 + 3)"
        expr: String,
    },

    /// Print the results of the built-in type-level sample program
    Demo,

    /// Read expressions line by line (default)
    Repl,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Eval { expr } => {
            let expr = parse_expr_with_limit(&expr, cli.max_depth)?;
            println!("Result: {}", expr.eval()?);
        }
        Commands::Emit { expr, output } => {
            let expr = parse_expr_with_limit(&expr, cli.max_depth)?;
            if let Err(e) = expr.eval() {
                warn!("`{}` will not compile: {}", expr, e);
            }
            let program = build_program(&expr)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, program)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("wrote {}", path.display());
                }
                None => print!("{}", program),
            }
        }
        Commands::Run { expr } => {
            let expr = parse_expr_with_limit(&expr, cli.max_depth)?;
            let value = compile_and_run(&expr)?;
            println!("Result: {}", value);
        }
        Commands::Demo => {
            let stdout = io::stdout();
            write_demo(&mut stdout.lock())?;
        }
        Commands::Repl => repl(cli.max_depth)?,
    }
    Ok(())
}

/// Build the emitted program in a scratch cargo project and return what it
/// prints. The compiler does the arithmetic; this only reads the answer back.
fn compile_and_run(expr: &Ast) -> Result<String> {
    let program = build_program(expr)?;

    let project = tempfile::tempdir().context("creating scratch project")?;
    let manifest = project.path().join("Cargo.toml");
    let src = project.path().join("src");
    fs::create_dir(&src).with_context(|| format!("creating {}", src.display()))?;
    fs::write(&manifest, build_manifest(Path::new(env!("CARGO_MANIFEST_DIR"))))
        .with_context(|| format!("writing {}", manifest.display()))?;
    fs::write(src.join("main.rs"), program)
        .with_context(|| format!("writing {}", src.join("main.rs").display()))?;

    // Shared across runs so dependencies are only built once.
    let target_dir = std::env::temp_dir().join("tessellate-run-target");
    let cargo = std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into());
    debug!("building {} into {}", manifest.display(), target_dir.display());

    let start = Instant::now();
    let output = Command::new(&cargo)
        .arg("run")
        .arg("--quiet")
        .arg("--manifest-path")
        .arg(&manifest)
        .arg("--target-dir")
        .arg(&target_dir)
        .output()
        .with_context(|| format!("running {}", cargo.to_string_lossy()))?;
    info!("compiled and ran `{}` in {:.2?}", expr, start.elapsed());

    if !output.status.success() {
        io::stderr().write_all(&output.stderr)?;
        match expr.eval() {
            Err(e) => bail!("`{}` does not compile: {} has no type-level rule", expr, e),
            Ok(_) => bail!("`{}` does not compile ({})", expr, output.status),
        }
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn repl(max_depth: usize) -> Result<()> {
    println!("Tessellate REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type arithmetic expressions to evaluate, or Ctrl-D to exit");
    println!();

    let mut infile = io::stdin().lock();

    loop {
        print!("tessellate> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if infile.read_line(&mut line)? == 0 {
            println!("\nGoodbye!");
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_expr_with_limit(trimmed, max_depth) {
            Err(e) => println!("Error: {}", e),
            Ok(expr) => print_evaluation(&expr),
        }
    }
}

fn print_evaluation(expr: &Ast) {
    match expr.eval() {
        Ok(value) => println!("{}", value),
        Err(e) => println!("Error: {}", e),
    }
    match to_type_expr(expr) {
        Ok(ty) => println!("  : {}", ty),
        Err(e) => println!("  (no type-level form: {})", e),
    }
}
