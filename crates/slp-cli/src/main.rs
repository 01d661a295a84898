use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

mod commands;
mod config;
mod logging;

/// Straight-line program interpreter.
///
/// Runs built-in sample programs (or JSON AST files produced by `slp ast`)
/// through a tree-walking interpreter, after reporting the widest `print`
/// found by static analysis.
///
/// EXAMPLES:
///     slp run                      Run the default sample (prog)
///     slp run shadowing            Run a named sample
///     slp run prog.json            Run an AST file
///     slp maxargs nested-print     Analyze without running
///     slp ast prog --source        Show a program as pseudo-source
///     slp bst e b g a c            Render a persistent search tree
///
/// ENVIRONMENT VARIABLES:
///     SLP_REPORT_MAXARGS   Set to 'false' to skip the maxargs line
///     SLP_DEFAULT_PROGRAM  Sample used when none is named
///     SLP_LOG_LEVEL        error, warn, info, debug or trace
///     RUST_LOG             Full tracing filter (overrides the level)
#[derive(Parser)]
#[command(name = "slp")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program
    ///
    /// Prints the program's maxargs on its own line, then interprets it from
    /// the empty table. A runtime error keeps the output already written and
    /// exits non-zero.
    ///
    /// EXAMPLES:
    ///     slp run                      Run the default sample
    ///     slp run operand-order        Run a named sample
    ///     slp run prog --no-maxargs    Skip the maxargs line
    #[command(visible_alias = "r")]
    Run {
        /// Sample name or path to a JSON AST file
        program: Option<String>,
        /// Don't print the maxargs line
        #[arg(long)]
        no_maxargs: bool,
    },

    /// Report the widest print without running
    ///
    /// EXAMPLES:
    ///     slp maxargs                  Analyze the default sample
    ///     slp maxargs unbound          Safe on programs that would fail
    Maxargs {
        /// Sample name or path to a JSON AST file
        program: Option<String>,
    },

    /// Dump a program's AST
    ///
    /// Outputs the versioned JSON AST, which `slp run` accepts back as a
    /// file, or pseudo-source with --source.
    ///
    /// EXAMPLES:
    ///     slp ast prog > prog.json     Save the canonical program
    ///     slp ast nested-print --source
    Ast {
        /// Sample name or path to a JSON AST file
        program: Option<String>,
        /// Print pseudo-source instead of JSON
        #[arg(long, short = 's')]
        source: bool,
    },

    /// List the built-in sample programs
    ///
    /// The default program is marked with '*'.
    Samples,

    /// Render a persistent binary search tree
    ///
    /// Inserts the keys in order and prints the tree. Without keys, prints
    /// the left heavy, right heavy and balanced demo trees.
    ///
    /// EXAMPLES:
    ///     slp bst                      Show the demo trees
    ///     slp bst m d x a              Render your own keys
    Bst {
        /// Keys to insert, in order
        keys: Vec<String>,
    },

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     slp completions bash > ~/.local/share/bash-completion/completions/slp
    ///     slp completions zsh > ~/.zfunc/_slp
    ///     slp completions fish > ~/.config/fish/completions/slp.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::load(&std::env::current_dir()?)?;

    logging::init_tracing(config.effective_log_level(cli.verbose));
    if let Some(root) = &config.project_root {
        tracing::debug!(root = %root.display(), "using slp.toml");
    }

    let mut stdout = io::stdout();

    match cli.command {
        Commands::Run {
            program,
            no_maxargs,
        } => {
            let program = config.program_or_default(program);
            commands::run::run(
                &program,
                config.run_options(no_maxargs),
                slp_runtime::stdout_writer(),
            )?;
        }
        Commands::Maxargs { program } => {
            let program = config.program_or_default(program);
            commands::maxargs::run(&program, &mut stdout)?;
        }
        Commands::Ast { program, source } => {
            let program = config.program_or_default(program);
            commands::ast::run(&program, source, &mut stdout)?;
        }
        Commands::Samples => {
            commands::samples::run(&config.default_program, &mut stdout)?;
        }
        Commands::Bst { keys } => {
            commands::bst::run(&keys, &mut stdout)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "slp", &mut stdout);
        }
    }

    Ok(())
}
