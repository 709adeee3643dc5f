//! Command implementations for the `bulmers` binary.
//!
//! Each command writes to a caller-supplied writer and returns the process
//! exit code, so the commands can be driven from tests without spawning a
//! process.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bulmers::{
    compose, is_valid, recognized_keys, Dimension, IconLibrary, ScopeContext, StyleConfig,
    ThemeScope,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

/// Compile style configuration into Bulma classes.
#[derive(Debug, Parser)]
#[command(name = "bulmers", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a JSON configuration object into a class string.
    Compile(CompileArgs),
    /// Check a value against a dimension's allow-list.
    Check {
        /// Dimension name, e.g. `color` or `justify-content`.
        dimension: Dimension,
        value: String,
    },
    /// List dimensions, or the accepted values of one dimension.
    Dimensions { dimension: Option<Dimension> },
    /// List the configuration keys turned into classes.
    Keys,
}

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// JSON object to compile. Read from stdin when omitted or `-`.
    pub config: Option<String>,

    /// Scope declaration file (YAML or JSON).
    #[arg(long)]
    pub scope: Option<PathBuf>,

    /// Class prefix, overriding the scope file.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Default icon library, overriding the scope file.
    #[arg(long, value_parser = parse_icon_library)]
    pub icons: Option<IconLibrary>,

    /// Element base class, prefixed like every synthesized token.
    #[arg(long, default_value = "")]
    pub base: String,

    /// Enabled modifier class (repeatable).
    #[arg(long = "modifier", short = 'm')]
    pub modifiers: Vec<String>,

    /// Print class, tokens and pass-through fields as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_icon_library(s: &str) -> Result<IconLibrary, String> {
    s.parse().map_err(|e: bulmers::UnknownIconLibrary| e.to_string())
}

#[derive(Serialize)]
struct CompileReport<'a> {
    class: &'a str,
    scope: &'a ThemeScope,
    rest: &'a bulmers::Props,
}

/// Builds the scope for `compile` from the optional file and flag overrides.
pub fn load_scope(args: &CompileArgs) -> Result<ThemeScope> {
    let mut scope = match &args.scope {
        Some(path) => ThemeScope::from_path(path)?,
        None => ThemeScope::new(),
    };
    if let Some(prefix) = &args.prefix {
        scope = scope.with_class_prefix(prefix.clone());
    }
    if let Some(library) = args.icons {
        scope = scope.with_icon_library(library);
    }
    Ok(scope)
}

fn read_config(arg: Option<&str>, stdin: &mut dyn Read) -> Result<StyleConfig> {
    let text = match arg {
        Some(text) if text != "-" => text.to_string(),
        _ => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read configuration from stdin")?;
            buf
        }
    };
    StyleConfig::from_json(&text).context("configuration must be a JSON object")
}

/// Runs a parsed command, returning the exit code.
pub fn run(cli: Cli, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<i32> {
    match cli.command {
        Command::Compile(args) => {
            let scope = load_scope(&args)?;
            let config = read_config(args.config.as_deref(), stdin)?;
            log::debug!("compiling {} field(s) under {:?}", config.len(), scope);

            let root = ScopeContext::root();
            let ctx = root.declare(scope);
            let modifiers = args.modifiers.iter().map(|m| (m.as_str(), true));
            let composed = compose(&ctx, &args.base, modifiers, &config);

            if args.json {
                let report = CompileReport {
                    class: &composed.class,
                    scope: ctx.resolve(),
                    rest: &composed.rest,
                };
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", composed.class)?;
            }
            Ok(0)
        }
        Command::Check { dimension, value } => {
            if is_valid(dimension, &value) {
                writeln!(out, "valid")?;
                Ok(0)
            } else {
                writeln!(out, "invalid: '{}' is not a {} value", value, dimension)?;
                Ok(1)
            }
        }
        Command::Dimensions { dimension: None } => {
            for dim in Dimension::ALL {
                writeln!(out, "{}", dim)?;
            }
            Ok(0)
        }
        Command::Dimensions {
            dimension: Some(dim),
        } => {
            for value in dim.allowed() {
                writeln!(out, "{}", value)?;
            }
            Ok(0)
        }
        Command::Keys => {
            for key in recognized_keys() {
                writeln!(out, "{}", key)?;
            }
            Ok(0)
        }
    }
}
