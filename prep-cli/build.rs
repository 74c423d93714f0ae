use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of prep_render::STAGE_NAMES
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_STAGES: &[&str] = &[
    "escape",
    "code-blocks",
    "inline-code",
    "headers",
    "emphasis",
    "links",
    "blockquotes",
    "lists",
    "tables",
    "rules",
    "paragraphs",
    "whitespace",
    "restore",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Input file path")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };
    let output = || {
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Output file path (defaults to stdout)")
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("prep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render interview prep markdown to styled HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-stages")
                .long("list-stages")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("render")
                .arg(input())
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(output()),
        )
        .subcommand(
            Command::new("inspect").arg(input()).arg(
                Arg::new("stage")
                    .index(2)
                    .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_STAGES)),
            ),
        )
        .subcommand(Command::new("question").arg(input()).arg(output()))
        .subcommand(Command::new("chat").arg(input()).arg(output()))
        .subcommand(Command::new("generate-css"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "prep", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "prep", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "prep", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
