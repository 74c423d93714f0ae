// Command-line interface for prep
//
// This binary renders the markdown used by interview prep content: question write-ups, saved
// chat transcripts, or any markdown file. The rendering itself lives in the prep-render crate;
// this is the shell around it (files, config, flags, exit codes).
//
// Usage:
//  prep <input> [--to <format>] [-o <file>]         - Render a markdown file (default)
//  prep render <input> [--to <format>] [-o <file>]  - Same as above (explicit)
//  prep inspect <input> [<stage>]                   - Show the text after a pipeline stage
//  prep question <file.json> [-o <file>]            - Render a stored question record
//  prep chat <session.json> [-o <file>]             - Render a saved chat transcript
//  prep generate-css                                - Print the default stylesheet
//  prep --list-formats | --list-stages
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; keys that mirror config values update the config,
// the rest are passed to the format.
// Example:
//  prep notes.md --extra-standalone --extra-copy-label "Copy code"

use prep_cli::{inspect, logging};

use clap::{Arg, ArgAction, Command, ValueHint};
use prep_config::{Loader, PrepConfig};
use prep_render::{
    formats::{get_default_css, wrap_in_document},
    ChatSession, FormatRegistry, HtmlOptions, Pipeline, Question, RenderOptions,
};
use std::collections::HashMap;
use std::fs;

const SUBCOMMANDS: &[&str] = &["render", "inspect", "question", "chat", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("prep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render interview prep markdown to styled HTML")
        .long_about(
            "prep renders the markdown dialect used by interview questions and study-bot\n\
            chats into single-line, class-annotated HTML.\n\n\
            Commands:\n  \
            - render:   Render a markdown file (default command)\n  \
            - inspect:  Show the intermediate text after a pipeline stage\n  \
            - question: Render a stored question record (JSON)\n  \
            - chat:     Render a saved chat session (JSON)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            prep notes.md                               # HTML fragment to stdout\n  \
            prep notes.md --extra-standalone -o out.html  # Complete page\n  \
            prep notes.md --to inline                   # Chat-style inline markup\n  \
            prep inspect notes.md tables                # Text after the tables stage",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-stages")
                .long("list-stages")
                .help("List the pipeline stages in order")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a prep.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a markdown file (default command)")
                .long_about(
                    "Render a markdown file.\n\n\
                    Formats:\n  \
                    - html:   Full transformer (.html, .htm)\n  \
                    - inline: Emphasis, inline code and line breaks only\n\n\
                    Without --to, the format is detected from the -o extension and falls\n\
                    back to html.\n\n\
                    Examples:\n  \
                    prep render q.md                  # HTML fragment (stdout)\n  \
                    prep render q.md -o q.html        # Write to file\n  \
                    prep q.md --to inline             # 'render' is optional",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (html, inline)")
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the text after a pipeline stage")
                .long_about(
                    "Run the transformer up to a stage and print the intermediate text.\n\n\
                    Protected code newlines are shown as '␤'.\n\n\
                    Extra Parameters:\n  \
                    --extra-all     Print every stage up to the requested one\n  \
                    --extra-json    Same, as a JSON array\n\n\
                    Examples:\n  \
                    prep inspect q.md                 # Final output (restore)\n  \
                    prep inspect q.md lists --extra-all",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("stage")
                        .help("Stage to stop after. Defaults to 'restore'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_STAGES,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("question")
                .about("Render a stored question record")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("chat")
                .about("Render a saved chat session transcript")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the default CSS used for standalone HTML")
                .long_about(
                    "Outputs the stylesheet embedded in standalone documents.\n\n\
                    Save it, edit it, and pass it back via --extra-css to extend the\n\
                    default styles.\n\n\
                    Examples:\n  \
                    prep generate-css > custom.css",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a subcommand or flag is an input file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }
    if matches.get_flag("list-stages") {
        handle_list_stages_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    logging::init(&config.logging.level);
    tracing::debug!(extras = ?extra_params, "configuration loaded");

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = sub_matches
                .get_one::<String>("to")
                .cloned()
                .or_else(|| {
                    output.and_then(|path| {
                        FormatRegistry::default().detect_format_from_filename(path)
                    })
                })
                .unwrap_or_else(|| "html".to_string());
            handle_render_command(input, &to, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = required(sub_matches, "input");
            let stage = sub_matches
                .get_one::<String>("stage")
                .map(|s| s.as_str())
                .unwrap_or(inspect::DEFAULT_STAGE);
            handle_inspect_command(input, stage, &extra_params, &config);
        }
        Some(("question", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_question_command(input, output, &config);
        }
        Some(("chat", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_chat_command(input, output, &config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a clap::ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Missing required argument '{id}'");
            std::process::exit(1);
        })
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &PrepConfig,
) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    // Config-derived options only apply to html; leftover extras go to any format
    let mut format_options = if to == "html" {
        html_params_from_config(config)
    } else {
        HashMap::new()
    };
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let rendered = registry
        .render_with_options(&source, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        });

    write_output(output, &rendered);
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    stage: &str,
    extra_params: &HashMap<String, String>,
    config: &PrepConfig,
) {
    let source = read_input(path);
    let options = RenderOptions::from(&config.render);

    let output =
        inspect::execute_inspect(&source, stage, &options, extra_params).unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the question command
fn handle_question_command(input: &str, output: Option<&str>, config: &PrepConfig) {
    let json = read_input(input);
    let question: Question = serde_json::from_str(&json).unwrap_or_else(|e| {
        eprintln!("Error reading question '{input}': {e}");
        std::process::exit(1);
    });
    tracing::info!(title = %question.title, "rendering question");

    let pipeline = Pipeline::new(RenderOptions::from(&config.render));
    let body = question.render_page(&pipeline);
    write_output(output, &finish_page(&body, &question.title, config));
}

/// Handle the chat command
fn handle_chat_command(input: &str, output: Option<&str>, config: &PrepConfig) {
    let json = read_input(input);
    let mut session = ChatSession::from_json(&json).unwrap_or_else(|e| {
        eprintln!("Error reading chat session '{input}': {e}");
        std::process::exit(1);
    });
    config.chat.apply_to(&mut session.settings);
    tracing::info!(
        messages = session.messages.len(),
        questions = session.total_questions,
        topics = ?session.favorite_topics,
        "rendering chat transcript"
    );

    let pipeline = Pipeline::new(RenderOptions::from(&config.render));
    let body = session.render_transcript(&pipeline);
    write_output(output, &finish_page(&body, "Chat transcript", config));
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", get_default_css());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {name:<8} {}", format.description());
        }
    }
}

/// Handle the list-stages command
fn handle_list_stages_command() {
    println!("Pipeline stages, in order:\n");
    for (i, stage) in inspect::AVAILABLE_STAGES.iter().enumerate() {
        println!("  {:>2}. {stage}", i + 1);
    }
}

/// Wrap in a standalone document when the html config asks for one.
fn finish_page(body: &str, title: &str, config: &PrepConfig) -> String {
    if !config.convert.html.standalone {
        return body.to_string();
    }
    let mut options = HtmlOptions::new(RenderOptions::from(&config.render)).standalone();
    if let Some(path) = &config.convert.html.custom_css {
        let css = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading CSS file '{path}': {e}");
            std::process::exit(1);
        });
        options = options.with_custom_css(css);
    }
    wrap_in_document(body, title, &options)
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            tracing::debug!(path, bytes = text.len(), "output written");
        }
        None => println!("{text}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> PrepConfig {
    let loader = Loader::new().with_optional_file("prep.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut PrepConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["default-language", "language"]) {
        config.render.default_language = raw;
    }
    if let Some(raw) = take_override(extra_params, &["links-new-tab"]) {
        config.render.open_links_in_new_tab = parse_bool_arg("links-new-tab", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["copy-label"]) {
        config.render.copy_label = raw;
    }

    if let Some(raw) = take_override(extra_params, &["standalone"]) {
        config.convert.html.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.convert.html.custom_css = Some(path);
    }

    if let Some(raw) = take_override(extra_params, &["markdown", "render-markdown"]) {
        config.chat.render_markdown = Some(parse_bool_arg("markdown", &raw));
    }
    if let Some(raw) = take_override(extra_params, &["timestamps", "show-timestamps"]) {
        config.chat.show_timestamps = Some(parse_bool_arg("timestamps", &raw));
    }

    if let Some(level) = take_override(extra_params, &["log-level"]) {
        config.logging.level = level;
    }
}

fn html_params_from_config(config: &PrepConfig) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert(
        "default-language".to_string(),
        config.render.default_language.clone(),
    );
    params.insert(
        "links-new-tab".to_string(),
        config.render.open_links_in_new_tab.to_string(),
    );
    params.insert("copy-label".to_string(), config.render.copy_label.clone());
    params.insert(
        "standalone".to_string(),
        config.convert.html.standalone.to_string(),
    );
    if let Some(css_path) = &config.convert.html.custom_css {
        params.insert("css-path".to_string(), css_path.clone());
    }
    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let args = strings(&["prep", "inspect", "q.md"]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(cleaned, args);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_single_param() {
        let args = strings(&["prep", "q.md", "--extra-copy-label", "Copy"]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(cleaned, strings(&["prep", "q.md"]));
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("copy-label"), Some(&"Copy".to_string()));
    }

    #[test]
    fn test_parse_extra_args_mixed_with_regular_args() {
        let args = strings(&[
            "prep",
            "render",
            "q.md",
            "--to",
            "html",
            "--extra-default-language",
            "python",
            "-o",
            "q.html",
        ]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(
            cleaned,
            strings(&["prep", "render", "q.md", "--to", "html", "-o", "q.html"])
        );
        assert_eq!(extra.get("default-language"), Some(&"python".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag_at_end() {
        let args = strings(&["prep", "q.md", "--extra-standalone"]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(cleaned, strings(&["prep", "q.md"]));
        assert_eq!(extra.get("standalone"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let args = strings(&["prep", "q.md", "--extras-css-path", "styles.css"]);
        let (_, extra) = parse_extra_args(&args);
        assert_eq!(extra.get("css-path"), Some(&"styles.css".to_string()));
    }

    #[test]
    fn test_parse_extra_args_mixed_boolean_and_value() {
        let args = strings(&[
            "prep",
            "inspect",
            "q.md",
            "--extra-all",
            "--extra-log-level",
            "debug",
            "--extra-json",
        ]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(cleaned, strings(&["prep", "inspect", "q.md"]));
        assert_eq!(extra.len(), 3);
        assert_eq!(extra.get("all"), Some(&"true".to_string()));
        assert_eq!(extra.get("log-level"), Some(&"debug".to_string()));
        assert_eq!(extra.get("json"), Some(&"true".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_flags() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("language".to_string(), "python".to_string());
        extras.insert("links-new-tab".to_string(), "no".to_string());
        extras.insert("standalone".to_string(), "true".to_string());
        extras.insert("timestamps".to_string(), "true".to_string());
        extras.insert("log-level".to_string(), "debug".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.render.default_language, "python");
        assert!(!config.render.open_links_in_new_tab);
        assert!(config.convert.html.standalone);
        assert_eq!(config.chat.show_timestamps, Some(true));
        assert_eq!(config.logging.level, "debug");
        assert!(extras.is_empty());
    }

    #[test]
    fn apply_config_overrides_leaves_unknown_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("css".to_string(), "custom.css".to_string());
        extras.insert("all".to_string(), "true".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.convert.html.custom_css.as_deref(), Some("custom.css"));
        assert_eq!(extras.len(), 1);
        assert!(extras.contains_key("all"));
    }

    #[test]
    fn html_params_follow_config() {
        let mut config = load_cli_config(None);
        config.render.copy_label = "Copy code".to_string();
        let params = html_params_from_config(&config);
        assert_eq!(params.get("copy-label"), Some(&"Copy code".to_string()));
        assert_eq!(params.get("links-new-tab"), Some(&"true".to_string()));
        assert_eq!(params.get("standalone"), Some(&"false".to_string()));
        assert!(!params.contains_key("css-path"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
