// Command-line interface for xbook
//
// This binary converts an unpacked XHTML book into a documentation catalog, and lets you inspect
// what individual pages convert to.
//
// Usage:
//  xbook <root> [--output <dir>]               - Convert a whole book (default)
//  xbook convert <root> [--output <dir>]       - Same as above (explicit)
//  xbook inspect <path> [<transform>] [-o <f>] - Execute a transform (defaults to "ast-markdown")
//  xbook --list-transforms                     - List available transforms
//
// Settings come from the embedded defaults, then ./xbook.toml if present, then --config, then
// flags such as --module-name.

use xbook_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use xbook_babel::{BookConverter, BookOptions, FormatRegistry};
use xbook_config::{Loader, XbookConfig};

fn build_cli() -> Command {
    Command::new("xbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert XHTML books into Markdown documentation catalogs")
        .long_about(
            "xbook converts an unpacked XHTML book (content.opf, nav.xhtml, chapters and images)\n\
            into a documentation catalog: one Markdown page per chapter with doc: cross-references,\n\
            a landing page built from the table of contents, and the image assets.\n\n\
            Commands:\n  \
            - convert: Convert a whole book (default command)\n  \
            - inspect: View what a single chapter or navigation page converts to\n\n\
            Examples:\n  \
            xbook ./swift-book -o ./Swift.docc          # Convert a book\n  \
            xbook inspect TheBasics.xhtml ast-json      # Look at one chapter's tree",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an xbook.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("module-name")
                .long("module-name")
                .value_name("NAME")
                .help("Module the catalog documents (overrides book.module_name)")
                .value_hint(ValueHint::Other)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a whole book into a catalog (default command)")
                .long_about(
                    "Convert an unpacked XHTML book into a documentation catalog.\n\n\
                    The output directory receives Info.plist, Documentation.symbols.json,\n\
                    the landing page, one .md file per spine chapter and an Assets directory.\n\
                    Any structural error in any chapter aborts before chapter files are written.\n\n\
                    Examples:\n  \
                    xbook convert ./book --output ./Book.docc\n  \
                    xbook ./book                                # 'convert' is optional",
                )
                .arg(
                    Arg::new("root")
                        .help("Book root directory (holds content.opf and nav.xhtml)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output directory (defaults to the current directory)")
                        .default_value(".")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect what a single page converts to")
                .long_about(
                    "Run one conversion stage on a single file and print the result.\n\n\
                    Transforms (stage-format):\n  \
                    - ast-markdown:  Chapter as Markdown (default)\n  \
                    - ast-json:      Chapter markup tree as JSON\n  \
                    - anchors-json:  Section anchors the chapter defines\n  \
                    - nav-json:      Sections of a navigation page\n  \
                    - nav-markdown:  Landing page rendered from a navigation page\n\n\
                    Chapter links resolve against the chapter's own anchors only.\n\n\
                    With --output and no transform, the chapter tree is written in the\n\
                    format matching the file extension (.md or .json).",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the XHTML file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'ast-markdown'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "inspect"
                && args[1] != "convert"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("module-name").map(|s| s.as_str()),
    );

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let root = required_arg(sub_matches, "root");
            let output = required_arg(sub_matches, "output");
            handle_convert_command(root, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = required_arg(sub_matches, "path");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let transform = match sub_matches.get_one::<String>("transform") {
                Some(transform) => transform.clone(),
                None => output
                    .and_then(|output| {
                        transforms::transform_for_output(output, &FormatRegistry::default())
                    })
                    .unwrap_or_else(|| transforms::DEFAULT_TRANSFORM.to_string()),
            };
            handle_inspect_command(path, &transform, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required_arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: missing argument <{name}>");
            std::process::exit(1);
        })
}

/// Handle the convert command
fn handle_convert_command(root: &str, output: &str, config: &XbookConfig) {
    let options = BookOptions::from(config);
    let report = BookConverter::new(root, output, options)
        .convert()
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    for chapter in &report.chapters {
        log::debug!("wrote {}", chapter.display());
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    output_file: Option<&str>,
    config: &XbookConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&source, transform, &config.book.module_name)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    match output_file {
        Some(output_file) => {
            fs::write(output_file, &output).unwrap_or_else(|e| {
                eprintln!("Error writing file '{output_file}': {e}");
                std::process::exit(1);
            });
            log::info!("wrote {transform} of {path} to {output_file}");
        }
        None => print!("{output}"),
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  ast         - Chapter markup tree");
    println!("  anchors     - Section anchors defined by a chapter");
    println!("  nav         - Navigation page sections\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nOutput formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>, module_name: Option<&str>) -> XbookConfig {
    let loader = Loader::new().with_optional_file("xbook.toml");
    let loader = if let Some(path) = explicit_path {
        log::debug!("loading configuration from {path}");
        loader.with_file(path)
    } else {
        loader
    };
    let loader = match module_name {
        Some(name) => loader.set_override("book.module_name", name),
        None => Ok(loader),
    };

    loader
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}
