use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use s2h_core::config::{self, CONFIG_FILE_NAME, OutputLayout, S2hConfig};
use s2h_core::parse;
use s2h_core::parse::spec::{Dialect, Document};
use s2h_core::transform;
use s2h_core::{CodeGenerator, GeneratedFile};
use s2h_http::HttpFileGenerator;

#[derive(Parser)]
#[command(
    name = "swagger-to-http",
    about = "Convert Swagger 2.0 / OpenAPI 3.0 JSON into .http request files",
    version
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .http files from a Swagger/OpenAPI document
    Generate {
        /// Path to the Swagger/OpenAPI JSON file
        #[arg(value_name = "INPUT")]
        file: Option<PathBuf>,

        /// Path to the Swagger/OpenAPI JSON file
        #[arg(short, long, conflicts_with = "file")]
        input: Option<PathBuf>,

        /// Directory to write the .http files to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base URL for requests (overrides the document's servers/host)
        #[arg(short, long)]
        base_url: Option<String>,

        /// Overwrite existing files
        #[arg(short = 'w', long)]
        overwrite: bool,

        /// Write every request into a single file instead of one file per tag
        #[arg(long)]
        combined: bool,

        /// Add `# @name` lines so responses can be referenced
        #[arg(long)]
        named_requests: bool,
    },

    /// Validate a Swagger/OpenAPI document
    Validate {
        /// Path to the Swagger/OpenAPI JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the generated request model of a document
    Inspect {
        /// Path to the Swagger/OpenAPI JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Write a default .s2h.yaml configuration
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Print version and build information
    Version,
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

/// Build metadata, fixed at compile time.
#[derive(Debug, Clone, Copy)]
struct BuildInfo {
    version: &'static str,
    commit: &'static str,
    date: &'static str,
}

impl BuildInfo {
    const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: match option_env!("S2H_GIT_COMMIT") {
                Some(commit) => commit,
                None => "unknown",
            },
            date: match option_env!("S2H_BUILD_DATE") {
                Some(date) => date,
                None => "unknown",
            },
        }
    }
}

/// Options of the `generate` command after merging flags over the config file.
struct GenerateArgs {
    input: PathBuf,
    output: PathBuf,
    base_url: Option<String>,
    overwrite: bool,
    options: config::OutputOptions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let build = BuildInfo::current();

    match cli.command {
        Commands::Generate {
            file,
            input,
            output,
            base_url,
            overwrite,
            combined,
            named_requests,
        } => {
            let cfg = try_load_config()?;
            let mut options = cfg
                .as_ref()
                .map(|c| c.output_options.clone())
                .unwrap_or_default();
            if combined {
                options.layout = OutputLayout::Combined;
            }
            options.named_requests |= named_requests;

            let input = file
                .or(input)
                .or_else(|| cfg.as_ref().map(|c| PathBuf::from(&c.input)))
                .with_context(|| {
                    format!("no input file given; pass INPUT or --input, or create {CONFIG_FILE_NAME}")
                })?;
            let args = GenerateArgs {
                input,
                output: output
                    .or_else(|| cfg.as_ref().map(|c| PathBuf::from(&c.output)))
                    .unwrap_or_else(|| PathBuf::from(".")),
                base_url: base_url.or_else(|| cfg.as_ref().and_then(|c| c.base_url.clone())),
                overwrite: overwrite || cfg.as_ref().is_some_and(|c| c.overwrite),
                options,
            };
            cmd_generate(args)
        }

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swagger-to-http", &mut std::io::stdout());
            Ok(())
        }

        Commands::Version => {
            cmd_version(&build);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<S2hConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

/// Read, parse, and validate a document.
fn load_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc = parse::load(&bytes).with_context(|| format!("failed to load {}", path.display()))?;
    Ok(doc)
}

/// Write generated files under `base`. Existing files are kept unless
/// `overwrite` is set. Returns how many files were written.
fn write_files(base: &Path, files: &[GeneratedFile], overwrite: bool) -> Result<usize> {
    let mut written = 0;
    for file in files {
        let path = base.join(&file.path);
        if path.exists() && !overwrite {
            eprintln!("  skipping existing {}", path.display());
            continue;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
        written += 1;
    }
    Ok(written)
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    eprintln!("Reading {}", args.input.display());
    let doc = load_document(&args.input)?;

    let base_url = args
        .base_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| parse::base_url(&doc));
    eprintln!("Using base URL {base_url}");

    let files = transform::generate(&doc, Some(&base_url));
    let generated = HttpFileGenerator.generate(&files, &args.options)?;

    if !args.output.exists() {
        log::info!("creating output directory {}", args.output.display());
    }
    fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output.display()
        )
    })?;

    let written = write_files(&args.output, &generated, args.overwrite)?;
    eprintln!(
        "Generated {} of {} files in {}",
        written,
        generated.len(),
        args.output.display()
    );
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let doc = load_document(input)?;
    let dialect = match doc.dialect() {
        Some(Dialect::Swagger2) => "Swagger",
        Some(Dialect::OpenApi3) => "OpenAPI",
        None => "unknown",
    };

    let groups = s2h_core::ir::extract_operations(&doc);
    let operations: usize = doc.paths.values().map(|item| item.operations().count()).sum();

    eprintln!(
        "Valid {} {} document: {}",
        dialect,
        doc.version().unwrap_or_default(),
        doc.info.title
    );
    eprintln!("  Version: {}", doc.info.version);
    eprintln!("  Paths: {}", doc.paths.len());
    eprintln!("  Operations: {operations}");
    eprintln!("  Tags: {}", groups.len());
    eprintln!("  Schemas: {}", doc.schema_count());
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: &Path, format: InspectFormat) -> Result<()> {
    let doc = load_document(input)?;
    let files = transform::generate(&doc, None);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&files)?;
            print!("{yaml}");
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&files)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

fn cmd_version(build: &BuildInfo) {
    println!("swagger-to-http v{}", build.version);
    println!("Commit: {}", build.commit);
    println!("Built: {}", build.date);
}
