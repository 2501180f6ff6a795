use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use cta_compiler::config::CompileOptions;
use cta_compiler::server::PreviewKind;

#[derive(Parser)]
#[command(name = "cta", version)]
#[command(about = "cta — affiliate widget compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a widget JSON file to embeddable HTML
    Compile {
        /// Input JSON config file
        file: PathBuf,

        /// Widget family the config describes
        #[arg(long, value_enum, default_value = "cta")]
        kind: WidgetKind,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Emit the live-update script alongside the static markup
        #[arg(long)]
        auto_update: bool,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Validate a widget JSON file without producing output
    Check {
        /// Input JSON config file
        file: PathBuf,

        /// Widget family the config describes
        #[arg(long, value_enum, default_value = "cta")]
        kind: WidgetKind,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Start a hot-reload dev server for a widget JSON file
    Dev {
        /// Input JSON config file
        file: PathBuf,

        /// Widget family the config describes
        #[arg(long, value_enum, default_value = "cta")]
        kind: WidgetKind,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,
    },

    /// Batch compile all .json files in a directory
    Build {
        /// Input directory containing widget JSON files
        dir: PathBuf,

        /// Widget family the configs describe
        #[arg(long, value_enum, default_value = "cta")]
        kind: WidgetKind,

        /// Output directory for compiled files
        #[arg(long, default_value = "dist")]
        outdir: PathBuf,

        /// Emit the live-update script alongside the static markup
        #[arg(long)]
        auto_update: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WidgetKind {
    /// Product-card CTA widget
    Cta,
    /// Pros/cons review panel
    ProsCons,
    /// Styled text link
    TextLink,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Markup for pasting into a host page (default)
    Html,
    /// Iframe snippet with the widget packed into a data: URI
    Iframe,
    /// Standalone HTML document
    Document,
}

/// Format-agnostic view over the per-kind compile results.
struct Compiled {
    html: String,
    iframe: Option<String>,
    document: Option<String>,
    warnings: Vec<String>,
}

fn compile_json(json: &str, kind: WidgetKind, opts: &CompileOptions) -> cta_compiler::Result<Compiled> {
    Ok(match kind {
        WidgetKind::Cta => {
            let out = cta_compiler::compile_widget(json, opts)?;
            Compiled {
                html: out.html,
                iframe: Some(out.iframe),
                document: Some(out.document),
                warnings: out.warnings,
            }
        }
        WidgetKind::ProsCons => {
            let out = cta_compiler::compile_pros_cons(json)?;
            Compiled {
                html: out.html,
                iframe: Some(out.iframe),
                document: Some(out.document),
                warnings: out.warnings,
            }
        }
        WidgetKind::TextLink => {
            let out = cta_compiler::compile_text_link(json)?;
            Compiled {
                html: out.html,
                iframe: None,
                document: None,
                warnings: out.warnings,
            }
        }
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            file,
            kind,
            format,
            auto_update,
            o,
            strict,
        } => {
            let json = read_or_exit(&file);
            let opts = CompileOptions {
                auto_update,
                ..CompileOptions::default()
            };

            let out = match compile_json(&json, kind, &opts) {
                Ok(out) => out,
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            };

            for w in &out.warnings {
                eprintln!("warning: {w}");
            }
            if strict && !out.warnings.is_empty() {
                eprintln!("error: {} warning(s) in strict mode", out.warnings.len());
                process::exit(1);
            }

            let (output_str, label) = match format {
                OutputFormat::Html => (out.html, "HTML"),
                OutputFormat::Iframe => match out.iframe {
                    Some(s) => (s, "iframe snippet"),
                    None => {
                        eprintln!("error: this widget kind has no iframe form");
                        process::exit(1);
                    }
                },
                OutputFormat::Document => match out.document {
                    Some(s) => (s, "document"),
                    None => {
                        eprintln!("error: this widget kind has no document form");
                        process::exit(1);
                    }
                },
            };

            if let Some(out_path) = o {
                match fs::write(&out_path, &output_str) {
                    Ok(()) => eprintln!(
                        "wrote {label} to {} ({} bytes)",
                        out_path.display(),
                        output_str.len()
                    ),
                    Err(e) => {
                        eprintln!("error: cannot write '{}': {e}", out_path.display());
                        process::exit(1);
                    }
                }
            } else {
                print!("{output_str}");
            }
        }

        Commands::Check { file, kind, strict } => {
            let json = read_or_exit(&file);
            match compile_json(&json, kind, &CompileOptions::default()) {
                Ok(out) => {
                    for w in &out.warnings {
                        eprintln!("warning: {w}");
                    }
                    if !out.warnings.is_empty() {
                        eprintln!("{}: {} warning(s)", file.display(), out.warnings.len());
                        if strict {
                            process::exit(1);
                        }
                    } else {
                        eprintln!("{}: ok", file.display());
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }

        Commands::Dev { file, kind, port } => {
            let preview_kind = match kind {
                WidgetKind::Cta => PreviewKind::Cta,
                WidgetKind::ProsCons => PreviewKind::ProsCons,
                WidgetKind::TextLink => PreviewKind::TextLink,
            };
            let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
            rt.block_on(async {
                if let Err(e) =
                    cta_compiler::server::run_dev_server(file, preview_kind, CompileOptions::default(), port)
                        .await
                {
                    eprintln!("error: dev server failed: {e}");
                    process::exit(1);
                }
            });
        }

        Commands::Build {
            dir,
            kind,
            outdir,
            auto_update,
        } => {
            if !dir.is_dir() {
                eprintln!("error: '{}' is not a directory", dir.display());
                process::exit(1);
            }

            fs::create_dir_all(&outdir).unwrap_or_else(|e| {
                eprintln!("error: cannot create output dir '{}': {e}", outdir.display());
                process::exit(1);
            });

            let opts = CompileOptions {
                auto_update,
                ..CompileOptions::default()
            };

            let mut compiled = 0;
            let mut errors = 0;

            let entries: Vec<_> = match fs::read_dir(&dir) {
                Ok(rd) => rd,
                Err(e) => {
                    eprintln!("error: cannot read '{}': {e}", dir.display());
                    process::exit(1);
                }
            }
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
            })
            .collect();

            for entry in entries {
                let path = entry.path();
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "widget".to_string());
                let out_file = outdir.join(format!("{stem}.html"));

                let json = match fs::read_to_string(&path) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("  error: cannot read '{}': {e}", path.display());
                        errors += 1;
                        continue;
                    }
                };

                match compile_json(&json, kind, &opts) {
                    Ok(out) => {
                        for w in &out.warnings {
                            eprintln!("  warning: {}: {w}", path.display());
                        }
                        let doc = out.document.unwrap_or(out.html);
                        if let Err(e) = fs::write(&out_file, &doc) {
                            eprintln!("  error: cannot write {}: {e}", out_file.display());
                            errors += 1;
                            continue;
                        }
                        eprintln!(
                            "  {} -> {} ({} bytes)",
                            path.display(),
                            out_file.display(),
                            doc.len()
                        );
                        compiled += 1;
                    }
                    Err(e) => {
                        eprintln!("  error: {}: {e}", path.display());
                        errors += 1;
                    }
                }
            }

            eprintln!("built {compiled} widgets ({errors} errors)");
            if errors > 0 {
                process::exit(1);
            }
        }
    }
}

fn read_or_exit(file: &PathBuf) -> String {
    match fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {e}", file.display());
            process::exit(1);
        }
    }
}
