//! undocx CLI - DOCX decomposition tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undocx::{
    AnchorOrder, DecomposeOptions, Decomposer, DocxParser, ParseOptions, SkeletonOptions, Undocx,
    DEFAULT_OUTPUT_ROOT,
};

#[derive(Parser)]
#[command(name = "undocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Decompose DOCX into images, skeleton Markdown, and visual-reference PDFs", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output root directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract images, visual references, and the skeleton
    Decompose {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output root directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Images per reference PDF
        #[arg(long, env = "UNDOCX_CHUNK_SIZE", default_value_t = undocx::visual::DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Label font (TrueType/OpenType)
        #[arg(long, env = "UNDOCX_FONT", value_name = "PATH")]
        font: Option<PathBuf>,

        #[command(flatten)]
        skeleton: SkeletonArgs,

        /// Render reference pages on one thread
        #[arg(long)]
        sequential: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the skeleton only
    Skeleton {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output the line sequence as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        skeleton: SkeletonArgs,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List recognized media entries in processing order
    Media {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Default)]
struct SkeletonArgs {
    /// Emit placeholder anchors for unresolved image references
    #[arg(long)]
    placeholders: bool,

    /// Order anchors by their position in the paragraph markup
    #[arg(long)]
    markup_order: bool,
}

impl SkeletonArgs {
    fn options(&self) -> SkeletonOptions {
        let mut options = SkeletonOptions::new();
        if self.placeholders {
            options = options.with_placeholders();
        }
        if self.markup_order {
            options = options.with_anchor_order(AnchorOrder::Markup);
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Decompose {
            input,
            output,
            chunk_size,
            font,
            skeleton,
            sequential,
            json,
        }) => {
            let mut options = DecomposeOptions::new()
                .with_chunk_size(chunk_size)
                .with_skeleton_options(skeleton.options());
            if let Some(font) = font {
                options = options.with_font(font);
            }
            if sequential {
                options = options.sequential();
            }
            cmd_decompose(&input, output.as_deref(), options, json)
        }
        Some(Commands::Skeleton {
            input,
            output,
            json,
            skeleton,
        }) => cmd_skeleton(&input, output.as_deref(), json, &skeleton),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Media { input }) => cmd_media(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: decompose if input is provided
            if let Some(input) = cli.input {
                cmd_decompose(
                    &input,
                    cli.output.as_deref(),
                    DecomposeOptions::default(),
                    false,
                )
            } else {
                println!("{}", "Usage: undocx <FILE> [OUTPUT]".yellow());
                println!("       undocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_decompose(
    input: &Path,
    output: Option<&Path>,
    options: DecomposeOptions,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_root = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT));

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Decomposing {}...", input.display()));

    let report = Decomposer::new(options).decompose(input, &output_root);
    pb.finish_and_clear();
    let report = report?;

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Decomposed".green().bold(),
        report.layout.document_dir.display()
    );
    println!(
        "  {} media_source/ ({} images)",
        "├─".dimmed(),
        report.image_count()
    );
    println!(
        "  {} visual_refs/ ({} PDFs)",
        "├─".dimmed(),
        report.visual_refs.len()
    );
    println!(
        "  {} skeleton.md ({} anchors)",
        "└─".dimmed(),
        report.anchor_count()
    );

    for skipped in &report.skipped_images {
        println!(
            "{} {} left out of visual references: {}",
            "Warning:".yellow(),
            skipped.id,
            skipped.reason
        );
    }
    if report.unresolved_count() > 0 {
        println!(
            "{} {} image reference(s) could not be resolved",
            "Warning:".yellow(),
            report.unresolved_count()
        );
    }

    Ok(())
}

fn cmd_skeleton(
    input: &Path,
    output: Option<&Path>,
    json: bool,
    args: &SkeletonArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Undocx::new();
    if args.placeholders {
        builder = builder.with_placeholders();
    }
    if args.markup_order {
        builder = builder.with_anchor_order(AnchorOrder::Markup);
    }
    let result = builder.parse(input)?;

    let content = if json {
        result.to_json()?
    } else {
        result.to_markdown()?
    };

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient so a damaged styles part does not hide the rest
    let result = Undocx::new().lenient().parse(input)?;
    let parser = DocxParser::open_with_options(input, ParseOptions::new().lenient())?;
    let doc = result.document();
    let stats = &result.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Name".bold(), result.name());
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());
    println!("{}: {}", "Relationships".bold(), doc.relationships.len());
    println!("{}: {}", "Media files".bold(), parser.media_names().len());

    println!();
    println!("{}", "Skeleton Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Text lines".bold(), stats.text_count);
    println!("{}: {}", "Image anchors".bold(), stats.anchor_count);
    println!("{}: {}", "Unresolved".bold(), stats.unresolved_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_media(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let parser = DocxParser::open(input)?;
    let names = parser.media_names();
    for name in &names {
        println!("{}", name);
    }
    println!("\n{} {} images", "Total:".green().bold(), names.len());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "undocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX decomposition tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_decompose_args() {
        let cli = Cli::try_parse_from([
            "undocx",
            "decompose",
            "report.docx",
            "-o",
            "out",
            "--chunk-size",
            "10",
            "--placeholders",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Decompose {
                chunk_size,
                skeleton,
                output,
                ..
            }) => {
                assert_eq!(chunk_size, 10);
                assert!(skeleton.placeholders);
                assert!(!skeleton.markup_order);
                assert_eq!(output, Some(PathBuf::from("out")));
            }
            _ => panic!("expected decompose"),
        }
    }

    #[test]
    fn test_skeleton_args_options() {
        let args = SkeletonArgs {
            placeholders: true,
            markup_order: true,
        };
        let options = args.options();
        assert_eq!(options.anchor_order, AnchorOrder::Markup);
        assert_eq!(options.unresolved, undocx::UnresolvedPolicy::Placeholder);
    }

    #[test]
    fn test_missing_input_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = cmd_decompose(
            &dir.path().join("missing.docx"),
            Some(&dir.path().join("out")),
            DecomposeOptions::default(),
            true,
        );
        assert!(result.is_err());
        assert!(!dir.path().join("out").exists());
    }
}
