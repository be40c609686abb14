//! texspan CLI - Render LaTeX math in HTML documents, in place

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use texspan::{
    diagnostics::{check_latex, format_diagnostics},
    files::DEFAULT_TARGETS,
    process_document_with_options, process_file, render, render_traced, ConversionResult,
    DocumentOptions, DocumentStore, StdDocumentStore,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texspan")]
#[command(version)]
#[command(
    about = "texspan - Render LaTeX math in HTML documents as styled spans",
    long_about = None
)]
struct Cli {
    /// Documents to rewrite in place (defaults to the site's standard pages)
    files: Vec<String>,

    /// Read a document from stdin and write the result to stdout
    #[arg(long)]
    stdin: bool,

    /// Render a single formula and print the HTML
    #[arg(short, long, value_name = "FORMULA")]
    render: Option<String>,

    /// With --render, print the output of every rendering stage
    #[arg(long, requires = "render")]
    trace: bool,

    /// Check mode - report constructs that will be left verbatim, write nothing
    #[arg(long)]
    check: bool,

    /// Only convert inside math delimiters (skip the whole-document pass)
    #[arg(long)]
    no_global_pass: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Quiet mode: suppress status output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!(
            "{}✗ {}{}",
            if cli.no_color { "" } else { "\x1b[31m" },
            err,
            if cli.no_color { "" } else { "\x1b[0m" }
        );
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> ConversionResult<()> {
    let options = if cli.no_global_pass {
        DocumentOptions::math_only()
    } else {
        DocumentOptions::default()
    };

    if let Some(ref formula) = cli.render {
        if cli.trace {
            for (stage, html) in render_traced(formula) {
                println!("{:>14}: {}", stage, html);
            }
        } else {
            println!("{}", render(formula));
        }
        return Ok(());
    }

    if cli.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        if cli.check {
            println!(
                "{}",
                format_diagnostics(&check_latex(&buffer), !cli.no_color)
            );
        } else {
            print!("{}", process_document_with_options(&buffer, &options));
        }
        return Ok(());
    }

    let targets: Vec<&str> = if cli.files.is_empty() {
        DEFAULT_TARGETS.to_vec()
    } else {
        cli.files.iter().map(String::as_str).collect()
    };

    // A failure aborts the remaining documents
    let mut store = StdDocumentStore::new();
    for path in targets {
        if cli.check {
            let content = store.read_document(path)?;
            println!("── {} ──", path);
            println!(
                "{}",
                format_diagnostics(&check_latex(&content), !cli.no_color)
            );
            println!();
            continue;
        }

        process_file(&mut store, path, &options)?;
        if !cli.quiet {
            eprintln!("✓ Processed: {}", path);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texspan --features cli");
    eprintln!("  texspan [OPTIONS] [FILES]...");
}
