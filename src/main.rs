use anyhow::{Context, Result, bail};
use marklet::{CharacterCount, Config, MarkdownRenderer};
use std::fs;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

/// Reads markdown source from the configured input.
fn read_input(config: &Config) -> Result<String> {
    if config.reads_stdin() {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read markdown from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read markdown file: {}", config.input.display()))
}

/// Renders markdown and wraps it according to configuration.
///
/// # Errors
///
/// Returns error if the input is longer than the configured maximum length.
fn build_output(config: &Config, markdown: &str) -> Result<String> {
    let count = config
        .max_length
        .map(|max| CharacterCount::new(markdown, max));

    if let Some(count) = &count {
        tracing::debug!(%count, level = ?count.level(), "character count");
        if count.is_exceeded() {
            bail!(
                "Input has {} characters, maximum is {}",
                count.current(),
                count.max()
            );
        }
    }

    let fragment = MarkdownRenderer::new().render(markdown);

    if config.fragment {
        return Ok(fragment);
    }

    Ok(marklet::preview::page(&config.page_title(), &fragment, count.as_ref()).into_string())
}

fn init_tracing(verbose: bool) {
    // --verbose enables DEBUG, otherwise RUST_LOG or WARN
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    let markdown = read_input(&config)?;
    let html = build_output(&config, &markdown)?;

    let Some(output) = &config.output else {
        io::stdout()
            .write_all(html.as_bytes())
            .context("Failed to write HTML to stdout")?;
        return Ok(());
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    fs::write(output, &html)
        .with_context(|| format!("Failed to write HTML to {}", output.display()))?;

    println!(
        "Generated: {} ({})",
        output.display(),
        marklet::format_file_size(html.len())
    );

    if config.open
        && let Err(e) = open::that(output)
    {
        tracing::warn!("Failed to open {}: {:#}", output.display(), e);
    }

    Ok(())
}
