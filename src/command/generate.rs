//! Generate command implementation.
use log::*;
use std::{
    fmt,
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    Result, SubtestifyError, aggregator,
    config::{GenerateConfig, OutputMode},
    extractor::{self, GoSource},
    path_helpers,
    renderer::Renderer,
    types::TemplateContext,
};

/// Where rendered output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::File(path) => write!(f, "{}", path.display()),
            Destination::Stdout => write!(f, "stdout"),
        }
    }
}

/// Rendered output together with the data it was rendered from.
#[derive(Debug)]
pub struct Generated {
    pub output: String,
    pub context: TemplateContext,
    pub skipped: Vec<String>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub destination: Destination,
    pub groups: usize,
    pub subtests: usize,
    pub skipped: usize,
}

/// Parse, extract, aggregate and render Go source text without touching
/// the file system.
pub fn generate(source: &str, renderer: &Renderer) -> Result<Generated> {
    let parsed = GoSource::parse(source)?;
    let extraction = extractor::extract(&parsed)?;

    let groups = aggregator::aggregate(extraction.subtests);
    let context = TemplateContext::new(
        extraction.package_name,
        extraction.imports,
        groups,
    );

    let output = renderer.render(&context)?;

    Ok(Generated {
        output,
        context,
        skipped: extraction.skipped,
    })
}

/// Run the full pipeline described by `config`.
pub fn execute(config: &GenerateConfig) -> Result<GenerateOutcome> {
    info!("regrouping tests in: {}", config.input.display());

    let source = fs::read_to_string(&config.input)
        .map_err(|e| SubtestifyError::io(&config.input, e))?;

    let renderer = load_renderer(config)?;
    let generated = generate(&source, &renderer)?;

    let destination = if config.to_stdout {
        print!("{}", generated.output);
        Destination::Stdout
    } else {
        write_output(&config.input, config.mode, &generated.output)?
    };

    let outcome = GenerateOutcome {
        destination,
        groups: generated.context.groups.len(),
        subtests: generated.context.subtest_count(),
        skipped: generated.skipped.len(),
    };

    info!(
        "wrote {} groups with {} subtests to {} ({} declarations skipped)",
        outcome.groups, outcome.subtests, outcome.destination, outcome.skipped
    );

    Ok(outcome)
}

fn load_renderer(config: &GenerateConfig) -> Result<Renderer> {
    match &config.template {
        Some(path) => {
            debug!("loading template from: {}", path.display());
            let template = fs::read_to_string(path)
                .map_err(|e| SubtestifyError::io(path, e))?;
            Renderer::with_template(config.mode, &template)
        }
        None => Renderer::new(config.mode),
    }
}

fn write_output(
    input: &Path,
    mode: OutputMode,
    output: &str,
) -> Result<Destination> {
    let path = match mode {
        OutputMode::Standalone => path_helpers::generated_path(input),
        OutputMode::Append => input.to_path_buf(),
    };

    let mut file = match mode {
        OutputMode::Standalone => File::create(&path),
        OutputMode::Append => OpenOptions::new().append(true).open(&path),
    }
    .map_err(|e| SubtestifyError::io(&path, e))?;

    file.write_all(output.as_bytes())
        .map_err(|e| SubtestifyError::io(&path, e))?;

    Ok(Destination::File(path))
}

#[cfg(test)]
#[path = "./generate_tests.rs"]
mod tests;
