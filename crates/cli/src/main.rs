mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use gqlproto::schema::SchemaGraph;
use gqlproto::{ProtoOptions, Translator};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gqlproto")]
#[command(about = "Translate a GraphQL schema into a Protocol Buffers definition", long_about = None)]
#[command(version)]
struct Cli {
    /// GraphQL SDL file to translate ('-' reads stdin)
    schema: PathBuf,

    /// Output .proto file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// TOML file with header options (defaults to the user config file when present)
    #[arg(long, env = "GQLPROTO_CONFIG")]
    config: Option<PathBuf>,

    /// Print the emitted type names in output order instead of the document
    #[arg(long)]
    print_types: bool,

    #[command(flatten)]
    overrides: OptionOverrides,
}

/// Per-invocation overrides, applied on top of the loaded config
#[derive(Args, Debug, Clone, Default)]
struct OptionOverrides {
    /// Proto package declaration
    #[arg(long)]
    package: Option<String>,

    /// Value of `option java_package`
    #[arg(long)]
    java_package: Option<String>,

    /// Value of `option (jspb.js_namespace)`
    #[arg(long)]
    js_namespace: Option<String>,

    /// Import path of jspb.proto
    #[arg(long)]
    jspb_import: Option<String>,

    /// Prefix of every `(jspb.message_id)` annotation
    #[arg(long)]
    message_id_prefix: Option<String>,
}

impl OptionOverrides {
    fn apply(&self, options: &mut ProtoOptions) {
        if let Some(package) = &self.package {
            options.package = package.clone();
        }
        if let Some(java_package) = &self.java_package {
            options.java_package = java_package.clone();
        }
        if let Some(js_namespace) = &self.js_namespace {
            options.js_namespace = js_namespace.clone();
        }
        if let Some(jspb_import) = &self.jspb_import {
            options.jspb_import = jspb_import.clone();
        }
        if let Some(prefix) = &self.message_id_prefix {
            options.message_id_prefix = prefix.clone();
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr, keeping stdout clean for the generated document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let output = render(&cli)?;
    write_output(cli.out.as_deref(), &output)
}

/// Load the schema and config named on the command line and produce the output text.
fn render(cli: &Cli) -> Result<String> {
    let sdl = read_schema(&cli.schema)?;
    let graph = SchemaGraph::from_sdl(&sdl)
        .with_context(|| format!("Failed to load schema: {:?}", cli.schema))?;

    let mut options = config::load_options(cli.config.as_deref())?;
    cli.overrides.apply(&mut options);
    let translator = Translator::new(options);

    if cli.print_types {
        let names = translator
            .emission_list(&graph)
            .context("Failed to walk schema")?
            .into_iter()
            .filter_map(|id| graph.get(id).map(|node| format!("{}\n", node.name())))
            .collect();
        return Ok(names);
    }

    translator
        .translate(&graph)
        .with_context(|| format!("Failed to translate schema: {:?}", cli.schema))
}

fn read_schema(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut sdl = String::new();
        std::io::stdin()
            .read_to_string(&mut sdl)
            .context("Failed to read schema from stdin")?;
        return Ok(sdl);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read schema file: {:?}", path))
}

fn write_output(out: Option<&Path>, output: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
                }
            }
            fs::write(path, output)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            info!("Wrote {} bytes to {:?}", output.len(), path);
        }
        None => write_document(&mut std::io::stdout().lock(), output)?,
    }
    Ok(())
}

/// Write `output` as-is, so piping stdout gives the same bytes as `--out`.
fn write_document(writer: &mut impl Write, output: &str) -> Result<()> {
    writer
        .write_all(output.as_bytes())
        .and_then(|()| writer.flush())
        .context("Failed to write output to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SDL: &str = "type Query { name: String, color: Color }\nenum Color { RED GREEN }";

    fn cli_for(dir: &Path, extra: &[&str]) -> Cli {
        let schema = dir.join("schema.graphql");
        fs::write(&schema, SDL).unwrap();
        let config = dir.join("none.toml");
        fs::write(&config, "").unwrap();

        let mut args = vec![
            "gqlproto".to_string(),
            schema.to_string_lossy().to_string(),
            "--config".to_string(),
            config.to_string_lossy().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::parse_from(args)
    }

    #[test]
    fn test_render_default_document() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), &[]);

        let output = render(&cli).unwrap();
        assert!(output.starts_with("// LINT: LEGACY_NAMES\n"));
        assert!(output.contains("string name = 1;\nColor.Enum color = 2;\n"));
        assert!(output.ends_with("RED = 0;\nGREEN = 1;\n}\n}"));
    }

    #[test]
    fn test_print_types() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), &["--print-types"]);

        assert_eq!(render(&cli).unwrap(), "Query\nColor\n");
    }

    #[test]
    fn test_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), &["--package", "acme.v1", "--message-id-prefix", "acme"]);

        let output = render(&cli).unwrap();
        assert!(output.contains("package acme.v1;\n"));
        assert!(output.contains("option (jspb.message_id) = \"acme.Query\";\n"));
        assert!(output.contains("option java_package = \"com.google.api.graphql.rejoiner.proto\";\n"));
    }

    #[test]
    fn test_write_output_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("gen").join("nested").join("schema.proto");

        write_output(Some(out.as_path()), "message A {\n}").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "message A {\n}");
    }

    #[test]
    fn test_stdout_matches_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("schema.proto");
        let output = render(&cli_for(dir.path(), &[])).unwrap();

        let mut stdout = Vec::new();
        write_document(&mut stdout, &output).unwrap();
        write_output(Some(out.as_path()), &output).unwrap();

        assert_eq!(stdout, fs::read(&out).unwrap());
        assert!(!stdout.ends_with(b"\n"));
    }

    #[test]
    fn test_unsupported_schema_reports_context() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("bad.graphql");
        fs::write(&schema, "type Query { id: ID }").unwrap();
        let config = dir.path().join("none.toml");
        fs::write(&config, "").unwrap();
        let cli = Cli::parse_from([
            "gqlproto".to_string(),
            schema.to_string_lossy().to_string(),
            "--config".to_string(),
            config.to_string_lossy().to_string(),
        ]);

        let err = render(&cli).unwrap_err();
        assert!(err.to_string().starts_with("Failed to translate schema"));
        assert!(format!("{err:#}").contains("ID"));
    }

    #[test]
    fn test_missing_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("none.toml");
        fs::write(&config, "").unwrap();
        let cli = Cli::parse_from([
            "gqlproto".to_string(),
            dir.path().join("absent.graphql").to_string_lossy().to_string(),
            "--config".to_string(),
            config.to_string_lossy().to_string(),
        ]);

        let err = render(&cli).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read schema file"));
    }
}
