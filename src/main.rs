use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

mod diagnostics;
mod error;
mod events;
mod model;
mod registry;
mod render;
mod spec;

use events::{EmittedEvent, Emitter};
use registry::Registry;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "component-contracts")]
#[command(about = "UI component contract registry", long_about = None)]
struct Cli {
    /// Catalog document replacing the built-in one.
    #[arg(long, global = true, env = "COMPONENT_CATALOG")]
    catalog: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered component names.
    List,

    /// Print one component contract as JSON.
    Show { component: String },

    /// Validate a configuration and print it with defaults applied.
    Validate {
        component: String,

        /// JSON file holding the configuration object.
        #[arg(long, conflicts_with = "json", required_unless_present = "json")]
        config: Option<String>,

        /// Inline configuration object.
        #[arg(long)]
        json: Option<String>,

        /// Slot the template fills; repeatable.
        #[arg(long = "slot")]
        slots: Vec<String>,
    },

    /// Dispatch a declared event and print what the handler received.
    Emit {
        component: String,
        event: String,

        #[arg(long)]
        payload: Option<String>,
    },

    /// Load and validate the catalog.
    Check,

    /// Write an HTML page documenting every contract.
    Docs {
        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::init(cli.verbose);

    let registry = load_registry(cli.catalog.as_deref())?;

    match cli.cmd {
        Commands::List => {
            for name in registry.component_names() {
                println!("{}", name);
            }
        }
        Commands::Show { component } => {
            let spec = registry.get_spec(&component)?;
            println!("{}", serde_json::to_string_pretty(spec)?);
        }
        Commands::Validate {
            component,
            config,
            json,
            slots,
        } => {
            let text = match (config, json) {
                (Some(path), _) => std::fs::read_to_string(&path)
                    .with_context(|| format!("read config file {}", path))?,
                (None, Some(inline)) => inline,
                (None, None) => bail!("one of --config or --json is required"),
            };
            let validated = run_validate(&registry, &component, &text, &slots)?;
            println!("{}", serde_json::to_string_pretty(&validated)?);
        }
        Commands::Emit {
            component,
            event,
            payload,
        } => {
            let payload = match payload {
                Some(text) => serde_json::from_str(&text).context("parse payload")?,
                None => Value::Null,
            };

            let spec = registry.get_spec(&component)?;
            let mut emitter = Emitter::new(spec, |e: &EmittedEvent| match serde_json::to_string(e) {
                Ok(line) => println!("{}", line),
                Err(err) => diagnostics::warn(format!("cannot print event: {}", err)),
            });
            emitter.emit(&event, payload)?;
        }
        Commands::Check => {
            println!("catalog OK: {} component(s)", registry.len());
        }
        Commands::Docs { out } => {
            let data = model::build_catalog_data(&registry);
            let html = render::render_catalog_html(&data)?;
            std::fs::write(&out, html).with_context(|| format!("write {}", out))?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}

fn load_registry(path: Option<&str>) -> Result<Registry> {
    let registry = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read catalog file {}", path))?;
            tracing::info!(path, "using catalog file");
            spec::Catalog::from_json(&text)?
                .validate_and_build()
                .with_context(|| format!("load catalog {}", path))?
        }
        None => Registry::builtin()?,
    };
    tracing::debug!(components = registry.len(), "registry loaded");
    Ok(registry)
}

/// Validate a config plus filled slots; print every violation on failure.
fn run_validate(
    registry: &Registry,
    component: &str,
    text: &str,
    slots: &[String],
) -> Result<Map<String, Value>> {
    let config = parse_object(text).context("parse configuration")?;

    let validated =
        match registry.validate_usage(component, &config, slots.iter().map(String::as_str)) {
            Ok(v) => v,
            Err(err) if !err.violations().is_empty() => {
                let mut props: Vec<&str> = Vec::new();
                for v in err.violations() {
                    eprintln!("  {}", v);
                    if !props.contains(&v.prop.as_str()) {
                        props.push(&v.prop);
                    }
                }
                bail!(
                    "{} rejected: {} violation(s) in {}",
                    component,
                    err.violations().len(),
                    props.join(", ")
                );
            }
            Err(err) => return Err(err.into()),
        };

    for key in pass_through_keys(registry, component, &config)? {
        diagnostics::warn(format!(
            "{}: '{}' is not a declared prop; passed through as an attribute",
            component, key
        ));
    }

    Ok(validated)
}

/// Config keys the component does not declare as props.
fn pass_through_keys<'c>(
    registry: &Registry,
    component: &str,
    config: &'c Map<String, Value>,
) -> Result<Vec<&'c str>> {
    let spec = registry.get_spec(component)?;
    Ok(config
        .keys()
        .filter(|key| !spec.props.iter().any(|p| &p.name == *key))
        .map(String::as_str)
        .collect())
}

fn parse_object(text: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(text)? {
        Value::Object(map) => Ok(map),
        other => bail!("configuration must be a JSON object, got {}", other),
    }
}
