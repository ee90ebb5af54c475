//! Command implementations for clusterconf.
//!
//! Each command loads the config, does its work through the `config` API and
//! renders a string, which `dispatch` prints to stdout. Rendering is kept
//! separate from printing so it can be tested without capturing output.

use crate::cli::{Command, EndpointsArgs, ExportArgs, OutputFormat, ShowArgs};
use crate::config::Config;
use crate::error::{ConfError, Result};
use std::fmt::Write;
use std::path::Path;
use tracing::info;


/// Dispatch a command to its implementation.
pub fn dispatch(config_path: &Path, command: Command) -> Result<()> {
    let config = Config::load(config_path)?;
    info!(
        path = %config_path.display(),
        clusters = config.clusters.len(),
        "config loaded"
    );

    let output = match command {
        Command::List => render_list(&config),
        Command::Show(args) => render_show(&config, &args)?,
        Command::Export(args) => render_export(&config, &args)?,
        Command::Endpoints(args) => render_endpoints(&config, &args)?,
    };

    print!("{}", output);
    Ok(())
}

fn render_list(config: &Config) -> String {
    if config.clusters.is_empty() {
        return "No clusters declared.\n".to_string();
    }

    let mut out = String::new();
    for (key, cluster) in &config.clusters {
        match cluster.parent_name() {
            Some(parent) => {
                let _ = writeln!(out, "{} (inherits {})", key, parent);
            }
            None => {
                let _ = writeln!(out, "{}", key);
            }
        }
    }
    out
}

fn render_show(config: &Config, args: &ShowArgs) -> Result<String> {
    let cluster = config.resolve_cluster(&args.cluster)?;
    serde_yaml::to_string(&cluster)
        .map_err(|e| ConfError::Serialize(format!("cluster '{}': {}", args.cluster, e)))
}

fn render_export(config: &Config, args: &ExportArgs) -> Result<String> {
    let options = config
        .resolve_cluster(&args.cluster)?
        .export()
        .with_default_labels();

    match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(&options)
            .map_err(|e| ConfError::Serialize(format!("options: {}", e))),
        OutputFormat::Json => serde_json::to_string_pretty(&options)
            .map(|json| json + "\n")
            .map_err(|e| ConfError::Serialize(format!("options: {}", e))),
    }
}

fn render_endpoints(config: &Config, args: &EndpointsArgs) -> Result<String> {
    let cluster = config.resolve_cluster(&args.cluster)?;
    let groups = cluster.node_groups();

    let selected: Vec<_> = match &args.group {
        Some(name) => {
            let view = groups.get(name.as_str()).ok_or_else(|| {
                ConfError::UserError(format!(
                    "cluster '{}' has no node group '{}'",
                    args.cluster, name
                ))
            })?;
            vec![*view]
        }
        None => groups.values().copied().collect(),
    };

    let mut out = String::new();
    for view in selected {
        let _ = writeln!(out, "{}:", view.name());
        for node in view.node_names() {
            let url = if args.internal {
                view.internal_api_url(&node)
            } else {
                view.api_url(&node)
            };
            let _ = writeln!(
                out,
                "  {}: {}",
                node,
                url.as_deref().unwrap_or("<unresolved>")
            );
        }
    }
    Ok(out)
}
