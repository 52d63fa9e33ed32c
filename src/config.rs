use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Dashboard backend listing Tekton PipelineResources
#[derive(Parser, Debug, Clone)]
#[command(name = "pipeline-resource-dashboard")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "PIPELINE_DASHBOARD_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Pin the view to this namespace, overriding the selected namespace
    #[arg(short, long, env = "PIPELINE_DASHBOARD_NAMESPACE")]
    pub namespace: Option<String>,

    /// Initially selected namespace (empty or '*' for all namespaces)
    #[arg(long, env = "PIPELINE_DASHBOARD_SELECTED_NAMESPACE", default_value = "*")]
    pub selected_namespace: String,

    /// JSON file of message id to template overrides
    #[arg(long, env = "PIPELINE_DASHBOARD_MESSAGES")]
    pub messages: Option<PathBuf>,

    /// Disable the live update watcher
    #[arg(long)]
    pub no_watch: bool,
}
