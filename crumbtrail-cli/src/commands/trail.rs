//! Command to render the breadcrumb trail of a page.

use crate::error::CliError;
use crate::utils::{load_site, GlobalOptions};
use clap::{ArgGroup, Args, ValueEnum};
use crumbtrail::store::{EntityStore, SiteStore};
use crumbtrail::{BreadcrumbManager, NodeId, OutputFormat, RouteContext, UserId};

/// Render the breadcrumb trail of a node, a user or an arbitrary path.
#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["node", "user", "path"])))]
pub struct TrailCommand {
    /// Render the canonical page of this node
    #[arg(long, value_name = "ID")]
    pub node: Option<u64>,

    /// Render the profile page of this user
    #[arg(long, value_name = "ID")]
    pub user: Option<u64>,

    /// Render this internal path (node and user paths resolve to their entity)
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Treat the route as an administrative route
    #[arg(long)]
    pub admin: bool,

    /// Interface language of the request
    #[arg(long, value_name = "LANGCODE")]
    pub language: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: TrailFormat,
}

/// Output formats for the trail command.
#[derive(Clone, Copy, ValueEnum)]
pub enum TrailFormat {
    /// Home > Page One > Page Four
    Human,
    /// JSON with links and cache metadata
    Json,
    /// HTML navigation fragment
    Html,
}

impl From<TrailFormat> for OutputFormat {
    fn from(format: TrailFormat) -> Self {
        match format {
            TrailFormat::Human => OutputFormat::Human,
            TrailFormat::Json => OutputFormat::Json,
            TrailFormat::Html => OutputFormat::Html,
        }
    }
}

impl TrailCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = load_site(global)?;
        let mut route = self.route(&store)?;
        if self.admin {
            route = route.with_admin(true);
        }
        if let Some(language) = &self.language {
            route = route.with_langcode(language.as_str());
        }

        let breadcrumb = BreadcrumbManager::for_site(&store).build(&route);

        let output = OutputFormat::from(self.format)
            .create_formatter()
            .format(&breadcrumb)?;
        println!("{output}");
        Ok(())
    }

    fn route(&self, store: &SiteStore) -> Result<RouteContext, CliError> {
        if let Some(id) = self.node {
            return node_route(store, NodeId(id));
        }
        if let Some(id) = self.user {
            return user_route(store, UserId(id));
        }

        let path = self.path.as_deref().unwrap_or("/");
        if !path.starts_with('/') {
            return Err(CliError::InvalidArguments(format!(
                "Path must start with '/': {path}"
            )));
        }
        if let Some(node) = store
            .site()
            .nodes
            .iter()
            .find(|node| node.url() == path || format!("/node/{}", node.id) == path)
        {
            return node_route(store, node.id);
        }
        if let Some(id) = path
            .strip_prefix("/user/")
            .and_then(|id| id.parse::<u64>().ok())
        {
            if store.load_user(UserId(id)).is_some() {
                return user_route(store, UserId(id));
            }
        }
        Ok(RouteContext::for_path(path))
    }
}

fn node_route(store: &SiteStore, id: NodeId) -> Result<RouteContext, CliError> {
    store
        .load_node(id)
        .map(RouteContext::for_node)
        .ok_or_else(|| CliError::SemanticFailure(format!("Node {id} does not exist")))
}

fn user_route(store: &SiteStore, id: UserId) -> Result<RouteContext, CliError> {
    store
        .load_user(id)
        .map(RouteContext::for_user)
        .ok_or_else(|| CliError::SemanticFailure(format!("User {id} does not exist")))
}
