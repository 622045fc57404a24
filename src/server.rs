use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::client::{MealDbClient, RecipeCatalog};
use crate::config::Config;
use crate::explorer::{Explorer, ExplorerSnapshot, UiStatus};
use crate::render::render_view;

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct LoadRandomParams {
    /// Number of random recipes; defaults to the configured batch size
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchByIngredientsParams {
    /// Whitespace-separated ingredients, e.g. "chicken rice"
    pub ingredients: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ShowRecipeParams {
    /// Recipe id as shown in the grid
    pub id: String,
}

/// MCP front end for one explorer session.
///
/// Each connected client gets its own [`Explorer`], the way each browser tab
/// gets its own page state.
#[derive(Clone)]
pub struct RecipeExplorerServer {
    explorer: Arc<Explorer>,
    tool_router: ToolRouter<RecipeExplorerServer>,
}

#[tool_router]
impl RecipeExplorerServer {
    pub fn new(explorer: Arc<Explorer>) -> Self {
        Self {
            explorer,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let catalog: Arc<dyn RecipeCatalog> = Arc::new(MealDbClient::from_config(config));
        Self::new(Arc::new(Explorer::new(catalog, config.random_count)))
    }

    pub fn explorer(&self) -> &Arc<Explorer> {
        &self.explorer
    }

    /// Loads the first random batch in the background and returns its handle.
    pub fn start_initial_load(&self) -> JoinHandle<ExplorerSnapshot> {
        let explorer = Arc::clone(&self.explorer);
        tokio::spawn(async move { explorer.load_default_random().await })
    }

    fn view_result(snapshot: ExplorerSnapshot) -> Result<CallToolResult, McpError> {
        let state = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let content = vec![Content::text(render_view(&snapshot)), Content::text(state)];

        match snapshot.status {
            UiStatus::Error(_) => Ok(CallToolResult::error(content)),
            _ => Ok(CallToolResult::success(content)),
        }
    }

    #[tool(description = "Replace the grid with a batch of random recipes")]
    async fn load_random(
        &self,
        Parameters(params): Parameters<LoadRandomParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: load_random {:?}", params.count);
        let count = params.count.unwrap_or(self.explorer.random_count());
        Self::view_result(self.explorer.load_random(count).await)
    }

    #[tool(description = "Find recipes that use every one of the given ingredients")]
    async fn search_by_ingredients(
        &self,
        Parameters(params): Parameters<SearchByIngredientsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: search_by_ingredients {:?}", params.ingredients);
        Self::view_result(self.explorer.search(&params.ingredients).await)
    }

    #[tool(description = "Open the full recipe (ingredients, instructions, video) for a grid item")]
    async fn show_recipe(
        &self,
        Parameters(params): Parameters<ShowRecipeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: show_recipe {}", params.id);
        Self::view_result(self.explorer.show_details(&params.id).await)
    }

    #[tool(description = "Close the recipe detail overlay")]
    async fn close_recipe(&self) -> Result<CallToolResult, McpError> {
        Self::view_result(self.explorer.close_details().await)
    }

    #[tool(description = "Leave ingredient search and show random recipes again")]
    async fn clear_search(&self) -> Result<CallToolResult, McpError> {
        Self::view_result(self.explorer.clear_search().await)
    }

    #[tool(description = "Show the current grid, status and open recipe")]
    async fn get_view(&self) -> Result<CallToolResult, McpError> {
        Self::view_result(self.explorer.snapshot().await)
    }
}

/// Fetches one random meal to confirm the catalog is reachable.
pub async fn test_catalog_access(catalog: &dyn RecipeCatalog) -> anyhow::Result<()> {
    let meals = catalog.random_meal().await?;
    tracing::info!("Catalog access test successful - received {} meal(s)", meals.len());
    Ok(())
}

#[tool_handler]
impl ServerHandler for RecipeExplorerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server lets you browse TheMealDB recipes. Use search_by_ingredients to find recipes containing all listed ingredients, load_random for a fresh random selection, show_recipe with a grid id for full details, close_recipe to dismiss them, and clear_search to return to random recipes.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        // The handshake must not wait on the catalog; get_view shows the loading banner
        self.start_initial_load();
        Ok(self.get_info())
    }
}
