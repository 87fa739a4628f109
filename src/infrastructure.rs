// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod recipe_client;

// Re-exports
pub use config::{RakutenApiConfig, RakutenApiConfigError};
pub use logging::init_logging;
pub use recipe_client::{RakutenRecipeClient, RecipeApi, RecipeApiError, UpstreamResponse};
