/// Network adapters for external API calls
mod tode_api_client;

pub use tode_api_client::{TodeApiClient, DEFAULT_API_URL, FETCH_ERROR_MESSAGE};
