//! Client library for the Random Stuff API: AI chat responses, jokes,
//! waifu images, weather and COVID-19 statistics.
//!
//! Requests are resolved and responses normalized per API version, so the
//! version-specific parameter names and payload shapes never leak into
//! calling code.
//!
//! ```no_run
//! use randomstuff::{AiOptions, Client, ClientConfig, Plan};
//!
//! #[tokio::main]
//! async fn main() -> randomstuff::Result<()> {
//!     let client = Client::new(&ClientConfig::new("your-api-key"))?;
//!     let response = client
//!         .get_ai_response("Hi", Plan::Free, &AiOptions::default())
//!         .await?;
//!     println!("{}", response.message);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod request;
pub mod response;
pub mod session;
pub mod types;
pub mod util;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use client::{Client, ClientConfig};
pub use error::{Error, Result};
pub use model::{ApiVersion, ImageType, JokeType, Plan, ResponseType, Server, WaifuType};
pub use request::{resolve, AiOptions, Operation, RequestSpec};
pub use types::{AIResponse, CovidData, Joke, JokeBody, JokeFlags, Waifu, Weather};
