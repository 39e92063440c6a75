//! Application use cases / business logic

pub mod prompt;
pub mod settle;
pub mod trends;

pub use prompt::build_trends_prompt;
pub use settle::{Settled, settle_all};
pub use trends::{PlatformSources, TrendsError, TrendsUseCase};
