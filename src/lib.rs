pub mod aggregate;
pub mod fake_feed;
pub mod feed;
pub mod history;
pub mod http_client;
pub mod normalize;
pub mod roster;
pub mod state;
pub mod submit;
pub mod summarize;
