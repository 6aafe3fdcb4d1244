pub mod form_handler;
pub mod graphql_handler;
pub mod story_handler;

pub use form_handler::{story_form, submit_story};
pub use graphql_handler::{graphiql, graphql};
pub use story_handler::{generate_story_v1, generate_story_v2, health_check};
