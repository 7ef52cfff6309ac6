pub mod article;
pub mod state;

pub use article::Article;
pub use state::PostedState;
