mod auth;
mod history;

pub use auth::TokenManager;
pub use history::FileHistoryStore;
pub use history::HistoryScope;
pub use history::HistoryStore;
