pub mod chat;
pub mod history;
pub mod important;
pub mod nav;
pub mod not_found;
pub mod shared;
pub mod upload;

pub use chat::ChatPage;
pub use history::HistoryPage;
pub use important::ImportantPage;
pub use not_found::NotFoundPage;
pub use upload::UploadPage;
