//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod loading;
pub mod navbar;
pub mod upload_form;
pub mod upload_modal;

pub use chat_input::ChatInput;
pub use chat_message::MessageBubble;
pub use loading::{LoadingBubble, LoadingDots};
pub use navbar::Navbar;
pub use upload_form::UploadForm;
pub use upload_modal::UploadModal;
