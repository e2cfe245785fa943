//! Route target pages

pub mod chat;
pub mod landing;
pub mod upload;
