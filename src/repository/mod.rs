mod dto;
mod entity;
mod error;
mod in_memory_tickets_repository;
mod tickets_repository;
mod tickets_repository_impl;

pub use dto::*;
pub use entity::*;
pub use error::*;
pub use in_memory_tickets_repository::*;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;
