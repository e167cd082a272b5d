//! DTOs module - Data Transfer Objects
//!
//! Payload inviati al backend e modelli di vista derivati dalle entità.

pub mod hackathon;
pub mod invitation;
pub mod query;
pub mod user;

pub use hackathon::NewHackathonDTO;
pub use invitation::{CreateInviteDTO, InviteNotification};
pub use query::HackathonQuery;
pub use user::UserBadgeDTO;
