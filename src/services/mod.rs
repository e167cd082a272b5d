//! Services module - Logica del client
//!
//! Questo modulo organizza la logica in sotto-moduli separati:
//! - derivazione dello stato degli inviti (colori, affordance, feed)
//! - comandi verso il backend (inviti, hackathon)
//! - modelli di vista (lista partecipanti, menu dell'header)

pub mod affordance;
pub mod colors;
pub mod feed;
pub mod gateway;
pub mod hackathon;
pub mod menu;
pub mod roster;

// Re-exports per facilitare l'import
pub use affordance::{Affordance, resolve_affordance};
pub use colors::{Color, ColorPicker, CyclingPalette, RandomPalette, assign_colors};
pub use feed::{pending_count, project};
pub use gateway::{
    accept_invite, decline_invite, fetch_invite_feed, fetch_user_attendants, send_invite,
};
pub use hackathon::{create_hackathon, list_hackathons};
pub use menu::{MenuItem, actions_for, shows_invite_bell};
pub use roster::AttendantRoster;
