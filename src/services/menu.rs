//! Menu azioni dell'header, filtrato per ruolo

use crate::entities::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub path: &'static str,
    pub roles: &'static [UserRole],
}

pub const ACTION_MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        name: "Dashboard",
        path: "/org",
        roles: &[UserRole::Organization],
    },
    MenuItem {
        name: "Crea",
        path: "/hackathons/create",
        roles: &[UserRole::Organization],
    },
    MenuItem {
        name: "Lista Hackathon",
        path: "/hackathons",
        roles: &[UserRole::Organization],
    },
    MenuItem {
        name: "I tuoi Hackathon",
        path: "/hackathons",
        roles: &[UserRole::Client],
    },
    MenuItem {
        name: "Classifica",
        path: "/ranking",
        roles: &[UserRole::Client],
    },
];

/// Voci visibili per il ruolo dato; senza ruolo (utente anonimo) nessuna voce
pub fn actions_for(role: Option<UserRole>) -> Vec<&'static MenuItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    ACTION_MENU_ITEMS
        .iter()
        .filter(|item| item.roles.contains(&role))
        .collect()
}

/// La campanella degli inviti è mostrata solo ai partecipanti
pub fn shows_invite_bell(role: Option<UserRole>) -> bool {
    role == Some(UserRole::Client)
}
