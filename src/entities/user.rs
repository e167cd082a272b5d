//! User entity - Entità utente

use super::enums::UserRole;
use serde::{Deserialize, Serialize};

/// Numero massimo di skill mostrate nella scheda di un partecipante
pub const MAX_SHOWN_SKILLS: usize = 5;
/// Le skill più lunghe di così non vengono mostrate
pub const MAX_SKILL_LEN: usize = 30;

/// Contatori del badge utente (vittorie e partecipazioni)
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeCounters {
    #[serde(default, rename = "win")]
    pub wins: Option<u32>,
    #[serde(default, rename = "partecipation")]
    pub participations: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "crate::entities::null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub badge: Option<BadgeCounters>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl User {
    /// Le prime skill da mostrare, scartando quelle troppo lunghe
    pub fn top_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|skill| skill.encode_utf16().count() < MAX_SKILL_LEN)
            .take(MAX_SHOWN_SKILLS)
            .map(String::as_str)
            .collect()
    }

    /// Path relativo dell'avatar, se l'utente ne ha uno
    pub fn avatar_path(&self) -> Option<String> {
        self.avatar.as_ref().map(|avatar| format!("avatar/{}", avatar))
    }

    pub fn profile_path(&self) -> String {
        format!("/profile/{}", self.username)
    }
}

/// Riferimento a un utente: id oppure oggetto popolato
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Populated(User),
}

impl UserRef {
    pub fn user_id(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::Populated(user) => &user.user_id,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.as_user().map(|user| user.username.as_str())
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            UserRef::Id(_) => None,
            UserRef::Populated(user) => Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_skills(skills: &[&str]) -> User {
        User {
            user_id: "u1".to_string(),
            username: "alice".to_string(),
            avatar: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            badge: None,
            role: None,
        }
    }

    #[test]
    fn test_top_skills_filters_and_limits() {
        let long = "x".repeat(30);
        let user = user_with_skills(&["rust", &long, "go", "sql", "react", "docker", "k8s"]);
        assert_eq!(user.top_skills(), vec!["rust", "go", "sql", "react", "docker"]);
    }

    #[test]
    fn test_skill_length_counts_utf16_units() {
        // 15 emoji: 15 char ma 30 unità UTF-16
        let emoji = "🦀".repeat(15);
        let accented = "è".repeat(29);
        let user = user_with_skills(&[&emoji, &accented]);
        assert_eq!(user.top_skills(), vec![accented.as_str()]);
    }

    #[test]
    fn test_null_skills() {
        let user: User =
            serde_json::from_str(r#"{"_id":"u9","username":"bob","skills":null}"#).unwrap();
        assert!(user.skills.is_empty());
    }

    #[test]
    fn test_user_ref_shapes() {
        let by_id: UserRef = serde_json::from_str(r#""u1""#).unwrap();
        assert_eq!(by_id.user_id(), "u1");
        assert_eq!(by_id.username(), None);

        let populated: UserRef =
            serde_json::from_str(r#"{"_id":"u2","username":"carol"}"#).unwrap();
        assert_eq!(populated.user_id(), "u2");
        assert_eq!(populated.username(), Some("carol"));
    }

    #[test]
    fn test_paths() {
        let mut user = user_with_skills(&[]);
        assert_eq!(user.avatar_path(), None);
        user.avatar = Some("alice.png".to_string());
        assert_eq!(user.avatar_path().as_deref(), Some("avatar/alice.png"));
        assert_eq!(user.profile_path(), "/profile/alice");
    }

    #[test]
    fn test_deserialize_minimal_user() {
        let user: User = serde_json::from_str(r#"{"_id":"u9","username":"bob"}"#).unwrap();
        assert_eq!(user.user_id, "u9");
        assert!(user.skills.is_empty());
        assert!(user.badge.is_none());
    }
}
