use serde::{Serialize, Deserialize};

/// Club as returned by the API
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub member_count: i64,
    pub image: String,
}

/// Row from the club table
#[derive(Debug, sqlx::FromRow)]
pub struct ClubRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(rename = "memberCount")]
    pub member_count: Option<i64>,
    pub image: Option<String>,
}

impl ClubRow {
    pub fn into_club(self) -> Club {
        Club {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            member_count: self.member_count.unwrap_or(0),
            image: self.image.unwrap_or_default(),
        }
    }
}

/// Request body for POST /clubs
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateClub {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub member_count: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Validated club ready to be inserted
#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub description: String,
    pub member_count: i64,
    pub image: String,
}

impl CreateClub {
    /// Returns `None` when `name` is missing or blank.
    pub fn into_new_club(self) -> Option<NewClub> {
        let name = self.name.filter(|n| !n.trim().is_empty())?;

        Some(NewClub {
            name,
            description: self.description.unwrap_or_default(),
            member_count: self.member_count.unwrap_or(0),
            image: self.image.unwrap_or_default(),
        })
    }
}

/// Response for GET /clubs/{id}
#[derive(Debug, Serialize)]
pub struct ClubResponse {
    pub success: bool,
    pub club: Club,
}

/// Response for POST /clubs
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: String,
    pub club_id: i64,
}

/// Response for DELETE /clubs/{id}
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_columns_fall_back_to_defaults() {
        let row = ClubRow {
            id: 3,
            name: "Robotics".to_string(),
            description: None,
            member_count: None,
            image: None,
        };

        let club = row.into_club();
        assert_eq!(club.description, "");
        assert_eq!(club.member_count, 0);
        assert_eq!(club.image, "");
    }

    #[test]
    fn club_serializes_member_count_in_camel_case() {
        let club = Club {
            id: 1,
            name: "Chess Club".to_string(),
            description: String::new(),
            member_count: 25,
            image: String::new(),
        };

        let value = serde_json::to_value(&club).unwrap();
        assert_eq!(value["memberCount"], 25);
        assert!(value.get("member_count").is_none());
    }

    #[test]
    fn create_payload_requires_a_name() {
        let missing: CreateClub = serde_json::from_str(r#"{"memberCount": 4}"#).unwrap();
        assert!(missing.into_new_club().is_none());

        let blank: CreateClub = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert!(blank.into_new_club().is_none());

        let null: CreateClub = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(null.into_new_club().is_none());
    }

    #[test]
    fn create_payload_fills_defaults() {
        let payload: CreateClub = serde_json::from_str(r#"{"name": "Drama"}"#).unwrap();
        let club = payload.into_new_club().unwrap();

        assert_eq!(club.name, "Drama");
        assert_eq!(club.description, "");
        assert_eq!(club.member_count, 0);
        assert_eq!(club.image, "");
    }
}
