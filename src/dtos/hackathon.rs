//! Hackathon DTOs - Data Transfer Objects per hackathon

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// DTO per creare un nuovo hackathon (senza id e stato, assegnati dal backend)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[validate(schema(function = "validate_dates", skip_on_field_errors = false))]
pub struct NewHackathonDTO {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Location must be between 1 and 200 characters"))]
    pub location: Option<String>,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    #[validate(range(min = 1, max = 20, message = "Groups must have between 1 and 20 components"))]
    pub max_group_components: u32,
}

fn validate_dates(dto: &NewHackathonDTO) -> Result<(), ValidationError> {
    if dto.end_date < dto.start_date {
        return Err(ValidationError::new("end_before_start")
            .with_message("End date must not precede start date".into()));
    }
    Ok(())
}
