// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are the wire representation of the RPC surface
// - DTOs are simple, serializable structs
// - Field names follow the wire contract (camelCase, `tagNo`)

use serde::{Deserialize, Serialize};

use crate::domain::{Livestock, LivestockPayload, Timestamp};

// ============================================================================
// LIVESTOCK DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivestockDto {
    pub id: String,
    pub species: String,
    pub name: String,
    pub sex: String,
    pub coatcolour: String,
    pub brand: String,
    pub breed: String,
    pub dob: String,
    pub marking: String,
    pub tag_no: String,
    pub owner: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Create/update body. Absent fields arrive as empty strings so that
/// validation reports "missing" and "empty" the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LivestockPayloadDto {
    pub species: String,
    pub name: String,
    pub sex: String,
    pub coatcolour: String,
    pub brand: String,
    pub breed: String,
    pub dob: String,
    pub marking: String,
    pub tag_no: String,
}

// ============================================================================
// RPC PARAMETER DTOs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct IdParams {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameParams {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateParams {
    pub id: String,
    pub payload: LivestockPayloadDto,
}

// ============================================================================
// RESPONSE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// CONVERSION HELPERS
// ============================================================================

impl From<Livestock> for LivestockDto {
    fn from(livestock: Livestock) -> Self {
        Self {
            id: livestock.id,
            species: livestock.species,
            name: livestock.name,
            sex: livestock.sex,
            coatcolour: livestock.coatcolour,
            brand: livestock.brand,
            breed: livestock.breed,
            dob: livestock.dob,
            marking: livestock.marking,
            tag_no: livestock.tag_no,
            owner: livestock.owner.to_string(),
            created_at: livestock.created_at,
            updated_at: livestock.updated_at,
        }
    }
}

impl From<LivestockPayloadDto> for LivestockPayload {
    fn from(dto: LivestockPayloadDto) -> Self {
        Self {
            species: dto.species,
            name: dto.name,
            sex: dto.sex,
            coatcolour: dto.coatcolour,
            brand: dto.brand,
            breed: dto.breed,
            dob: dto.dob,
            marking: dto.marking,
            tag_no: dto.tag_no,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_missing_fields_default_to_empty() {
        let dto: LivestockPayloadDto =
            serde_json::from_str(r#"{"name": "Bessie", "tagNo": "T1"}"#).unwrap();

        assert_eq!(dto.name, "Bessie");
        assert_eq!(dto.tag_no, "T1");
        assert_eq!(dto.species, "");
    }

    #[test]
    fn test_livestock_dto_serializes_wire_names() {
        let dto = LivestockDto {
            id: "id-1".to_string(),
            species: "cattle".to_string(),
            name: "Bessie".to_string(),
            sex: "F".to_string(),
            coatcolour: "brown".to_string(),
            brand: "B1".to_string(),
            breed: "Angus".to_string(),
            dob: "2020-01-01".to_string(),
            marking: "none".to_string(),
            tag_no: "T1".to_string(),
            owner: "anonymous".to_string(),
            created_at: 1,
            updated_at: None,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["tagNo"], "T1");
        assert_eq!(json["createdAt"], 1);
        assert!(json["updatedAt"].is_null());
    }
}
