use serde::{Deserialize, Serialize};

/// Nanoseconds since the Unix epoch
pub type Timestamp = u64;

/// Opaque identity of the caller that created a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The principal used when no caller identity was configured
    pub fn anonymous() -> Self {
        Self("anonymous".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied descriptive fields of a livestock entry.
/// Create and update both take the complete set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivestockPayload {
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

impl LivestockPayload {
    /// Field names paired with their values, in declaration order
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("species", &self.species),
            ("name", &self.name),
            ("sex", &self.sex),
            ("coatcolour", &self.coatcolour),
            ("brand", &self.brand),
            ("breed", &self.breed),
            ("dob", &self.dob),
            ("marking", &self.marking),
            ("tagNo", &self.tag_no),
        ]
    }
}

/// One livestock entry as it is persisted.
///
/// The serialized form is the stored value and uses the wire field names
/// (`tagNo`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Livestock {
    /// Immutable identifier, unique across the store
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

    /// Caller that created the record. Never changes.
    pub owner: Principal,

    /// Creation timestamp. Never changes.
    pub created_at: Timestamp,

    /// Absent until the first update, then the time of the latest one
    pub updated_at: Option<Timestamp>,
}

impl Livestock {
    /// Compose a fresh record from a payload and the system-assigned fields
    pub fn create(id: String, payload: LivestockPayload, owner: Principal, now: Timestamp) -> Self {
        let LivestockPayload {
            species,
            name,
            sex,
            coatcolour,
            brand,
            breed,
            dob,
            marking,
            tag_no,
        } = payload;

        Self {
            id,
            species,
            name,
            sex,
            coatcolour,
            brand,
            breed,
            dob,
            marking,
            tag_no,
            owner,
            created_at: now,
            updated_at: None,
        }
    }

    /// Replace every descriptive field and stamp the update time.
    /// `id`, `owner` and `created_at` are left untouched.
    pub fn apply_update(&mut self, payload: LivestockPayload, now: Timestamp) {
        self.species = payload.species;
        self.name = payload.name;
        self.sex = payload.sex;
        self.coatcolour = payload.coatcolour;
        self.brand = payload.brand;
        self.breed = payload.breed;
        self.dob = payload.dob;
        self.marking = payload.marking;
        self.tag_no = payload.tag_no;
        self.updated_at = Some(now);
    }

    /// Case-insensitive name comparison
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// The descriptive fields of this record
    pub fn payload(&self) -> LivestockPayload {
        LivestockPayload {
            species: self.species.clone(),
            name: self.name.clone(),
            sex: self.sex.clone(),
            coatcolour: self.coatcolour.clone(),
            brand: self.brand.clone(),
            breed: self.breed.clone(),
            dob: self.dob.clone(),
            marking: self.marking.clone(),
            tag_no: self.tag_no.clone(),
        }
    }
}
