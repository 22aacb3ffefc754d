use serde::{Deserialize, Serialize};

use crate::entities::movie;

/// Wire shape shared by every endpoint that returns a movie.
#[derive(Clone, Debug, Serialize)]
pub struct MovieOut {
    pub id: i32,
    pub title: String,
    pub rating: String,
    pub img: String,
    pub description: Option<String>,
}

impl From<movie::Model> for MovieOut {
    fn from(m: movie::Model) -> Self {
        Self { id: m.id, title: m.title, rating: m.rating, img: m.img, description: m.description }
    }
}

pub fn to_wire_many(rows: Vec<movie::Model>) -> Vec<MovieOut> {
    rows.into_iter().map(MovieOut::from).collect()
}

/// Inbound fields for an insert. Everything is optional at the wire level;
/// the store rejects missing required fields.
#[derive(Clone, Debug, Deserialize)]
pub struct NewMovie {
    pub title: Option<String>,
    pub rating: Option<String>,
    pub img: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkAddRequest {
    pub movies: Vec<NewMovie>,
}

/// Partial update: only fields present and non-null are applied.
#[derive(Clone, Debug, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub rating: Option<String>,
    pub img: Option<String>,
    pub description: Option<String>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.rating.is_none()
            && self.img.is_none()
            && self.description.is_none()
    }
}
