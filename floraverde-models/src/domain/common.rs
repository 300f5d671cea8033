use serde::Deserialize;

/// `?id=N` query parameter used by the update and delete endpoints.
/// A non-numeric value is rejected at extraction time.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdQuery {
    pub id: Option<i32>,
}
