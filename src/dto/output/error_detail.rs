use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
