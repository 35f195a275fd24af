use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct BlogContent {
    pub content: String,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    /// JSON text exactly as the model returned it.
    pub keywords: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
