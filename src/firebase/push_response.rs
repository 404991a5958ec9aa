use serde::Deserialize;

// API: https://firebase.google.com/docs/reference/rest/database#section-post
#[derive(Debug, Deserialize)]
pub struct PushResponse {
    pub name: String,
}
