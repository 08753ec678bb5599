use serde::Serialize;

#[derive(Default, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LikeResponse {
    pub fn ok(likes: i32) -> Self {
        Self {
            success: true,
            likes: Some(likes),
            message: None,
        }
    }
}

crate::impl_err_response! {
    LikeResponse,
}
