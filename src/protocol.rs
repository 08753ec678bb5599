use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub message: String,
}

impl SimpleResponse {
    pub fn ok<S: ToString>(message: S) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        message: err.to_string().into(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
}
