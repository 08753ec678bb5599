#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:literal, ( $( $arg:ident : $arg_ty:ty ),* $(,)? ), $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name( $( $arg: $arg_ty ),* ) -> impl Responder {
                    match [<$func_name _impl>]( $( $arg ),* ).await {
                        Ok(response) => HttpResponse::Ok().json(response),
                        Err(err) => {
                            log::warn!("{} failed: {:#}", stringify!($func_name), err);
                            HttpResponse::BadRequest().json(<$response>::err(err))
                        }
                    }
                }
            }
        )+
    };
}

use anyhow::{bail, Context};
use chrono::NaiveDate;

/// Returns the trimmed value of a required form field.
pub fn require_field(value: Option<String>, field: &str) -> anyhow::Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => bail!("Missing required field: {}", field),
    }
}

pub fn optional_field(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    const DATE_FMT: &str = "%Y-%m-%d";

    let s = s.as_ref();
    NaiveDate::parse_from_str(s, DATE_FMT)
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}
