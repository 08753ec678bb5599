use crate::schema::services;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable)]
#[diesel(table_name = services)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub price_range: String,
    pub likes: i32,
    pub long_description: Option<String>,
    pub procedures: Option<String>,
    pub duration: Option<String>,
    pub preparation: Option<String>,
    pub recovery_time: Option<String>,
    pub success_rate: Option<String>,
    pub faqs: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = services)]
pub struct NewService<'a> {
    pub name: &'a str,
    pub icon: &'a str,
    pub description: &'a str,
    pub price_range: &'a str,
    pub likes: i32,
    pub long_description: &'a str,
    pub procedures: String,
    pub duration: &'a str,
    pub preparation: &'a str,
    pub recovery_time: &'a str,
    pub success_rate: &'a str,
    pub faqs: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Service {
    /// Decodes the JSON-encoded procedure list. A missing column yields an empty list.
    pub fn procedure_list(&self) -> anyhow::Result<Vec<String>> {
        match &self.procedures {
            Some(raw) => serde_json::from_str(raw)
                .with_context(|| format!("Malformed procedures for service {}", self.id)),
            None => Ok(Vec::new()),
        }
    }

    pub fn faq_list(&self) -> anyhow::Result<Vec<Faq>> {
        match &self.faqs {
            Some(raw) => serde_json::from_str(raw)
                .with_context(|| format!("Malformed FAQs for service {}", self.id)),
            None => Ok(Vec::new()),
        }
    }
}
