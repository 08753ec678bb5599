use crate::schema::contact_messages;
use chrono::NaiveDateTime;

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Queryable, Selectable)]
#[diesel(table_name = contact_messages)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub department: String,
    pub is_urgent: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub department: String,
    pub is_urgent: bool,
    pub created_at: NaiveDateTime,
}

pub const DEFAULT_DEPARTMENT: &str = "General Inquiry";
