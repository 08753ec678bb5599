use crate::schema::appointments;
use chrono::{NaiveDate, NaiveDateTime};

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Queryable, Selectable)]
#[diesel(table_name = appointments)]
pub struct Appointment {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = appointments)]
pub struct NewAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}
