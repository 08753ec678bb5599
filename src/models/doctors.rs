use crate::schema::doctors;
use serde::Serialize;

#[derive(Queryable, Selectable, Serialize)]
#[diesel(table_name = doctors)]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub reviews: i32,
    pub availability: String,
    pub likes: i32,
}

#[derive(Insertable)]
#[diesel(table_name = doctors)]
pub struct NewDoctor<'a> {
    pub name: &'a str,
    pub specialty: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub rating: f64,
    pub reviews: i32,
    pub availability: &'a str,
    pub likes: i32,
}
