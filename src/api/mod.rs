mod requests;
mod responses;

use crate::{
    config::Config,
    database::get_db_conn,
    mailer::{self, Mailer},
    models::{
        appointments::NewAppointment,
        contact_messages::{NewContactMessage, DEFAULT_DEPARTMENT},
    },
    protocol::SimpleResponse,
    utils::{optional_field, parse_date_str, require_field},
    DbPool,
};
use actix_web::{error, post, web, HttpRequest, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use self::{
    requests::{AppointmentRequest, ContactRequest},
    responses::LikeResponse,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(create_appointment)
        .service(submit_contact)
        .service(like_doctor)
        .service(like_service);
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON payload: {}", err);
    let response = HttpResponse::BadRequest().json(SimpleResponse::err(&err));
    error::InternalError::from_response(err, response).into()
}

crate::post_funcs! {
    (
        create_appointment,
        "/appointment",
        (
            pool: web::Data<DbPool>,
            mailer: web::Data<dyn Mailer>,
            info: web::Json<AppointmentRequest>,
        ),
        SimpleResponse
    ),
    (
        submit_contact,
        "/contact",
        (
            pool: web::Data<DbPool>,
            mailer: web::Data<dyn Mailer>,
            config: web::Data<Config>,
            info: web::Json<ContactRequest>,
        ),
        SimpleResponse
    ),
    (like_doctor, "/doctor/{id}/like", (pool: web::Data<DbPool>, id: web::Path<i32>), LikeResponse),
    (like_service, "/service/{id}/like", (pool: web::Data<DbPool>, id: web::Path<i32>), LikeResponse),
}

async fn create_appointment_impl(
    pool: web::Data<DbPool>,
    mailer: web::Data<dyn Mailer>,
    info: web::Json<AppointmentRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let data = NewAppointment {
        name: require_field(info.name, "name")?,
        email: require_field(info.email, "email")?,
        phone: require_field(info.phone, "phone")?,
        doctor: require_field(info.doctor, "doctor")?,
        date: parse_date_str(require_field(info.date, "date")?)?,
        time: require_field(info.time, "time")?,
        message: optional_field(info.message).unwrap_or_default(),
        created_at: Utc::now().naive_utc(),
    };
    let email = mailer::appointment_confirmation(&data);

    let mut conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(appointments::table)
            .values(&data)
            .execute(&mut conn)
    })
    .await?
    .context("DB error")?;

    let mailer = mailer.into_inner();
    web::block(move || mailer.send(&email)).await??;

    Ok(SimpleResponse::ok("Appointment booked successfully!"))
}

async fn submit_contact_impl(
    pool: web::Data<DbPool>,
    mailer: web::Data<dyn Mailer>,
    config: web::Data<Config>,
    info: web::Json<ContactRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::contact_messages;

    let info = info.into_inner();
    let data = NewContactMessage {
        name: require_field(info.name, "name")?,
        email: require_field(info.email, "email")?,
        subject: require_field(info.subject, "subject")?,
        message: require_field(info.message, "message")?,
        department: optional_field(info.department)
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
        is_urgent: info.is_urgent.unwrap_or(false),
        created_at: Utc::now().naive_utc(),
    };
    let email = mailer::contact_notification(&data, &config.admin_email);

    let mut conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(contact_messages::table)
            .values(&data)
            .execute(&mut conn)
    })
    .await?
    .context("DB error")?;

    let mailer = mailer.into_inner();
    web::block(move || mailer.send(&email)).await??;

    Ok(SimpleResponse::ok("Message sent successfully!"))
}

async fn like_doctor_impl(
    pool: web::Data<DbPool>,
    id: web::Path<i32>,
) -> anyhow::Result<LikeResponse> {
    use crate::schema::doctors;

    let id = id.into_inner();
    let mut conn = get_db_conn(&pool)?;
    let likes = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|conn| {
            let res = diesel::update(doctors::table.find(id))
                .set(doctors::likes.eq(doctors::likes + 1))
                .execute(conn)
                .context("DB error")?;
            if res == 0 {
                bail!("Doctor {} not found", id);
            }

            doctors::table
                .find(id)
                .select(doctors::likes)
                .get_result::<i32>(conn)
                .context("DB error")
        })
    })
    .await??;

    Ok(LikeResponse::ok(likes))
}

async fn like_service_impl(
    pool: web::Data<DbPool>,
    id: web::Path<i32>,
) -> anyhow::Result<LikeResponse> {
    use crate::schema::services;

    let id = id.into_inner();
    let mut conn = get_db_conn(&pool)?;
    let likes = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|conn| {
            let res = diesel::update(services::table.find(id))
                .set(services::likes.eq(services::likes + 1))
                .execute(conn)
                .context("DB error")?;
            if res == 0 {
                bail!("Service {} not found", id);
            }

            services::table
                .find(id)
                .select(services::likes)
                .get_result::<i32>(conn)
                .context("DB error")
        })
    })
    .await??;

    Ok(LikeResponse::ok(likes))
}
