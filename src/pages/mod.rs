mod content;

use crate::{
    database::get_db_conn,
    models::{
        doctors::Doctor,
        services::{Faq, Service},
    },
    DbPool,
};
use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use anyhow::Context as _;
use diesel::prelude::*;
use serde::Serialize;
use tera::{Context, Tera};

macro_rules! page_funcs {
    ( $( ( $func_name:ident, $url:literal, $template:literal ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[get($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    tera: web::Data<Tera>,
                ) -> impl Responder {
                    let page = match [<$func_name _impl>](pool).await {
                        Ok(context) => tera
                            .render($template, &context)
                            .context("Template error"),
                        Err(err) => Err(err),
                    };
                    match page {
                        Ok(body) => HttpResponse::Ok()
                            .content_type(ContentType::html())
                            .body(body),
                        Err(err) => {
                            log::error!("{} failed: {:#}", stringify!($func_name), err);
                            HttpResponse::InternalServerError().body(err.to_string())
                        }
                    }
                }
            }
        )+
    };
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(doctors)
        .service(services)
        .service(contact);
}

pub fn templates() -> anyhow::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("macros.html", include_str!("../../templates/macros.html")),
        ("hospital.html", include_str!("../../templates/hospital.html")),
        ("doctors.html", include_str!("../../templates/doctors.html")),
        ("services.html", include_str!("../../templates/services.html")),
        ("contact.html", include_str!("../../templates/contact.html")),
    ])
    .context("Failed to compile templates")?;
    Ok(tera)
}

page_funcs! {
    (home, "/", "hospital.html"),
    (doctors, "/doctors", "doctors.html"),
    (services, "/services", "services.html"),
    (contact, "/contact", "contact.html"),
}

/// A service with its JSON columns decoded for display.
#[derive(Serialize)]
struct ServiceView {
    id: i32,
    name: String,
    icon: String,
    description: String,
    price_range: String,
    likes: i32,
    long_description: Option<String>,
    procedures: Vec<String>,
    duration: Option<String>,
    preparation: Option<String>,
    recovery_time: Option<String>,
    success_rate: Option<String>,
    faqs: Vec<Faq>,
}

impl ServiceView {
    fn from_service(service: Service) -> anyhow::Result<Self> {
        let procedures = service.procedure_list()?;
        let faqs = service.faq_list()?;
        Ok(Self {
            id: service.id,
            name: service.name,
            icon: service.icon,
            description: service.description,
            price_range: service.price_range,
            likes: service.likes,
            long_description: service.long_description,
            procedures,
            duration: service.duration,
            preparation: service.preparation,
            recovery_time: service.recovery_time,
            success_rate: service.success_rate,
            faqs,
        })
    }
}

async fn load_doctors(pool: &web::Data<DbPool>) -> anyhow::Result<Vec<Doctor>> {
    use crate::schema::doctors;

    let mut conn = get_db_conn(pool)?;
    let docs = web::block(move || {
        doctors::table
            .order(doctors::id.asc())
            .select(Doctor::as_select())
            .load(&mut conn)
    })
    .await?
    .context("DB error")?;
    Ok(docs)
}

async fn home_impl(pool: web::Data<DbPool>) -> anyhow::Result<Context> {
    let mut context = Context::new();
    context.insert("doctors", &load_doctors(&pool).await?);
    context.insert("testimonials", &content::testimonials());
    Ok(context)
}

async fn doctors_impl(pool: web::Data<DbPool>) -> anyhow::Result<Context> {
    let mut context = Context::new();
    context.insert("doctors", &load_doctors(&pool).await?);
    Ok(context)
}

async fn services_impl(pool: web::Data<DbPool>) -> anyhow::Result<Context> {
    use crate::schema::services;

    let mut conn = get_db_conn(&pool)?;
    let srvs = web::block(move || {
        services::table
            .order(services::id.asc())
            .select(Service::as_select())
            .load(&mut conn)
    })
    .await?
    .context("DB error")?;

    let srvs = srvs
        .into_iter()
        .map(ServiceView::from_service)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut context = Context::new();
    context.insert("services", &srvs);
    Ok(context)
}

async fn contact_impl(_pool: web::Data<DbPool>) -> anyhow::Result<Context> {
    let mut context = Context::new();
    context.insert("departments", &content::departments());
    context.insert("faqs", &content::contact_faqs());
    Ok(context)
}
