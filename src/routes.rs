use crate::api::{attendance, dashboard, department, employee};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/add_employee").route(web::post().to(employee::add_employee)))
        .service(web::resource("/employees").route(web::get().to(employee::list_employees)))
        .service(
            web::resource("/update_employee/{id}")
                .route(web::put().to(employee::update_employee)),
        )
        .service(
            web::resource("/delete_employee/{id}")
                .route(web::delete().to(employee::delete_employee)),
        )
        .service(web::resource("/dashboard/summary").route(web::get().to(dashboard::summary)))
        .service(
            web::resource("/departments")
                .route(web::get().to(department::list_departments))
                .route(web::post().to(department::add_department)),
        )
        .service(
            web::resource("/departments/{id}")
                .route(web::put().to(department::update_department))
                .route(web::delete().to(department::delete_department)),
        )
        .service(
            web::resource("/attendance").route(web::post().to(attendance::submit_attendance)),
        )
        .service(
            web::resource("/attendance/{date}").route(web::get().to(attendance::view_attendance)),
        );
}
