use actix_web::{HttpResponse, Responder};

pub async fn greet() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Welcome to the Actix CSRF example!</h1>")
}

pub async fn submit() -> impl Responder {
    HttpResponse::Ok().body("Form accepted")
}
