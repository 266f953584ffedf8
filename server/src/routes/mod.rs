use actix_web::{web, HttpResponse};

use errors::ErrorResponse;

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .route("/", web::get().to(polls::index))
            .service(
                web::scope("/{id}")
                    .route("/", web::get().to(polls::detail))
                    .route("/results/", web::get().to(polls::results))
                    .route("/vote/", web::post().to(polls::vote)),
            ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use errors::ErrorResponse;

    use super::{not_found, routes};

    #[actix_rt::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(
            App::new()
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/questions").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 404);

        let body: ErrorResponse = test::read_body_json(res).await;
        assert_eq!(body.errors[0], "Not Found");
    }
}
