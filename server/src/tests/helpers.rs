#[cfg(test)]
pub mod tests {
    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{
        body::MessageBody,
        dev::ServiceResponse,
        error::Error,
        http::header,
        test,
        web::{self, Data},
        App,
    };
    use chrono::{Duration, Utc};
    use diesel::{self, PgConnection, RunQueryDsl};
    use serde::{de::DeserializeOwned, Serialize};

    use db::{
        models::Question,
        schema::{choices, questions},
    };

    use crate::routes::{not_found, routes};
    use crate::templates::new_templates;

    pub async fn get_service(
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
        test::init_service(
            App::new()
                .app_data(Data::new(db::new_pool()))
                .app_data(Data::new(new_templates().unwrap()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await
    }

    /// Creates a question published `days` from now; negative values are in the past.
    pub fn create_question(conn: &PgConnection, question_text: &str, days: i64) -> Question {
        Question::create(
            conn,
            question_text.to_string(),
            Utc::now() + Duration::days(days),
        )
        .unwrap()
    }

    pub fn clear_polls_data(conn: &PgConnection) {
        diesel::delete(choices::table).execute(conn).unwrap();
        diesel::delete(questions::table).execute(conn).unwrap();
    }

    /// Helper for HTTP GET integration tests, returning the status and the html body
    pub async fn test_get(route: &str) -> (u16, String) {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (
            status,
            String::from_utf8(body.to_vec())
                .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
        )
    }

    /// Helper for HTTP GET integration tests that respond with json, such as errors
    pub async fn test_get_json<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP POST form submissions, returning the status, any redirect
    /// location and the html body
    pub async fn test_post<T: Serialize>(route: &str, params: T) -> (u16, Option<String>, String) {
        let app = get_service().await;

        let req = test::TestRequest::post().set_form(&params).uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = test::read_body(res).await;

        (
            status,
            location,
            String::from_utf8(body.to_vec())
                .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
        )
    }
}
