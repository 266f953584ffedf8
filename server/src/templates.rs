use actix_web::HttpResponse;
use serde::Serialize;
use tera::{Context, Tera};

use errors::Error;

pub const INDEX: &str = "polls/index.html";
pub const DETAIL: &str = "polls/detail.html";
pub const RESULTS: &str = "polls/results.html";

/// Builds the template set once at startup; templates are compiled into the binary.
pub fn new_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("polls/base.html", include_str!("../templates/polls/base.html")),
        (INDEX, include_str!("../templates/polls/index.html")),
        (DETAIL, include_str!("../templates/polls/detail.html")),
        (RESULTS, include_str!("../templates/polls/results.html")),
    ])?;

    Ok(tera)
}

pub fn render_to_string<T>(tera: &Tera, template_name: &str, data: &T) -> Result<String, Error>
where
    T: Serialize,
{
    let context = Context::from_serialize(data).map_err(|err| {
        error!("Failed to build context for {} - {}", template_name, err);
        Error::InternalServerError(err.to_string())
    })?;

    tera.render(template_name, &context).map_err(|err| {
        error!("Failed to render {} - {}", template_name, err);
        Error::InternalServerError(err.to_string())
    })
}

pub fn render<T>(tera: &Tera, template_name: &str, data: &T) -> Result<HttpResponse, Error>
where
    T: Serialize,
{
    let body = render_to_string(tera, template_name, data)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
