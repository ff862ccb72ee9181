use axum::response::{Html, IntoResponse};
use maud::{html, Markup, Render};

use super::components::footer::Footer;
use super::head::HtmlHead;

pub(crate) trait Page {
    fn get_name(&self) -> &str;
    fn get_description(&self) -> Option<&str> {
        None
    }
    fn draw_body(&self) -> Markup;
}

pub(crate) struct RenderPage<T: Page>(pub(crate) T);

impl<T> IntoResponse for RenderPage<T>
where
    T: Page,
{
    fn into_response(self) -> axum::response::Response {
        Html(self.render().0).into_response()
    }
}

impl<T> Render for RenderPage<T>
where
    T: Page,
{
    fn render(&self) -> Markup {
        let page = &self.0;
        let header = HtmlHead {
            title: page.get_name(),
            description: page.get_description(),
        };
        html! {
          (header)
          body {
            (page.draw_body())
            ((Footer {}))
          }
        }
    }
}
