use maud::{html, Render};

use crate::web::templates::components::search::SearchBox;

pub(crate) struct Header<'a> {
    pub(crate) keyword: &'a str,
}

impl<'a> Render for Header<'a> {
    fn render(&self) -> maud::Markup {
        html! {
          header {
            div class="header" {
              a class="nav-item" href="/search" {
                "Products"
              };
              (SearchBox {
                keyword: self.keyword
              })
            }
          }
        }
    }
}
