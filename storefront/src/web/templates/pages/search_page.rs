use maud::{html, Markup};
use storefront_db::entity::product;

use crate::web::templates::{
    components::{euro::Euro, header::Header},
    page::Page,
};

pub(crate) struct SearchPage {
    pub(crate) keyword: String,
    pub(crate) products: Vec<product::Model>,
}

impl Page for SearchPage {
    fn get_name(&self) -> &str {
        "Search products"
    }

    fn get_description(&self) -> Option<&str> {
        Some("Search the product catalog")
    }

    fn draw_body(&self) -> Markup {
        html! {
          (Header {
            keyword: &self.keyword
          })
          div class="container" {
            div class="main-content" {
              h4 { "Search results for: " (&self.keyword) }
              table class="listing" {
                thead {
                  tr {
                    th { "Name" }
                    th { "Description" }
                    th { "Price" }
                    th { "Edit" }
                  }
                }
                tbody {
                  @if self.products.is_empty() {
                    "No results!"
                  }
                  @for product in &self.products {
                    tr {
                      td { (&product.name) }
                      td { (&product.description) }
                      td { (Euro(product.price)) }
                      td {
                        a class="btn btn-small" href="#" { "Edit" }
                        " "
                        a class="btn btn-small" href="#" { "Delete" }
                      }
                    }
                  }
                }
              }
              div class="row" {
                a class="btn btn-small" href="#" { "Add" }
              }
            }
          }
        }
    }
}
