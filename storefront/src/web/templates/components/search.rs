use maud::{html, Render};

/// Keyword box that submits back to the search page. The current term is
/// echoed into the input value, maud escapes it on the way out.
pub(crate) struct SearchBox<'a> {
    pub(crate) keyword: &'a str,
}

impl<'a> Render for SearchBox<'a> {
    fn render(&self) -> maud::Markup {
        html! {
          form class="search-container" action="/search" method="get" {
            input class="search-box" type="text" name="keyword" value=(self.keyword);
            button class="btn" type="submit" {
              "Search"
            }
          }
        }
    }
}
