use maud::{html, Render};

/// Price display, always two decimals with the euro sign appended.
pub(crate) struct Euro(pub(crate) f64);

impl Render for Euro {
    fn render(&self) -> maud::Markup {
        html! {
            span class="price" {
                (format!("{:.2}€", self.0))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Euro;
    use maud::Render;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(Euro(9.0).render().0, "<span class=\"price\">9.00€</span>");
        assert_eq!(Euro(12.5).render().0, "<span class=\"price\">12.50€</span>");
        assert_eq!(Euro(0.0).render().0, "<span class=\"price\">0.00€</span>");
    }
}
