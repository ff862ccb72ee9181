pub mod entity;

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveValue::NotSet, Condition, ConnectOptions, Database, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use sea_query::{Alias, Expr};
use thiserror::Error;
use tracing::info;

use crate::entity::product;

/// Hard cap on how many rows a single search can return to the page.
pub const SEARCH_RESULT_CAP: u64 = 50;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("DATABASE_URL must be set {0}")]
    DatabaseUrl(#[from] std::env::VarError),
    #[error("database error {0}")]
    Db(#[from] sea_orm::DbErr),
}

#[derive(Clone, Debug)]
pub struct StorefrontDb {
    db: DatabaseConnection,
}

impl StorefrontDb {
    pub async fn connect() -> Result<Self, DbError> {
        let url = std::env::var("DATABASE_URL")?;
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(10).min_connections(0);
        let db: DatabaseConnection = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        Ok(Self { db })
    }

    /// Populates the catalog with a handful of products so a fresh database
    /// has something to search. Does nothing once the table has rows.
    pub async fn insert_sample_products(&self) -> Result<(), DbError> {
        struct SampleProduct {
            name: &'static str,
            description: &'static str,
            price: f64,
        }
        let catalog = [
            SampleProduct {
                name: "Espresso machine",
                description: "15 bar pump, milk frother included",
                price: 249.99,
            },
            SampleProduct {
                name: "Rubber duck",
                description: "Classic yellow bath duck",
                price: 2.5,
            },
            SampleProduct {
                name: "Mechanical keyboard",
                description: "Tenkeyless, brown switches",
                price: 89.0,
            },
            SampleProduct {
                name: "Desk lamp",
                description: "Adjustable arm, warm white LED",
                price: 34.95,
            },
        ];

        if product::Entity::find().count(&self.db).await? > 0 {
            return Ok(());
        }
        let rows: Vec<_> = catalog
            .iter()
            .map(|p| product::ActiveModel {
                id: NotSet,
                name: Set(p.name.to_string()),
                description: Set(p.description.to_string()),
                price: Set(p.price),
            })
            .collect();
        let insert = product::Entity::insert_many(rows).exec(&self.db).await?;
        info!(
            "Seeded sample catalog. Last insert id: {}",
            insert.last_insert_id
        );
        Ok(())
    }

    /// Runs the keyword search, capped and ordered so the page output is stable.
    pub async fn search_products(&self, term: &str) -> Result<Vec<product::Model>, DbError> {
        let products = search_query(term)
            .limit(SEARCH_RESULT_CAP)
            .all(&self.db)
            .await?;
        Ok(products)
    }
}

/// Builds the catalog search as a single parameterized statement. The term is
/// only ever carried as the bound LIKE pattern; it never becomes SQL text, so
/// no input can change the shape of the query.
pub fn search_query(term: &str) -> Select<product::Entity> {
    let pattern = format!("%{}%", escape_like(term));
    // id and price are not text columns, LIKE needs them cast first
    let as_text =
        |col: product::Column| Expr::expr(Expr::col(col).cast_as(Alias::new("text")));
    product::Entity::find()
        .filter(
            Condition::any()
                .add(as_text(product::Column::Id).like(pattern.as_str()))
                .add(Expr::col(product::Column::Name).like(pattern.as_str()))
                .add(Expr::col(product::Column::Description).like(pattern.as_str()))
                .add(as_text(product::Column::Price).like(pattern.as_str())),
        )
        .order_by_asc(product::Column::Id)
}

/// Escapes `%`, `_` and `\` so a search term matches itself literally inside
/// a LIKE pattern instead of acting as a wildcard.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait, Value};

    #[test]
    fn escape_like_leaves_plain_terms_alone() {
        assert_eq!(escape_like("rubber duck"), "rubber duck");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("%_%"), "\\%\\_\\%");
    }

    #[test]
    fn search_query_shape_is_independent_of_the_term() {
        let terms = [
            "",
            "duck",
            "' OR '1'='1",
            "%",
            "_",
            "\\",
            "<script>alert(1)</script>",
            "Robert'); DROP TABLE products;--",
        ];
        let baseline = search_query("").build(DbBackend::Postgres).sql;
        for term in terms {
            let stmt = search_query(term).build(DbBackend::Postgres);
            assert_eq!(stmt.sql, baseline, "statement shape changed for {term:?}");
        }
    }

    #[test]
    fn search_query_binds_one_pattern_four_times() {
        let term = "' OR '1'='1";
        let stmt = search_query(term).build(DbBackend::Postgres);
        assert!(
            !stmt.sql.contains(term),
            "term leaked into the SQL text: {}",
            stmt.sql
        );
        let values = stmt.values.expect("parameterized statement").0;
        assert_eq!(values.len(), 4);
        let pattern = Value::from(format!("%{}%", escape_like(term)));
        assert!(values.iter().all(|v| *v == pattern));
    }

    #[test]
    fn search_query_covers_all_four_columns() {
        let sql = search_query("duck").build(DbBackend::Postgres).sql;
        assert_eq!(sql.matches("LIKE").count(), 4);
        for column in ["id", "name", "description", "price"] {
            assert!(sql.contains(column), "missing {column} in {sql}");
        }
    }
}
