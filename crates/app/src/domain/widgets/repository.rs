//! Widgets Repository

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::widgets::{
    data::NewWidget, errors::WidgetsServiceError, records::WidgetRecord,
};

const LIST_WIDGETS_SQL: &str = include_str!("sql/list_widgets.sql");
const FIND_WIDGET_SQL: &str = include_str!("sql/find_widget.sql");
const INSERT_WIDGET_SQL: &str = include_str!("sql/insert_widget.sql");
const UPDATE_WIDGET_SQL: &str = include_str!("sql/update_widget.sql");
const DELETE_WIDGET_SQL: &str = include_str!("sql/delete_widget.sql");

#[derive(Debug, Clone)]
pub struct PgWidgetsRepository {
    pool: PgPool,
}

impl PgWidgetsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WidgetsRepository for PgWidgetsRepository {
    async fn list_widgets(&self) -> Result<Vec<WidgetRecord>, WidgetsServiceError> {
        let widgets = query_as::<Postgres, WidgetRecord>(LIST_WIDGETS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(widgets)
    }

    async fn find_widget(&self, name: String) -> Result<Option<WidgetRecord>, WidgetsServiceError> {
        let widget = query_as::<Postgres, WidgetRecord>(FIND_WIDGET_SQL)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(widget)
    }

    async fn insert_widget(&self, widget: NewWidget) -> Result<WidgetRecord, WidgetsServiceError> {
        let created = query_as::<Postgres, WidgetRecord>(INSERT_WIDGET_SQL)
            .bind(widget.name)
            .bind(widget.description)
            .bind(widget.price)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn update_widget(
        &self,
        name: String,
        description: String,
        price: Decimal,
    ) -> Result<WidgetRecord, WidgetsServiceError> {
        let updated = query_as::<Postgres, WidgetRecord>(UPDATE_WIDGET_SQL)
            .bind(name)
            .bind(description)
            .bind(price)
            .fetch_one(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_widget(&self, name: String) -> Result<u64, WidgetsServiceError> {
        let rows_affected = query(DELETE_WIDGET_SQL)
            .bind(name)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for WidgetRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
        })
    }
}

/// Storage operations behind the widgets service.
#[automock]
#[async_trait]
pub trait WidgetsRepository: Send + Sync {
    /// All stored widgets, ordered by name.
    async fn list_widgets(&self) -> Result<Vec<WidgetRecord>, WidgetsServiceError>;

    /// Find a widget by case-insensitive name.
    async fn find_widget(&self, name: String) -> Result<Option<WidgetRecord>, WidgetsServiceError>;

    /// Insert a widget; a case-insensitive name clash fails with `AlreadyExists`.
    async fn insert_widget(&self, widget: NewWidget) -> Result<WidgetRecord, WidgetsServiceError>;

    /// Replace description and price of the widget stored under exactly `name`.
    async fn update_widget(
        &self,
        name: String,
        description: String,
        price: Decimal,
    ) -> Result<WidgetRecord, WidgetsServiceError>;

    /// Delete the widget stored under exactly `name`, returning the affected row count.
    async fn delete_widget(&self, name: String) -> Result<u64, WidgetsServiceError>;
}
