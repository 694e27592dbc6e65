//! Widgets service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::widgets::{
    data::{NewWidget, WidgetUpdate},
    errors::WidgetsServiceError,
    records::WidgetRecord,
    repository::{PgWidgetsRepository, WidgetsRepository},
};

#[derive(Debug, Clone)]
pub struct PgWidgetsService<R = PgWidgetsRepository> {
    repository: R,
}

impl PgWidgetsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgWidgetsRepository::new(pool),
        }
    }
}

impl<R: WidgetsRepository> PgWidgetsService<R> {
    #[must_use]
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    async fn find_existing(&self, name: &str) -> Result<WidgetRecord, WidgetsServiceError> {
        self.repository
            .find_widget(name.to_string())
            .await?
            .ok_or(WidgetsServiceError::NotFound)
    }
}

#[async_trait]
impl<R: WidgetsRepository> WidgetsService for PgWidgetsService<R> {
    #[tracing::instrument(name = "widgets.service.list_widgets", skip(self))]
    async fn list_widgets(&self) -> Result<Vec<WidgetRecord>, WidgetsServiceError> {
        let widgets = self.repository.list_widgets().await?;

        info!(count = widgets.len(), "listed widgets");

        Ok(widgets)
    }

    #[tracing::instrument(name = "widgets.service.get_widget", skip(self, name), fields(widget_name = %name))]
    async fn get_widget(&self, name: String) -> Result<WidgetRecord, WidgetsServiceError> {
        let widget = self.find_existing(&name).await?;

        info!(widget_name = %widget.name, "found widget");

        Ok(widget)
    }

    #[tracing::instrument(
        name = "widgets.service.create_widget",
        skip(self, widget),
        fields(widget_name = %widget.name)
    )]
    async fn create_widget(&self, widget: NewWidget) -> Result<WidgetRecord, WidgetsServiceError> {
        if self.repository.find_widget(widget.name.clone()).await?.is_some() {
            return Err(WidgetsServiceError::AlreadyExists);
        }

        // A concurrent insert can still win; the unique index reports it as AlreadyExists.
        let created = self.repository.insert_widget(widget).await?;

        info!(widget_name = %created.name, price = %created.price, "created widget");

        Ok(created)
    }

    #[tracing::instrument(
        name = "widgets.service.update_widget",
        skip(self, update),
        fields(widget_name = %update.name)
    )]
    async fn update_widget(&self, update: WidgetUpdate) -> Result<WidgetRecord, WidgetsServiceError> {
        let existing = self.find_existing(&update.name).await?;

        let updated = self
            .repository
            .update_widget(existing.name, update.description, update.price)
            .await?;

        info!(widget_name = %updated.name, price = %updated.price, "updated widget");

        Ok(updated)
    }

    #[tracing::instrument(name = "widgets.service.delete_widget", skip(self, name), fields(widget_name = %name))]
    async fn delete_widget(&self, name: String) -> Result<WidgetRecord, WidgetsServiceError> {
        let existing = self.find_existing(&name).await?;

        let rows_affected = self.repository.delete_widget(existing.name.clone()).await?;

        if rows_affected == 0 {
            return Err(WidgetsServiceError::NotFound);
        }

        info!(widget_name = %existing.name, "deleted widget");

        Ok(existing)
    }
}

#[automock]
#[async_trait]
pub trait WidgetsService: Send + Sync {
    /// Retrieves all widgets, ordered by name.
    async fn list_widgets(&self) -> Result<Vec<WidgetRecord>, WidgetsServiceError>;

    /// Retrieve a single widget by case-insensitive name.
    async fn get_widget(&self, name: String) -> Result<WidgetRecord, WidgetsServiceError>;

    /// Creates a new widget unless the name is already taken.
    async fn create_widget(&self, widget: NewWidget) -> Result<WidgetRecord, WidgetsServiceError>;

    /// Replaces description and price of an existing widget. The stored name is kept as-is.
    async fn update_widget(&self, update: WidgetUpdate) -> Result<WidgetRecord, WidgetsServiceError>;

    /// Deletes a widget by case-insensitive name, returning it as it was before deletion.
    async fn delete_widget(&self, name: String) -> Result<WidgetRecord, WidgetsServiceError>;
}
