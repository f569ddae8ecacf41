use sea_orm::{
    ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait, PrimaryKeyTrait, Select,
};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult, FieldErrors},
    response::{Listed, PageRequest},
    validation::{does_not_exist, pk_value},
};

pub mod admin_service;
pub mod auth_service;
pub mod basket_service;
pub mod catalog_service;
pub mod manufacturer_service;

/// Run a list query, limited to one page when a page was requested.
pub(crate) async fn fetch_listing<E, C>(
    finder: Select<E>,
    db: &C,
    page: Option<PageRequest>,
) -> AppResult<Listed<E::Model>>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync + 'static,
    C: ConnectionTrait,
{
    let Some(request) = page else {
        return Ok(Listed {
            items: finder.all(db).await?,
            page: None,
        });
    };

    let paginator = finder.paginate(db, request.page_size);
    let count = paginator.num_items().await?;
    let offset = request.offset().ok_or(AppError::InvalidPage)?;
    if request.page > 1 && offset >= count {
        return Err(AppError::InvalidPage);
    }
    let items = paginator.fetch_page(request.page - 1).await?;
    Ok(Listed {
        items,
        page: Some((request, count)),
    })
}

/// Resolve a primary-key reference from a request body, recording a field error
/// when it does not address an existing row.
pub(crate) async fn resolve_reference<E, C>(
    db: &C,
    field: &str,
    raw: &Value,
    errors: &mut FieldErrors,
) -> AppResult<Option<i32>>
where
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    C: ConnectionTrait,
{
    if let Some(id) = pk_value(raw) {
        if E::find_by_id(id).one(db).await?.is_some() {
            return Ok(Some(id));
        }
    }
    errors.add(field, does_not_exist(raw));
    Ok(None)
}

/// Take a field the validators already required.
pub(crate) fn required<'a, T>(field: &str, value: &'a Option<T>) -> AppResult<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| AppError::Validation(FieldErrors::single(field, crate::validation::REQUIRED)))
}
