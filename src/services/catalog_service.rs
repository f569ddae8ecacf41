use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity::watches::{Column, Entity as Watches},
    error::{AppError, AppResult},
    models::WatchRepr,
    response::{Listed, PageRequest},
    routes::params::{SortOrder, WatchQuery, WatchSortBy},
    services::fetch_listing,
    state::AppState,
};

pub async fn list_watches(
    state: &AppState,
    query: &WatchQuery,
    page: Option<PageRequest>,
) -> AppResult<Listed<WatchRepr>> {
    let mut finder = Watches::find();

    for term in query.search_terms() {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        finder = finder.filter(
            Expr::expr(Func::lower(Expr::col(Column::Name)))
                .like(LikeExpr::new(pattern).escape('\\')),
        );
    }

    for (sort_by, sort_order) in query.ordering() {
        let column = match sort_by {
            WatchSortBy::Name => Column::Name,
            WatchSortBy::Price => Column::Price,
        };
        finder = match sort_order {
            SortOrder::Asc => finder.order_by_asc(column),
            SortOrder::Desc => finder.order_by_desc(column),
        };
    }
    finder = finder.order_by_asc(Column::Id);

    let listed = fetch_listing(finder, &state.orm, page).await?;
    Ok(listed.map(WatchRepr::from))
}

pub async fn get_watch(state: &AppState, id: i32) -> AppResult<WatchRepr> {
    Watches::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(WatchRepr::from)
        .ok_or(AppError::NotFound)
}

/// Escape LIKE wildcards so a search term only ever matches literally.
fn escape_like(term: &str) -> String {
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
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%_real\\"), "100\\%\\_real\\\\");
        assert_eq!(escape_like("seiko"), "seiko");
    }
}
