//! Statement builders for the `yips` table.
//!
//! Every caller-supplied value is bound as a parameter; none is ever spliced
//! into statement text.

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DeriveIden, EntityTrait, Insert, QueryFilter, QueryOrder, QuerySelect, Select,
    UpdateMany,
};

use yipper_core::domain::NewYip;

use super::entity::yip::{self, Column, Entity as YipEntity};

/// SQLite's `instr(haystack, needle)`: 1-based position of `needle`, 0 if absent.
#[derive(DeriveIden)]
struct Instr;

/// Builds the statements the repository executes.
pub struct YipQuery;

impl YipQuery {
    /// Every yip, highest id (most recent) first.
    pub fn list_all() -> Select<YipEntity> {
        YipEntity::find().order_by_desc(Column::Id)
    }

    /// Ids of yips whose body contains `term`, case-sensitively.
    ///
    /// `LIKE` would fold ASCII case and treat `%` and `_` as wildcards, so the
    /// match uses `instr`. An empty term matches every yip.
    pub fn search(term: &str) -> Select<YipEntity> {
        let position = Func::cust(Instr)
            .arg(Expr::col(Column::Yip))
            .arg(term.to_string());

        YipEntity::find()
            .select_only()
            .column(Column::Id)
            .filter(Expr::expr(position).gt(0))
            .order_by_asc(Column::Id)
    }

    /// Yips whose author is exactly `name`, oldest first.
    pub fn by_author(name: &str) -> Select<YipEntity> {
        YipEntity::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
    }

    /// `UPDATE yips SET likes = likes + 1 WHERE id = ?`, done by the store itself.
    pub fn increment_likes(id: i64) -> UpdateMany<YipEntity> {
        YipEntity::update_many()
            .col_expr(Column::Likes, Expr::col(Column::Likes).add(1))
            .filter(Column::Id.eq(id))
    }

    /// The like count of one yip.
    pub fn likes_of(id: i64) -> Select<YipEntity> {
        YipEntity::find_by_id(id)
            .select_only()
            .column(Column::Likes)
    }

    /// Append a new yip with zero likes; the store assigns its id.
    pub fn insert(new: &NewYip) -> Insert<yip::ActiveModel> {
        YipEntity::insert(yip::ActiveModel::from(new))
    }

    /// Any one yip id by `name`, used to check the author has posted before.
    pub fn exists_author(name: &str) -> Select<YipEntity> {
        YipEntity::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::Name.eq(name))
            .limit(1)
    }
}
