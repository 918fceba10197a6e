use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

use crate::db::OrmConn;
use crate::entity::access_logs::{ActiveModel, Column, Entity as AccessLogs, Model};
use crate::error::AppResult;

#[derive(Debug, FromQueryResult)]
pub struct IpHitRow {
    pub ip: String,
    pub hits: i64,
}

#[derive(Clone)]
pub struct AccessLogRepository {
    conn: OrmConn,
}

impl AccessLogRepository {
    pub fn new(conn: OrmConn) -> Self {
        Self { conn }
    }

    pub async fn record(&self, ip: String, user_agent: Option<String>) -> AppResult<Model> {
        let active = ActiveModel {
            id: NotSet,
            ip: Set(ip),
            user_agent: Set(user_agent),
            timestamp: NotSet,
        };
        Ok(active.insert(&self.conn).await?)
    }

    pub async fn list_recent(&self, limit: u64) -> AppResult<Vec<Model>> {
        Ok(AccessLogs::find()
            .order_by_desc(Column::Timestamp)
            .limit(limit)
            .all(&self.conn)
            .await?)
    }

    pub async fn count(&self) -> AppResult<i64> {
        Ok(AccessLogs::find().count(&self.conn).await? as i64)
    }

    /// Grouped hit count per ip, most-hit first.
    pub async fn count_by_ip(&self) -> AppResult<Vec<IpHitRow>> {
        Ok(AccessLogs::find()
            .select_only()
            .column(Column::Ip)
            .column_as(Column::Id.count(), "hits")
            .group_by(Column::Ip)
            .order_by_desc(Column::Id.count())
            .into_model::<IpHitRow>()
            .all(&self.conn)
            .await?)
    }
}
