use serde_json::Value;
use sqlx::{PgPool, Row};

use crate::record_api::{
    domain::model::enums::record_api_domain_error::RecordApiDomainError,
    infrastructure::persistence::repositories::record_repository::{
        CreateRecordCriteria, DeleteRecordCriteria, GetRecordCriteria, ListRecordsCriteria,
        RecordRepository, UpdateRecordCriteria,
    },
    interfaces::acl::authorization_gateway::RowRestriction,
};

pub struct SqlxRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn quote_identifier(identifier: &str) -> Result<String, RecordApiDomainError> {
        if identifier.is_empty()
            || !identifier
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(RecordApiDomainError::InvalidQueryParameters);
        }

        Ok(format!("\"{}\"", identifier))
    }

    fn push_restriction(clauses: &mut Vec<String>, restriction: &RowRestriction) {
        if !restriction.clause.is_empty() {
            clauses.push(format!("({})", restriction.clause));
        }
    }
}

#[async_trait::async_trait]
impl RecordRepository for SqlxRecordRepositoryImpl {
    async fn list_records(
        &self,
        criteria: ListRecordsCriteria,
    ) -> Result<Vec<Value>, RecordApiDomainError> {
        let table = Self::quote_identifier(&criteria.table_name)?;

        let mut clauses = Vec::new();
        let mut bind_index = 0usize;
        for (column, _) in &criteria.filters {
            let quoted = Self::quote_identifier(column)?;
            bind_index += 1;
            clauses.push(format!("t.{quoted}::text = ${bind_index}"));
        }
        Self::push_restriction(&mut clauses, &criteria.restriction);
        bind_index += criteria.restriction.params.len();

        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };

        let order_clause = match &criteria.order_by {
            Some(column) => {
                let quoted = Self::quote_identifier(column)?;
                let direction = if criteria.order_desc { "DESC" } else { "ASC" };
                format!(" ORDER BY t.{quoted} {direction}")
            }
            None => String::new(),
        };

        let statement = format!(
            "SELECT to_jsonb(t) AS payload FROM {table} AS t{where_clause}{order_clause} LIMIT ${} OFFSET ${}",
            bind_index + 1,
            bind_index + 2
        );

        let mut query = sqlx::query(&statement);
        for (_, value) in &criteria.filters {
            query = query.bind(value.clone());
        }
        for param in &criteria.restriction.params {
            query = query.bind(param.clone());
        }
        query = query.bind(criteria.limit).bind(criteria.offset);

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                row.try_get("payload")
                    .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))
            })
            .collect()
    }

    async fn get_record(
        &self,
        criteria: GetRecordCriteria,
    ) -> Result<Option<Value>, RecordApiDomainError> {
        let table = Self::quote_identifier(&criteria.table_name)?;
        let id_column = Self::quote_identifier(&criteria.id_column)?;

        let mut clauses = vec![format!("t.{id_column}::text = $1")];
        Self::push_restriction(&mut clauses, &criteria.restriction);

        let statement = format!(
            "SELECT to_jsonb(t) AS payload FROM {table} AS t WHERE {}",
            clauses.join(" AND ")
        );

        let mut query = sqlx::query(&statement).bind(criteria.record_id.clone());
        for param in &criteria.restriction.params {
            query = query.bind(param.clone());
        }

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| {
            r.try_get("payload")
                .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))
        })
        .transpose()
    }

    async fn create_record(
        &self,
        criteria: CreateRecordCriteria,
    ) -> Result<Value, RecordApiDomainError> {
        if criteria.columns.is_empty() {
            return Err(RecordApiDomainError::InvalidPayload);
        }

        let table = Self::quote_identifier(&criteria.table_name)?;
        let quoted_columns = criteria
            .columns
            .iter()
            .map(|column| Self::quote_identifier(column))
            .collect::<Result<Vec<_>, _>>()?;

        let statement = format!(
            "INSERT INTO {table} AS t ({}) SELECT {} FROM jsonb_populate_record(NULL::{table}, $1::jsonb) AS r RETURNING to_jsonb(t) AS payload",
            quoted_columns.join(", "),
            quoted_columns
                .iter()
                .map(|column| format!("r.{column}"))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let row = sqlx::query(&statement)
            .bind(criteria.payload)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))?;

        row.try_get("payload")
            .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))
    }

    async fn update_record(
        &self,
        criteria: UpdateRecordCriteria,
    ) -> Result<Option<Value>, RecordApiDomainError> {
        if criteria.columns.is_empty() {
            return Err(RecordApiDomainError::InvalidPayload);
        }

        let table = Self::quote_identifier(&criteria.table_name)?;
        let id_column = Self::quote_identifier(&criteria.id_column)?;

        // The payload record is projected per column instead of joined via
        // FROM, so the restriction clause's unqualified column references
        // stay unambiguous.
        let set_clause = criteria
            .columns
            .iter()
            .map(|column| {
                let quoted = Self::quote_identifier(column)?;
                Ok::<String, RecordApiDomainError>(format!(
                    "{quoted} = (jsonb_populate_record(NULL::{table}, $1::jsonb)).{quoted}"
                ))
            })
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");

        let mut clauses = vec![format!("{id_column}::text = $2")];
        Self::push_restriction(&mut clauses, &criteria.restriction);

        let statement = format!(
            "UPDATE {table} SET {set_clause} WHERE {} RETURNING to_jsonb({table}) AS payload",
            clauses.join(" AND ")
        );

        let mut query = sqlx::query(&statement)
            .bind(criteria.payload)
            .bind(criteria.record_id.clone());
        for param in &criteria.restriction.params {
            query = query.bind(param.clone());
        }

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| {
            r.try_get("payload")
                .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))
        })
        .transpose()
    }

    async fn delete_record(
        &self,
        criteria: DeleteRecordCriteria,
    ) -> Result<bool, RecordApiDomainError> {
        let table = Self::quote_identifier(&criteria.table_name)?;
        let id_column = Self::quote_identifier(&criteria.id_column)?;

        let mut clauses = vec![format!("{id_column}::text = $1")];
        Self::push_restriction(&mut clauses, &criteria.restriction);

        let statement = format!("DELETE FROM {table} WHERE {}", clauses.join(" AND "));

        let mut query = sqlx::query(&statement).bind(criteria.record_id.clone());
        for param in &criteria.restriction.params {
            query = query.bind(param.clone());
        }

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
