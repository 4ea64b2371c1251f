use chrono::Utc;
use contracts::domain::a001_serving_unit::aggregate::ServingUnit;
use contracts::domain::a001_serving_unit::repository::UnitRepository;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_serving_unit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub en_name: String,
    pub abbreviation: String,
    pub base_unit: String,
    pub name_localized: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Карта локализованных названий хранится одной JSON-колонкой
fn decode_localized(raw: &str) -> HashMap<String, String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode_localized(map: &HashMap<String, String>) -> String {
    serde_json::to_string(map).unwrap_or_else(|_| "{}".to_string())
}

impl From<Model> for ServingUnit {
    fn from(m: Model) -> Self {
        ServingUnit {
            id: m.id,
            en_name: m.en_name,
            abbreviation: m.abbreviation,
            base_unit: m.base_unit,
            name_localized: decode_localized(&m.name_localized),
            is_deleted: m.is_deleted,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<ServingUnit>> {
    let mut items: Vec<ServingUnit> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.en_name.to_lowercase().cmp(&b.en_name.to_lowercase()));
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<ServingUnit>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Вставка новой единицы. Пустому id назначается новый UUID.
pub async fn insert(unit: &ServingUnit) -> anyhow::Result<String> {
    let id = if unit.id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        unit.id.clone()
    };
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(id.clone()),
        en_name: Set(unit.en_name.clone()),
        abbreviation: Set(unit.abbreviation.clone()),
        base_unit: Set(unit.base_unit.clone()),
        name_localized: Set(encode_localized(&unit.name_localized)),
        is_deleted: Set(unit.is_deleted),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    active.insert(conn()).await?;
    tracing::info!("Inserted serving unit '{}' ({})", unit.en_name, id);
    Ok(id)
}

pub async fn update(unit: &ServingUnit) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(unit.id.clone()),
        en_name: Set(unit.en_name.clone()),
        abbreviation: Set(unit.abbreviation.clone()),
        base_unit: Set(unit.base_unit.clone()),
        name_localized: Set(encode_localized(&unit.name_localized)),
        is_deleted: Set(unit.is_deleted),
        updated_at: Set(Some(Utc::now())),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: &str) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

// ============================================================================
// UnitRepository port
// ============================================================================

/// Реализация порта `UnitRepository` поверх локальной БД
pub struct SqlUnitRepository;

#[async_trait::async_trait]
impl UnitRepository for SqlUnitRepository {
    async fn add_unit(&self, unit: &ServingUnit) -> anyhow::Result<()> {
        insert(unit).await?;
        Ok(())
    }

    async fn update_unit(&self, unit: &ServingUnit) -> anyhow::Result<()> {
        update(unit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::initialize_database;

    #[test]
    fn test_model_to_aggregate_conversion() {
        let model = Model {
            id: "u1".to_string(),
            en_name: "Gram".to_string(),
            abbreviation: "g".to_string(),
            base_unit: "mass".to_string(),
            name_localized: r#"{"fr":"Gramme"}"#.to_string(),
            is_deleted: false,
            created_at: None,
            updated_at: None,
        };
        let unit: ServingUnit = model.into();
        assert_eq!(unit.id, "u1");
        assert_eq!(unit.base_unit, "mass");
        assert_eq!(unit.localized_name("fr"), Some("Gramme"));
        assert!(!unit.is_deleted);
    }

    #[test]
    fn test_localized_codec() {
        let map = HashMap::from([("hi".to_string(), "ग्राम".to_string())]);
        assert_eq!(decode_localized(&encode_localized(&map)), map);
        // Повреждённая колонка не валит чтение
        assert!(decode_localized("not json").is_empty());
        assert!(decode_localized("").is_empty());
    }

    // Один тест на весь цикл: DB_CONN инициализируется один раз на процесс
    #[tokio::test]
    async fn test_sqlite_round_trip() {
        let db_file =
            std::env::temp_dir().join(format!("serving_units_test_{}.db", Uuid::new_v4()));
        initialize_database(Some(db_file.to_str().unwrap()))
            .await
            .unwrap();

        let unit = ServingUnit::new_for_insert(
            "Gram".to_string(),
            "g".to_string(),
            "mass".to_string(),
            HashMap::from([("fr".to_string(), "Gramme".to_string())]),
        );
        let id = insert(&unit).await.unwrap();
        assert!(!id.is_empty());

        let mut stored = get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.en_name, "Gram");
        assert_eq!(stored.localized_name("fr"), Some("Gramme"));

        stored.abbreviation = "gr".to_string();
        update(&stored).await.unwrap();
        let after = get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(after.abbreviation, "gr");

        let listed = list_all().await.unwrap();
        assert_eq!(listed.len(), 1);

        assert!(soft_delete(&id).await.unwrap());
        assert!(list_all().await.unwrap().is_empty());

        let _ = std::fs::remove_file(&db_file);
    }
}
