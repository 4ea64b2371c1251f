use anyhow::Result;
use async_trait::async_trait;

use super::aggregate::ServingUnit;

/// Порт хранилища единиц подачи.
/// Конкретная реализация (локальная БД, удалённый сервис) живёт вне формы.
#[async_trait]
pub trait UnitRepository: Send + Sync {
    /// Сохранить новую единицу. `unit.id` пустой, ключ назначает хранилище.
    async fn add_unit(&self, unit: &ServingUnit) -> Result<()>;

    /// Обновить существующую единицу (запись с ключом `unit.id`).
    async fn update_unit(&self, unit: &ServingUnit) -> Result<()>;
}
