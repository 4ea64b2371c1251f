use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Единица подачи блюда (грамм, стакан и т.д.)
///
/// Идентификатор — строковый ключ хранилища; пустая строка означает
/// новую, ещё не сохранённую запись.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingUnit {
    pub id: String,

    #[serde(rename = "enName")]
    pub en_name: String,

    pub abbreviation: String,

    /// Код базовой физической величины: "mass" или "volume".
    /// В старых записях может быть пустым.
    #[serde(rename = "baseUnit")]
    pub base_unit: String,

    /// Локализованные названия: код языка -> название.
    /// Записи с пустым (после trim) названием не хранятся.
    #[serde(rename = "nameLocalized", default)]
    pub name_localized: HashMap<String, String>,

    /// Мягкое удаление (soft delete)
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

impl ServingUnit {
    /// Создать новую единицу для вставки в хранилище
    pub fn new_for_insert(
        en_name: String,
        abbreviation: String,
        base_unit: String,
        name_localized: HashMap<String, String>,
    ) -> Self {
        Self {
            id: String::new(),
            en_name,
            abbreviation,
            base_unit,
            name_localized,
            is_deleted: false,
        }
    }

    /// Запись ещё не сохранена (пустой id)
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// Локализованное название для кода языка
    pub fn localized_name(&self, code: &str) -> Option<&str> {
        self.name_localized.get(code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_uses_camel_case_names() {
        let unit = ServingUnit {
            id: "u1".to_string(),
            en_name: "Gram".to_string(),
            abbreviation: "g".to_string(),
            base_unit: "mass".to_string(),
            name_localized: HashMap::from([("fr".to_string(), "Gramme".to_string())]),
            is_deleted: false,
        };

        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["enName"], "Gram");
        assert_eq!(json["abbreviation"], "g");
        assert_eq!(json["baseUnit"], "mass");
        assert_eq!(json["nameLocalized"]["fr"], "Gramme");
        assert_eq!(json["isDeleted"], false);

        let parsed: ServingUnit = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, unit);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let parsed: ServingUnit = serde_json::from_str(
            r#"{"id":"","enName":"Cup","abbreviation":"cup","baseUnit":"volume"}"#,
        )
        .unwrap();
        assert!(parsed.name_localized.is_empty());
        assert!(!parsed.is_deleted);
    }

    #[test]
    fn test_empty_id_marks_new_record() {
        let unit = ServingUnit::new_for_insert(
            "Gram".to_string(),
            "g".to_string(),
            "mass".to_string(),
            HashMap::new(),
        );
        assert!(unit.is_new());
        assert!(!unit.is_deleted);
    }
}
