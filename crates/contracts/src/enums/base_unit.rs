use serde::{Deserialize, Serialize};

/// Базовая физическая величина единицы подачи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUnit {
    Mass,
    Volume,
}

impl BaseUnit {
    /// Получить код величины (хранимое значение)
    pub fn code(&self) -> &'static str {
        match self {
            BaseUnit::Mass => "mass",
            BaseUnit::Volume => "volume",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            BaseUnit::Mass => "Mass (e.g., g, oz)",
            BaseUnit::Volume => "Volume (e.g., ml, cup)",
        }
    }

    /// Получить все величины (для выпадающего списка)
    pub fn all() -> Vec<BaseUnit> {
        vec![BaseUnit::Mass, BaseUnit::Volume]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "mass" => Some(BaseUnit::Mass),
            "volume" => Some(BaseUnit::Volume),
            _ => None,
        }
    }
}

impl ToString for BaseUnit {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
