use std::collections::HashMap;

use contracts::domain::a001_serving_unit::{ServingUnit, UnitRepository};
use contracts::enums::BaseUnit;
use contracts::shared::languages::{LanguageRegistry, ENGLISH};
use thiserror::Error;

/// Ошибки сохранения формы
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaveError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please select a Base Unit")]
    MissingBaseUnit,

    #[error("Save is already in progress")]
    SaveInProgress,

    #[error("Error saving unit: {0}")]
    Repository(String),
}

/// Поле перевода: код языка, отображаемое название языка, введённый текст
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedNameSlot {
    pub code: String,
    pub language: String,
    pub value: String,
}

/// Состояние формы добавления/редактирования единицы подачи.
///
/// Plain state holder: слой отображения читает поля, пишет ввод
/// пользователя и вызывает `save`; реактивная обвязка остаётся за ним.
#[derive(Debug, Clone)]
pub struct ServingUnitForm {
    existing: Option<ServingUnit>,
    pub en_name: String,
    pub abbreviation: String,
    pub base_unit: Option<BaseUnit>,
    slots: Vec<LocalizedNameSlot>,
    pub is_saving: bool,
}

impl ServingUnitForm {
    /// Пустая форма (режим добавления): по одному слоту на каждый язык реестра
    pub fn new(languages: &LanguageRegistry) -> Self {
        let slots = languages
            .languages()
            .iter()
            .map(|lang| LocalizedNameSlot {
                code: lang.code.clone(),
                language: lang.name.clone(),
                value: String::new(),
            })
            .collect();

        Self {
            existing: None,
            en_name: String::new(),
            abbreviation: String::new(),
            base_unit: None,
            slots,
            is_saving: false,
        }
    }

    /// Форма с загруженной записью (режим редактирования)
    pub fn for_edit(languages: &LanguageRegistry, unit: ServingUnit) -> Self {
        let mut form = Self::new(languages);
        form.load_existing(unit);
        form
    }

    /// Загрузить существующую запись в поля формы.
    ///
    /// Пустой (или неизвестный) код базовой величины оставляет выбор
    /// пустым. Коды языков, отсутствующие в реестре, молча отбрасываются.
    pub fn load_existing(&mut self, unit: ServingUnit) {
        self.en_name = unit.en_name.clone();
        self.abbreviation = unit.abbreviation.clone();
        self.base_unit = BaseUnit::from_code(&unit.base_unit);
        for slot in &mut self.slots {
            if let Some(name) = unit.name_localized.get(&slot.code) {
                slot.value = name.clone();
            }
        }
        self.existing = Some(unit);
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing.is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Все слоты переводов в порядке реестра, включая "en"
    pub fn slots(&self) -> &[LocalizedNameSlot] {
        &self.slots
    }

    /// Слоты для секции переводов: английский пропускается, он вводится
    /// основным полем
    pub fn translation_slots(&self) -> impl Iterator<Item = &LocalizedNameSlot> {
        self.slots.iter().filter(|slot| slot.code != ENGLISH)
    }

    pub fn localized_name(&self, code: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|slot| slot.code == code)
            .map(|slot| slot.value.as_str())
    }

    /// Ввод в поле перевода. Неизвестный код игнорируется.
    pub fn set_localized_name(&mut self, code: &str, value: impl Into<String>) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.code == code) {
            slot.value = value.into();
        }
    }

    /// Проверка обязательных полей. Возвращается первая ошибка:
    /// английское название, затем аббревиатура, затем базовая величина.
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.en_name.trim().is_empty() {
            return Err(SaveError::MissingField("English name"));
        }
        if self.abbreviation.trim().is_empty() {
            return Err(SaveError::MissingField("Abbreviation"));
        }
        if self.base_unit.is_none() {
            return Err(SaveError::MissingBaseUnit);
        }
        Ok(())
    }

    // Карта переводов для записи: только непустые (после trim) значения
    fn collect_localized(&self) -> HashMap<String, String> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let text = slot.value.trim();
                if text.is_empty() {
                    None
                } else {
                    Some((slot.code.clone(), text.to_string()))
                }
            })
            .collect()
    }

    /// Сохранить форму через переданное хранилище.
    ///
    /// Повторный вызов во время незавершённого сохранения отклоняется и до
    /// хранилища не доходит. Флаг `is_saving` сбрасывается на любом исходе;
    /// при ошибке введённые значения сохраняются для повтора.
    pub async fn save(&mut self, repo: &dyn UnitRepository) -> Result<ServingUnit, SaveError> {
        if self.is_saving {
            return Err(SaveError::SaveInProgress);
        }
        self.validate()?;
        let base_unit = self.base_unit.ok_or(SaveError::MissingBaseUnit)?;

        self.is_saving = true;

        let unit = ServingUnit {
            id: self
                .existing
                .as_ref()
                .map(|u| u.id.clone())
                .unwrap_or_default(),
            en_name: self.en_name.trim().to_string(),
            abbreviation: self.abbreviation.trim().to_string(),
            base_unit: base_unit.code().to_string(),
            name_localized: self.collect_localized(),
            is_deleted: self
                .existing
                .as_ref()
                .map(|u| u.is_deleted)
                .unwrap_or(false),
        };

        let result = if unit.is_new() {
            repo.add_unit(&unit).await
        } else {
            repo.update_unit(&unit).await
        };
        self.is_saving = false;

        match result {
            Ok(()) => {
                log::info!("Serving unit '{}' saved", unit.en_name);
                Ok(unit)
            }
            Err(e) => {
                log::warn!("Error saving unit '{}': {}", unit.en_name, e);
                Err(SaveError::Repository(e.to_string()))
            }
        }
    }
}
