//! Bulk test data: plate-style vehicle numbers and full commander names.
//!
//! Generation is deterministic: entry `i` always yields the same value, so
//! seeding twice only produces duplicates, which are skipped.

use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::EntityKind;

/// Letters allowed on plates (Cyrillic with Latin look-alikes).
const PLATE_LETTERS: [char; 12] = ['А', 'В', 'Е', 'К', 'М', 'Н', 'О', 'Р', 'С', 'Т', 'У', 'Х'];

const FIRST_NAMES: [&str; 19] = [
    "Иван", "Пётр", "Александр", "Сергей", "Дмитрий", "Андрей", "Михаил", "Николай",
    "Владимир", "Евгений", "Олег", "Павел", "Виктор", "Юрий", "Борис", "Василий",
    "Геннадий", "Константин", "Леонид",
];

const LAST_NAMES: [&str; 20] = [
    "Иванов", "Петров", "Сидоров", "Козлов", "Смирнов", "Васильев", "Попов", "Андреев",
    "Николаев", "Макаров", "Захаров", "Зайцев", "Соловьёв", "Кузнецов", "Михайлов",
    "Фёдоров", "Морозов", "Волков", "Алексеев", "Павлов",
];

const PATRONYMICS: [&str; 10] = [
    "Иванович", "Петрович", "Александрович", "Сергеевич", "Дмитриевич", "Андреевич",
    "Михайлович", "Николаевич", "Владимирович", "Евгеньевич",
];

/// How many distinct commander names the lists can produce.
pub const MAX_COMMANDER_NAMES: usize = FIRST_NAMES.len() * LAST_NAMES.len() * PATRONYMICS.len();

/// How many distinct plate numbers can be produced.
pub const MAX_VEHICLE_NUMBERS: usize = 999 * 12 * 12 * 12;

/// Plate number for index `i`, e.g. `А001ВС`.
pub fn vehicle_number(i: usize) -> String {
    let digits = i % 999 + 1;
    let mut rest = i / 999;
    let mut letters = [PLATE_LETTERS[0]; 3];
    for slot in letters.iter_mut() {
        *slot = PLATE_LETTERS[rest % PLATE_LETTERS.len()];
        rest /= PLATE_LETTERS.len();
    }
    format!("{}{:03}{}{}", letters[0], digits, letters[1], letters[2])
}

/// "Surname FirstName Patronymic" for index `i`.
pub fn commander_name(i: usize) -> String {
    let last = LAST_NAMES[i % LAST_NAMES.len()];
    let rest = i / LAST_NAMES.len();
    let first = FIRST_NAMES[rest % FIRST_NAMES.len()];
    let patronymic = PATRONYMICS[(rest / FIRST_NAMES.len()) % PATRONYMICS.len()];
    format!("{} {} {}", last, first, patronymic)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub vehicles_added: usize,
    pub vehicles_skipped: usize,
    pub commanders_added: usize,
    pub commanders_skipped: usize,
}

pub struct SeedLogic;

impl SeedLogic {
    /// Insert up to `count` generated entries of each kind. Existing numbers
    /// and names are counted as skipped; any other failure aborts.
    pub fn apply(store: &mut Store, count: usize) -> AppResult<SeedReport> {
        if count > MAX_COMMANDER_NAMES {
            return Err(AppError::Validation(format!(
                "count must be at most {} (available commander names)",
                MAX_COMMANDER_NAMES
            )));
        }

        let mut report = SeedReport::default();

        for i in 0..count {
            match store.create(EntityKind::Vehicle, &vehicle_number(i)) {
                Ok(_) => report.vehicles_added += 1,
                Err(AppError::Duplicate { .. }) => report.vehicles_skipped += 1,
                Err(e) => return Err(e),
            }
        }

        for i in 0..count {
            match store.create(EntityKind::Commander, &commander_name(i)) {
                Ok(_) => report.commanders_added += 1,
                Err(AppError::Duplicate { .. }) => report.commanders_skipped += 1,
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}
