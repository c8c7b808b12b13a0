// ==========================================
// Анализатор прайс-листов - распознавание заголовков
// ==========================================
// Назначение: сопоставить заголовки файла трём обязательным ролям
// Правило: файл без полного набора ролей пропускается целиком
// ==========================================

use crate::domain::{ColumnRole, HeaderRoleMap};

/// Сопоставляет список заголовков файла трём ролям.
///
/// Каждый заголовок классифицируется без учёта регистра. Если на одну
/// роль претендуют несколько колонок, побеждает последняя по порядку
/// обхода (поздняя перезаписывает раннюю) - поведение сохранено как
/// документированное, без «исправления».
///
/// `None` - хотя бы одна роль не нашлась; файл обрабатывать нельзя.
pub fn resolve_roles(headers: &[String]) -> Option<HeaderRoleMap> {
    let mut product = None;
    let mut price = None;
    let mut weight = None;

    for (index, header) in headers.iter().enumerate() {
        match ColumnRole::of_header(header) {
            ColumnRole::Product => product = Some(index),
            ColumnRole::Price => price = Some(index),
            ColumnRole::Weight => weight = Some(index),
            ColumnRole::Unknown => {}
        }
    }

    Some(HeaderRoleMap {
        product: product?,
        price: price?,
        weight: weight?,
    })
}
