// ==========================================
// Анализатор прайс-листов - определение разделителя
// ==========================================
// Назначение: эвристика по образцу первых ~300 байт файла
// Контракт: никогда не падает, всегда возвращает один байт
// ==========================================

/// Размер образца для анализа, байт
pub const SAMPLE_LEN: usize = 300;

/// Разделитель по умолчанию при неоднозначном образце
pub const FALLBACK_DELIMITER: u8 = b';';

/// Кандидаты в разделители
const CANDIDATES: [u8; 4] = [b';', b',', b'\t', b'|'];

/// Определяет разделитель колонок по текстовому образцу.
///
/// Считает кандидатов только в первой строке образца (там лежат
/// заголовки): в строках данных десятичные запятые перевесили бы
/// точку с запятой. Побеждает самый частый кандидат; пустой образец,
/// нулевой счёт и ничья дают запасной вариант `;`.
pub fn sniff_delimiter(sample: &str) -> u8 {
    let header_line = sample.lines().next().unwrap_or("");

    let counts =
        CANDIDATES.map(|candidate| header_line.bytes().filter(|b| *b == candidate).count());
    let best_count = counts.iter().copied().max().unwrap_or(0);

    // Неоднозначный образец: ни одного кандидата либо максимум
    // достигнут более чем одним - берём запасной вариант
    if best_count == 0 || counts.iter().filter(|c| **c == best_count).count() > 1 {
        return FALLBACK_DELIMITER;
    }

    CANDIDATES[counts.iter().position(|c| *c == best_count).unwrap_or(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_semicolon() {
        assert_eq!(sniff_delimiter("Название;Цена;Вес\nЯблоко;100,5;0,5"), b';');
    }

    #[test]
    fn test_sniff_comma() {
        assert_eq!(sniff_delimiter("Товар,Розница,Масса\n"), b',');
    }

    #[test]
    fn test_sniff_tab() {
        assert_eq!(sniff_delimiter("Продукт\tЦена\tФасовка"), b'\t');
    }

    #[test]
    fn test_sniff_pipe() {
        assert_eq!(sniff_delimiter("Товар|Цена|Вес"), b'|');
    }

    #[test]
    fn test_sniff_fallback_on_no_candidates() {
        assert_eq!(sniff_delimiter("просто текст без разделителей"), b';');
    }

    #[test]
    fn test_sniff_fallback_on_empty_sample() {
        assert_eq!(sniff_delimiter(""), b';');
    }

    #[test]
    fn test_sniff_ignores_decimal_commas_in_data_rows() {
        // Запятые в строках данных не должны перевесить `;` заголовка
        let sample = "Название;Цена;Вес\nЯблоко;100,5;0,5\nГруша;120,0;0,4";
        assert_eq!(sniff_delimiter(sample), b';');
    }

    #[test]
    fn test_sniff_tie_prefers_fallback() {
        // `;` и `,` по одному разу: при ничьей побеждает `;`
        assert_eq!(sniff_delimiter("а;б,в"), b';');
    }

    #[test]
    fn test_sniff_tie_without_fallback_candidate() {
        // Запятая и табуляция по два раза, `;` отсутствует:
        // ничья всё равно даёт запасной вариант
        assert_eq!(sniff_delimiter("а,б\tв\tг,д"), b';');
    }
}
