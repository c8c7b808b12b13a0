// ==========================================
// Анализатор прайс-листов - консольная таблица
// ==========================================
// Назначение: таблица фиксированных колонок с рамкой
// Форматы: цены 2 знака, вес 3 знака, нумерация с единицы
// ==========================================

use crate::domain::ProductRecord;

/// Заголовки колонок консольной таблицы
const HEADERS: [&str; 5] = ["№", "Наименование", "Цена", "Вес", "Цена за кг."];

/// Строит таблицу с рамкой по последовательности записей.
///
/// Записи выводятся в переданном порядке (сортировка - дело
/// вызывающего). `name_width` - минимальная ширина колонки
/// наименования, обычно `Catalog::name_width()`.
pub fn render_table(records: &[ProductRecord], name_width: usize) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            [
                (idx + 1).to_string(),
                r.name.clone(),
                format!("{:.2}", r.price),
                format!("{:.3}", r.weight),
                format!("{:.2}", r.price_per_kg),
            ]
        })
        .collect();

    // Ширина каждой колонки: максимум по заголовку и содержимому.
    // Ширина считается в символах: кириллица в байтах шире
    let mut widths = [0usize; 5];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    widths[1] = widths[1].max(name_width);
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = |fill: char| {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&fill.to_string().repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let render_row = |cells: &[String; 5]| {
        let mut line = String::from("|");
        for (i, cell) in cells.iter().enumerate() {
            let pad = widths[i] - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        line.push('\n');
        line
    };

    let header_row: [String; 5] = HEADERS.map(|h| h.to_string());

    let mut table = String::new();
    table.push_str(&border('-'));
    table.push_str(&render_row(&header_row));
    table.push_str(&border('='));
    for row in &rows {
        table.push_str(&render_row(row));
        table.push_str(&border('-'));
    }
    table
}
