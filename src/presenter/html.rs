// ==========================================
// Анализатор прайс-листов - экспорт в HTML
// ==========================================
// Назначение: статический UTF-8 документ с таблицей позиций
// Существующий файл по указанному пути перезаписывается
// ==========================================

use crate::domain::ProductRecord;
use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Путь экспорта по умолчанию
pub const DEFAULT_EXPORT_PATH: &str = "output.html";

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Позиции продуктов</title>
    <meta charset="UTF-8">
    <style>
        table {
            width: 100%;
            border-collapse: collapse;
        }
        th, td {
            padding: 10px;
            border: 1px solid #ddd;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
    </style>
</head>
<body>
    <h1>Список позиций продуктов</h1>
    <table>
        <thead>
            <tr>
                <th>Номер</th>
                <th>Название</th>
                <th>Цена</th>
                <th>Фасовка</th>
                <th>Цена за кг.</th>
            </tr>
        </thead>
        <tbody>
"#;

const DOCUMENT_TAIL: &str = r#"        </tbody>
    </table>
</body>
</html>
"#;

/// Экранирование спецсимволов HTML в наименовании
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Строит HTML-документ по последовательности записей.
/// Записи выводятся в переданном порядке, нумерация с единицы.
pub fn render_document(records: &[ProductRecord]) -> String {
    let mut document = String::from(DOCUMENT_HEAD);

    for (idx, record) in records.iter().enumerate() {
        document.push_str("            <tr>\n");
        document.push_str(&format!("                <td>{}</td>\n", idx + 1));
        document.push_str(&format!("                <td>{}</td>\n", escape(&record.name)));
        document.push_str(&format!("                <td>{:.2}</td>\n", record.price));
        document.push_str(&format!("                <td>{:.3}</td>\n", record.weight));
        document.push_str(&format!("                <td>{:.2}</td>\n", record.price_per_kg));
        document.push_str("            </tr>\n");
    }

    document.push_str(DOCUMENT_TAIL);
    document
}

/// Записывает HTML-документ по указанному пути (перезапись).
pub fn export_html(records: &[ProductRecord], path: impl AsRef<Path>) -> ImportResult<()> {
    let path = path.as_ref();
    let document = render_document(records);

    fs::write(path, document).map_err(|e| ImportError::ExportWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!("Данные экспортированы в файл {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64, weight: f64, price_per_kg: f64) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            price,
            weight,
            price_per_kg,
        }
    }

    #[test]
    fn test_render_document_contains_rows() {
        let html = render_document(&[record("Яблоко", 100.5, 0.5, 201.0)]);

        assert!(html.contains("<td>Яблоко</td>"));
        assert!(html.contains("<td>100.50</td>"));
        assert!(html.contains("<td>0.500</td>"));
        assert!(html.contains("<td>201.00</td>"));
    }

    #[test]
    fn test_render_document_numbering_and_schema() {
        let html = render_document(&[
            record("Первый", 1.0, 1.0, 1.0),
            record("Второй", 2.0, 1.0, 2.0),
        ]);

        assert!(html.contains("<th>Номер</th>"));
        assert!(html.contains("<th>Фасовка</th>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn test_render_document_escapes_names() {
        let html = render_document(&[record("Чай <зелёный> & чёрный", 10.0, 1.0, 10.0)]);

        assert!(html.contains("Чай &lt;зелёный&gt; &amp; чёрный"));
        assert!(!html.contains("<зелёный>"));
    }

    #[test]
    fn test_render_document_is_utf8_html() {
        let html = render_document(&[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.ends_with("</html>\n"));
    }
}
