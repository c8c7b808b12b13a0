// ==========================================
// Анализатор прайс-листов - каталог товаров
// ==========================================
// Назначение: накопитель нормализованных записей
// Владение: импортёр пишет на этапе загрузки,
// поиск и вывод читают после её завершения
// ==========================================

use crate::domain::ProductRecord;

/// Каталог: упорядоченное хранилище записей со всех обработанных файлов.
///
/// Порядок вставки = порядок обнаружения файлов, затем порядок строк
/// внутри файла. Дедупликации нет. После фазы загрузки только читается.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    name_width: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет запись и обновляет максимальную ширину наименования.
    pub fn push(&mut self, record: ProductRecord) {
        // Ширина в символах, не в байтах: кириллица в UTF-8 двухбайтовая
        self.name_width = self.name_width.max(record.name.chars().count());
        self.records.push(record);
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Максимальная длина наименования (в символах) по всему каталогу.
    /// Используется только для выравнивания при выводе.
    pub fn name_width(&self) -> usize {
        self.name_width
    }

    /// Все записи, отсортированные по возрастанию цены за килограмм.
    /// Сортировка стабильная: при равной цене сохраняется порядок вставки.
    pub fn sorted_by_price_per_kg(&self) -> Vec<ProductRecord> {
        let mut sorted: Vec<ProductRecord> = self.records.clone();
        sorted.sort_by(|a, b| a.price_per_kg.total_cmp(&b.price_per_kg));
        sorted
    }
}
