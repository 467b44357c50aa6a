use std::collections::HashMap;

/// статистика, собираемая при запекании: блоки по категориям / диагностикам,
/// в блоке - сегменты, описанные по первому кодпоинту
#[derive(Debug, Clone, Default)]
pub struct EncodeStats
{
    pub blocks: HashMap<String, EncodeStatsBlock>,
}

#[derive(Debug, Clone)]
pub struct EncodeStatsBlock
{
    /// количество сегментов
    pub count: usize,
    /// количество кодпоинтов во всех сегментах блока
    pub codepoints: usize,
    pub order: usize,
    pub entries: HashMap<u32, String>,
}

impl EncodeStats
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// блок статистики, создаётся при первом обращении
    pub fn touch(&mut self, key: impl AsRef<str>) -> &mut EncodeStatsBlock
    {
        let order = self.blocks.values().map(|e| e.order).max().unwrap_or(0) + 1;

        self.blocks
            .entry(key.as_ref().to_string())
            .or_insert(EncodeStatsBlock {
                count: 0,
                codepoints: 0,
                order,
                entries: HashMap::new(),
            })
    }

    /// количество сегментов в блоке, 0 - если блока нет
    pub fn count(&self, key: impl AsRef<str>) -> usize
    {
        self.blocks.get(key.as_ref()).map_or(0, |b| b.count)
    }

    /// имена блоков в порядке создания
    pub fn ordered_keys(&self) -> Vec<&String>
    {
        let mut keys: Vec<&String> = self.blocks.keys().collect();
        keys.sort_by_key(|k| self.blocks[*k].order);

        keys
    }
}

impl EncodeStatsBlock
{
    /// учесть сегмент из `len` кодпоинтов, начинающийся с `code`
    pub fn inc(&mut self, code: u32, len: u32, description: impl AsRef<str>)
    {
        self.count += 1;
        self.codepoints += len as usize;
        self.entries.insert(code, description.as_ref().to_string());
    }
}
