/// правило не применяется, если выполнено любое из условий
#[macro_export]
macro_rules! blocking_checks {
    ($($expr: expr),+) => {
        if $($expr ||)+ false {
            return None;
        }
    };
}

/// запечь таблицу, записать её и статистику. при ошибке сборки ничего не пишется
#[macro_export]
macro_rules! ideographset_table {
    ($name:expr, $source:expr) => {
        $crate::tables::IdeographSetTable::build($source).and_then(|table| {
            $crate::output::write_ideographset(
                "IDEOGRAPHSET_LIST",
                format!("./data/{}.rs.txt", $name),
                &table,
            )?;
            $crate::output::write_stats(format!("./data_stats/{}.txt", $name), &table.stats)?;

            println!(
                "{}: {} сегментов, {} kb",
                $name.to_uppercase(),
                table.len(),
                table.size() / 1024
            );

            Ok(table)
        })
    };
}
