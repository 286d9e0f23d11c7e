//! Month name lookup for date-token detection.

use std::{collections::HashMap, sync::LazyLock};

/// Month names mapped to their number (1-12).
///
/// Russian names appear in nominative, genitive ("18 января"), and
/// prepositional ("в январе") forms. Romanian names appear as written in
/// competition titles, including the `novembrie` variant.
static MONTHS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    let entries: &[(&str, u32)] = &[
        ("январь", 1),
        ("января", 1),
        ("январе", 1),
        ("февраль", 2),
        ("февраля", 2),
        ("феврале", 2),
        ("март", 3),
        ("марта", 3),
        ("марте", 3),
        ("апрель", 4),
        ("апреля", 4),
        ("апреле", 4),
        ("май", 5),
        ("мая", 5),
        ("мае", 5),
        ("июнь", 6),
        ("июня", 6),
        ("июне", 6),
        ("июль", 7),
        ("июля", 7),
        ("июле", 7),
        ("август", 8),
        ("августа", 8),
        ("августе", 8),
        ("сентябрь", 9),
        ("сентября", 9),
        ("сентябре", 9),
        ("октябрь", 10),
        ("октября", 10),
        ("октябре", 10),
        ("ноябрь", 11),
        ("ноября", 11),
        ("ноябре", 11),
        ("декабрь", 12),
        ("декабря", 12),
        ("декабре", 12),
        ("ianuarie", 1),
        ("februarie", 2),
        ("martie", 3),
        ("aprilie", 4),
        ("mai", 5),
        ("iunie", 6),
        ("iulie", 7),
        ("august", 8),
        ("septembrie", 9),
        ("octombrie", 10),
        ("noiembrie", 11),
        ("novembrie", 11),
        ("decembrie", 12),
    ];
    entries.iter().copied().collect()
});

/// Returns the month number for a lowercase month name.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS.get(name).copied()
}
