use crate::domain::AnimalRecord;

/// (id, years, months, teats)
const COWS: [(&str, u32, u8, u8); 15] = [
    ("12345678", 5, 2, 4),
    ("23456789", 3, 8, 4),
    ("34567890", 6, 1, 3),
    ("45678901", 4, 11, 4),
    ("56789012", 2, 5, 4),
    ("67890123", 7, 3, 3),
    ("78901234", 5, 9, 4),
    ("89012345", 3, 0, 4),
    ("90123456", 6, 7, 3),
    ("87249391", 4, 4, 4),
    ("13579246", 2, 10, 4),
    ("24680135", 5, 6, 3),
    ("36912578", 3, 1, 4),
    ("48157290", 7, 8, 4),
    ("59263748", 4, 5, 3),
];

const GOATS: [&str; 2] = ["87654321", "98765432"];

pub(super) fn reference_herd() -> Vec<AnimalRecord> {
    COWS.iter()
        .map(|&(id, years, months, teats)| AnimalRecord::cow(id, years, months, teats))
        .chain(GOATS.iter().map(|&id| AnimalRecord::goat(id)))
        .collect()
}
