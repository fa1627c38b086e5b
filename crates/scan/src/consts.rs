use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Greedy middle group: the name/extension split happens at the last dot.
// Deliberately not anchored at the end.
regex!(INDEXED_FILENAME_REGEX, r"^(\d+)_(.*)\.(.*)");

/// Index assigned to files without a numeric prefix.
pub(crate) const DEFAULT_INDEX: &str = "0";
