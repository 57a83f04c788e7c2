//! Key sorter: orders dataset rows by their key column

use crate::table::Dataset;

/// Sort rows by ascending byte order of the key field.
///
/// The sort is stable, so rows sharing a key keep their source order.
pub fn sort_by_key(dataset: &mut Dataset, key_column: usize) {
    dataset
        .rows
        .sort_by(|a, b| a.key(key_column).cmp(b.key(key_column)));
    log::debug!(
        "sorted {} rows of {} by column {}",
        dataset.row_count(),
        dataset.source_path.display(),
        key_column + 1
    );
}

/// Number of rows whose key equals the previous row's key.
///
/// Only meaningful on a dataset already sorted by `key_column`.
pub fn duplicate_keys(dataset: &Dataset, key_column: usize) -> usize {
    dataset
        .rows
        .windows(2)
        .filter(|pair| pair[0].key(key_column) == pair[1].key(key_column))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_csv_str;

    fn keys(dataset: &Dataset, column: usize) -> Vec<&str> {
        dataset.rows.iter().map(|r| r.key(column)).collect()
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let mut dataset = parse_csv_str("10,a\n9,b\n1,c\n,d\n", "test.csv", false).unwrap();

        sort_by_key(&mut dataset, 0);

        // string order, not numeric; the empty key sorts first
        assert_eq!(keys(&dataset, 0), vec!["", "1", "10", "9"]);
    }

    #[test]
    fn test_sort_by_other_column() {
        let mut dataset = parse_csv_str("1,c\n2,a\n3,b\n", "test.csv", false).unwrap();

        sort_by_key(&mut dataset, 1);

        assert_eq!(keys(&dataset, 0), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_keeps_duplicate_order() {
        let mut dataset = parse_csv_str("b,1\na,2\nb,3\na,4\n", "test.csv", false).unwrap();

        sort_by_key(&mut dataset, 0);

        assert_eq!(keys(&dataset, 1), vec!["2", "4", "1", "3"]);
        assert_eq!(duplicate_keys(&dataset, 0), 2);
        assert_eq!(duplicate_keys(&dataset, 1), 0);
    }
}
