use sea_orm::{ColumnTrait, Condition};

/// Multi-valued categorical attributes (hall type, hall style, hashtags)
/// are stored as one comma-joined string column. Membership tests must be
/// whole-token: "한옥" must not match inside "한옥스타일".
pub const DELIMITER: char = ',';

/// Joins tags into the canonical stored form. Tags are trimmed and empty
/// entries dropped, so the output round-trips through [`matches`].
pub fn encode<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits a stored tag set back into its tokens.
pub fn decode(stored: &str) -> Vec<String> {
    stored
        .split(DELIMITER)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whole-token membership. An empty stored set matches nothing, including
/// the empty string.
pub fn matches(stored: &str, requested: &str) -> bool {
    stored
        .split(DELIMITER)
        .map(str::trim)
        .any(|t| !t.is_empty() && t == requested)
}

pub fn matches_any<S: AsRef<str>>(stored: &str, requested: &[S]) -> bool {
    requested.iter().any(|r| matches(stored, r.as_ref()))
}

/// SQL form of [`matches`] against a comma-joined tag column: the token is
/// either the whole value, or sits at the start, middle, or end of the
/// delimited list. Plain `LIKE '%tag%'` would produce substring false
/// positives.
pub fn sql_matches<C: ColumnTrait>(col: C, tag: &str) -> Condition {
    Condition::any()
        .add(col.eq(tag))
        .add(col.starts_with(format!("{tag},")))
        .add(col.contains(format!(",{tag},")))
        .add(col.ends_with(format!(",{tag}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_canonical() {
        assert_eq!(encode(&["호텔", "채플"]), "호텔,채플");
        assert_eq!(encode(&[" 호텔 ", "", "채플"]), "호텔,채플");
        assert_eq!(encode::<&str>(&[]), "");
    }

    #[test]
    fn empty_set_matches_nothing() {
        let stored = encode::<&str>(&[]);
        assert!(!matches(&stored, "호텔"));
        assert!(!matches(&stored, ""));
    }

    #[test]
    fn membership_is_whole_token() {
        let stored = encode(&["한옥", "컨벤션"]);
        assert!(matches(&stored, "한옥"));
        assert!(!matches(&stored, "한옥스타일"));

        let stored = encode(&["한옥스타일"]);
        assert!(!matches(&stored, "한옥"));

        assert!(matches(&encode(&["A", "B"]), "A"));
        assert!(!matches(&encode(&["AB"]), "A"));
    }

    #[test]
    fn round_trip_recovers_membership() {
        let vocabulary = ["호텔", "채플", "컨벤션", "하우스", "야외"];
        let stored = encode(&vocabulary[..3]);
        for tag in &vocabulary[..3] {
            assert!(matches(&stored, tag));
        }
        for tag in &vocabulary[3..] {
            assert!(!matches(&stored, tag));
        }
        assert_eq!(decode(&stored), vocabulary[..3].to_vec());
    }

    #[test]
    fn matches_any_over_requested_set() {
        let stored = encode(&["밝음"]);
        assert!(matches_any(&stored, &["어두움", "밝음"]));
        assert!(!matches_any(&stored, &["어두움"]));
        assert!(!matches_any::<&str>(&stored, &[]));
    }
}
