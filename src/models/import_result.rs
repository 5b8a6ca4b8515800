/// Outcome report of a CSV import. Counts plus human-readable messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportResult {
    pub sessions_imported: usize,
    pub sets_imported: usize,
    pub exercises_created: usize,
    pub rows_skipped: usize,
    pub errors: Vec<String>,
}

impl ImportResult {
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.sessions_imported > 0 {
            parts.push(format!("{} session(s) imported", self.sessions_imported));
        }
        if self.sets_imported > 0 {
            parts.push(format!("{} set(s) imported", self.sets_imported));
        }
        if self.exercises_created > 0 {
            parts.push(format!("{} exercise(s) created", self.exercises_created));
        }
        if self.rows_skipped > 0 {
            parts.push(format!("{} row(s) skipped", self.rows_skipped));
        }
        if !self.errors.is_empty() {
            parts.push(format!("{} error(s)", self.errors.len()));
        }

        if parts.is_empty() {
            "Nothing to import".to_string()
        } else {
            parts.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_empty() {
        assert_eq!(ImportResult::default().summary(), "Nothing to import");
    }

    #[test]
    fn test_summary_lists_non_zero_counts() {
        let result = ImportResult {
            sessions_imported: 2,
            sets_imported: 9,
            exercises_created: 0,
            rows_skipped: 1,
            errors: vec!["Row 4: invalid numeric values".to_string()],
        };

        assert_eq!(
            result.summary(),
            "2 session(s) imported\n9 set(s) imported\n1 row(s) skipped\n1 error(s)"
        );
    }
}
