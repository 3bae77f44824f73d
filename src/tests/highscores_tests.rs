#[cfg(test)]
mod tests {
    use crate::highscores::{MemoryScoreStore, ScoreStore, TomlScoreStore};

    #[test]
    fn test_empty_store_has_no_best() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = TomlScoreStore::new(dir.path().join("scores.toml"));
        assert_eq!(store.best_score(), None);
    }

    #[test]
    fn test_record_persists_across_instances() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("scores.toml");

        let mut store = TomlScoreStore::new(path.clone());
        store.record(250).expect("record score");
        assert_eq!(store.best_score(), Some(250));

        let reopened = TomlScoreStore::new(path);
        assert_eq!(reopened.best_score(), Some(250));
    }

    #[test]
    fn test_record_never_lowers_the_best() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = TomlScoreStore::new(dir.path().join("scores.toml"));

        store.record(300).expect("record score");
        store.record(100).expect("record score");
        assert_eq!(store.best_score(), Some(300));

        store.record(450).expect("record score");
        assert_eq!(store.best_score(), Some(450));
    }

    #[test]
    fn test_record_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("deep").join("nested").join("scores.toml");

        let mut store = TomlScoreStore::new(path.clone());
        store.record(10).expect("record score");
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("scores.toml");
        std::fs::write(&path, "not a score file").expect("write file");

        let store = TomlScoreStore::new(path);
        assert_eq!(store.best_score(), None);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.best_score(), None);

        store.record(70).expect("record score");
        assert_eq!(store.best_score(), Some(70));

        store.record(30).expect("record score");
        assert_eq!(store.best_score(), Some(70));
    }
}
