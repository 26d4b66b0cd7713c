use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

/// Maps issued task ids to the audio files they produced.
///
/// Entries are added once a file is fully written and are never removed
/// while the process runs.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: RwLock<HashMap<String, PathBuf>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, task_id: String, path: PathBuf) {
        let mut tasks = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        tasks.insert(task_id, path);
    }

    pub fn get(&self, task_id: &str) -> Option<PathBuf> {
        let tasks = self.tasks.read().unwrap_or_else(PoisonError::into_inner);
        tasks.get(task_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tasks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_and_get() {
        let registry = TaskRegistry::new();
        assert_eq!(registry.len(), 0);

        registry.insert("abc".into(), PathBuf::from("out/abc.wav"));

        assert_eq!(registry.get("abc"), Some(PathBuf::from("out/abc.wav")));
        assert_eq!(registry.get("missing"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_inserts() {
        let registry = Arc::new(TaskRegistry::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.insert(format!("task-{}", i), PathBuf::from(format!("{}.wav", i)));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 16);
        for i in 0..16 {
            assert_eq!(
                registry.get(&format!("task-{}", i)),
                Some(PathBuf::from(format!("{}.wav", i)))
            );
        }
    }
}
