//! Side channel for intermediate artifacts of a homology computation.
//! 
//! Nothing written here feeds back into the returned results.

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use zhom::{Error, Result, FF2};
use zhom_matrix::f2::F2Mat;

pub type LogEntries = Map<String, Value>;

pub trait LogSink { 
    /// Inserts `entries` into the store, replacing entries with equal keys.
    fn merge(&mut self, entries: LogEntries) -> Result<()>;
}

/// A sink kept in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryLog { 
    entries: LogEntries
}

impl MemoryLog { 
    pub fn new() -> Self { 
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> { 
        self.entries.get(key)
    }

    pub fn entries(&self) -> &LogEntries { 
        &self.entries
    }

    pub fn into_entries(self) -> LogEntries { 
        self.entries
    }
}

impl LogSink for MemoryLog { 
    fn merge(&mut self, entries: LogEntries) -> Result<()> {
        self.entries.extend(entries);
        Ok(())
    }
}

/// A sink backed by a file holding one JSON object. 
/// 
/// Each merge reads the file, updates its keys and writes it back. 
/// A missing or unparsable file is read as the empty object.
#[derive(Clone, Debug)]
pub struct JsonFileLog { 
    path: PathBuf
}

impl JsonFileLog { 
    pub fn new<P>(path: P) -> Self
    where P: AsRef<Path> { 
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path { 
        &self.path
    }

    pub fn load(&self) -> LogEntries { 
        let Ok(text) = fs::read_to_string(&self.path) else { 
            return LogEntries::new()
        };
        match serde_json::from_str(&text) { 
            Ok(Value::Object(map)) => map,
            _ => { 
                warn!("ignoring unreadable log: {}", self.path.display());
                LogEntries::new()
            }
        }
    }
}

impl LogSink for JsonFileLog { 
    fn merge(&mut self, entries: LogEntries) -> Result<()> {
        let mut map = self.load();
        map.extend(entries);

        let text = serde_json::to_string(&Value::Object(map))
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|e| Error::Serialization(format!("{}: {e}", self.path.display())))?;

        debug!("log written: {}", self.path.display());
        Ok(())
    }
}

pub fn to_json<T>(value: &T) -> Result<Value>
where T: Serialize + ?Sized { 
    serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// A vector as a JSON array of 0 / 1.
pub fn vec_json(v: &[FF2]) -> Value { 
    Value::from(v.iter().map(|&a| u8::from(a)).collect::<Vec<_>>())
}

/// A matrix as a JSON array of rows.
pub fn mat_json(m: &F2Mat) -> Value { 
    Value::from(m.rows_iter().map(|r| vec_json(&r)).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests { 
    use serde_json::json;
    use super::*;

    fn temp_path(name: &str) -> PathBuf { 
        std::env::temp_dir().join(format!("zhom-sink-{}-{name}.json", std::process::id()))
    }

    fn entries(v: Value) -> LogEntries { 
        let Value::Object(map) = v else { panic!() };
        map
    }

    #[test]
    fn memory() { 
        let mut log = MemoryLog::new();
        log.merge(entries(json!({ "a": 1, "b": 2 }))).unwrap();
        log.merge(entries(json!({ "b": 3 }))).unwrap();

        assert_eq!(log.get("a"), Some(&json!(1)));
        assert_eq!(log.get("b"), Some(&json!(3)));
        assert_eq!(log.entries().len(), 2);
    }

    #[test]
    fn file_merge() { 
        let path = temp_path("merge");
        let _ = fs::remove_file(&path);

        let mut log = JsonFileLog::new(&path);
        assert!(log.load().is_empty());

        log.merge(entries(json!({ "k": 1, "ker": [[1]] }))).unwrap();
        log.merge(entries(json!({ "k": 2 }))).unwrap();

        let map = JsonFileLog::new(&path).load();
        assert_eq!(map.get("k"), Some(&json!(2)));
        assert_eq!(map.get("ker"), Some(&json!([[1]])));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_is_empty() { 
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();

        let mut log = JsonFileLog::new(&path);
        assert!(log.load().is_empty());

        log.merge(entries(json!({ "k": 1 }))).unwrap();
        assert_eq!(log.load().len(), 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_failure() { 
        let path = std::env::temp_dir().join("zhom-no-such-dir").join("log.json");
        let mut log = JsonFileLog::new(&path);
        let e = log.merge(entries(json!({ "k": 1 })));

        assert!(matches!(e, Err(Error::Serialization(_))));
    }

    #[test]
    fn matrix() { 
        let m = F2Mat::from_bits((2, 3), [1,0,1, 0,1,1]);
        assert_eq!(mat_json(&m), json!([[1,0,1],[0,1,1]]));
    }
}
