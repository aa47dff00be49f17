//! Where finished palettes go.
//!
//! A store writes a palette and then records the write in its mutation log. The two steps are
//! separate calls (`set` then `log`) so the log always describes a write that happened.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::palette::Palette;
use crate::{now_millis, Error, Result, MUTATIONS_FILE_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationAction {
    Add,
    Update,
}

/// One logged write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub key: String,
    pub action: MutationAction,
    pub new_value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
}

impl Mutation {
    fn record(key: &str, new_value: Value, old_value: Option<Value>) -> Self {
        let action = if old_value.is_some() {
            MutationAction::Update
        } else {
            MutationAction::Add
        };

        Mutation {
            timestamp: now_millis(),
            key: key.to_owned(),
            action,
            new_value,
            old_value,
        }
    }
}

pub trait PaletteStore {
    fn save(&mut self, palette: &Palette) -> Result<()>;

    fn get(&self, id: &str) -> Result<Option<Palette>>;

    /// Every write so far, oldest first.
    fn mutations(&self) -> Result<Vec<Mutation>>;
}

/// Keeps palettes in memory. Useful for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    palettes: HashMap<String, Palette>,
    log: Vec<Mutation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    fn set(&mut self, palette: &Palette) -> Option<Palette> {
        self.palettes.insert(palette.id.clone(), palette.clone())
    }

    fn log(&mut self, mutation: Mutation) {
        self.log.push(mutation);
    }
}

impl PaletteStore for MemoryStore {
    fn save(&mut self, palette: &Palette) -> Result<()> {
        let new_value = serde_json::to_value(palette)?;
        let old_value = self
            .set(palette)
            .map(|old| serde_json::to_value(&old))
            .transpose()?;

        self.log(Mutation::record(&palette.id, new_value, old_value));

        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Palette>> {
        Ok(self.palettes.get(id).cloned())
    }

    fn mutations(&self) -> Result<Vec<Mutation>> {
        Ok(self.log.clone())
    }
}

/// Writes each palette to `<dir>/<id>.json` and appends every write to
/// `<dir>/mutations.jsonl`.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Opens a store in `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        Ok(JsonDirStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn palette_path(&self, id: &str) -> Result<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(Error::InvalidPaletteId(id.to_owned()));
        }

        Ok(self.dir.join(format!("{}.json", id)))
    }

    /// Writes the palette, returning the previous contents of its file.
    fn set(&self, palette: &Palette, new_value: &Value) -> Result<Option<Value>> {
        let path = self.palette_path(&palette.id)?;

        let old_value = if path.exists() {
            Some(serde_json::from_str(&fs::read_to_string(&path)?)?)
        } else {
            None
        };

        fs::write(&path, serde_json::to_string_pretty(new_value)?)?;

        Ok(old_value)
    }

    fn log(&self, mutation: &Mutation) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(MUTATIONS_FILE_NAME))?;

        writeln!(file, "{}", serde_json::to_string(mutation)?)?;

        Ok(())
    }
}

impl PaletteStore for JsonDirStore {
    fn save(&mut self, palette: &Palette) -> Result<()> {
        let new_value = serde_json::to_value(palette)?;
        let old_value = self.set(palette, &new_value)?;

        self.log(&Mutation::record(&palette.id, new_value, old_value))?;

        debug!("Saved palette {} to {}", palette.id, self.dir.display());

        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Palette>> {
        let path = self.palette_path(id)?;

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&fs::read_to_string(path)?)?))
    }

    fn mutations(&self) -> Result<Vec<Mutation>> {
        let path = self.dir.join(MUTATIONS_FILE_NAME);

        if !path.exists() {
            return Ok(Vec::new());
        }

        fs::read_to_string(path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(Error::from))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::palette::{PaletteOptions, PaletteType};
    use crate::{Hsl, PaletteGenerator};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use temp_dir::TempDir;

    fn palette() -> Palette {
        let options =
            PaletteOptions::new(PaletteType::Triadic, 3).with_seed(Hsl::new(200.0, 60.0, 50.0));

        PaletteGenerator::default().generate(&options, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn memory_store_logs_add_then_update() {
        let mut store = MemoryStore::new();
        let mut palette = palette();

        store.save(&palette).unwrap();
        palette.items.truncate(1);
        store.save(&palette).unwrap();

        let mutations = store.mutations().unwrap();
        assert_eq!(mutations.len(), 2);
        assert_eq!(mutations[0].action, MutationAction::Add);
        assert_eq!(mutations[0].old_value, None);
        assert_eq!(mutations[1].action, MutationAction::Update);
        assert_eq!(mutations[1].key, palette.id);
        assert_eq!(
            mutations[1].old_value.as_ref().unwrap()["items"]
                .as_array()
                .unwrap()
                .len(),
            3
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&palette.id).unwrap(), Some(palette));
    }

    #[test]
    fn memory_store_misses_unknown_ids() {
        let store = MemoryStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get("palette-nope").unwrap(), None);
    }

    #[test]
    fn json_dir_store_writes_files() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonDirStore::open(dir.path()).unwrap();
        let palette = palette();

        store.save(&palette).unwrap();

        assert!(dir.path().join(format!("{}.json", palette.id)).exists());
        assert!(dir.path().join(MUTATIONS_FILE_NAME).exists());
        assert_eq!(store.get(&palette.id).unwrap(), Some(palette.clone()));

        store.save(&palette).unwrap();

        let mutations = store.mutations().unwrap();
        assert_eq!(mutations.len(), 2);
        assert_eq!(mutations[0].action, MutationAction::Add);
        assert_eq!(mutations[1].action, MutationAction::Update);
        assert_eq!(mutations[1].old_value, Some(mutations[1].new_value.clone()));
    }

    #[test]
    fn json_dir_store_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = JsonDirStore::open(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
        assert!(store.mutations().unwrap().is_empty());
    }

    #[test]
    fn json_dir_store_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.get("../escape"),
            Err(Error::InvalidPaletteId(_))
        ));
    }
}
