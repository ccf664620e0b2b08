use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    /// Defaults, then `.scrapersrc`, then environment variables.
    pub fn load() -> Self {
        Self::load_from(&default_config_path(), env::vars())
    }

    pub fn load_from<I>(config_path: &Path, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut map = default_map();

        if config_path.exists() {
            if let Ok(file) = fs::File::open(config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        for (k, v) in vars {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self {
            inner: map,
            config_path: config_path.to_path_buf(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// `SCRAPERS_DIR` when set, otherwise the directory holding the runner binary.
    pub fn scripts_dir(&self) -> PathBuf {
        self.get("SCRAPERS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_scripts_dir)
    }

    pub fn interpreter(&self) -> String {
        self.get("SCRAPERS_INTERPRETER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "node".to_string())
    }

    /// `Some(true|false)` when color is forced, `None` for terminal detection.
    pub fn color(&self) -> Option<bool> {
        match self.get("SCRAPERS_COLOR")?.to_ascii_lowercase().as_str() {
            "auto" => None,
            _ => Some(self.get_bool("SCRAPERS_COLOR")),
        }
    }
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &["SCRAPERS_DIR", "SCRAPERS_INTERPRETER", "SCRAPERS_COLOR"];
    KEYS.contains(&k)
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("scrapers").join(".scrapersrc")
}

fn default_scripts_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("SCRAPERS_INTERPRETER".into(), "node".into());
    m.insert("SCRAPERS_COLOR".into(), "auto".into());
    m
}
