// Matchbook Hero Catalog
// Maps hero ids from match records to display names.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::errors::HeroCatalogError;

/// One entry of the hero list file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroInfo {
    pub ename: i64,
    pub cname: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub hero_type: i32,
}

/// Names used when no hero list is available or an id is missing from it.
const BUILTIN_NAMES: &[(i64, &str)] = &[
    (505, "瑶"),
    (155, "马可波罗"),
    (196, "诸葛亮"),
    (119, "干将莫邪"),
    (184, "蔡文姬"),
    (503, "海月"),
    (117, "钟无艳"),
    (585, "元流之子(辅助)"),
    (188, "大禹"),
];

/// Role name for a `hero_type` code.
pub fn hero_type_text(hero_type: i32) -> &'static str {
    match hero_type {
        1 => "坦克",
        2 => "战士",
        3 => "刺客",
        4 => "法师",
        5 => "射手",
        6 => "辅助",
        _ => "未知类型",
    }
}

/// Hero description returned to the front end.
///
/// `title` and `full_name` are only known for heroes in the loaded list;
/// other ids carry a fallback name and type `unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDetails {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub hero_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HeroCatalog {
    heroes: HashMap<i64, HeroInfo>,
}

impl HeroCatalog {
    /// Empty catalog; lookups use the built-in names only.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_heroes(heroes: Vec<HeroInfo>) -> Self {
        Self {
            heroes: heroes.into_iter().map(|h| (h.ename, h)).collect(),
        }
    }

    /// Loads a JSON array of [`HeroInfo`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HeroCatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|_| HeroCatalogError::FileNotFound(path.display().to_string()))?;
        let heroes: Vec<HeroInfo> =
            serde_json::from_str(&content).map_err(|e| HeroCatalogError::Parse(e.to_string()))?;
        Ok(Self::from_heroes(heroes))
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn get(&self, hero_id: i64) -> Option<&HeroInfo> {
        self.heroes.get(&hero_id)
    }

    pub fn name_of(&self, hero_id: i64) -> String {
        if let Some(hero) = self.heroes.get(&hero_id) {
            return hero.cname.clone();
        }
        BUILTIN_NAMES
            .iter()
            .find(|(id, _)| *id == hero_id)
            .map(|(_, name)| name.to_string())
            .unwrap_or_else(|| format!("Hero {}", hero_id))
    }

    pub fn details(&self, hero_id: i64) -> HeroDetails {
        match self.heroes.get(&hero_id) {
            Some(hero) => HeroDetails {
                id: hero_id,
                name: hero.cname.clone(),
                title: Some(hero.title.clone()),
                hero_type: hero_type_text(hero.hero_type).to_string(),
                full_name: Some(format!("{} - {}", hero.cname, hero.title)),
            },
            None => HeroDetails {
                id: hero_id,
                name: self.name_of(hero_id),
                title: None,
                hero_type: "unknown".to_string(),
                full_name: None,
            },
        }
    }
}
