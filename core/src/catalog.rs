use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<VocabEntry>,
}

/// Vocabulary grouped by category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

const BUILTIN: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "animals",
        &[
            ("cat", "gato", "🐱"),
            ("dog", "perro", "🐶"),
            ("horse", "caballo", "🐴"),
            ("rabbit", "conejo", "🐰"),
            ("bird", "pájaro", "🐦"),
            ("fish", "pez", "🐟"),
            ("cow", "vaca", "🐮"),
            ("pig", "cerdo", "🐷"),
            ("sheep", "oveja", "🐑"),
            ("duck", "pato", "🦆"),
            ("lion", "león", "🦁"),
            ("monkey", "mono", "🐵"),
        ],
    ),
    (
        "colors",
        &[
            ("red", "rojo", "🔴"),
            ("blue", "azul", "🔵"),
            ("green", "verde", "🟢"),
            ("yellow", "amarillo", "🟡"),
            ("orange", "naranja", "🟠"),
            ("purple", "morado", "🟣"),
            ("black", "negro", "⚫"),
            ("white", "blanco", "⚪"),
            ("brown", "marrón", "🟤"),
            ("pink", "rosa", "🌸"),
        ],
    ),
    (
        "fruits",
        &[
            ("apple", "manzana", "🍎"),
            ("banana", "plátano", "🍌"),
            ("grape", "uva", "🍇"),
            ("lemon", "limón", "🍋"),
            ("pear", "pera", "🍐"),
            ("cherry", "cereza", "🍒"),
            ("peach", "melocotón", "🍑"),
            ("strawberry", "fresa", "🍓"),
            ("orange", "naranja", "🍊"),
            ("melon", "melón", "🍈"),
        ],
    ),
    (
        "school",
        &[
            ("book", "libro", "📕"),
            ("pencil", "lápiz", "✏️"),
            ("ruler", "regla", "📏"),
            ("scissors", "tijeras", "✂️"),
            ("backpack", "mochila", "🎒"),
            ("teacher", "maestro", "🧑‍🏫"),
            ("desk", "pupitre", "🪑"),
            ("paper", "papel", "📄"),
            ("eraser", "borrador", "🧽"),
            ("notebook", "cuaderno", "📓"),
        ],
    ),
];

impl Catalog {
    /// Categories shipped with the application.
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|&(name, entries)| Category {
                name: name.to_string(),
                entries: entries
                    .iter()
                    .map(|&(text, translation, icon)| {
                        VocabEntry::new(text, translation).with_icon(icon)
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// Parses either a full catalog or a bare list of entries, as returned by
    /// the content service for a single activity. A bare list becomes one
    /// category named `activity`.
    pub fn from_json(json: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Payload {
            Entries(Vec<VocabEntry>),
            Catalog(Catalog),
        }

        match serde_json::from_str(json) {
            Ok(Payload::Catalog(catalog)) => Ok(catalog),
            Ok(Payload::Entries(entries)) => Ok(Self {
                categories: alloc::vec![Category {
                    name: "activity".to_string(),
                    entries,
                }],
            }),
            Err(err) => Err(PuzzleError::InvalidCatalog(err.to_string())),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn category(&self, name: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PuzzleError::UnknownCategory(name.to_string()))
    }

    /// Up to `count` distinct entries of a category in random order.
    pub fn pick(
        &self,
        name: &str,
        count: usize,
        source: &mut impl RandomSource,
    ) -> Result<Vec<VocabEntry>> {
        let mut entries = self.category(name)?.entries.clone();
        source.shuffle(&mut entries);
        entries.truncate(count);
        Ok(entries)
    }
}
