use std::path::Path;

use serde::{Deserialize, Serialize};

/// One renderable carousel item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Fixed ordered sequence of slides, read-only once loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl SlideDeck {
    /// Load a deck from a TOML file with `[[slides]]` tables
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::SlideDeck(e.to_string()))
    }

    /// Built-in deck shown when no file is given
    pub fn demo() -> Self {
        let slides = [
            ("Fast setup", "Up and running in minutes with a single binary and no services to run."),
            ("Responsive", "Shows one, two or three slides depending on how wide the window is."),
            ("Hands-free", "Advances on its own every few seconds and wraps back to the start."),
            ("Keyboard first", "Step with h and l, jump with the number keys, quit with q."),
            ("Mouse aware", "Click the arrows or any indicator to move the carousel."),
            ("Configurable", "Timing, gaps, breakpoints, labels and keys live in one TOML file."),
            ("Tiny", "No state outlives the session. Restarting always begins at slide one."),
        ];

        Self {
            slides: slides
                .into_iter()
                .map(|(title, body)| Slide::new(title, body))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
