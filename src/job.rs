use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use packsearch::{Heuristic, HeuristicSelector, Rectangle, RectangleError};
use serde::{de::Error as _, Deserialize, Deserializer};
use thiserror::Error;

/// A packing job, contained in a TOML file.
///
/// A job lists the rectangles to pack, which heuristics to try, and the size
/// limits handed to the placement engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Job {
    /// Which heuristics to try. Defaults to all of them.
    #[serde(default = "default_heuristics")]
    pub heuristics: Vec<HeuristicName>,

    /// The size of the first bin the engine tries.
    #[serde(default = "default_min_size")]
    pub min_size: (u32, u32),

    /// The largest bin the engine is allowed to grow to.
    #[serde(default = "default_max_size")]
    pub max_size: (u32, u32),

    #[serde(default)]
    pub rects: Vec<RectConfig>,

    /// The path that this job came from.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl Job {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, JobError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let mut job: Self = toml::from_str(&contents).map_err(|source| JobError::Toml {
            path: path.to_owned(),
            source,
        })?;
        job.file_path = path.to_owned();

        log::trace!("Read job {} with {} rects", path.display(), job.rects.len());

        Ok(job)
    }

    pub fn selector(&self) -> HeuristicSelector {
        self.heuristics.iter().map(|name| name.0).collect()
    }

    /// Turns the configured rects into rectangles whose IDs are their index in
    /// `rects`.
    pub fn rectangles(&self) -> Result<Vec<Rectangle>, JobError> {
        self.rects
            .iter()
            .enumerate()
            .map(|(index, rect)| {
                Rectangle::with_id(index as u64, rect.size).map_err(|source| {
                    JobError::InvalidRect {
                        name: rect.name.clone(),
                        source,
                    }
                })
            })
            .collect()
    }

    /// The name of the rect a rectangle from `rectangles` was created from.
    pub fn name_of(&self, rectangle: &Rectangle) -> &str {
        self.rects
            .get(rectangle.id().get() as usize)
            .map(|rect| rect.name.as_str())
            .unwrap_or("<unknown>")
    }
}

fn default_heuristics() -> Vec<HeuristicName> {
    Heuristic::all().map(HeuristicName).collect()
}

fn default_min_size() -> (u32, u32) {
    (128, 128)
}

fn default_max_size() -> (u32, u32) {
    (1024, 1024)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RectConfig {
    /// Used to label this rect in output, usually an image path.
    pub name: String,

    pub size: (u32, u32),
}

/// Deserializes a heuristic from its name, like `bigger-side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicName(pub Heuristic);

impl<'de> Deserialize<'de> for HeuristicName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;

        name.parse().map(HeuristicName).map_err(D::Error::custom)
    }
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Rect '{name}' is invalid: {source}")]
    InvalidRect {
        name: String,
        source: RectangleError,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(source: &str) -> Job {
        toml::from_str(source).unwrap()
    }

    #[test]
    fn defaults() {
        let job = parse("");

        assert_eq!(job.selector(), HeuristicSelector::ALL);
        assert_eq!(job.min_size, (128, 128));
        assert_eq!(job.max_size, (1024, 1024));
        assert!(job.rects.is_empty());
    }

    #[test]
    fn full_job() {
        let job = parse(
            r#"
            heuristics = ["width", "bigger-side"]
            min-size = [64, 64]
            max-size = [512, 256]

            [[rects]]
            name = "hero.png"
            size = [64, 32]

            [[rects]]
            name = "tree.png"
            size = [16, 48]
            "#,
        );

        assert_eq!(job.selector(), Heuristic::BiggerSide | Heuristic::Width);
        assert_eq!(job.max_size, (512, 256));

        let rectangles = job.rectangles().unwrap();
        assert_eq!(rectangles[1].size(), (16, 48));
        assert_eq!(job.name_of(&rectangles[1]), "tree.png");
    }

    #[test]
    fn unknown_heuristic() {
        let result: Result<Job, _> = toml::from_str(r#"heuristics = ["diagonal"]"#);

        assert!(result.is_err());
    }

    #[test]
    fn unknown_field() {
        let result: Result<Job, _> = toml::from_str(r#"padding = 2"#);

        assert!(result.is_err());
    }

    #[test]
    fn zero_sized_rect() {
        let job = parse(
            r#"
            [[rects]]
            name = "empty.png"
            size = [0, 12]
            "#,
        );

        match job.rectangles() {
            Err(JobError::InvalidRect { name, .. }) => assert_eq!(name, "empty.png"),
            other => panic!("expected InvalidRect, got {:?}", other),
        }
    }
}
