//! Task family color grouping.
//!
//! Tasks of the same family share one display color. The family of a task
//! is its name without the last `_`-delimited segment, so
//! `split_fasta_00000001` and `split_fasta_00000002` both belong to
//! `split_fasta`.
//!
//! Colors are drawn uniformly from the 24-bit RGB space and redrawn on an
//! exact collision with a color already in the map. Distinct families
//! therefore never share a value, though two values may look alike. The
//! random source is a parameter so callers can seed it.

use rand::Rng;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Color returned by [`ColorMap::color_for`] for unknown families.
pub const FALLBACK_COLOR: &str = "#000000";

/// Returns the family key of a task name.
///
/// # Examples
///
/// ```
/// use u_timeline::color::family_key;
///
/// assert_eq!(family_key("simulate_task_3"), "simulate_task");
/// assert_eq!(family_key("noUnderscore"), "noUnderscore");
/// ```
pub fn family_key(name: &str) -> &str {
    match name.rfind('_') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Family key to color, with unique colors.
///
/// Families are kept in discovery order. Serializes as a JSON object
/// `{family: color}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMap {
    entries: Vec<(String, String)>,
}

impl ColorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a color to every family found in `names`, in order.
    pub fn generate<'a, I, R>(names: I, rng: &mut R) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        R: Rng + ?Sized,
    {
        Self::generate_with(names, || random_color(&mut *rng))
    }

    /// Like [`generate`](Self::generate), drawing candidate colors from `draw`.
    ///
    /// `draw` is called again whenever it returns a color already in the map,
    /// so it must eventually produce a fresh value.
    pub fn generate_with<'a, I, F>(names: I, mut draw: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut() -> String,
    {
        let mut map = Self::new();
        let mut used: HashSet<String> = HashSet::new();

        for name in names {
            let family = family_key(name);
            if map.get(family).is_some() {
                continue;
            }
            let mut color = draw();
            while used.contains(&color) {
                color = draw();
            }
            used.insert(color.clone());
            map.entries.push((family.to_string(), color));
        }

        map
    }

    /// Same as [`generate`](Self::generate) with the thread-local RNG.
    pub fn from_entropy<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::generate(names, &mut rand::rng())
    }

    /// Color of a family key.
    pub fn get(&self, family: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == family)
            .map(|(_, c)| c.as_str())
    }

    /// Color for a task name, [`FALLBACK_COLOR`] if its family is unknown.
    pub fn color_for(&self, task_name: &str) -> &str {
        self.get(family_key(task_name)).unwrap_or(FALLBACK_COLOR)
    }

    /// `(family, color)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, c)| (f.as_str(), c.as_str()))
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Uniform `#RRGGBB` color.
fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let rgb: u32 = rng.random_range(0..=0xFF_FFFF);
    format!("#{rgb:06X}")
}
