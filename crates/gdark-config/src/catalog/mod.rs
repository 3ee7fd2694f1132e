//! Preference catalog: every Ghidra option the dark theme overrides.
//!
//! A [`Catalog`] is built once from the user's palette and font and then
//! passed by reference to every patch call. It is never global state.

mod table;

pub use table::{Setting, Swatch, DARK_TABLE};

use gdark_common::{OptionNode, PatchError, State};

use crate::colors::{encode_color, encode_font};
use crate::schema::{FontConfig, PaletteConfig};

/// One override: an option inside a category and the value it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceEntry {
    pub category: String,
    pub option_path: String,
    pub node: OptionNode,
}

/// Ordered, immutable-once-built set of [`PreferenceEntry`] values.
///
/// `(category, option_path)` pairs are unique; inserting a duplicate
/// replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<PreferenceEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the dark theme catalog from `palette` and `font`.
    pub fn dark(palette: &PaletteConfig, font: &FontConfig) -> Result<Self, PatchError> {
        let size = i32::try_from(font.size)
            .map_err(|_| PatchError::Encoding(format!("font size {} too large", font.size)))?;
        let font_option = encode_font(size, 0, &font.family)?;

        let mut catalog = Catalog::new();
        for &(category, option, setting) in DARK_TABLE {
            let node = match setting {
                Setting::Color(swatch, alpha) => {
                    OptionNode::Wrapped(encode_color(swatch.hex(palette), alpha)?)
                }
                Setting::Font => OptionNode::Wrapped(font_option.clone()),
                Setting::Flag(flag) => OptionNode::Plain(State::unnamed(flag)),
            };
            catalog.insert(category, option, node);
        }
        Ok(catalog)
    }

    pub fn insert(
        &mut self,
        category: impl Into<String>,
        option_path: impl Into<String>,
        node: impl Into<OptionNode>,
    ) {
        let category = category.into();
        let option_path = option_path.into();
        let node = node.into();
        match self
            .entries
            .iter_mut()
            .find(|e| e.category == category && e.option_path == option_path)
        {
            Some(existing) => existing.node = node,
            None => self.entries.push(PreferenceEntry {
                category,
                option_path,
                node,
            }),
        }
    }

    pub fn entries(&self) -> &[PreferenceEntry] {
        &self.entries
    }

    /// Category names in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.category.as_str()) {
                names.push(&entry.category);
            }
        }
        names
    }

    pub fn for_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a PreferenceEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn get(&self, category: &str, option_path: &str) -> Option<&OptionNode> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.option_path == option_path)
            .map(|e| &e.node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdark_common::{OptionValue, WrappedOption, WrapperKind};

    fn dark() -> Catalog {
        Catalog::dark(&PaletteConfig::default(), &FontConfig::default()).unwrap()
    }

    #[test]
    fn dark_catalog_covers_every_table_row() {
        let catalog = dark();
        assert_eq!(catalog.len(), DARK_TABLE.len());
        assert_eq!(
            catalog.categories(),
            vec![
                "Listing Fields",
                "Decompiler",
                "Graph",
                "Search",
                "Listing Display",
                "Comments"
            ]
        );
    }

    #[test]
    fn table_rows_are_unique() {
        for (i, a) in DARK_TABLE.iter().enumerate() {
            for b in &DARK_TABLE[i + 1..] {
                assert!(
                    !(a.0 == b.0 && a.1 == b.1),
                    "duplicate row {} / {}",
                    a.0,
                    a.1
                );
            }
        }
    }

    #[test]
    fn decompiler_background_uses_palette_bg() {
        let catalog = dark();
        let node = catalog
            .get("Decompiler", "Display.Background Color")
            .unwrap();
        // 282a36 opaque
        let expected = i32::from_le_bytes([0x36, 0x2a, 0x28, 0xff]);
        assert_eq!(node, &OptionNode::Wrapped(WrappedOption::color(expected)));
    }

    #[test]
    fn faded_entries_carry_alpha() {
        let catalog = dark();
        let Some(OptionNode::Wrapped(w)) = catalog.get("Search", "Highlight Color") else {
            panic!("missing search highlight");
        };
        assert_eq!(
            w.states()[0].value(),
            &OptionValue::Integer(i32::from_le_bytes([0xff, 0xff, 0xff, 102]))
        );
    }

    #[test]
    fn fonts_follow_config() {
        let font = FontConfig {
            family: "Iosevka".into(),
            size: 11,
        };
        let catalog = Catalog::dark(&PaletteConfig::default(), &font).unwrap();
        for (category, option) in [("Decompiler", "Display.Font"), ("Listing Display", "BASE FONT")] {
            let Some(OptionNode::Wrapped(w)) = catalog.get(category, option) else {
                panic!("missing {option}");
            };
            assert_eq!(w.kind(), WrapperKind::Font);
            assert_eq!(w.states()[0].serialized(), "11");
            assert_eq!(w.states()[2].serialized(), "Iosevka");
        }
    }

    #[test]
    fn comments_flag_is_plain_boolean() {
        let catalog = dark();
        assert_eq!(
            catalog.get("Comments", "Enter accepts comment"),
            Some(&OptionNode::Plain(State::unnamed(true)))
        );
    }

    #[test]
    fn bad_palette_fails_to_build() {
        let palette = PaletteConfig {
            green: "nope".into(),
            ..Default::default()
        };
        let err = Catalog::dark(&palette, &FontConfig::default()).unwrap_err();
        assert!(matches!(err, PatchError::Encoding(_)));
    }

    #[test]
    fn insert_replaces_duplicates_in_place() {
        let mut catalog = Catalog::new();
        catalog.insert("A", "x", State::unnamed(true));
        catalog.insert("B", "y", State::unnamed(1));
        catalog.insert("A", "x", State::unnamed(false));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].node, OptionNode::Plain(State::unnamed(false)));
        assert_eq!(catalog.for_category("B").count(), 1);
    }
}
