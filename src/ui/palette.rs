use std::collections::HashMap;

use ratatui::style::Color;

use super::theme::BAR_COLORS;

/// Category colors for the lifetime of a view. A category keeps the color
/// it was first given; new categories move past colors already taken until
/// the palette runs out.
///
/// Assignment depends on the order categories are first seen, not only on
/// the name: when two names hash to the same slot, whichever is assigned
/// first gets the hash color ([`color_for`]) and the other takes the next
/// free one. Palettes fed the same categories in the same order agree.
#[derive(Debug, Default)]
pub(crate) struct Palette {
    assigned: HashMap<String, Color>,
}

impl Palette {
    pub(crate) fn assign<'a>(&mut self, categories: impl IntoIterator<Item = &'a str>) {
        for category in categories {
            if self.assigned.contains_key(category) {
                continue;
            }
            let color = self.free_color(category);
            self.assigned.insert(category.to_string(), color);
        }
    }

    pub(crate) fn get(&self, category: &str) -> Color {
        self.assigned
            .get(category)
            .copied()
            .unwrap_or_else(|| color_for(category))
    }

    fn free_color(&self, category: &str) -> Color {
        let start = hash_index(category);
        (0..BAR_COLORS.len())
            .map(|step| BAR_COLORS[(start + step) % BAR_COLORS.len()])
            .find(|c| !self.assigned.values().any(|taken| taken == c))
            .unwrap_or(BAR_COLORS[start])
    }
}

/// Stable color for a category, independent of any palette state.
pub(crate) fn color_for(category: &str) -> Color {
    BAR_COLORS[hash_index(category)]
}

fn hash_index(category: &str) -> usize {
    (fnv1a(category.as_bytes()) % BAR_COLORS.len() as u64) as usize
}

/// 64-bit FNV-1a.
pub(crate) fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}
