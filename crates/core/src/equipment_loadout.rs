//! Equipment loadout: the fixed slots drawn around the fencer figurine.
//!
//! Each slot carries a keyword list used to pick a concrete catalog item.
//! Matching is case-insensitive and, per item in catalog order, accepts the
//! first keyword that is equal to the item name, a prefix of it, or a whole
//! word inside it. Catalog order wins over keyword order, so an earlier
//! catalog item that matches a weaker keyword still takes the slot.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Slot definitions
// ---------------------------------------------------------------------------

/// Where a slot is drawn relative to the figurine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPosition {
    Top,
    Left,
    Right,
    Bottom,
}

/// Static definition of one loadout slot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoadoutSlot {
    pub id: &'static str,
    pub label: &'static str,
    /// Tabler icon name (without the `ti-` prefix).
    pub icon: &'static str,
    pub keywords: &'static [&'static str],
    pub position: SlotPosition,
    pub fallback_description: &'static str,
}

/// The slots shown on the equipment page, in display order.
pub const LOADOUT_SLOTS: &[LoadoutSlot] = &[
    LoadoutSlot {
        id: "mask",
        label: "Maska",
        icon: "helmet",
        keywords: &["mask", "maska"],
        position: SlotPosition::Top,
        fallback_description: "Maska musí splňovat X-N a další ochranné parametry.",
    },
    LoadoutSlot {
        id: "jacket",
        label: "Vesta",
        icon: "jacket",
        keywords: &["vesta", "jacket"],
        position: SlotPosition::Left,
        fallback_description: "Standardní X-N vesta pro kordisty.",
    },
    LoadoutSlot {
        id: "plastron",
        label: "Podvesta",
        icon: "shield-down",
        keywords: &["podvesta", "plastron"],
        position: SlotPosition::Left,
        fallback_description: "Vnitřní ochrana paže a trupu, povinná na soutěžích.",
    },
    LoadoutSlot {
        id: "breeches",
        label: "Kalhoty",
        icon: "hanger-2",
        keywords: &["kalhoty", "breeches"],
        position: SlotPosition::Left,
        fallback_description:
            "Kalhoty pod kolena s vysokou odolností proti průrazu, standard X-N.",
    },
    LoadoutSlot {
        id: "glove",
        label: "Rukavice",
        icon: "hand-three-fingers",
        keywords: &["rukavice", "glove"],
        position: SlotPosition::Right,
        fallback_description: "Rukavice s prodlouženou manžetou pro kord.",
    },
    LoadoutSlot {
        id: "socks_shoes",
        label: "Ponožky & boty",
        icon: "shoe",
        keywords: &["boty", "obuv", "socks", "ponožky", "shoes"],
        position: SlotPosition::Bottom,
        fallback_description:
            "Vysoké podkolenky a šermířské boty s boční výztuží pro výpady.",
    },
    LoadoutSlot {
        id: "weapon",
        label: "Kord",
        icon: "sword",
        keywords: &["kord", "epee", "zbraň", "weapon"],
        position: SlotPosition::Right,
        fallback_description: "Vyvážený závodní kord s elektrickým hrotem.",
    },
    LoadoutSlot {
        id: "body_cord",
        label: "Šňůra",
        icon: "plug-connected",
        keywords: &["cord", "kabel", "šňůra"],
        position: SlotPosition::Right,
        fallback_description: "Třívodičový kabel spojující zbraň s aparátem.",
    },
    LoadoutSlot {
        id: "chest_guard",
        label: "Chránič hrudi",
        icon: "shield-chevron",
        keywords: &["hruď", "chránič", "prsa", "chest", "guard"],
        position: SlotPosition::Top,
        fallback_description:
            "Plastový chránič hrudi, povinný pro ženy, volitelný pro muže.",
    },
];

// ---------------------------------------------------------------------------
// Catalog abstraction
// ---------------------------------------------------------------------------

/// A catalog item as seen by the matcher.
///
/// Implemented by the database row type joined with the fencer's ownership
/// flag, and by lightweight fixtures in tests.
pub trait CatalogEntry {
    fn id(&self) -> DbId;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn purchase_link(&self) -> &str;
    fn is_owned(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Precompiled keyword set for one slot.
#[derive(Debug)]
pub struct SlotMatcher {
    keywords: Vec<String>,
    whole_word: Vec<Regex>,
}

impl SlotMatcher {
    /// Compile the lowercased keywords of `slot` into whole-word patterns.
    pub fn new(slot: &LoadoutSlot) -> Result<Self, regex::Error> {
        let keywords: Vec<String> = slot.keywords.iter().map(|k| k.to_lowercase()).collect();
        let whole_word = keywords
            .iter()
            .map(|k| Regex::new(&format!(r"\b{}\b", regex::escape(k))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            keywords,
            whole_word,
        })
    }

    /// Whether an item name satisfies this slot.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        if self.keywords.iter().any(|k| *k == name) {
            return true;
        }
        self.keywords
            .iter()
            .zip(&self.whole_word)
            .any(|(keyword, pattern)| name.starts_with(keyword.as_str()) || pattern.is_match(&name))
    }

    /// First catalog item (in iteration order) accepted by this slot.
    pub fn find<'a, T: CatalogEntry>(&self, catalog: &'a [T]) -> Option<&'a T> {
        catalog.iter().find(|item| self.matches(item.name()))
    }
}

static SLOT_MATCHERS: LazyLock<Vec<SlotMatcher>> = LazyLock::new(|| {
    LOADOUT_SLOTS
        .iter()
        .map(|slot| SlotMatcher::new(slot).expect("escaped keywords compile"))
        .collect()
});

fn cached_matcher(slot: &LoadoutSlot) -> Option<&'static SlotMatcher> {
    LOADOUT_SLOTS
        .iter()
        .position(|s| s.id == slot.id && s.keywords == slot.keywords)
        .map(|i| &SLOT_MATCHERS[i])
}

/// Find the first catalog item matching `slot`.
///
/// Slots from [`LOADOUT_SLOTS`] reuse their precompiled matchers; any other
/// slot is compiled on the fly.
pub fn find_matching_item<'a, T: CatalogEntry>(
    slot: &LoadoutSlot,
    catalog: &'a [T],
) -> Option<&'a T> {
    match cached_matcher(slot) {
        Some(matcher) => matcher.find(catalog),
        None => SlotMatcher::new(slot).ok()?.find(catalog),
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// A slot after matching against the catalog, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSlot {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub position: SlotPosition,
    pub equipment_id: Option<DbId>,
    pub is_owned: bool,
    pub description: String,
    pub purchase_link: String,
    pub is_disabled: bool,
}

/// Slots grouped by their position around the figurine.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadoutBoard {
    pub top: Vec<ResolvedSlot>,
    pub left: Vec<ResolvedSlot>,
    pub right: Vec<ResolvedSlot>,
    pub bottom: Vec<ResolvedSlot>,
}

impl LoadoutBoard {
    /// All slots in board order (top, left, right, bottom).
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedSlot> {
        self.top
            .iter()
            .chain(&self.left)
            .chain(&self.right)
            .chain(&self.bottom)
    }

    fn push(&mut self, slot: ResolvedSlot) {
        match slot.position {
            SlotPosition::Top => self.top.push(slot),
            SlotPosition::Left => self.left.push(slot),
            SlotPosition::Right => self.right.push(slot),
            SlotPosition::Bottom => self.bottom.push(slot),
        }
    }
}

/// Match `slot` against `catalog` and build its [`ResolvedSlot`].
pub fn resolve_slot<T: CatalogEntry>(slot: &LoadoutSlot, catalog: &[T]) -> ResolvedSlot {
    let matched = find_matching_item(slot, catalog);
    let description = matched
        .map(|item| item.description())
        .filter(|d| !d.is_empty())
        .unwrap_or(slot.fallback_description)
        .to_string();

    ResolvedSlot {
        id: slot.id,
        label: slot.label,
        icon: slot.icon,
        position: slot.position,
        equipment_id: matched.map(|item| item.id()),
        is_owned: matched.is_some_and(|item| item.is_owned()),
        description,
        purchase_link: matched
            .map(|item| item.purchase_link().to_string())
            .unwrap_or_default(),
        is_disabled: matched.is_none(),
    }
}

/// Resolve every slot in [`LOADOUT_SLOTS`] against `catalog` and group them.
///
/// `catalog` must already be in display order (category, then name).
pub fn build_loadout<T: CatalogEntry>(catalog: &[T]) -> LoadoutBoard {
    let mut board = LoadoutBoard::default();
    for slot in LOADOUT_SLOTS {
        board.push(resolve_slot(slot, catalog));
    }
    board
}
