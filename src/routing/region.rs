//! Region to routing-host lookup.
//!
//! # Responsibilities
//! - Map a region code to its platform host (summoner-scoped endpoints)
//! - Map a region code to its continental host (account and match endpoints)
//! - Fall back to `na` / `americas` for any code outside the tables
//!
//! # Design Decisions
//! - Both tables are static data, indexed by the `Region` enum
//! - Codes are matched exactly; no case folding or trimming
//! - Unknown codes never fail

use std::fmt;

/// A League of Legends platform region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Na,
    Euw,
    Eune,
    Kr,
    Br,
    Jp,
    Ru,
    Oce,
    Tr,
    Lan,
    Las,
}

/// Continental routing cluster shared by several regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Americas,
    Europe,
    Asia,
    Sea,
}

/// Region code, platform host, continental cluster.
static REGION_TABLE: [(&str, Region, &str, Continent); 11] = [
    ("na", Region::Na, "na1.api.riotgames.com", Continent::Americas),
    ("euw", Region::Euw, "euw1.api.riotgames.com", Continent::Europe),
    ("eune", Region::Eune, "eun1.api.riotgames.com", Continent::Europe),
    ("kr", Region::Kr, "kr.api.riotgames.com", Continent::Asia),
    ("br", Region::Br, "br1.api.riotgames.com", Continent::Americas),
    ("jp", Region::Jp, "jp1.api.riotgames.com", Continent::Asia),
    ("ru", Region::Ru, "ru.api.riotgames.com", Continent::Europe),
    ("oce", Region::Oce, "oc1.api.riotgames.com", Continent::Sea),
    ("tr", Region::Tr, "tr1.api.riotgames.com", Continent::Europe),
    ("lan", Region::Lan, "la1.api.riotgames.com", Continent::Americas),
    ("las", Region::Las, "la2.api.riotgames.com", Continent::Americas),
];

static CONTINENT_TABLE: [(Continent, &str); 4] = [
    (Continent::Americas, "americas.api.riotgames.com"),
    (Continent::Europe, "europe.api.riotgames.com"),
    (Continent::Asia, "asia.api.riotgames.com"),
    (Continent::Sea, "sea.api.riotgames.com"),
];

impl Region {
    /// Every region, in table order.
    pub const ALL: [Region; 11] = [
        Region::Na,
        Region::Euw,
        Region::Eune,
        Region::Kr,
        Region::Br,
        Region::Jp,
        Region::Ru,
        Region::Oce,
        Region::Tr,
        Region::Lan,
        Region::Las,
    ];

    /// Resolve a region code, falling back to `Region::Na` when unknown.
    pub fn from_code(code: &str) -> Self {
        Self::lookup(code).unwrap_or(Region::Na)
    }

    /// Resolve a region code without the fallback.
    pub fn lookup(code: &str) -> Option<Self> {
        REGION_TABLE
            .iter()
            .find(|(c, ..)| *c == code)
            .map(|(_, region, ..)| *region)
    }

    /// The lowercase code for this region.
    pub fn code(self) -> &'static str {
        self.entry().0
    }

    pub fn platform_host(self) -> &'static str {
        self.entry().2
    }

    pub fn continent(self) -> Continent {
        self.entry().3
    }

    pub fn continental_host(self) -> &'static str {
        self.continent().host()
    }

    fn entry(self) -> &'static (&'static str, Region, &'static str, Continent) {
        // The table holds exactly one row per variant.
        REGION_TABLE
            .iter()
            .find(|(_, region, ..)| *region == self)
            .unwrap_or(&REGION_TABLE[0])
    }
}

impl Continent {
    pub fn host(self) -> &'static str {
        CONTINENT_TABLE
            .iter()
            .find(|(continent, _)| *continent == self)
            .map(|(_, host)| *host)
            .unwrap_or(CONTINENT_TABLE[0].1)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Platform routing host for a region code (`na1` host when unknown).
pub fn platform_host(region: &str) -> &'static str {
    Region::from_code(region).platform_host()
}

/// Continental routing host for a region code (`americas` host when unknown).
pub fn continental_host(region: &str) -> &'static str {
    Region::from_code(region).continental_host()
}
