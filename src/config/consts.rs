// src/config/consts.rs

// Net config
pub const HOST: &str = "www.transfermarkt.us";
pub const BASE_URL: &str = "https://www.transfermarkt.us";
pub const USER_AGENT: &str = "tm_graph/0.2";

// Entry point: market-value ranking, most valuable players first.
pub const START_PATH: &str = "/spieler-statistik/wertvollstespieler/marktwertetop";

// Markup shape. Every assumption about the remote pages lives here or in
// src/specs/; nothing outside those layers may hard-code site structure.
pub const ROW_CLASS_ODD: &str = "odd";
pub const ROW_CLASS_EVEN: &str = "even";
pub const PROFILE_SEGMENT: &str = "/profil/";
pub const TEAMMATE_SEGMENT: &str = "/gemeinsameSpiele/";
pub const NEXT_PAGE_MARKER: &str = "tm-pagination__list-item--icon-next-page";

// Teammate tables interleave two decorative rows after each data row.
// Validated against captured pages; revisit if the site relayouts.
pub const TEAMMATE_ROW_STRIDE: usize = 3;

// Collection defaults
pub const DEFAULT_PLAYER_COUNT: usize = 20;
pub const DEFAULT_TEAMMATE_COUNT: usize = 10;

// One shared session, strictly sequential. Pause between requests
// and retry transient failures a bounded number of times.
pub const REQUEST_PAUSE_MS: u64 = 250;
pub const MAX_RETRIES: usize = 2;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const PLAYERS_FILE_STEM: &str = "players";
pub const EDGES_FILE_STEM: &str = "teammates";
