// Central constants for castlist layout and storage defaults.
pub const DEFAULT_CASTLIST: &str = "default";
pub const DEFAULT_DATA_FILE: &str = "playerData.json";

// Component budget defaults. Discord caps a Components V2 message at 40 components,
// nested ones included. All four are overridable through the environment.
pub const PLATFORM_COMPONENT_LIMIT: usize = 40;
pub const NAVIGATION_RESERVE: usize = 5; // action row + up to four buttons
pub const HEADER_COMPONENTS: usize = 3; // container + header text + divider
pub const COMPONENTS_PER_MEMBER: usize = 3; // section + text + thumbnail

// Discord rejects custom_ids longer than this.
pub const CUSTOM_ID_MAX_LEN: usize = 100;

// Page size used when paging through guild members over REST.
pub const MEMBER_FETCH_PAGE: u64 = 1000;

// Interaction response flag enabling container/section/text components.
pub const IS_COMPONENTS_V2: u64 = 1 << 15;
