// Path suffixes appended to the configured API base URL.

pub const STATUS: &str = "status/v3/shard-data";
pub const SUMMONER_BY_NAME: &str = "summoner/v4/summoners/by-name";
pub const MATCHLIST_BY_ACCOUNT: &str = "match/v4/matchlists/by-account";
pub const MATCH_BY_ID: &str = "match/v4/matches";
pub const CHAMPION_MASTERIES: &str = "champion-mastery/v4/champion-masteries/by-summoner";

// Static-asset paths, relative to the data dragon base URL.
pub const REALM: &str = "realms/na.json";
