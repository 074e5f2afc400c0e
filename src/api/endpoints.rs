// URL builders for the stats provider. The API key is attached by the client,
// never baked into these strings, so they are safe to log.

pub const PROFILE_BY_NAME_PATH: &str = "/lol/summoner/v3/summoners/by-name";
pub const MATCHLIST_BY_ACCOUNT_PATH: &str = "/lol/match/v3/matchlists/by-account";
pub const MATCH_PATH: &str = "/lol/match/v3/matches";
pub const CHAMPION_PATH: &str = "/lol/static-data/v3/champions";

pub fn profile_by_name(base: &str, name: &str) -> String {
    format!("{}{}/{}", base, PROFILE_BY_NAME_PATH, urlencoding::encode(name))
}

pub fn match_list(base: &str, account_id: i64, count: usize) -> String {
    format!(
        "{}{}/{}?beginIndex=0&endIndex={}",
        base, MATCHLIST_BY_ACCOUNT_PATH, account_id, count
    )
}

pub fn match_detail(base: &str, game_id: i64) -> String {
    format!("{}{}/{}", base, MATCH_PATH, game_id)
}

pub fn champion(base: &str, champion_id: i64) -> String {
    format!(
        "{}{}/{}?locale=en_US&tags=image",
        base, CHAMPION_PATH, champion_id
    )
}
