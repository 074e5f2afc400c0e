use crate::search::SearchResults;
use askama::Template;

const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";
// Scoreboard glyphs were dropped from later asset versions.
const UI_ICON_VERSION: &str = "5.5.1";

/// Static asset locations used by the pages.
#[derive(Debug, Clone)]
pub struct AssetUrls {
    pub cdn: String,
    pub ui: String,
}

impl AssetUrls {
    pub fn for_version(version: &str) -> Self {
        AssetUrls {
            cdn: format!("{}/{}", DDRAGON_CDN, version),
            ui: format!("{}/{}/img/ui", DDRAGON_CDN, UI_ICON_VERSION),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub title: &'static str,
}

impl Default for HomePage {
    fn default() -> Self {
        HomePage {
            title: "Summoner Search",
        }
    }
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage<'a> {
    pub results: &'a SearchResults,
    pub assets: &'a AssetUrls,
}
