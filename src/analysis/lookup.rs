/// Icon file for a summoner spell id, empty for ids without an icon.
pub fn spell_icon(spell_id: i32) -> &'static str {
    match spell_id {
        1 => "SummonerBoost.png",
        3 => "SummonerExhaust.png",
        4 => "SummonerFlash.png",
        6 => "SummonerHaste.png",
        7 => "SummonerHeal.png",
        11 => "SummonerSmite.png",
        12 => "SummonerTeleport.png",
        13 => "SummonerMana.png",
        14 => "SummonerDot.png",
        21 => "SummonerBarrier.png",
        30 => "SummonerPoroRecall.png",
        31 => "SummonerPoroThrow.png",
        32 => "SummonerSnowball.png",
        _ => "",
    }
}

pub const NO_MULTIKILL: &str = "No Multikill";

/// Label for the largest multi-kill of a game. Anything outside 2..=5
/// (including the 6+ counts some modes report) gets the default label.
pub fn streak_label(largest_multi_kill: i64) -> &'static str {
    match largest_multi_kill {
        2 => "Double Kill",
        3 => "Triple Kill!",
        4 => "Quadrakill!",
        5 => "PENTAKILL!",
        _ => NO_MULTIKILL,
    }
}
