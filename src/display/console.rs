use colored::*;

pub fn display_banner(bind: &str, region: &str, match_count: usize) {
    println!("\n{}", "🔎 Summoner Search".bold().cyan());
    println!("{}", "=".repeat(40).cyan());
    println!("   Listening on: {}", format!("http://{}", bind).green());
    println!("   Region:       {}", region);
    println!("   Matches:      {} per search\n", match_count);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
