use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether any configuration command was requested. Those run without
/// fetching league content.
pub fn is_config_command(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// League content viewer
///
/// Fetches the league's published content from the CMS delivery API and
/// prints standings, team, player, match and season views as plain text.
/// Without a view option the standings table is shown.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show the standings table.
    #[arg(short = 's', long = "standings", help_heading = "Views")]
    pub standings: bool,

    /// Show a team's record and matches.
    #[arg(short = 't', long = "team", value_name = "TEAM_ID", help_heading = "Views")]
    pub team: Option<String>,

    /// Show a player's average and most recent matches.
    #[arg(short = 'p', long = "player", value_name = "PLAYER_ID", help_heading = "Views")]
    pub player: Option<String>,

    /// Show a match with per-game team scores and player averages.
    #[arg(short = 'm', long = "match", value_name = "SLUG", help_heading = "Views")]
    pub match_slug: Option<String>,

    /// List the weeks and matches of a season.
    #[arg(long = "season", value_name = "SEASON_ID", help_heading = "Views")]
    pub season: Option<String>,

    /// Update API domain in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_view_options() {
        let args = Args::try_parse_from(["league_store", "--team", "lions", "--match", "a-b"]).unwrap();
        assert_eq!(args.team.as_deref(), Some("lions"));
        assert_eq!(args.match_slug.as_deref(), Some("a-b"));
        assert!(!args.standings);
        assert!(!is_config_command(&args));
    }

    #[test]
    fn test_config_commands_are_detected() {
        let args = Args::try_parse_from(["league_store", "--config", "http://cms.local"]).unwrap();
        assert!(is_config_command(&args));

        let args = Args::try_parse_from(["league_store", "--clear-log-file"]).unwrap();
        assert!(is_config_command(&args));
    }

    #[test]
    fn test_config_requires_a_domain() {
        assert!(Args::try_parse_from(["league_store", "--config"]).is_err());
    }
}
