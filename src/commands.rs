use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::models::{ContentRef, MatchResult};
use crate::data_fetcher::processors::format_date;
use crate::data_fetcher::{ApiClient, LeagueStore};
use crate::error::AppError;
use std::fmt::Write as _;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if more than one view is requested.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    let views = [
        args.standings,
        args.team.is_some(),
        args.player.is_some(),
        args.match_slug.is_some(),
        args.season.is_some(),
    ];
    if views.iter().filter(|&&requested| requested).count() > 1 {
        return Err(AppError::config_error(
            "Choose a single view: --standings, --team, --player, --match or --season",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(args, &Config::get_config_path()).await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Applies the requested changes to the config file at `path`. Only the
/// stored settings are rewritten; environment overrides never reach the file.
pub async fn update_config_file(args: &Args, path: &str) -> Result<Config, AppError> {
    let mut config = Config::load_stored_from_path(path)
        .await
        .unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await?;

    Ok(config)
}

/// Fetches the league content and prints the requested view.
pub async fn handle_view_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let api = ApiClient::new(config)?;
    let mut store = LeagueStore::with_content_take(config.content_take);
    store.fetch_content(&api).await;

    if store.items().is_empty() {
        println!("No league content available from {}", api.base_url());
        return Ok(());
    }

    let output = render_view(args, &store);
    info!("Rendered view with {} lines", output.lines().count());
    print!("{output}");
    Ok(())
}

/// Renders the view selected by `args`, defaulting to the standings.
pub fn render_view(args: &Args, store: &LeagueStore) -> String {
    if let Some(team_id) = &args.team {
        render_team(store, team_id)
    } else if let Some(player_id) = &args.player {
        render_player(store, player_id)
    } else if let Some(slug) = &args.match_slug {
        render_match(store, slug)
    } else if let Some(season_id) = &args.season {
        render_season(store, season_id)
    } else {
        render_standings(store)
    }
}

/// Display name for a team reference, preferring the team node's own name.
fn team_label(store: &LeagueStore, team: Option<&ContentRef>) -> String {
    let Some(team) = team else {
        return "?".to_string();
    };
    let id = team.id().unwrap_or_default();
    store
        .get_team(id)
        .and_then(|item| item.name.clone())
        .or_else(|| team.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn match_line(store: &LeagueStore, result: &MatchResult) -> String {
    format!(
        "{:<24} {} {}-{} {}",
        result.slug.as_deref().unwrap_or("-"),
        team_label(store, Some(&result.home)),
        result.home_wins,
        result.away_wins,
        team_label(store, Some(&result.away)),
    )
}

pub fn render_standings(store: &LeagueStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<4}{:<24}{:>4}{:>4}{:>4}{:>4}{:>5}", "#", "Team", "GP", "W", "L", "T", "PTS");
    for (position, (team, stats)) in store.standings().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4}{:<24}{:>4}{:>4}{:>4}{:>4}{:>5}",
            position + 1,
            team.name.as_deref().unwrap_or(&team.id),
            stats.gp,
            stats.w,
            stats.l,
            stats.ties(),
            stats.pts
        );
    }
    out
}

pub fn render_team(store: &LeagueStore, team_id: &str) -> String {
    let Some(team) = store.get_team(team_id) else {
        return format!("Team {team_id} not found\n");
    };

    let stats = store.team_stats(team_id);
    let mut out = String::new();
    let _ = writeln!(out, "{}", team.name.as_deref().unwrap_or(&team.id));
    let _ = writeln!(
        out,
        "GP {}  W {}  L {}  T {}  PTS {}",
        stats.gp,
        stats.w,
        stats.l,
        stats.ties(),
        stats.pts
    );

    let players: Vec<&str> = store
        .all_players()
        .iter()
        .filter(|player| player.team_id() == Some(team_id))
        .map(|player| player.name().unwrap_or(player.id()))
        .collect();
    if !players.is_empty() {
        let _ = writeln!(out, "Players: {}", players.join(", "));
    }

    let matches = store.matches_involving_team(team_id);
    if matches.is_empty() {
        let _ = writeln!(out, "No matches");
    }
    for result in &matches {
        let _ = writeln!(out, "{}", match_line(store, result));
    }
    out
}

pub fn render_player(store: &LeagueStore, player_id: &str) -> String {
    let Some(player) = store.get_player(player_id) else {
        return format!("Player {player_id} not found\n");
    };

    let summary = store.player_stats(player_id);
    let mut out = String::new();
    let team = player
        .team_id()
        .and_then(|id| store.get_team(id))
        .and_then(|team| team.name.as_deref())
        .unwrap_or("-");
    let _ = writeln!(out, "{} ({team})", player.name().unwrap_or(player.id()));
    let _ = writeln!(
        out,
        "Games {}  Average {}",
        summary.games_played,
        summary.formatted_average()
    );
    for result in store.recent_matches_for_player(player_id) {
        let _ = writeln!(out, "{}", match_line(store, &result));
    }
    out
}

pub fn render_match(store: &LeagueStore, slug: &str) -> String {
    let Some(detail) = store.match_by_slug(slug) else {
        return format!("Match {} not found\n", slug.trim());
    };

    let document = detail.document;
    let home = document.home_team();
    let away = document.away_team();
    let home_id = home.and_then(ContentRef::id).unwrap_or_default();
    let away_id = away.and_then(ContentRef::id).unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} vs {}",
        team_label(store, home),
        team_label(store, away)
    );
    for (number, game) in document.games().contents().enumerate() {
        let _ = writeln!(
            out,
            "Game {}: {} - {}",
            number + 1,
            store.game_score(game, home_id),
            store.game_score(game, away_id)
        );
    }

    let mut players: Vec<_> = detail.player_stats.iter().collect();
    players.sort_by(|a, b| a.0.cmp(b.0));
    for (player_id, tally) in players {
        let name = store
            .get_player(player_id)
            .and_then(|player| player.name())
            .unwrap_or(player_id);
        let _ = writeln!(out, "  {:<24} {:>6.1} ({} games)", name, tally.average(), tally.games);
    }
    out
}

pub fn render_season(store: &LeagueStore, season_id: &str) -> String {
    let weeks = store.weeks_by_season(season_id);
    let title = store
        .all_seasons()
        .iter()
        .find(|season| season.id == season_id)
        .and_then(|season| season.name.as_deref())
        .unwrap_or(season_id);

    let mut out = String::new();
    let _ = writeln!(out, "Season {title}");
    if weeks.is_empty() {
        let _ = writeln!(out, "No weeks");
    }
    for week in weeks {
        let updated = week
            .item
            .update_date
            .as_deref()
            .map(format_date)
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{} {}",
            week.item.name.as_deref().unwrap_or(week.id()),
            updated
        );
        for document in week.matches() {
            let _ = writeln!(
                out,
                "  {} vs {}",
                team_label(store, document.home_team()),
                team_label(store, document.away_team())
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars;
    use crate::testing_utils::{ContentFixture, score};
    use serde_json::json;
    use serial_test::serial;
    use tempfile::tempdir;

    fn store() -> LeagueStore {
        ContentFixture::new()
            .team("lions", "Lions")
            .team("bears", "Bears")
            .player("l1", "lions")
            .player("b1", "bears")
            .season("s1", "2024")
            .week(
                "w1",
                Some("s1"),
                vec![ContentFixture::match_block(
                    "lions-bears",
                    "lions",
                    "bears",
                    vec![ContentFixture::game_block(json!([
                        score("l1", 150.0),
                        score("b1", 120.0)
                    ]))],
                )],
            )
            .store()
    }

    #[test]
    fn test_validate_args_rejects_multiple_views() {
        let args = Args {
            team: Some("lions".to_string()),
            player: Some("l1".to_string()),
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());
        assert!(validate_args(&Args::default()).is_ok());
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_does_not_persist_env_overrides() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        tokio::fs::write(&config_path, "api_domain = \"https://stored.example.com\"\n")
            .await
            .unwrap();

        let log_path = temp_dir.path().join("logs").join("league.log");
        let args = Args {
            new_log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Args::default()
        };

        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "https://temporary.example.com");
        }
        let result = update_config_file(&args, &config_path_str).await;
        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
        }

        let updated = result.unwrap();
        assert_eq!(updated.api_domain, "https://stored.example.com");
        let saved = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(saved.api_domain, "https://stored.example.com");
        assert_eq!(saved.log_file_path, args.new_log_file_path);
    }

    #[test]
    fn test_render_standings_orders_by_points() {
        let output = render_standings(&store());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Lions"));
        assert!(lines[2].contains("Bears"));
    }

    #[test]
    fn test_render_team_and_missing_team() {
        let store = store();
        let output = render_team(&store, "lions");
        assert!(output.contains("GP 1  W 1  L 0  T 0  PTS 1"));
        assert!(output.contains("lions-bears"));
        assert_eq!(render_team(&store, "hawks"), "Team hawks not found\n");
    }

    #[test]
    fn test_render_match_shows_game_scores() {
        let output = render_match(&store(), " LIONS-BEARS ");
        assert!(output.starts_with("Lions vs Bears"));
        assert!(output.contains("Game 1: 150 - 120"));
    }

    #[test]
    fn test_render_player_and_season() {
        let store = store();
        assert!(render_player(&store, "l1").contains("Games 1  Average 150.0"));
        let season = render_season(&store, "s1");
        assert!(season.starts_with("Season 2024"));
        assert!(season.contains("Lions vs Bears"));
    }
}
