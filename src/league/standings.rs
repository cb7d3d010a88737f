//! Standings Computation
//!
//! Aggregates finished match results into the ranking table: three points
//! for a win, one for a draw, none for a loss. Ordering is points, then
//! goal difference, then goals scored, all descending. Positions are
//! assigned 1-based after sorting.
//!
//! Only matches with `status == finished` and both scores recorded count.
//! The table is recomputed on every request; nothing is cached.

use std::collections::HashMap;

use crate::league::model::{Match, MatchStatus, Ranking, Team};

/// Running totals for one team while folding over matches
#[derive(Default)]
struct Tally {
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u32,
    goals_against: u32,
    points: u32,
}

impl Tally {
    fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += 3;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += 1;
            }
            std::cmp::Ordering::Less => self.lost += 1,
        }
    }
}

/// Compute the full standings table for the given teams and matches.
///
/// Every team appears in the result, including teams that have not played
/// yet. Matches referencing unknown teams are ignored.
pub fn compute_rankings(teams: &[Team], matches: &[Match]) -> Vec<Ranking> {
    let mut tallies: HashMap<&str, Tally> = teams
        .iter()
        .map(|t| (t.id.as_str(), Tally::default()))
        .collect();

    for m in matches {
        if m.status != MatchStatus::Finished {
            continue;
        }
        let (Some(home_score), Some(away_score)) = (m.home_team_score, m.away_team_score) else {
            continue;
        };

        if let Some(tally) = tallies.get_mut(m.home_team_id.as_str()) {
            tally.record(home_score, away_score);
        }
        if let Some(tally) = tallies.get_mut(m.away_team_id.as_str()) {
            tally.record(away_score, home_score);
        }
    }

    let mut rankings: Vec<Ranking> = teams
        .iter()
        .map(|team| {
            let tally = &tallies[team.id.as_str()];
            Ranking {
                team_id: team.id.clone(),
                team_name: team.name.clone(),
                played: tally.played,
                won: tally.won,
                drawn: tally.drawn,
                lost: tally.lost,
                goals_for: tally.goals_for,
                goals_against: tally.goals_against,
                goal_difference: tally.goals_for as i32 - tally.goals_against as i32,
                points: tally.points,
                position: 0,
            }
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });

    for (i, ranking) in rankings.iter_mut().enumerate() {
        ranking.position = i as u32 + 1;
    }

    rankings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn team(id: &str, name: &str) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            city: "Boston".to_string(),
            logo_url: None,
            founded_year: None,
            players_count: 11,
            created_at: Utc::now(),
        }
    }

    fn finished(home: &str, away: &str, home_score: u32, away_score: u32) -> Match {
        Match {
            id: uuid::Uuid::new_v4().to_string(),
            home_team_id: home.to_string(),
            away_team_id: away.to_string(),
            home_team_score: Some(home_score),
            away_team_score: Some(away_score),
            match_date: Utc::now(),
            venue: "Stade Municipal".to_string(),
            status: MatchStatus::Finished,
            referee: None,
            attendance: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_league() {
        assert!(compute_rankings(&[], &[]).is_empty());
    }

    #[test]
    fn test_teams_without_matches_get_zero_rows() {
        let teams = vec![team("a", "Alpha"), team("b", "Beta")];
        let rankings = compute_rankings(&teams, &[]);

        assert_eq!(rankings.len(), 2);
        for row in &rankings {
            assert_eq!(row.played, 0);
            assert_eq!(row.points, 0);
            assert_eq!(row.goal_difference, 0);
        }
        assert_eq!(rankings[0].position, 1);
        assert_eq!(rankings[1].position, 2);
    }

    #[test]
    fn test_win_draw_loss_points() {
        let teams = vec![team("a", "Alpha"), team("b", "Beta"), team("c", "Gamma")];
        let matches = vec![
            finished("a", "b", 2, 0), // Alpha beats Beta
            finished("b", "c", 1, 1), // draw
        ];

        let rankings = compute_rankings(&teams, &matches);
        let by_name = |name: &str| rankings.iter().find(|r| r.team_name == name).unwrap();

        let alpha = by_name("Alpha");
        assert_eq!((alpha.played, alpha.won, alpha.points), (1, 1, 3));
        assert_eq!(alpha.goal_difference, 2);

        let beta = by_name("Beta");
        assert_eq!((beta.played, beta.drawn, beta.lost, beta.points), (2, 1, 1, 1));

        let gamma = by_name("Gamma");
        assert_eq!((gamma.played, gamma.drawn, gamma.points), (1, 1, 1));
    }

    #[test]
    fn test_away_wins_counted() {
        let teams = vec![team("a", "Alpha"), team("b", "Beta")];
        let matches = vec![finished("a", "b", 0, 3)];

        let rankings = compute_rankings(&teams, &matches);
        assert_eq!(rankings[0].team_name, "Beta");
        assert_eq!(rankings[0].points, 3);
        assert_eq!(rankings[0].goals_for, 3);
        assert_eq!(rankings[1].team_name, "Alpha");
        assert_eq!(rankings[1].goals_against, 3);
    }

    #[test]
    fn test_ordering_points_then_difference_then_goals() {
        let teams = vec![team("a", "Alpha"), team("b", "Beta"), team("c", "Gamma")];
        // Alpha and Beta both end on 3 points; Alpha has the better difference.
        // Beta and Gamma illustrate the goals-for tiebreak at equal difference.
        let matches = vec![
            finished("a", "c", 4, 0), // Alpha +4
            finished("b", "c", 2, 1), // Beta +1
        ];

        let rankings = compute_rankings(&teams, &matches);
        assert_eq!(rankings[0].team_name, "Alpha");
        assert_eq!(rankings[1].team_name, "Beta");
        assert_eq!(rankings[2].team_name, "Gamma");
        assert_eq!(
            rankings.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_goals_for_breaks_equal_difference() {
        let teams = vec![team("a", "Alpha"), team("b", "Beta"), team("c", "Gamma"), team("d", "Delta")];
        // Alpha: 3-2 win (+1, GF 3). Beta: 1-0 win (+1, GF 1). Same points, same
        // difference; Alpha scored more.
        let matches = vec![finished("a", "c", 3, 2), finished("b", "d", 1, 0)];

        let rankings = compute_rankings(&teams, &matches);
        assert_eq!(rankings[0].team_name, "Alpha");
        assert_eq!(rankings[1].team_name, "Beta");
    }

    #[test]
    fn test_unfinished_matches_ignored() {
        let teams = vec![team("a", "Alpha"), team("b", "Beta")];
        let mut scheduled = finished("a", "b", 5, 0);
        scheduled.status = MatchStatus::Scheduled;
        let mut scoreless = finished("a", "b", 0, 0);
        scoreless.home_team_score = None;

        let rankings = compute_rankings(&teams, &[scheduled, scoreless]);
        assert!(rankings.iter().all(|r| r.played == 0));
    }

    #[test]
    fn test_match_with_unknown_team_ignored() {
        let teams = vec![team("a", "Alpha")];
        let matches = vec![finished("a", "ghost", 1, 0)];

        let rankings = compute_rankings(&teams, &matches);
        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].points, 3);
        assert_eq!(rankings[0].played, 1);
    }
}
