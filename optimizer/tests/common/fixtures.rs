//! Test fixtures: player pools with known properties

use shared::{PlayerId, PlayerRecord};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const SALARY_CAP: u32 = 60_000;
    pub const SEED: u64 = 20_240_611;

    /// Complete feed row
    pub fn record(id: &str, name: &str, team: &str, opponent: &str, salary: i64, projection: f64) -> PlayerRecord {
        PlayerRecord {
            id: Some(PlayerId::new(id)),
            name: name.to_string(),
            position: "F".to_string(),
            team: Some(team.to_string()),
            opponent: Some(opponent.to_string()),
            salary: Some(salary),
            projection: Some(projection),
        }
    }

    /// Eight players at 5000 with projections 10, 8, 7, 6, 5, 4, 3, 2
    ///
    /// Any roster costs 32500, so the best lineup is simply the top six with
    /// the 10 as MVP.
    pub fn uniform_salary_pool() -> Vec<PlayerRecord> {
        [10.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0]
            .iter()
            .enumerate()
            .map(|(i, &projection)| {
                let team = if i % 2 == 0 { "LAL" } else { "GSW" };
                let opponent = if i % 2 == 0 { "GSW" } else { "LAL" };
                Self::record(&format!("u{i}"), &format!("Uniform {i}"), team, opponent, 5000, projection)
            })
            .collect()
    }

    /// Two-team slate where the cap binds: the top six by projection cost far more than 60000
    pub fn celtics_heat_slate() -> Vec<PlayerRecord> {
        let rows: [(&str, &str, &str, i64, f64); 16] = [
            ("1001", "Jayson Tatum", "BOS", 16500, 52.1),
            ("1002", "Jaylen Brown", "BOS", 14000, 44.3),
            ("1003", "Kristaps Porzingis", "BOS", 12500, 40.2),
            ("1004", "Jrue Holiday", "BOS", 10500, 33.0),
            ("1005", "Derrick White", "BOS", 9500, 31.4),
            ("1006", "Al Horford", "BOS", 7000, 22.8),
            ("1007", "Sam Hauser", "BOS", 5000, 16.9),
            ("1008", "Payton Pritchard", "BOS", 4500, 14.2),
            ("2001", "Jimmy Butler", "MIA", 15000, 46.7),
            ("2002", "Bam Adebayo", "MIA", 13500, 43.5),
            ("2003", "Tyler Herro", "MIA", 12000, 38.9),
            ("2004", "Terry Rozier", "MIA", 9000, 29.6),
            ("2005", "Jaime Jaquez Jr.", "MIA", 7500, 23.1),
            ("2006", "Kevin Love", "MIA", 6000, 18.4),
            ("2007", "Duncan Robinson", "MIA", 5500, 15.8),
            ("2008", "Haywood Highsmith", "MIA", 4000, 12.3),
        ];

        rows.iter()
            .map(|&(id, name, team, salary, projection)| {
                let opponent = if team == "BOS" { "MIA" } else { "BOS" };
                Self::record(id, name, team, opponent, salary, projection)
            })
            .collect()
    }

    /// Seven players nobody can afford together: the cheapest roster costs 78000
    pub fn over_cap_pool() -> Vec<PlayerRecord> {
        let mut pool: Vec<PlayerRecord> = (0..5)
            .map(|i| Self::record(&format!("x{i}"), &format!("Max Contract {i}"), "PHX", "DEN", 12000, 30.0))
            .collect();
        pool.push(Self::record("d1", "Nikola Jokic", "DEN", "PHX", 12000, 60.0));
        pool.push(Self::record("d2", "Jamal Murray", "DEN", "PHX", 12000, 40.0));
        pool
    }

    /// Rows a feed might deliver that can never be placed in a roster
    pub fn ineligible_rows() -> Vec<PlayerRecord> {
        let mut no_projection = Self::record("i1", "Injured", "NYK", "BKN", 8000, 0.0);
        no_projection.projection = None;

        let no_salary = Self::record("i2", "Unpriced", "NYK", "BKN", 0, 20.0);

        let mut no_team = Self::record("i3", "Free Agent", "NYK", "BKN", 6000, 15.0);
        no_team.team = None;

        let mut no_id = Self::record("", "Unknown", "NYK", "BKN", 6000, 15.0);
        no_id.id = None;

        vec![no_projection, no_salary, no_team, no_id]
    }

    /// A locked MVP plus only four other eligible players
    pub fn thin_pool_for_locked_mvp() -> (PlayerRecord, Vec<PlayerRecord>) {
        let mvp = Self::record("star", "Star Player", "OKC", "DAL", 14000, 50.0);
        let mut pool = vec![mvp.clone()];
        pool.extend((0..4).map(|i| Self::record(&format!("r{i}"), &format!("Role {i}"), "DAL", "OKC", 5000, 15.0)));
        pool.extend(Self::ineligible_rows());
        (mvp, pool)
    }

    /// Thirty-two players where the two lowest-ranked ones are cheap enough to unlock a better roster
    ///
    /// Ranked by projection: a 20000 star, 29 role players at 9000 (projections
    /// 40 down to 12), then `cheap1` (1.0) and `cheap2` (0.5) at 1000. Inside
    /// the top 30 the star never fits, so the best lineup scores 245. With both
    /// cheap players in reach, star MVP + both + three role players scores 268.5.
    pub fn beyond_optimizer_slice() -> Vec<PlayerRecord> {
        let mut pool = vec![Self::record("star", "Star", "LAL", "BOS", 20000, 100.0)];
        pool.extend((0..29).map(|i| {
            let team = if i % 2 == 0 { "BOS" } else { "LAL" };
            Self::record(&format!("m{i}"), &format!("Role {i}"), team, "LAL", 9000, 40.0 - i as f64)
        }));
        pool.push(Self::record("cheap1", "Minimum One", "BOS", "LAL", 1000, 1.0));
        pool.push(Self::record("cheap2", "Minimum Two", "LAL", "BOS", 1000, 0.5));
        pool
    }

    /// Fifty affordable players plus a 51st-ranked `outsider`
    pub fn beyond_generator_pool() -> Vec<PlayerRecord> {
        let teams = ["ATL", "CHI", "MIL"];
        let mut pool: Vec<PlayerRecord> = (0..50)
            .map(|i| {
                let team = teams[i % teams.len()];
                Self::record(&format!("g{i}"), &format!("Depth {i}"), team, "OPP", 5000, 100.0 - i as f64)
            })
            .collect();
        pool.push(Self::record("outsider", "Outsider", "ATL", "OPP", 1000, 0.5));
        pool
    }
}
